//! Search filters with a fluent builder interface.

use std::collections::HashSet;

use super::validate_user_rating;
use crate::error::Result;
use crate::media::{ContentRating, MediaItem, MediaKind};

/// Combined search criteria. Every populated criterion must hold; within a
/// set (genres, kinds, ratings) any member may match.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    genres: HashSet<String>,
    kinds: HashSet<MediaKind>,
    ratings: HashSet<ContentRating>,
    max_duration: Option<u32>,
    viewer_age: Option<u8>,
    min_rating: Option<f64>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: &str) -> Self {
        let genre = genre.trim().to_lowercase();
        if !genre.is_empty() {
            self.genres.insert(genre);
        }
        self
    }

    pub fn with_kind(mut self, kind: MediaKind) -> Self {
        self.kinds.insert(kind);
        self
    }

    pub fn with_rating(mut self, rating: ContentRating) -> Self {
        self.ratings.insert(rating);
        self
    }

    /// Only items no longer than `minutes`
    pub fn max_duration(mut self, minutes: u32) -> Self {
        self.max_duration = Some(minutes);
        self
    }

    /// Only items whose content rating allows a viewer of `age`
    pub fn suitable_for_age(mut self, age: u8) -> Self {
        self.viewer_age = Some(age);
        self
    }

    /// Only items whose average user rating is at least `rating`.
    /// Unrated items never pass.
    pub fn min_rating(mut self, rating: f64) -> Result<Self> {
        self.min_rating = Some(validate_user_rating("min_rating", rating)?);
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.genres.is_empty()
            && self.kinds.is_empty()
            && self.ratings.is_empty()
            && self.max_duration.is_none()
            && self.viewer_age.is_none()
            && self.min_rating.is_none()
    }

    /// `average_rating` is the item's average user rating as tracked by the
    /// library, `None` when unrated.
    pub fn matches(&self, item: &dyn MediaItem, average_rating: Option<f64>) -> bool {
        if !self.genres.is_empty() && !self.genres.iter().any(|g| item.matches_genre(g)) {
            return false;
        }

        if !self.kinds.is_empty() && !self.kinds.contains(&item.kind()) {
            return false;
        }

        if !self.ratings.is_empty() && !self.ratings.contains(&item.content_rating()) {
            return false;
        }

        if let Some(max) = self.max_duration {
            if item.duration() > max {
                return false;
            }
        }

        if let Some(age) = self.viewer_age {
            if !item.is_age_appropriate(age) {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if average_rating.map_or(true, |avg| avg < min) {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaInfo, Movie, Song};

    fn movie(rating: ContentRating) -> Movie {
        let info = MediaInfo::new("Heat", 1995, 170, ["crime", "thriller"])
            .unwrap()
            .with_rating(rating);
        Movie::new(info, "Michael Mann", ["Al Pacino", "Robert De Niro"]).unwrap()
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = SearchFilter::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&movie(ContentRating::R), None));
    }

    #[test]
    fn test_criteria_combine() {
        let heat = movie(ContentRating::R);

        let either_genre = SearchFilter::new().with_genre("Crime").with_genre("comedy");
        assert!(either_genre.matches(&heat, None));
        assert!(!SearchFilter::new().with_genre("comedy").matches(&heat, None));
        assert!(!SearchFilter::new().with_kind(MediaKind::Music).matches(&heat, None));
        assert!(SearchFilter::new().with_rating(ContentRating::R).matches(&heat, None));
        assert!(!SearchFilter::new().with_rating(ContentRating::G).matches(&heat, None));
        assert!(!SearchFilter::new().max_duration(120).matches(&heat, None));
        assert!(SearchFilter::new().max_duration(170).matches(&heat, None));
        assert!(!SearchFilter::new().suitable_for_age(12).matches(&heat, None));

        let combined = SearchFilter::new()
            .with_kind(MediaKind::Movie)
            .with_genre("thriller")
            .suitable_for_age(18);
        assert!(combined.matches(&heat, None));
    }

    #[test]
    fn test_min_rating() {
        let heat = movie(ContentRating::R);
        let filter = SearchFilter::new().min_rating(4.0).unwrap();

        assert!(!filter.is_empty());
        assert!(filter.matches(&heat, Some(4.0)));
        assert!(filter.matches(&heat, Some(4.8)));
        assert!(!filter.matches(&heat, Some(3.9)));
        assert!(!filter.matches(&heat, None));

        assert!(SearchFilter::new().min_rating(0.9).is_err());
        assert!(SearchFilter::new().min_rating(5.1).is_err());
    }

    #[test]
    fn test_blank_genre_ignored() {
        let filter = SearchFilter::new().with_genre("   ");
        assert!(filter.is_empty());

        let info = MediaInfo::new("Song", 2000, 3, ["pop"]).unwrap();
        let song = Song::new(info, "Artist", "Album", 2, true).unwrap();
        assert!(filter.matches(&song, None));
    }
}
