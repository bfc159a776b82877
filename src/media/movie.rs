//! Movie variant: a single-duration feature with director, cast and finances.

use serde_json::json;

use super::{describe_suffix, require_text, slugify, MediaInfo, MediaItem, MediaKind};
use crate::error::{LibraryError, Result};

/// Days after release before a movie may be streamed
pub const STREAMING_DELAY_DAYS: i64 = 90;

/// A feature film
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    info: MediaInfo,
    director: String,
    cast: Vec<String>,
    budget: Option<f64>,
    box_office: Option<f64>,
}

impl Movie {
    pub fn new<I, S>(info: MediaInfo, director: &str, cast: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let director = require_text("director", director)?;
        let cast = cast
            .into_iter()
            .map(|actor| actor.as_ref().trim().to_string())
            .filter(|actor| !actor.is_empty())
            .collect();

        Ok(Self {
            info,
            director,
            cast,
            budget: None,
            box_office: None,
        })
    }

    /// Attach production budget and box office earnings
    pub fn with_finances(mut self, budget: Option<f64>, box_office: Option<f64>) -> Result<Self> {
        for (field, value) in [("budget", budget), ("box_office", box_office)] {
            if let Some(amount) = value {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(LibraryError::invalid(
                        field,
                        format!("must be a non-negative amount (got {})", amount),
                    ));
                }
            }
        }
        self.budget = budget;
        self.box_office = box_office;
        Ok(self)
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn cast(&self) -> &[String] {
        &self.cast
    }

    pub fn budget(&self) -> Option<f64> {
        self.budget
    }

    pub fn box_office(&self) -> Option<f64> {
        self.box_office
    }

    /// Earned more than three times its budget
    pub fn is_blockbuster(&self) -> bool {
        match (self.budget, self.box_office) {
            (Some(budget), Some(box_office)) if budget > 0.0 => box_office > budget * 3.0,
            _ => false,
        }
    }
}

impl MediaItem for Movie {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Movie
    }

    fn describe(&self) -> String {
        let mut text = format!(
            "{} ({}) - movie directed by {}, {} [{}]",
            self.title(),
            self.release_year(),
            self.director,
            self.duration_formatted(),
            self.genres().join(", ")
        );
        if !self.cast.is_empty() {
            text.push_str(&format!(", starring {}", self.cast.join(", ")));
        }
        if let Some(budget) = self.budget {
            text.push_str(&format!(", budget ${}", budget));
        }
        if let Some(box_office) = self.box_office {
            text.push_str(&format!(", box office ${}", box_office));
        }
        text.push_str(&describe_suffix(&self.info));
        text
    }

    fn identity_key(&self) -> Vec<String> {
        vec![
            self.title().to_string(),
            self.release_year().to_string(),
            self.director.clone(),
        ]
    }

    fn can_stream(&self) -> bool {
        !self.is_recently_released(STREAMING_DELAY_DAYS)
    }

    fn metadata(&self) -> serde_json::Value {
        json!({
            "type": self.kind().as_str(),
            "director": self.director,
            "cast": self.cast,
            "budget": self.budget,
            "box_office": self.box_office,
            "is_blockbuster": self.is_blockbuster(),
        })
    }

    fn streaming_path(&self) -> String {
        format!("movies/{}", slugify(self.title()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ContentRating;
    use chrono::Datelike;

    fn arrival() -> Movie {
        let info = MediaInfo::new("Arrival", 2016, 116, ["sci-fi", "drama"])
            .unwrap()
            .with_rating(ContentRating::Pg13)
            .with_description("Linguist meets heptapods");
        Movie::new(info, "Denis Villeneuve", ["Amy Adams", " ", "Jeremy Renner"]).unwrap()
    }

    #[test]
    fn test_describe_contains_attributes() {
        let movie = arrival();
        let text = movie.describe();

        let expected_parts = [
            "Arrival",
            "2016",
            "Denis Villeneuve",
            "Amy Adams",
            "Jeremy Renner",
            "1h 56m",
            "sci-fi",
            "PG-13",
            "Linguist meets heptapods",
        ];
        for expected in expected_parts {
            assert!(text.contains(expected), "'{}' missing from '{}'", expected, text);
        }
    }

    #[test]
    fn test_cast_drops_blank_entries() {
        let cast = ["Amy Adams".to_string(), "Jeremy Renner".to_string()];
        assert_eq!(arrival().cast(), &cast);
    }

    #[test]
    fn test_empty_director_rejected() {
        let info = MediaInfo::new("Arrival", 2016, 116, ["sci-fi"]).unwrap();
        let err = Movie::new(info, "  ", Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, LibraryError::InvalidAttribute { field: "director", .. }));
    }

    #[test]
    fn test_finances_and_blockbuster() {
        let movie = arrival().with_finances(Some(47_000_000.0), Some(203_000_000.0)).unwrap();
        assert!(movie.is_blockbuster());
        assert!(movie.describe().contains("budget $47000000"));
        assert_eq!(movie.metadata()["is_blockbuster"], true);

        let flop = arrival().with_finances(Some(100.0), Some(200.0)).unwrap();
        assert!(!flop.is_blockbuster());
        assert!(!arrival().is_blockbuster());

        assert!(arrival().with_finances(Some(-1.0), None).is_err());
    }

    #[test]
    fn test_new_release_not_streamable() {
        let today = chrono::Local::now().date_naive();
        let info = MediaInfo::new("Premiere", today.year(), 100, ["drama"])
            .unwrap()
            .with_release_date(today)
            .unwrap();
        let movie = Movie::new(info, "Someone", Vec::<&str>::new()).unwrap();

        assert!(movie.is_recently_released(STREAMING_DELAY_DAYS));
        assert!(!movie.can_stream());
        assert!(matches!(movie.streaming_url(), Err(LibraryError::Unavailable(_))));

        assert!(arrival().can_stream());
        assert_eq!(
            arrival().streaming_url().unwrap(),
            "https://stream.example.com/movies/arrival"
        );
    }

    #[test]
    fn test_streaming_path_and_metadata() {
        let movie = arrival();
        assert_eq!(movie.streaming_path(), "movies/arrival");
        assert_eq!(movie.metadata()["type"], "movie");
        assert_eq!(movie.metadata()["director"], "Denis Villeneuve");
        assert_eq!(movie.duration(), 116);
    }
}
