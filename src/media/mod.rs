//! # Media Module
//!
//! Questo modulo definisce il contratto astratto condiviso da tutti i media.
//!
//! ## Responsabilità:
//! - Definisce il trait `MediaItem` (capability set astratto)
//! - Fornisce `MediaInfo`, il nucleo validato di attributi comuni
//! - Definisce `MediaKind`, `ContentRating` e l'identificativo `ItemId`
//! - Centralizza la validazione degli attributi in fase di costruzione
//!
//! ## Varianti concrete:
//! - `Movie`: regista, cast, budget e incassi
//! - `TvShow`: stagioni, episodi, stato della serie
//! - `Song`: artista, album, numero traccia
//! - `Podcast`: host, episodio, stagione
//!
//! ## Incapsulamento:
//! - Tutti i campi sono privati e impostati una sola volta alla costruzione
//! - L'accesso avviene solo tramite accessor
//! - Il trait non è istanziabile direttamente: `MediaInfo` da solo non è un `MediaItem`
//!
//! ## Esempio:
//! ```rust
//! use media_library::media::{MediaInfo, MediaItem, Movie};
//!
//! let info = MediaInfo::new("Arrival", 2016, 116, ["sci-fi", "drama"])?;
//! let movie = Movie::new(info, "Denis Villeneuve", ["Amy Adams"])?;
//! assert!(movie.describe().contains("Denis Villeneuve"));
//! # Ok::<(), media_library::LibraryError>(())
//! ```

pub mod movie;
pub mod podcast;
pub mod song;
pub mod tv_show;

pub use movie::Movie;
pub use podcast::Podcast;
pub use song::Song;
pub use tv_show::{ShowStatus, TvShow};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

use crate::error::{LibraryError, Result};

/// Earliest accepted release year (first recorded motion pictures).
pub const EARLIEST_RELEASE_YEAR: i32 = 1870;

pub const STREAMING_BASE_URL: &str = "https://stream.example.com";

/// Supported media types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Movie,
    TvShow,
    Music,
    Podcast,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Movie,
        MediaKind::TvShow,
        MediaKind::Music,
        MediaKind::Podcast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::TvShow => "tv_show",
            MediaKind::Music => "music",
            MediaKind::Podcast => "podcast",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "movie" => Ok(MediaKind::Movie),
            "tv_show" | "tv" | "show" => Ok(MediaKind::TvShow),
            "music" | "song" => Ok(MediaKind::Music),
            "podcast" => Ok(MediaKind::Podcast),
            other => Err(LibraryError::invalid(
                "kind",
                format!("unknown media kind '{}'", other),
            )),
        }
    }
}

/// Content rating classifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ContentRating {
    G,
    #[serde(rename = "PG")]
    Pg,
    #[serde(rename = "PG-13")]
    Pg13,
    R,
    #[serde(rename = "NC-17")]
    Nc17,
    #[default]
    Unrated,
}

impl ContentRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRating::G => "G",
            ContentRating::Pg => "PG",
            ContentRating::Pg13 => "PG-13",
            ContentRating::R => "R",
            ContentRating::Nc17 => "NC-17",
            ContentRating::Unrated => "Unrated",
        }
    }

    /// Minimum viewer age, if the rating imposes one
    pub fn minimum_age(&self) -> Option<u8> {
        match self {
            ContentRating::G | ContentRating::Pg | ContentRating::Unrated => None,
            ContentRating::Pg13 => Some(13),
            ContentRating::R => Some(17),
            ContentRating::Nc17 => Some(18),
        }
    }
}

impl fmt::Display for ContentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable fingerprint of a media item, derived from its kind and natural key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Hash the kind and each key component, length-prefixed so that no
    /// two distinct component lists share an encoding.
    pub fn from_parts<S: AsRef<str>>(kind: MediaKind, parts: &[S]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(kind.as_str().as_bytes());
        for part in parts {
            let part = part.as_ref().to_lowercase();
            hasher.update((part.len() as u64).to_be_bytes());
            hasher.update(part.as_bytes());
        }
        Self(hex::encode(hasher.finalize())[..16].to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated attributes common to every media variant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaInfo {
    title: String,
    release_year: i32,
    duration_minutes: u32,
    genres: Vec<String>,
    content_rating: ContentRating,
    description: String,
    release_date: Option<NaiveDate>,
}

impl MediaInfo {
    /// Validate and build the common attributes.
    ///
    /// Fails with `InvalidAttribute` when the title is blank, the duration is
    /// negative, the release year falls outside `1870..=current year`, or no
    /// usable genre tag is given.
    pub fn new<I, S>(
        title: &str,
        release_year: i32,
        duration_minutes: i64,
        genres: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let title = require_text("title", title)?;

        let current_year = chrono::Local::now().year();
        if !(EARLIEST_RELEASE_YEAR..=current_year).contains(&release_year) {
            return Err(LibraryError::invalid(
                "release_year",
                format!(
                    "must be between {} and {} (got {})",
                    EARLIEST_RELEASE_YEAR, current_year, release_year
                ),
            ));
        }

        let duration_minutes = require_non_negative("duration", duration_minutes)?;

        let mut normalized = Vec::new();
        for genre in genres {
            let genre = genre.as_ref().trim().to_lowercase();
            if genre.is_empty() {
                return Err(LibraryError::invalid("genres", "genre tags must not be blank"));
            }
            if !normalized.contains(&genre) {
                normalized.push(genre);
            }
        }
        if normalized.is_empty() {
            return Err(LibraryError::invalid("genres", "at least one genre is required"));
        }

        Ok(Self {
            title,
            release_year,
            duration_minutes,
            genres: normalized,
            content_rating: ContentRating::default(),
            description: String::new(),
            release_date: None,
        })
    }

    pub fn with_rating(mut self, rating: ContentRating) -> Self {
        self.content_rating = rating;
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.trim().to_string();
        self
    }

    /// Attach an exact release date. It must fall in the release year and
    /// must not be in the future.
    pub fn with_release_date(mut self, date: NaiveDate) -> Result<Self> {
        if date.year() != self.release_year {
            return Err(LibraryError::invalid(
                "release_date",
                format!("{} is not in release year {}", date, self.release_year),
            ));
        }
        if date > chrono::Local::now().date_naive() {
            return Err(LibraryError::invalid(
                "release_date",
                format!("{} is in the future", date),
            ));
        }
        self.release_date = Some(date);
        Ok(self)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn release_year(&self) -> i32 {
        self.release_year
    }

    /// Exact release date, or the first day of the release year when unknown
    pub fn release_date(&self) -> NaiveDate {
        self.release_date
            .or_else(|| NaiveDate::from_ymd_opt(self.release_year, 1, 1))
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn content_rating(&self) -> ContentRating {
        self.content_rating
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Capability set shared by every media variant.
///
/// Variants supply their common core through [`MediaItem::info`] plus their
/// own `describe`, identity key and metadata; everything else is provided.
pub trait MediaItem: fmt::Debug + Send + Sync {
    fn info(&self) -> &MediaInfo;

    fn kind(&self) -> MediaKind;

    /// Human-readable summary including the variant's own attributes
    fn describe(&self) -> String;

    /// Natural key components used to detect duplicates within a library
    fn identity_key(&self) -> Vec<String>;

    /// Variant-specific metadata as a JSON object
    fn metadata(&self) -> serde_json::Value;

    /// Relative streaming path, e.g. `movies/arrival`
    fn streaming_path(&self) -> String;

    /// Whether the item may be streamed today
    fn can_stream(&self) -> bool {
        true
    }

    /// Full streaming URL; fails with `Unavailable` while streaming is held back
    fn streaming_url(&self) -> Result<String> {
        if !self.can_stream() {
            return Err(LibraryError::Unavailable(format!(
                "{} '{}' is not available for streaming yet",
                self.kind(),
                self.title()
            )));
        }
        Ok(format!("{}/{}", STREAMING_BASE_URL, self.streaming_path()))
    }

    /// Playback length in minutes
    fn duration(&self) -> u32 {
        self.info().duration_minutes()
    }

    fn id(&self) -> ItemId {
        ItemId::from_parts(self.kind(), self.identity_key().as_slice())
    }

    fn title(&self) -> &str {
        self.info().title()
    }

    fn release_year(&self) -> i32 {
        self.info().release_year()
    }

    fn genres(&self) -> &[String] {
        self.info().genres()
    }

    fn content_rating(&self) -> ContentRating {
        self.info().content_rating()
    }

    fn description(&self) -> &str {
        self.info().description()
    }

    fn release_date(&self) -> NaiveDate {
        self.info().release_date()
    }

    fn is_recently_released(&self, days: i64) -> bool {
        self.released_within(days, chrono::Local::now().date_naive())
    }

    /// Released no more than `days` days before `today`
    fn released_within(&self, days: i64, today: NaiveDate) -> bool {
        self.release_date() >= today - chrono::Duration::days(days)
    }

    fn duration_formatted(&self) -> String {
        format_duration(self.duration())
    }

    fn matches_genre(&self, genre: &str) -> bool {
        let genre = genre.trim().to_lowercase();
        self.genres().iter().any(|g| *g == genre)
    }

    /// Case-insensitive substring match on title, description or genre tags
    fn matches_search(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.title().to_lowercase().contains(&query)
            || self.description().to_lowercase().contains(&query)
            || self.genres().iter().any(|g| g.contains(&query))
    }

    fn is_age_appropriate(&self, age: u8) -> bool {
        self.content_rating()
            .minimum_age()
            .map_or(true, |minimum| age >= minimum)
    }
}

/// Format minutes as `"2h 5m"` or `"45m"`
pub fn format_duration(minutes: u32) -> String {
    let (hours, minutes) = (minutes / 60, minutes % 60);
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Shared tail of every `describe()`: content rating, then the free-text
/// description when one is set.
pub(crate) fn describe_suffix(info: &MediaInfo) -> String {
    if info.description().is_empty() {
        format!(" rated {}", info.content_rating())
    } else {
        format!(" rated {}: {}", info.content_rating(), info.description())
    }
}

/// Lower-case, dash separated form of a title for use in paths
pub(crate) fn slugify(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-')
                .collect::<String>()
                .to_lowercase()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LibraryError::invalid(field, "must not be empty"));
    }
    Ok(value.to_string())
}

pub(crate) fn require_non_negative(field: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(LibraryError::invalid(
            field,
            format!("must not be negative (got {})", value),
        ));
    }
    u32::try_from(value)
        .map_err(|_| LibraryError::invalid(field, format!("is too large (got {})", value)))
}

pub(crate) fn require_positive(field: &'static str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(LibraryError::invalid(
            field,
            format!("must be a positive integer (got {})", value),
        ));
    }
    require_non_negative(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> MediaInfo {
        MediaInfo::new("Kind of Blue", 1959, 46, ["Jazz", " modal "]).unwrap()
    }

    #[test]
    fn test_media_info_normalizes_fields() {
        let info = MediaInfo::new("  Arrival ", 2016, 116, ["Sci-Fi", "sci-fi", "Drama"])
            .unwrap()
            .with_description("  A linguist meets visitors.  ");

        assert_eq!(info.title(), "Arrival");
        assert_eq!(info.genres(), &["sci-fi".to_string(), "drama".to_string()]);
        assert_eq!(info.description(), "A linguist meets visitors.");
        assert_eq!(info.content_rating(), ContentRating::Unrated);
    }

    #[test]
    fn test_media_info_validation() {
        assert!(matches!(
            MediaInfo::new("   ", 2000, 10, ["drama"]),
            Err(LibraryError::InvalidAttribute { field: "title", .. })
        ));
        assert!(matches!(
            MediaInfo::new("Old", 1869, 10, ["drama"]),
            Err(LibraryError::InvalidAttribute { field: "release_year", .. })
        ));
        let next_year = chrono::Local::now().year() + 1;
        assert!(matches!(
            MediaInfo::new("Future", next_year, 10, ["drama"]),
            Err(LibraryError::InvalidAttribute { field: "release_year", .. })
        ));
        assert!(matches!(
            MediaInfo::new("Negative", 2000, -1, ["drama"]),
            Err(LibraryError::InvalidAttribute { field: "duration", .. })
        ));
        assert!(matches!(
            MediaInfo::new("No genres", 2000, 10, Vec::<&str>::new()),
            Err(LibraryError::InvalidAttribute { field: "genres", .. })
        ));
        assert!(matches!(
            MediaInfo::new("Blank genre", 2000, 10, ["drama", " "]),
            Err(LibraryError::InvalidAttribute { field: "genres", .. })
        ));
        assert!(MediaInfo::new("Silent", 1870, 0, ["short"]).is_ok());
    }

    fn boxed<T: MediaItem + 'static>(item: T) -> Box<dyn MediaItem> {
        Box::new(item)
    }

    fn build_each(title: &str, minutes: i64) -> Vec<Result<Box<dyn MediaItem>>> {
        let info = || MediaInfo::new(title, 2010, minutes, ["drama"]);
        vec![
            info()
                .and_then(|i| Movie::new(i, "Director", ["Actor"]))
                .map(boxed),
            info()
                .and_then(|i| TvShow::new(i, 1, 8, ShowStatus::Ongoing))
                .map(boxed),
            info()
                .and_then(|i| Song::new(i, "Artist", "Album", 1, false))
                .map(boxed),
            info()
                .and_then(|i| Podcast::new(i, "Host", 1, 1, false))
                .map(boxed),
        ]
    }

    #[test]
    fn test_every_variant_rejects_bad_common_attributes() {
        for result in build_each("", 30) {
            assert!(matches!(
                result,
                Err(LibraryError::InvalidAttribute { field: "title", .. })
            ));
        }
        for result in build_each("Valid", -30) {
            assert!(matches!(
                result,
                Err(LibraryError::InvalidAttribute { field: "duration", .. })
            ));
        }
        for result in build_each("Valid", 30) {
            assert!(result.unwrap().describe().contains("Valid"));
        }
    }

    #[test]
    fn test_release_date_validation() {
        let date = NaiveDate::from_ymd_opt(1959, 8, 17).unwrap();
        let info = info().with_release_date(date).unwrap();
        assert_eq!(info.release_date(), date);

        let default_date = NaiveDate::from_ymd_opt(1959, 1, 1).unwrap();
        assert_eq!(self::info().release_date(), default_date);

        let wrong_year = NaiveDate::from_ymd_opt(1960, 1, 5).unwrap();
        assert!(matches!(
            self::info().with_release_date(wrong_year),
            Err(LibraryError::InvalidAttribute { field: "release_date", .. })
        ));
    }

    #[test]
    fn test_recently_released_window() {
        let date = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        let info = MediaInfo::new("Episode", 2020, 30, ["news"])
            .unwrap()
            .with_release_date(date)
            .unwrap();
        let podcast = Podcast::new(info, "Host", 1, 1, false).unwrap();

        let today = NaiveDate::from_ymd_opt(2020, 3, 31).unwrap();
        assert!(podcast.released_within(30, today));
        assert!(!podcast.released_within(29, today));
        assert!(!podcast.is_recently_released(30));
        assert!(podcast.can_stream());
        assert_eq!(
            podcast.streaming_url().unwrap(),
            "https://stream.example.com/podcasts/host/episode/s1e1"
        );
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(125), "2h 5m");
        assert_eq!(format_duration(60), "1h 0m");
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("The Dark Knight"), "the-dark-knight");
        assert_eq!(slugify("  What's  Up?  "), "whats-up");
    }

    #[test]
    fn test_item_id_is_stable_and_case_insensitive() {
        let a = ItemId::from_parts(MediaKind::Movie, &["Arrival", "2016"]);
        let b = ItemId::from_parts(MediaKind::Movie, &["arrival", "2016"]);
        let c = ItemId::from_parts(MediaKind::TvShow, &["arrival", "2016"]);

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.as_str().len(), 16);

        // component boundaries are part of the identity
        let split_late = ItemId::from_parts(MediaKind::Music, &["Intro|Live", "Band"]);
        let split_early = ItemId::from_parts(MediaKind::Music, &["Intro", "Live|Band"]);
        assert_ne!(split_late, split_early);
        let joined = ItemId::from_parts(MediaKind::Music, &["ab", "c"]);
        assert_ne!(joined, ItemId::from_parts(MediaKind::Music, &["a", "bc"]));
    }

    #[test]
    fn test_media_kind_parsing() {
        assert_eq!("Movie".parse::<MediaKind>().unwrap(), MediaKind::Movie);
        assert_eq!("tv_show".parse::<MediaKind>().unwrap(), MediaKind::TvShow);
        assert_eq!("song".parse::<MediaKind>().unwrap(), MediaKind::Music);
        assert!("vinyl".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_content_rating_ages() {
        let rated = info().with_rating(ContentRating::R);
        let song = Song::new(rated, "Miles Davis", "Kind of Blue", 1, false).unwrap();
        assert!(!song.is_age_appropriate(16));
        assert!(song.is_age_appropriate(17));

        let song = Song::new(info(), "Miles Davis", "Kind of Blue", 1, false).unwrap();
        assert!(song.is_age_appropriate(5));
        assert_eq!(ContentRating::Pg13.minimum_age(), Some(13));
        assert_eq!(ContentRating::Nc17.to_string(), "NC-17");
    }

    #[test]
    fn test_search_and_genre_matching() {
        let song = Song::new(
            info().with_description("Landmark modal record"),
            "Miles Davis",
            "Kind of Blue",
            1,
            false,
        )
        .unwrap();

        assert!(song.matches_genre(" JAZZ "));
        assert!(!song.matches_genre("jaz"));
        assert!(song.matches_search("kind"));
        assert!(song.matches_search("LANDMARK"));
        assert!(song.matches_search("mod"));
        assert!(!song.matches_search("rock"));
    }
}
