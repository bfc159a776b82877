//! TV show variant.
//!
//! The common duration is the running time of one episode; `duration()`
//! reports the aggregate runtime of every episode.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt;

use super::{
    describe_suffix, format_duration, require_positive, slugify, MediaInfo, MediaItem, MediaKind,
};
use crate::error::{LibraryError, Result};

/// Broadcast status of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShowStatus {
    #[default]
    Ongoing,
    Completed,
    Cancelled,
}

impl fmt::Display for ShowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShowStatus::Ongoing => "ongoing",
            ShowStatus::Completed => "completed",
            ShowStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// A television series
#[derive(Debug, Clone, PartialEq)]
pub struct TvShow {
    info: MediaInfo,
    seasons: u32,
    total_episodes: u32,
    status: ShowStatus,
}

impl TvShow {
    pub fn new(
        info: MediaInfo,
        seasons: i64,
        total_episodes: i64,
        status: ShowStatus,
    ) -> Result<Self> {
        let seasons = require_positive("seasons", seasons)?;
        let total_episodes = require_positive("total_episodes", total_episodes)?;
        if total_episodes < seasons {
            return Err(LibraryError::invalid(
                "total_episodes",
                format!(
                    "cannot be fewer than the number of seasons ({} < {})",
                    total_episodes, seasons
                ),
            ));
        }

        Ok(Self {
            info,
            seasons,
            total_episodes,
            status,
        })
    }

    pub fn seasons(&self) -> u32 {
        self.seasons
    }

    pub fn total_episodes(&self) -> u32 {
        self.total_episodes
    }

    pub fn status(&self) -> ShowStatus {
        self.status
    }

    /// Running time of a single episode in minutes
    pub fn episode_duration(&self) -> u32 {
        self.info.duration_minutes()
    }
}

impl MediaItem for TvShow {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn kind(&self) -> MediaKind {
        MediaKind::TvShow
    }

    fn duration(&self) -> u32 {
        self.episode_duration().saturating_mul(self.total_episodes)
    }

    fn describe(&self) -> String {
        format!(
            "{} ({}) - {} TV show, {} season(s), {} episode(s) of {} each ({} total) [{}]{}",
            self.title(),
            self.release_year(),
            self.status,
            self.seasons,
            self.total_episodes,
            format_duration(self.episode_duration()),
            self.duration_formatted(),
            self.genres().join(", "),
            describe_suffix(&self.info)
        )
    }

    fn identity_key(&self) -> Vec<String> {
        vec![self.title().to_string(), self.release_year().to_string()]
    }

    fn metadata(&self) -> serde_json::Value {
        let total_runtime_hours = (self.duration() as f64 / 60.0 * 10.0).round() / 10.0;
        json!({
            "type": self.kind().as_str(),
            "seasons": self.seasons,
            "total_episodes": self.total_episodes,
            "status": self.status,
            "average_episode_duration": self.episode_duration(),
            "total_runtime_hours": total_runtime_hours,
        })
    }

    fn streaming_path(&self) -> String {
        format!("shows/{}", slugify(self.title()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ContentRating;

    fn info(minutes: i64) -> MediaInfo {
        MediaInfo::new("Breaking Bad", 2008, minutes, ["drama", "crime"]).unwrap()
    }

    #[test]
    fn test_duration_is_aggregate() {
        let show = TvShow::new(info(47), 5, 62, ShowStatus::Completed).unwrap();
        assert_eq!(show.episode_duration(), 47);
        assert_eq!(show.duration(), 47 * 62);
        assert_eq!(show.metadata()["total_runtime_hours"], 48.6);
    }

    #[test]
    fn test_describe_contains_attributes() {
        let info = info(47)
            .with_rating(ContentRating::R)
            .with_description("Chemistry teacher turns cook");
        let show = TvShow::new(info, 5, 62, ShowStatus::Completed).unwrap();
        let text = show.describe();

        let expected_parts = [
            "Breaking Bad",
            "2008",
            "completed",
            "5 season",
            "62 episode",
            "47m",
            "crime",
            "rated R",
            "Chemistry teacher turns cook",
        ];
        for expected in expected_parts {
            assert!(text.contains(expected), "'{}' missing from '{}'", expected, text);
        }
    }

    #[test]
    fn test_counts_validated() {
        assert!(matches!(
            TvShow::new(info(47), 0, 10, ShowStatus::Ongoing),
            Err(LibraryError::InvalidAttribute { field: "seasons", .. })
        ));
        assert!(matches!(
            TvShow::new(info(47), 3, 2, ShowStatus::Ongoing),
            Err(LibraryError::InvalidAttribute { field: "total_episodes", .. })
        ));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let show = TvShow::new(info(47), 1, 7, ShowStatus::Cancelled).unwrap();
        assert_eq!(show.metadata()["status"], "cancelled");
        assert_eq!(show.streaming_path(), "shows/breaking-bad");
    }
}
