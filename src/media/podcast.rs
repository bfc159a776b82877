//! Podcast variant: one episode of a hosted show.

use serde_json::json;

use super::{
    describe_suffix, require_positive, require_text, slugify, MediaInfo, MediaItem, MediaKind,
};
use crate::error::Result;

/// A podcast episode
#[derive(Debug, Clone, PartialEq)]
pub struct Podcast {
    info: MediaInfo,
    host: String,
    episode_number: u32,
    season_number: u32,
    transcript_available: bool,
}

impl Podcast {
    pub fn new(
        info: MediaInfo,
        host: &str,
        episode_number: i64,
        season_number: i64,
        transcript_available: bool,
    ) -> Result<Self> {
        Ok(Self {
            info,
            host: require_text("host", host)?,
            episode_number: require_positive("episode_number", episode_number)?,
            season_number: require_positive("season_number", season_number)?,
            transcript_available,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn episode_number(&self) -> u32 {
        self.episode_number
    }

    pub fn season_number(&self) -> u32 {
        self.season_number
    }

    pub fn transcript_available(&self) -> bool {
        self.transcript_available
    }
}

impl MediaItem for Podcast {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Podcast
    }

    fn describe(&self) -> String {
        format!(
            "{} ({}) - podcast hosted by {}, season {} episode {}, {} [{}]{}{}",
            self.title(),
            self.release_year(),
            self.host,
            self.season_number,
            self.episode_number,
            self.duration_formatted(),
            self.genres().join(", "),
            if self.transcript_available {
                ", transcript available"
            } else {
                ""
            },
            describe_suffix(&self.info)
        )
    }

    fn identity_key(&self) -> Vec<String> {
        vec![
            self.host.clone(),
            self.title().to_string(),
            self.season_number.to_string(),
            self.episode_number.to_string(),
        ]
    }

    fn metadata(&self) -> serde_json::Value {
        json!({
            "type": self.kind().as_str(),
            "host": self.host,
            "episode_number": self.episode_number,
            "season_number": self.season_number,
            "transcript_available": self.transcript_available,
        })
    }

    fn streaming_path(&self) -> String {
        format!(
            "podcasts/{}/{}/s{}e{}",
            slugify(&self.host),
            slugify(self.title()),
            self.season_number,
            self.episode_number
        )
    }
}
