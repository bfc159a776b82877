//! Song variant: a music track on an album.

use serde_json::json;

use super::{
    describe_suffix, require_positive, require_text, slugify, MediaInfo, MediaItem, MediaKind,
};
use crate::error::Result;

/// A music track
#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    info: MediaInfo,
    artist: String,
    album: String,
    track_number: u32,
    is_explicit: bool,
}

impl Song {
    pub fn new(
        info: MediaInfo,
        artist: &str,
        album: &str,
        track_number: i64,
        is_explicit: bool,
    ) -> Result<Self> {
        Ok(Self {
            info,
            artist: require_text("artist", artist)?,
            album: require_text("album", album)?,
            track_number: require_positive("track_number", track_number)?,
            is_explicit,
        })
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn album(&self) -> &str {
        &self.album
    }

    pub fn track_number(&self) -> u32 {
        self.track_number
    }

    pub fn is_explicit(&self) -> bool {
        self.is_explicit
    }
}

impl MediaItem for Song {
    fn info(&self) -> &MediaInfo {
        &self.info
    }

    fn kind(&self) -> MediaKind {
        MediaKind::Music
    }

    fn describe(&self) -> String {
        format!(
            "{} ({}) - song by {}, track {} on {}, {} [{}]{}{}",
            self.title(),
            self.release_year(),
            self.artist,
            self.track_number,
            self.album,
            self.duration_formatted(),
            self.genres().join(", "),
            if self.is_explicit { " explicit" } else { "" },
            describe_suffix(&self.info)
        )
    }

    fn identity_key(&self) -> Vec<String> {
        vec![
            self.title().to_string(),
            self.artist.clone(),
            self.album.clone(),
        ]
    }

    fn metadata(&self) -> serde_json::Value {
        json!({
            "type": self.kind().as_str(),
            "artist": self.artist,
            "album": self.album,
            "track_number": self.track_number,
            "is_explicit": self.is_explicit,
        })
    }

    fn streaming_path(&self) -> String {
        format!("music/{}", slugify(self.title()))
    }
}
