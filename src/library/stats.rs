//! Aggregate statistics over a library.

use serde::Serialize;

use super::MediaLibrary;
use crate::media::{format_duration, MediaKind};

/// Statistics tracker for library contents
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LibraryStats {
    pub total_items: usize,
    pub by_kind: Vec<(MediaKind, usize)>,
    pub total_runtime_minutes: u64,
    pub total_views: u64,
    /// Mean of per-item average user ratings; `None` when nothing is rated
    pub average_rating: Option<f64>,
}

impl LibraryStats {
    pub fn collect(library: &MediaLibrary) -> Self {
        let by_kind = MediaKind::ALL
            .iter()
            .map(|kind| (*kind, library.all().filter(|item| item.kind() == *kind).count()))
            .collect();

        Self {
            total_items: library.len(),
            by_kind,
            total_runtime_minutes: library.total_runtime(),
            total_views: library.total_views(),
            average_rating: library.overall_average_rating(),
        }
    }

    pub fn count(&self, kind: MediaKind) -> usize {
        self.by_kind
            .iter()
            .find(|(k, _)| *k == kind)
            .map_or(0, |(_, count)| *count)
    }

    /// Total runtime in hours, rounded to one decimal
    pub fn total_runtime_hours(&self) -> f64 {
        (self.total_runtime_minutes as f64 / 60.0 * 10.0).round() / 10.0
    }

    pub fn format_summary(&self) -> String {
        let kinds = self
            .by_kind
            .iter()
            .map(|(kind, count)| format!("{}: {}", kind, count))
            .collect::<Vec<_>>()
            .join(" | ");
        let runtime = u32::try_from(self.total_runtime_minutes)
            .map(format_duration)
            .unwrap_or_else(|_| format!("{}m", self.total_runtime_minutes));

        let rating = self
            .average_rating
            .map_or_else(|| "n/a".to_string(), |avg| format!("{:.2}", avg));

        format!(
            "Items: {} | {} | Total runtime: {} ({:.1}h) | Views: {} | Avg rating: {}",
            self.total_items,
            kinds,
            runtime,
            self.total_runtime_hours(),
            self.total_views,
            rating
        )
    }
}
