//! # JSON Output Module
//!
//! Questo modulo gestisce l'output strutturato in JSON del binario.
//!
//! ## Responsabilità:
//! - Emette un messaggio JSON per riga su stdout
//! - Utilizza le strutture esistenti di `MediaItem` e `LibraryStats`
//! - Fornisce interfaccia standardizzata per consumatori programmatici
//!
//! ## Tipi di messaggi:
//! - `start`: Libreria caricata, con numero di elementi
//! - `item`: Un elemento della lista o dei risultati di ricerca
//! - `removed`: Elemento rimosso dalla libreria
//! - `stats`: Statistiche aggregate
//! - `error`: Errore durante l'elaborazione

use serde::Serialize;

use crate::library::LibraryStats;
use crate::media::{MediaItem, MediaKind};

/// Tipo di messaggio JSON
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonMessage {
    /// Libreria pronta
    Start {
        library_name: String,
        total_items: usize,
    },

    /// Un elemento media
    Item {
        id: String,
        kind: String,
        title: String,
        release_year: i32,
        duration_minutes: u32,
        genres: Vec<String>,
        content_rating: String,
        summary: String,
        description: String,
        streaming_path: String,
        can_stream: bool,
        streaming_url: Option<String>,
        metadata: serde_json::Value,
    },

    /// Elemento rimosso
    Removed { id: String, title: String },

    /// Statistiche finali
    Stats {
        total_items: usize,
        by_kind: Vec<(MediaKind, usize)>,
        total_runtime_minutes: u64,
        total_runtime_hours: f64,
        total_views: u64,
        average_rating: Option<f64>,
    },

    /// Errore generale
    Error {
        message: String,
        details: Option<String>,
    },
}

impl JsonMessage {
    /// Emette il messaggio JSON su stdout
    pub fn emit(&self) {
        if let Ok(json) = serde_json::to_string(self) {
            println!("{}", json);
        }
    }

    pub fn start(library_name: &str, total_items: usize) -> Self {
        Self::Start {
            library_name: library_name.to_string(),
            total_items,
        }
    }

    /// Crea un messaggio per un elemento
    pub fn item(item: &dyn MediaItem) -> Self {
        Self::Item {
            id: item.id().to_string(),
            kind: item.kind().to_string(),
            title: item.title().to_string(),
            release_year: item.release_year(),
            duration_minutes: item.duration(),
            genres: item.genres().to_vec(),
            content_rating: item.content_rating().to_string(),
            summary: item.describe(),
            description: item.description().to_string(),
            streaming_path: item.streaming_path(),
            can_stream: item.can_stream(),
            streaming_url: item.streaming_url().ok(),
            metadata: item.metadata(),
        }
    }

    pub fn removed(item: &dyn MediaItem) -> Self {
        Self::Removed {
            id: item.id().to_string(),
            title: item.title().to_string(),
        }
    }

    pub fn stats(stats: LibraryStats) -> Self {
        let total_runtime_hours = stats.total_runtime_hours();
        Self::Stats {
            total_items: stats.total_items,
            by_kind: stats.by_kind,
            total_runtime_minutes: stats.total_runtime_minutes,
            total_runtime_hours,
            total_views: stats.total_views,
            average_rating: stats.average_rating,
        }
    }

    /// Crea un messaggio di errore
    pub fn error(message: String, details: Option<String>) -> Self {
        Self::Error { message, details }
    }
}
