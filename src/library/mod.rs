//! # Media Library Module
//!
//! Questo modulo gestisce la collezione in memoria di elementi media.
//!
//! ## Responsabilità:
//! - Possiede gli elementi come `Box<dyn MediaItem>` preservando l'ordine di inserimento
//! - Rifiuta duplicati in base all'`ItemId` (tipo + chiave naturale)
//! - Rimozione per id, per titolo o per predicato
//! - Ricerca per genere, tipo, testo libero e filtri combinati
//! - Visualizzazioni e voti degli utenti (1.0-5.0), classifiche e aggiunte recenti
//! - Statistiche aggregate sulla collezione
//!
//! ## Stato per elemento:
//! - Gli elementi restano immutabili: id, visualizzazioni, voti e data di
//!   aggiunta sono tenuti dalla libreria accanto all'elemento
//!
//! ## Garanzie:
//! - Un'operazione fallita non modifica mai il contenuto della libreria
//! - Le viste restituite sono in sola lettura e nell'ordine di inserimento
//!
//! ## Esempio:
//! ```rust
//! use media_library::{MediaLibrary, media::{MediaInfo, Song}};
//!
//! let mut library = MediaLibrary::new("Home");
//! let info = MediaInfo::new("So What", 1959, 9, ["jazz"])?;
//! let id = library.add(Song::new(info, "Miles Davis", "Kind of Blue", 1, false)?)?;
//! library.rate(&id, 5.0)?;
//! assert_eq!(library.find_by_genre("jazz").len(), 1);
//! # Ok::<(), media_library::LibraryError>(())
//! ```

pub mod filter;
pub mod stats;

pub use filter::SearchFilter;
pub use stats::LibraryStats;

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::error::{LibraryError, Result};
use crate::media::{ItemId, MediaItem, MediaKind};

/// Lowest accepted user rating
pub const MIN_USER_RATING: f64 = 1.0;
/// Highest accepted user rating
pub const MAX_USER_RATING: f64 = 5.0;

/// Check a user rating lies within `1.0..=5.0`
pub(crate) fn validate_user_rating(field: &'static str, rating: f64) -> Result<f64> {
    if !(MIN_USER_RATING..=MAX_USER_RATING).contains(&rating) {
        return Err(LibraryError::invalid(
            field,
            format!(
                "must be between {} and {} (got {})",
                MIN_USER_RATING, MAX_USER_RATING, rating
            ),
        ));
    }
    Ok(rating)
}

/// A stored item plus the state the library tracks for it
#[derive(Debug)]
struct Entry {
    id: ItemId,
    item: Box<dyn MediaItem>,
    views: u64,
    ratings: Vec<f64>,
    added_at: DateTime<Local>,
}

impl Entry {
    fn average_rating(&self) -> Option<f64> {
        if self.ratings.is_empty() {
            None
        } else {
            Some(self.ratings.iter().sum::<f64>() / self.ratings.len() as f64)
        }
    }
}

/// Ordered, in-memory collection of media items
#[derive(Debug)]
pub struct MediaLibrary {
    name: String,
    entries: Vec<Entry>,
}

impl MediaLibrary {
    /// Create an empty library
    pub fn new(name: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an item, returning its id
    pub fn add<T: MediaItem + 'static>(&mut self, item: T) -> Result<ItemId> {
        self.add_boxed(Box::new(item))
    }

    /// Append an already boxed item, returning its id.
    ///
    /// Fails with `Duplicate` when an item with the same id is present.
    pub fn add_boxed(&mut self, item: Box<dyn MediaItem>) -> Result<ItemId> {
        let id = item.id();
        if self.contains(&id) {
            warn!("Rejected duplicate {} '{}' ({})", item.kind(), item.title(), id);
            return Err(LibraryError::Duplicate(format!(
                "{} '{}' ({})",
                item.kind(),
                item.title(),
                id
            )));
        }

        debug!("Added {} '{}' ({}) to '{}'", item.kind(), item.title(), id, self.name);
        self.entries.push(Entry {
            id: id.clone(),
            item,
            views: 0,
            ratings: Vec::new(),
            added_at: Local::now(),
        });
        Ok(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.entry(id).is_some()
    }

    pub fn get(&self, id: &ItemId) -> Option<&dyn MediaItem> {
        self.entry(id).map(|entry| entry.item.as_ref())
    }

    fn entry(&self, id: &ItemId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == *id)
    }

    fn entry_mut(&mut self, id: &ItemId) -> Result<&mut Entry> {
        self.entries
            .iter_mut()
            .find(|entry| entry.id == *id)
            .ok_or_else(|| LibraryError::not_found(id.as_str()))
    }

    /// Remove the item with the given id
    pub fn remove(&mut self, id: &ItemId) -> Result<Box<dyn MediaItem>> {
        let index = self.entries.iter().position(|entry| entry.id == *id);
        self.take_at(index, id.as_str())
    }

    /// Remove the first item whose title matches, ignoring case
    pub fn remove_by_title(&mut self, title: &str) -> Result<Box<dyn MediaItem>> {
        let wanted = title.trim().to_lowercase();
        self.remove_first(|item| item.title().to_lowercase() == wanted, title)
    }

    /// Remove the first item accepted by `predicate`
    pub fn remove_where<F>(&mut self, predicate: F) -> Result<Box<dyn MediaItem>>
    where
        F: Fn(&dyn MediaItem) -> bool,
    {
        self.remove_first(predicate, "no item matched the predicate")
    }

    fn remove_first<F>(&mut self, predicate: F, key: &str) -> Result<Box<dyn MediaItem>>
    where
        F: Fn(&dyn MediaItem) -> bool,
    {
        let index = self
            .entries
            .iter()
            .position(|entry| predicate(entry.item.as_ref()));
        self.take_at(index, key)
    }

    fn take_at(&mut self, index: Option<usize>, key: &str) -> Result<Box<dyn MediaItem>> {
        match index {
            Some(index) => {
                let entry = self.entries.remove(index);
                debug!(
                    "Removed {} '{}' from '{}'",
                    entry.item.kind(),
                    entry.item.title(),
                    self.name
                );
                Ok(entry.item)
            }
            None => {
                warn!("Nothing to remove for '{}' in '{}'", key, self.name);
                Err(LibraryError::not_found(key))
            }
        }
    }

    /// Record one playback, returning the new view count
    pub fn record_view(&mut self, id: &ItemId) -> Result<u64> {
        let entry = self.entry_mut(id)?;
        entry.views += 1;
        Ok(entry.views)
    }

    pub fn view_count(&self, id: &ItemId) -> Option<u64> {
        self.entry(id).map(|entry| entry.views)
    }

    /// Add a user rating in `1.0..=5.0`, returning the new average
    pub fn rate(&mut self, id: &ItemId, rating: f64) -> Result<f64> {
        let rating = validate_user_rating("rating", rating)?;
        let entry = self.entry_mut(id)?;
        entry.ratings.push(rating);
        let average = entry.average_rating().unwrap_or(rating);
        debug!("Rated '{}' {} (average {:.2})", entry.item.title(), rating, average);
        Ok(average)
    }

    /// Average user rating, `None` when the item is unrated or unknown
    pub fn average_rating(&self, id: &ItemId) -> Option<f64> {
        self.entry(id).and_then(Entry::average_rating)
    }

    /// Rated items, best average first; ties keep insertion order
    pub fn top_rated(&self, limit: usize) -> Vec<&dyn MediaItem> {
        let mut rated: Vec<(&Entry, f64)> = self
            .entries
            .iter()
            .filter_map(|entry| entry.average_rating().map(|avg| (entry, avg)))
            .collect();
        rated.sort_by(|a, b| b.1.total_cmp(&a.1));
        rated
            .into_iter()
            .take(limit)
            .map(|(entry, _)| entry.item.as_ref())
            .collect()
    }

    /// Items by view count, most viewed first; ties keep insertion order
    pub fn most_viewed(&self, limit: usize) -> Vec<&dyn MediaItem> {
        let mut entries: Vec<&Entry> = self.entries.iter().collect();
        entries.sort_by(|a, b| b.views.cmp(&a.views));
        entries
            .into_iter()
            .take(limit)
            .map(|entry| entry.item.as_ref())
            .collect()
    }

    /// Items added to the library within the last `days` days
    pub fn recently_added(&self, days: i64) -> Vec<&dyn MediaItem> {
        let cutoff = Local::now() - chrono::Duration::days(days);
        self.entries
            .iter()
            .filter(|entry| entry.added_at >= cutoff)
            .map(|entry| entry.item.as_ref())
            .collect()
    }

    /// Read-only view of the contents in insertion order
    pub fn all(&self) -> impl Iterator<Item = &dyn MediaItem> + '_ {
        self.entries.iter().map(|entry| entry.item.as_ref())
    }

    pub fn find_by_genre(&self, genre: &str) -> Vec<&dyn MediaItem> {
        self.all().filter(|item| item.matches_genre(genre)).collect()
    }

    pub fn by_kind(&self, kind: MediaKind) -> Vec<&dyn MediaItem> {
        self.all().filter(|item| item.kind() == kind).collect()
    }

    /// Free-text search, optionally narrowed by a filter
    pub fn search(&self, query: &str, filter: Option<&SearchFilter>) -> Vec<&dyn MediaItem> {
        self.entries
            .iter()
            .filter(|entry| entry.item.matches_search(query))
            .filter(|entry| {
                filter.map_or(true, |f| f.matches(entry.item.as_ref(), entry.average_rating()))
            })
            .map(|entry| entry.item.as_ref())
            .collect()
    }

    pub fn describe_all(&self) -> Vec<String> {
        self.all().map(|item| item.describe()).collect()
    }

    /// Combined playback length in minutes
    pub fn total_runtime(&self) -> u64 {
        self.all().map(|item| u64::from(item.duration())).sum()
    }

    pub fn total_views(&self) -> u64 {
        self.entries.iter().map(|entry| entry.views).sum()
    }

    /// Mean of the per-item averages over rated items
    pub fn overall_average_rating(&self) -> Option<f64> {
        let averages: Vec<f64> = self
            .entries
            .iter()
            .filter_map(Entry::average_rating)
            .collect();
        if averages.is_empty() {
            None
        } else {
            Some(averages.iter().sum::<f64>() / averages.len() as f64)
        }
    }

    pub fn stats(&self) -> LibraryStats {
        LibraryStats::collect(self)
    }
}
