//! # Error Types Module
//!
//! Questo modulo definisce tutti i tipi di errore custom della libreria.
//!
//! ## Categorie di errori:
//! - `InvalidAttribute`: Un campo viola il suo vincolo in fase di costruzione
//! - `NotFound`: Rimozione/ricerca con una chiave senza corrispondenza
//! - `Duplicate`: Aggiunta di un elemento già presente nella libreria
//! - `Unavailable`: Streaming richiesto prima che l'elemento sia disponibile
//!
//! Tutti gli errori sono locali e recuperabili: vengono restituiti al chiamante
//! e nessuna operazione fallita lascia la libreria in uno stato parziale.
//!
//! ## Esempio:
//! ```rust
//! use media_library::LibraryError;
//!
//! let err = LibraryError::invalid("title", "must not be empty");
//! assert_eq!(err.to_string(), "Invalid attribute 'title': must not be empty");
//! ```

/// Custom error types for the media library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    #[error("Invalid attribute '{field}': {reason}")]
    InvalidAttribute { field: &'static str, reason: String },

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Item already in library: {0}")]
    Duplicate(String),

    #[error("Not available: {0}")]
    Unavailable(String),
}

impl LibraryError {
    /// Create a new InvalidAttribute error.
    pub fn invalid<S: Into<String>>(field: &'static str, reason: S) -> Self {
        Self::InvalidAttribute {
            field,
            reason: reason.into(),
        }
    }

    /// Create a new NotFound error.
    pub fn not_found<S: Into<String>>(key: S) -> Self {
        Self::NotFound(key.into())
    }
}

/// Result type alias using the library error type.
pub type Result<T> = std::result::Result<T, LibraryError>;
