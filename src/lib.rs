//! # Media Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare della libreria
//! - Espone i tipi e le funzioni principali tramite re-exports
//! - Fornisce un'interfaccia pulita per il main.rs e per altri consumatori
//!
//! ## Architettura dei moduli:
//! - `media`: Trait `MediaItem` e varianti concrete (Movie, TvShow, Song, Podcast)
//! - `library`: Collezione `MediaLibrary`, filtri di ricerca e statistiche
//! - `error`: Tipi di errore custom
//! - `config`: Configurazione del binario e validazione parametri
//! - `json_output`: Output JSON strutturato
//! - `demo`: Catalogo di esempio
//!
//! ## Utilizzo:
//! ```rust
//! use media_library::{MediaLibrary, media::{MediaInfo, Movie}};
//!
//! let mut library = MediaLibrary::new("Home");
//! let info = MediaInfo::new("Arrival", 2016, 116, ["sci-fi"])?;
//! library.add(Movie::new(info, "Denis Villeneuve", ["Amy Adams"])?)?;
//! for line in library.describe_all() {
//!     println!("{}", line);
//! }
//! # Ok::<(), media_library::LibraryError>(())
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod json_output;
pub mod library;
pub mod media;

pub use config::Config;
pub use error::LibraryError;
pub use library::{LibraryStats, MediaLibrary, SearchFilter};
pub use media::{ItemId, MediaItem, MediaKind};
