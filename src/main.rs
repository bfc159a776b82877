//! # Media Library - Main Entry Point
//!
//! Questo è il punto di ingresso del binario dimostrativo.
//!
//! ## Responsabilità:
//! - Parsing degli argomenti della command line con `clap`
//! - Inizializzazione del sistema di logging con `tracing`
//! - Caricamento della configurazione e merge con i flag CLI
//! - Costruzione del catalogo di esempio ed esecuzione di lista/ricerca/statistiche
//!
//! ## Flusso di esecuzione:
//! 1. Parsa gli argomenti CLI (filtri, rimozioni, output)
//! 2. Configura il logging (INFO o DEBUG a seconda del flag verbose, `RUST_LOG` se presente)
//! 3. Carica il file di configurazione (default se assente)
//! 4. Costruisce la libreria di esempio e applica le rimozioni richieste
//! 5. Stampa la lista (o i risultati filtrati) ed eventualmente le statistiche
//!
//! ## Esempio di utilizzo:
//! ```bash
//! media-library --genre jazz --stats
//! media-library --kind movie --age 12 --json
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use media_library::json_output::JsonMessage;
use media_library::{demo, Config, MediaItem, MediaKind, SearchFilter};

#[derive(Parser)]
#[command(name = "media-library")]
#[command(about = "Browse a digital media library of movies, TV shows, music and podcasts")]
struct Args {
    /// Configuration file (default: ~/.media-library/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Only show items tagged with this genre (repeatable)
    #[arg(short, long)]
    genre: Vec<String>,

    /// Only show items of this kind (movie, tv_show, music, podcast)
    #[arg(short, long)]
    kind: Option<MediaKind>,

    /// Free-text search over title, description and genres
    #[arg(short, long)]
    query: Option<String>,

    /// Only show items no longer than this many minutes
    #[arg(long)]
    max_duration: Option<u32>,

    /// Hide items unsuitable for a viewer of this age
    #[arg(short, long)]
    age: Option<u8>,

    /// Only show items with at least this average user rating (1.0 to 5.0)
    #[arg(long)]
    min_rating: Option<f64>,

    /// List the N best rated items instead of the catalog
    #[arg(long, value_name = "N")]
    top_rated: Option<usize>,

    /// List the N most viewed items instead of the catalog
    #[arg(long, value_name = "N")]
    most_viewed: Option<usize>,

    /// Remove the item with this title before listing (repeatable)
    #[arg(long)]
    remove: Vec<String>,

    /// Print library statistics
    #[arg(short, long)]
    stats: bool,

    /// Output JSON lines instead of text
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging on stderr so JSON output on stdout stays clean
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "info" }));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = match args.config {
        Some(ref path) => path.clone(),
        None => Config::default_path()?,
    };
    let mut config = Config::from_file(&config_path).await?;
    debug!("Loaded configuration from {}", config_path.display());

    config.json_output |= args.json;
    if args.age.is_some() {
        config.viewer_age = args.age;
    }
    config.validate()?;

    let mut library = demo::sample_library(&config.library_name)?;
    info!("Library '{}' ready with {} items", library.name(), library.len());
    if config.json_output {
        JsonMessage::start(library.name(), library.len()).emit();
    }

    for title in &args.remove {
        match library.remove_by_title(title) {
            Ok(item) => {
                if config.json_output {
                    JsonMessage::removed(item.as_ref()).emit();
                } else {
                    println!("Removed: {}", item.title());
                }
            }
            Err(e) => {
                warn!("Could not remove '{}': {}", title, e);
                if config.json_output {
                    JsonMessage::error(e.to_string(), Some(title.clone())).emit();
                }
            }
        }
    }

    let mut filter = SearchFilter::new();
    for genre in &args.genre {
        filter = filter.with_genre(genre);
    }
    if let Some(kind) = args.kind {
        filter = filter.with_kind(kind);
    }
    if let Some(minutes) = args.max_duration {
        filter = filter.max_duration(minutes);
    }
    if let Some(age) = config.viewer_age {
        filter = filter.suitable_for_age(age);
    }
    if let Some(rating) = args.min_rating {
        filter = filter.min_rating(rating)?;
    }

    let query = args.query.as_deref().unwrap_or("");
    let ranked = match (args.top_rated, args.most_viewed) {
        (Some(limit), _) => Some(library.top_rated(limit)),
        (None, Some(limit)) => Some(library.most_viewed(limit)),
        (None, None) => None,
    };
    let listing_all = ranked.is_none() && filter.is_empty() && query.is_empty();
    let results: Vec<&dyn MediaItem> = if let Some(ranked) = ranked {
        ranked
    } else if listing_all {
        library.all().collect()
    } else {
        library.search(query, Some(&filter))
    };
    debug!("{} of {} items selected", results.len(), library.len());

    if config.json_output {
        for item in results.iter().take(config.max_results) {
            JsonMessage::item(*item).emit();
        }
    } else if listing_all {
        for line in library.describe_all().iter().take(config.max_results) {
            println!("{}", line);
        }
    } else if results.is_empty() {
        println!("No items matched.");
    } else {
        for item in results.iter().take(config.max_results) {
            println!("{}", item.describe());
        }
    }

    if results.len() > config.max_results {
        info!("Showing {} of {} items", config.max_results, results.len());
    }

    if args.stats {
        let stats = library.stats();
        if config.json_output {
            JsonMessage::stats(stats).emit();
        } else {
            println!("{}", stats.format_summary());
        }
    }

    Ok(())
}
