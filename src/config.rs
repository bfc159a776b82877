//! # Configuration Management Module
//!
//! Questo modulo gestisce la configurazione del binario `media-library`.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con i parametri di presentazione della libreria
//! - Fornisce validazione dei parametri di input
//! - Supporta caricamento/salvataggio configurazione da/verso file JSON
//! - Fornisce valori di default sensati per tutti i parametri
//!
//! ## Parametri di configurazione:
//! - `library_name`: Nome della libreria (default: "My Media Library")
//! - `viewer_age`: Età dello spettatore per il filtro di rating (default: None)
//! - `max_results`: Numero massimo di risultati mostrati (default: 50)
//! - `json_output`: Output JSON strutturato invece di testo (default: false)
//!
//! ## Esempio:
//! ```rust
//! use media_library::Config;
//!
//! let config = Config {
//!     max_results: 10,
//!     ..Default::default()
//! };
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Oldest viewer age accepted in configuration
const MAX_VIEWER_AGE: u8 = 130;

/// Configuration for the library front-end
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Display name of the library
    pub library_name: String,
    /// Hide items whose content rating is unsuitable for this age
    pub viewer_age: Option<u8>,
    /// Maximum number of items printed per listing
    pub max_results: usize,
    /// Output results as JSON lines for programmatic use
    pub json_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library_name: "My Media Library".to_string(),
            viewer_age: None,
            max_results: 50,
            json_output: false,
        }
    }
}

impl Config {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.library_name.trim().is_empty() {
            return Err(anyhow::anyhow!("Library name must not be empty"));
        }

        if self.max_results == 0 {
            return Err(anyhow::anyhow!("Max results must be greater than 0"));
        }

        if let Some(age) = self.viewer_age {
            if age > MAX_VIEWER_AGE {
                return Err(anyhow::anyhow!(
                    "Viewer age must be at most {} (got {})",
                    MAX_VIEWER_AGE,
                    age
                ));
            }
        }

        Ok(())
    }

    /// Default configuration location: `~/.media-library/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let dir = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?
            .join(".media-library");
        Ok(dir.join("config.json"))
    }

    /// Load configuration from file, falling back to defaults when missing
    pub async fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub async fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }
}
