use crate::search::{MAX_SUGGESTIONS, MIN_SIMILARITY};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Where the listings JSON lives
    pub data_path: String,

    /// Suggestion threshold for similar-area ranking
    pub min_similarity: f64,

    /// Cap on similar-area suggestions
    pub max_suggestions: usize,

    /// Default log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: dirs::data_dir()
                .unwrap_or_default()
                .join("estatesearch/homes.json")
                .to_string_lossy()
                .to_string(),
            min_similarity: MIN_SIMILARITY,
            max_suggestions: MAX_SUGGESTIONS,
            log_level: "INFO".to_string(),
        }
    }
}

impl Config {
    /// Load config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path())
    }

    /// Load config from `config_path`.
    ///
    /// A corrupt file is renamed to `.json.corrupt` and replaced with
    /// defaults; a missing file gets defaults written out so there is a
    /// file to edit.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            match serde_json::from_str(&content) {
                Ok(config) => Ok(config),
                Err(e) => {
                    tracing::warn!("⚠️ Config file corrupted or invalid, using defaults: {}", e);
                    // Keep the corrupt file around for debugging
                    let backup_path = config_path.with_extension("json.corrupt");
                    let _ = std::fs::rename(config_path, &backup_path);
                    Ok(Self::default())
                }
            }
        } else {
            // First run: persist the defaults
            let defaults = Self::default();
            let _ = defaults.save_to(config_path);
            Ok(defaults)
        }
    }

    /// Save config to `config_path`
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("estatesearch")
        .join("config.json")
}
