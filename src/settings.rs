// Lecture des paramètres du binaire `slices` (fichier TOML optionnel)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use crate::error::{AppError, Result};

pub const DEFAULT_SETTINGS_PATH: &str = "slices.toml";
pub const SETTINGS_ENV_VAR: &str = "SLICES_SETTINGS";

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Settings {
    #[serde(default = "default_slices_path")]
    pub slices_path: PathBuf,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_slices_path() -> PathBuf {
    PathBuf::from("slices.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            slices_path: default_slices_path(),
            log_level: default_log_level(),
        }
    }
}

/// Lit les paramètres depuis `$SLICES_SETTINGS`, sinon `slices.toml`
pub fn read_settings() -> Result<Settings> {
    let path = std::env::var(SETTINGS_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH));
    read_settings_from(&path)
}

/// Un fichier absent donne les valeurs par défaut
pub fn read_settings_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| AppError::ConfigError(format!("Failed to read settings file {}: {}", path.display(), e)))?;

    toml::from_str(&content)
        .map_err(|e| AppError::ConfigError(format!("Failed to parse settings file {}: {}", path.display(), e)))
}
