// Gestion des erreurs du chargeur de slices

use std::fmt;
use std::error::Error as StdError;
use serde_json::error::Category;

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    IOError(std::io::Error),
    /// Le document n'est pas du JSON valide (syntaxe, document tronqué)
    MalformedJson(serde_json::Error),
    /// JSON valide mais la forme attendue n'est pas respectée
    InvalidStructure(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::IOError(err) => write!(f, "IO error: {}", err),
            AppError::MalformedJson(err) => write!(f, "Malformed JSON: {}", err),
            AppError::InvalidStructure(err) => write!(f, "Invalid slice structure: {}", err),
        }
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            AppError::IOError(err) => Some(err),
            AppError::MalformedJson(err) => Some(err),
            AppError::InvalidStructure(err) => Some(err),
            AppError::ConfigError(_) => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IOError(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => AppError::InvalidStructure(err),
            Category::Syntax | Category::Eof => AppError::MalformedJson(err),
            Category::Io => AppError::IOError(err.into()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
