// Bibliothèque de chargement des slices réseau (bande passante, priorité, QoS)

pub mod error;
pub mod init;
pub mod loader;
pub mod settings;
pub mod types;

pub use error::{AppError, Result};
pub use loader::ConfigLoader;
pub use types::{SliceConfig, SliceRegistry};
