// Chargement des slices réseau depuis un fichier JSON

use std::fs;
use std::path::Path;
use log::{info, debug, error};
use crate::error::Result;
use crate::types::{SliceConfig, SliceRegistry};

/// Lit un fichier JSON de slices et conserve le registre en mémoire.
///
/// Un chargement raté laisse le registre précédent intact. Un chargement
/// réussi remplace le registre entier.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    slices: SliceRegistry,
}

impl ConfigLoader {
    pub fn new() -> Self {
        ConfigLoader {
            slices: SliceRegistry::new(),
        }
    }

    /// Charge le fichier `path` et retourne le nombre de slices lues
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        // UTF-8 invalide = contenu malformé, pas une erreur d'ouverture
        let content = fs::read(path)?;
        let count = self.load_from_slice(&content)?;
        info!("Loaded {} slice(s) from {}", count, path.display());
        Ok(count)
    }

    /// Même politique que `load`, à partir d'un document déjà en mémoire
    pub fn load_from_str(&mut self, json: &str) -> Result<usize> {
        self.load_from_slice(json.as_bytes())
    }

    fn load_from_slice(&mut self, bytes: &[u8]) -> Result<usize> {
        // Les clés dupliquées sont écrasées par la dernière occurrence
        let slices: SliceRegistry = serde_json::from_slice(bytes)?;
        for (name, slice) in &slices {
            debug!("Slice {}: {}", name, slice);
        }
        self.slices = slices;
        Ok(self.slices.len())
    }

    /// Variante booléenne de `load` : l'erreur est journalisée puis ignorée
    pub fn read_json<P: AsRef<Path>>(&mut self, path: P) -> bool {
        let path = path.as_ref();
        match self.load(path) {
            Ok(_) => true,
            Err(e) => {
                error!("Failed to load slices from {}: {}", path.display(), e);
                false
            }
        }
    }

    pub fn get_slices(&self) -> &SliceRegistry {
        &self.slices
    }

    pub fn slice(&self, name: &str) -> Option<&SliceConfig> {
        self.slices.get(name)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}
