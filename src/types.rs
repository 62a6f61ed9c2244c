// Définitions des structures partagées

use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use std::fmt;

/// Politique d'une slice réseau
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliceConfig {
    pub bandwidth: u32,
    pub priority: i32,
    pub qos: String,
}

impl fmt::Display for SliceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bw={} prio={} qos={}", self.bandwidth, self.priority, self.qos)
    }
}

/// Clé = nom de la slice (ex: "slice_a")
pub type SliceRegistry = HashMap<String, SliceConfig>;
