//! Run settings
//!
//! Overlay toggles plus the world configuration, persisted as a JSON file
//! next to whatever drives the simulation.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::sim::WorldConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// World construction parameters
    pub world: WorldConfig,

    // === Overlays ===
    /// Proximity mesh between hit points
    pub mesh: bool,
    /// Fading trails
    pub trails: bool,
    /// Decaying hit-density heatmap
    pub heatmap: bool,

    /// Frames the demo binary runs before exiting
    pub frames: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            mesh: true,
            trails: false,
            heatmap: false,
            frames: 600,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        log::info!("loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("writing settings to {}", path.display()))?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}
