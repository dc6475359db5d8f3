//! Run settings
//!
//! Loaded from a JSON file, or assembled from command-line arguments.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FRAMES;
use crate::error::{SimError, SimResult};
use crate::sim::ScenarioConfig;

/// Everything a headless run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames to run before stopping
    pub frames: u64,
    /// Log energy/momentum every N ticks (0 = never)
    pub log_interval: u64,
    pub scenario: ScenarioConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            log_interval: 60,
            scenario: ScenarioConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&json)?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> SimResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Cheap checks that do not need a built world
    pub fn validate(&self) -> SimResult<()> {
        let scenario = &self.scenario;
        if scenario.bodies.is_empty() && scenario.count == 0 {
            log::warn!("Scenario has no bodies");
        }
        if !(scenario.density.is_finite() && scenario.density > 0.0) {
            return Err(SimError::invalid_config(format!(
                "density must be positive, got {}",
                scenario.density
            )));
        }
        Ok(())
    }
}
