//! Driver settings
//!
//! Loaded from a JSON file; any field left out takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::Result;

/// Headless driver configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Run seed; a random one is picked (and logged) when absent
    pub seed: Option<u64>,
    /// Roamers present at the start of the run
    pub initial_roamers: usize,
    /// Stop after this many ticks even if the run is still going
    pub max_ticks: u64,
    /// Seconds between ticks when running in real time
    pub tick_seconds: f32,
    /// Pace ticks with the wall clock instead of running flat out
    pub realtime: bool,
    /// Let the demo autopilot steer the player
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            initial_roamers: INITIAL_ROAMERS,
            max_ticks: 20_000,
            tick_seconds: DEFAULT_TICK_SECONDS,
            realtime: false,
            autopilot: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Tick interval clamped to something a driver can actually sleep for
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(self.tick_seconds.clamp(0.001, 1.0))
    }
}
