//! Settings
//!
//! Presentation and tuning knobs that are not fixed by the simulation:
//! colors, launch speed, seed. Persisted as a JSON file next to the
//! binary; missing or malformed files fall back to defaults.

use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::LAUNCH_SPEED;
use crate::renderer::Palette;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame colors (background, primary ball, touch balls)
    pub palette: Palette,
    /// Speed of the primary ball's launch kick, in pixels per step
    pub launch_speed: f32,
    /// Fixed seed for the kick direction; `None` derives one from the
    /// clock at startup
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            launch_speed: LAUNCH_SPEED,
            seed: None,
        }
    }
}

impl Settings {
    /// Load from `path`, falling back to defaults with a log line.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("malformed settings file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Best-effort save; failures are logged, not propagated.
    pub fn save(&self, path: &Path) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    log::warn!("could not write settings to {}: {err}", path.display());
                } else {
                    log::info!("settings saved to {}", path.display());
                }
            }
            Err(err) => log::warn!("could not serialize settings: {err}"),
        }
    }

    /// Seed for the launch direction: configured, or derived from the
    /// clock.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
