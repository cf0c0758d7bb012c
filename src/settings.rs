//! Runtime settings
//!
//! Read once at startup from an optional JSON file. Nothing is ever written
//! back; a run leaves no state behind.

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::tuning::Tuning;

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed RNG seed for reproducible runs (clock-derived when absent)
    pub seed: Option<u64>,
    /// Frame rate the frontend paces itself to
    pub target_fps: u32,
    /// Frames a key stays "held" after its last press/repeat event, for
    /// terminals that never report key releases
    pub hold_window_frames: u64,
    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            target_fps: TARGET_FPS,
            hold_window_frames: 8,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const CONFIG_ENV: &'static str = "TOPDOWN_SHOOTER_CONFIG";

    /// Parse settings from a JSON document; missing fields take defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let mut settings: Self = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Load settings from the file named by `TOPDOWN_SHOOTER_CONFIG`
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Seed for this run: the configured one, else the wall clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0x5EED)
        })
    }

    fn sanitize(&mut self) {
        if self.target_fps == 0 {
            log::warn!("target_fps must be positive, using {}", TARGET_FPS);
            self.target_fps = TARGET_FPS;
        }
        let fixed = self.tuning.sanitize();
        if fixed > 0 {
            log::warn!("Corrected {} invalid tuning value(s)", fixed);
        }
    }
}
