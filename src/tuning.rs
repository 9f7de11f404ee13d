//! Gameplay tuning
//!
//! Every balance constant lives here so a session can be reconfigured from
//! JSON without a rebuild. Persisted in LocalStorage on the web.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading a tuning override
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("malformed tuning json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("tuning field `{field}` must be finite and positive, got {value}")]
    Invalid { field: &'static str, value: f64 },
}

/// Gameplay constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub player_radius: f32,
    /// Pixels per frame
    pub player_speed: f32,
    /// Stored on the player, never decremented
    pub player_health: i32,

    pub bullet_radius: f32,
    pub bullet_speed: f32,

    pub enemy_radius: f32,
    pub enemy_speed: f32,

    /// Milliseconds between spawner ticks
    pub spawn_interval_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_radius: 20.0,
            player_speed: 5.0,
            player_health: 100,

            bullet_radius: 5.0,
            bullet_speed: 10.0,

            enemy_radius: 20.0,
            enemy_speed: 2.0,

            spawn_interval_ms: 2000.0,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would make the simulation degenerate
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields = [
            ("player_radius", self.player_radius as f64),
            ("player_speed", self.player_speed as f64),
            ("player_health", self.player_health as f64),
            ("bullet_radius", self.bullet_radius as f64),
            ("bullet_speed", self.bullet_speed as f64),
            ("enemy_radius", self.enemy_radius as f64),
            ("enemy_speed", self.enemy_speed as f64),
            ("spawn_interval_ms", self.spawn_interval_ms),
        ];

        for (field, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::Invalid { field, value });
            }
        }
        Ok(())
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "canvas_shooter_tuning";

    /// Load a tuning override from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(tuning) => {
                        log::info!("Loaded tuning override from LocalStorage");
                        return tuning;
                    }
                    Err(e) => log::warn!("Ignoring tuning override: {}", e),
                }
            }
        }

        log::info!("Using default tuning");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
