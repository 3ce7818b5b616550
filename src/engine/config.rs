use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Thresholds used by the gesture engine and the hand driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum normalized thumb-to-index distance that counts as a pinch
    pub pinch_threshold: f32,
    /// Two pinch-starts closer together than this (ms) may form a double-pinch
    pub double_pinch_window_ms: f64,
    /// Maximum cursor travel (viewport units) between the two pinch-starts
    pub double_pinch_max_distance: f32,
    /// Release an active drag when the hand disappears from the frame
    pub release_on_hand_lost: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pinch_threshold: 0.05,
            double_pinch_window_ms: 500.0,
            double_pinch_max_distance: 20.0,
            release_on_hand_lost: false,
        }
    }
}

impl EngineConfig {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.pinch_threshold.is_nan() || self.pinch_threshold <= 0.0 || self.pinch_threshold > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "pinch_threshold must be in (0, 1], got {}",
                self.pinch_threshold
            )));
        }
        if self.double_pinch_window_ms.is_nan() || self.double_pinch_window_ms <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "double_pinch_window_ms must be positive, got {}",
                self.double_pinch_window_ms
            )));
        }
        if self.double_pinch_max_distance.is_nan() || self.double_pinch_max_distance <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "double_pinch_max_distance must be positive, got {}",
                self.double_pinch_max_distance
            )));
        }
        Ok(())
    }
}
