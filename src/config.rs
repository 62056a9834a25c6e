use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

pub const DEFAULT_MIN_SCALE: f32 = 0.8;
pub const DEFAULT_MAX_SCALE: f32 = 3.0;
/// Logical pixels a finger may wander before a touch stops being a tap
pub const DEFAULT_TAP_DISPLACEMENT_THRESHOLD: f32 = 2.0;

/// Options controlling scale clamping and tap/drag disambiguation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)] // partial config files fall back to the defaults
pub struct GestureConfig {
    pub min_scale: f32,
    pub max_scale: f32,
    pub tap_displacement_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: DEFAULT_MAX_SCALE,
            tap_displacement_threshold: DEFAULT_TAP_DISPLACEMENT_THRESHOLD,
        }
    }
}

impl GestureConfig {
    /// Parse and validate a JSON config, e.g. `{"max_scale": 4.0}`
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        let (min, max) = (self.min_scale, self.max_scale);
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
            return Err(ConfigError::InvalidScaleRange { min, max });
        }
        let threshold = self.tap_displacement_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidTapThreshold(threshold));
        }
        Ok(())
    }

    /// This config when it is valid, the defaults otherwise
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(err) => {
                log::warn!("Invalid gesture config, using defaults: {}", err);
                Self::default()
            }
        }
    }

    /// Unlike `f32::clamp` this never panics, even on an invalid range
    pub fn clamp_scale(&self, scale: f32) -> f32 {
        scale.max(self.min_scale).min(self.max_scale)
    }
}
