//! Marquee configuration
//!
//! Serializable so hosts can persist it alongside their own settings.
//! Values are validated before they are applied; setters on the widget
//! state reject bad values and keep the previous ones.

use serde::{Deserialize, Serialize};

use crate::driver::Direction;
use crate::error::ConfigError;

/// Marquee behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Scroll direction
    #[serde(default)]
    pub direction: Direction,
    /// Scroll speed in points per second
    #[serde(default = "default_speed")]
    pub speed: f32,
    /// Gap between adjacent items in points
    #[serde(default = "default_spacing")]
    pub spacing: f32,
}

fn default_speed() -> f32 {
    30.0
}

fn default_spacing() -> f32 {
    10.0
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            speed: default_speed(),
            spacing: default_spacing(),
        }
    }
}

impl MarqueeConfig {
    /// Check every field; used when accepting a whole config at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_speed(self.speed)?;
        validate_spacing(self.spacing)
    }
}

pub(crate) fn validate_speed(speed: f32) -> Result<(), ConfigError> {
    if speed > 0.0 && speed.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpeed { value: speed })
    }
}

pub(crate) fn validate_spacing(spacing: f32) -> Result<(), ConfigError> {
    if spacing >= 0.0 && spacing.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidSpacing { value: spacing })
    }
}
