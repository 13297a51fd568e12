//! Tunables for fling physics and velocity capture.

use crate::gesture_constants::{DEFAULT_DENSITY, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY};
use thiserror::Error;

pub use stackscroll_animation::DEFAULT_FRICTION;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("density must be positive, got {0}")]
    Density(f32),

    #[error("friction must be positive, got {0}")]
    Friction(f32),

    #[error("fling velocity bounds must satisfy 0 <= min <= max, got min {min} max {max}")]
    FlingVelocity { min: f32, max: f32 },
}

/// Physics configuration shared by every container of a host.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollConfig {
    /// Display density (1.0 for mdpi).
    pub density: f32,
    /// Scroll friction coefficient; higher values stop flings sooner.
    pub friction: f32,
    /// Flings below this speed (px/sec) finish immediately.
    pub min_fling_velocity: f32,
    /// Release velocities are capped to this speed (px/sec).
    pub max_fling_velocity: f32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            friction: DEFAULT_FRICTION,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
        }
    }
}

impl ScrollConfig {
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(ConfigError::Density(self.density));
        }
        if !(self.friction.is_finite() && self.friction > 0.0) {
            return Err(ConfigError::Friction(self.friction));
        }
        let (min, max) = (self.min_fling_velocity, self.max_fling_velocity);
        if !(min >= 0.0 && max.is_finite() && min <= max) {
            return Err(ConfigError::FlingVelocity { min, max });
        }
        Ok(())
    }
}
