//! Error types for the marquee widget
//!
//! The surface is narrow on purpose: the engine does no I/O, so the
//! only failures are invalid configuration values, rejected
//! synchronously at the call site. Lifecycle misuse (starting after
//! teardown) is tolerated with a warning instead of an error, to absorb
//! host timing races.

use thiserror::Error;

/// Invalid configuration supplied by the host. The previous valid value
/// is always retained.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Speed must be a positive, finite number of points per second.
    #[error("invalid marquee speed {value}: must be positive and finite")]
    InvalidSpeed { value: f32 },

    /// Spacing must be a non-negative, finite number of points.
    #[error("invalid marquee spacing {value}: must be non-negative and finite")]
    InvalidSpacing { value: f32 },
}
