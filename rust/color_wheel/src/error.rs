//! Configuration errors
//!
//! Sampling and dragging never fail; an invalid sample is `None`.
//! Only building buffers and validating parameters can go wrong.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("gradient buffer must be at least 1x1, got {width}x{height}")]
    EmptyBuffer { width: u32, height: u32 },

    #[error("gradient needs at least two color stops, got {0}")]
    TooFewStops(usize),

    #[error("gradient has {colors} colors but {positions} stop positions")]
    StopCountMismatch { colors: usize, positions: usize },

    #[error("gradient stop positions must be strictly increasing within 0.0-1.0")]
    InvalidStopPositions,

    #[error("radial gradient radius fraction must be positive, got {0}")]
    InvalidRadius(f32),

    #[error("slider height must be positive, got {0}dp")]
    InvalidSliderHeight(f32),

    #[error("slider width must be positive, got {0}dp")]
    InvalidSliderWidth(f32),

    #[error("slider range {min}..{max} must have min < max")]
    InvalidRange { min: f32, max: f32 },

    #[error("display density must be positive, got {0}")]
    InvalidDensity(f32),
}
