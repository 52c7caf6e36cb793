//! Picker configuration
//!
//! Plain parameter structs with defaults matching the stock picker screen.

use crate::color::Color;
use crate::error::ConfigError;
use crate::gradient::GradientSpec;
use crate::slider::{SliderParams, SliderRange};

/// Default selected color (light green)
pub const DEFAULT_SELECTED_COLOR: u32 = 0xFF83EB34;
/// Top of the temperature slider gradient (purple)
pub const TEMPERATURE_TOP_COLOR: u32 = 0xFF9C27B0;
/// Highlight drawn around the active slot button
pub const ACTIVE_BUTTON_BORDER: Color = Color::RED;

/// Color wheel parameters
#[derive(Debug, Clone, PartialEq)]
pub struct WheelParams {
    /// Buffer width in pixels
    pub width: u32,
    /// Buffer height in pixels
    pub height: u32,
    pub gradient: GradientSpec,
}

impl WheelParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyBuffer {
                width: self.width,
                height: self.height,
            });
        }
        self.gradient.validate()
    }
}

impl Default for WheelParams {
    fn default() -> Self {
        Self {
            width: 500,
            height: 800,
            gradient: GradientSpec::default(),
        }
    }
}

/// Everything the picker screen is built from
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    pub wheel: WheelParams,
    pub brightness: SliderParams,
    /// Temperature slider; its bottom color follows the selected color
    pub temperature: SliderParams,
    /// Physical pixels per dp
    pub density: f32,
    pub initial_color: Color,
}

impl PickerConfig {
    /// Validate that parameters are in acceptable ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.density > 0.0) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        self.wheel.validate()?;
        self.brightness.validate()?;
        self.temperature.validate()
    }

    pub fn px_to_dp(&self, px: f32) -> f32 {
        px / self.density
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        let initial_color = Color::from_argb(DEFAULT_SELECTED_COLOR);
        Self {
            wheel: WheelParams::default(),
            brightness: SliderParams::default(),
            temperature: SliderParams {
                range: SliderRange::new(0.0, 25.0),
                gradient_top: Color::from_argb(TEMPERATURE_TOP_COLOR),
                ..Default::default()
            },
            density: 1.0,
            initial_color,
        }
    }
}
