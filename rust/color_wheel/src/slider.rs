//! Slider Parameters and State
//!
//! A vertical track whose fill height is driven by drag deltas (in dp).
//! The fill grows from the bottom of the track upward.
//!
//! The exposed value is the unfilled share of the range: an empty track
//! reads `max`, a full track reads `min`.

use crate::color::Color;
use crate::error::ConfigError;

/// Numeric range a slider maps onto
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for SliderRange {
    fn default() -> Self {
        Self::new(0.0, 100.0)
    }
}

/// Parameters that define a slider
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderParams {
    /// Track length in dp
    pub height_dp: f32,
    /// Track thickness in dp
    pub width_dp: f32,
    pub range: SliderRange,
    /// Fill color at the top of the track. The bottom always follows the
    /// selected color.
    pub gradient_top: Color,
}

impl SliderParams {
    /// Validate that parameters are in acceptable ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.height_dp > 0.0) {
            return Err(ConfigError::InvalidSliderHeight(self.height_dp));
        }
        if !(self.width_dp > 0.0) {
            return Err(ConfigError::InvalidSliderWidth(self.width_dp));
        }
        if !(self.range.min < self.range.max) {
            return Err(ConfigError::InvalidRange {
                min: self.range.min,
                max: self.range.max,
            });
        }
        Ok(())
    }

    /// Value shown for a fill height
    pub fn value_for_fill(&self, fill_dp: f32) -> f32 {
        let fraction = (fill_dp / self.height_dp).clamp(0.0, 1.0);
        self.range.max - fraction * (self.range.max - self.range.min)
    }

    /// Fill height showing `value`, the inverse of [`Self::value_for_fill`]
    pub fn fill_for_value(&self, value: f32) -> f32 {
        let span = self.range.max - self.range.min;
        let fraction = ((self.range.max - value) / span).clamp(0.0, 1.0);
        fraction * self.height_dp
    }
}

impl Default for SliderParams {
    fn default() -> Self {
        Self {
            height_dp: 240.0,
            width_dp: 80.0,
            range: SliderRange::default(),
            gradient_top: Color::WHITE,
        }
    }
}

/// Track deltas are positive upward, screen deltas are positive downward
pub fn track_delta_from_screen(screen_dy: f32) -> f32 {
    -screen_dy
}

/// Slider state that tracks the current fill height
#[derive(Debug, Clone)]
pub struct SliderTracker {
    pub params: SliderParams,
    fill_dp: f32,
}

impl SliderTracker {
    /// New tracker, half filled
    pub fn new(params: SliderParams) -> Self {
        Self {
            fill_dp: params.height_dp / 2.0,
            params,
        }
    }

    /// Add a track delta (dp), clamp the fill and return the new value
    pub fn on_drag_delta(&mut self, delta_dp: f32) -> f32 {
        self.fill_dp = (self.fill_dp + delta_dp).clamp(0.0, self.params.height_dp);
        self.value()
    }

    pub fn value(&self) -> f32 {
        self.params.value_for_fill(self.fill_dp)
    }

    pub fn fill(&self) -> f32 {
        self.fill_dp
    }

    pub fn fill_fraction(&self) -> f32 {
        self.fill_dp / self.params.height_dp
    }

    /// Back to half filled
    pub fn reset(&mut self) {
        self.fill_dp = self.params.height_dp / 2.0;
    }
}

impl Default for SliderTracker {
    fn default() -> Self {
        Self::new(SliderParams::default())
    }
}
