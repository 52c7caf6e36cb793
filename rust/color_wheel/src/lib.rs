//! Color Wheel Library
//!
//! Pointer-driven color picking over a rasterized hue gradient, plus the
//! brightness/temperature sliders that go with it. Runs:
//! - Natively, driven by any host toolkit
//! - In a browser (via WASM), with the page drawing the canvas
//!
//! Drawing is left to the host. This crate owns the gradient pixels, the
//! drag state and the screen state, and reports picks through callbacks.

mod app;
mod color;
mod config;
mod drag;
mod error;
mod gradient;
mod input;
mod logging;
pub mod magnifier;
pub mod sampler;
mod screen;
mod slider;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use app::App;
pub use color::{Color, Rgba8};
pub use config::{PickerConfig, WheelParams};
pub use drag::{DragAccumulator, WheelDrag};
pub use error::ConfigError;
pub use gradient::{GradientBuffer, GradientCache, GradientKind, GradientShape, GradientSpec, GradientStops, HUE_SWEEP};
pub use input::{GestureState, InputQueue, PointerEvent, PointerEventType, Position};
pub use logging::{init_logging, LoggingConfig};
pub use sampler::sample;
pub use screen::{view, Action, ButtonView, ScreenState, ScreenView, SliderView, Slot, SlotView, WheelView};
pub use slider::{track_delta_from_screen, SliderParams, SliderRange, SliderTracker};

#[cfg(target_arch = "wasm32")]
pub use wasm::ColorWheelHandle;
