//! Screen State
//!
//! The picker screen as an immutable snapshot. Every change goes through
//! [`ScreenState::update`], and [`view`] turns a snapshot into a
//! description of what the host should draw.

use crate::color::Color;
use crate::config::{PickerConfig, ACTIVE_BUTTON_BORDER};
use crate::input::Position;
use crate::magnifier::{self, MagnifierView};

/// The three bulb controls; only one is shown at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Brightness,
    ColorWheel,
    Temperature,
}

impl Slot {
    /// Button order on screen
    pub const ALL: [Slot; 3] = [Slot::Brightness, Slot::ColorWheel, Slot::Temperature];
}

/// State transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// A slot button was pressed
    SelectSlot(Slot),
    /// The wheel accepted a sample at `position` (pixels)
    ColorPicked { color: Color, position: Position },
    /// A slider produced a new value
    SliderMoved { slot: Slot, value: f32 },
    GestureStarted,
    GestureEnded,
}

/// Snapshot of the picker screen
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    pub selected_color: Color,
    pub active_slot: Slot,
    pub brightness: f32,
    pub temperature: f32,
    /// Last accepted wheel position in pixels
    pub wheel_position: Position,
    /// Color under `wheel_position`, once something has been picked
    pub wheel_color: Option<Color>,
    pub magnifier_visible: bool,
}

impl ScreenState {
    /// Initial state: wheel shown, wheel selection centered, sliders half filled
    pub fn new(config: &PickerConfig) -> Self {
        Self {
            selected_color: config.initial_color,
            active_slot: Slot::ColorWheel,
            brightness: config
                .brightness
                .value_for_fill(config.brightness.height_dp / 2.0),
            temperature: config
                .temperature
                .value_for_fill(config.temperature.height_dp / 2.0),
            wheel_position: Position::new(
                config.wheel.width as f32 / 2.0,
                config.wheel.height as f32 / 2.0,
            ),
            wheel_color: None,
            magnifier_visible: false,
        }
    }

    /// Apply `action`, returning the next snapshot
    #[must_use]
    pub fn update(&self, action: Action) -> ScreenState {
        let mut next = self.clone();
        match action {
            Action::SelectSlot(slot) => {
                next.active_slot = slot;
                next.magnifier_visible = false;
            }
            Action::ColorPicked { color, position } => {
                next.selected_color = color;
                next.wheel_color = Some(color);
                next.wheel_position = position;
            }
            Action::SliderMoved { slot, value } => match slot {
                Slot::Brightness => next.brightness = value,
                Slot::Temperature => next.temperature = value,
                Slot::ColorWheel => {
                    log::warn!("Ignoring slider value {} for the color wheel", value);
                }
            },
            Action::GestureStarted => {
                next.magnifier_visible = self.active_slot == Slot::ColorWheel;
            }
            Action::GestureEnded => next.magnifier_visible = false,
        }
        next
    }
}

/// A slot button and its highlight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonView {
    pub slot: Slot,
    pub border: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SliderView {
    pub slot: Slot,
    pub width_dp: f32,
    pub height_dp: f32,
    pub fill_dp: f32,
    /// The gradient spans the whole track; the fill shows its lower part
    pub gradient_bottom: Color,
    pub gradient_top: Color,
    /// Gradient color at the top edge of the fill
    pub fill_edge_color: Color,
    pub value: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WheelView {
    /// Buffer size in pixels
    pub width: u32,
    pub height: u32,
    pub magnifier: Option<MagnifierView>,
}

/// Content of the visible slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotView {
    Slider(SliderView),
    Wheel(WheelView),
}

/// Everything the host draws for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenView {
    pub background: Color,
    pub buttons: [ButtonView; 3],
    pub content: SlotView,
}

/// Describe `state` for drawing
pub fn view(state: &ScreenState, config: &PickerConfig) -> ScreenView {
    let buttons = Slot::ALL.map(|slot| ButtonView {
        slot,
        border: if slot == state.active_slot {
            ACTIVE_BUTTON_BORDER
        } else {
            Color::TRANSPARENT
        },
    });

    let content = match state.active_slot {
        Slot::ColorWheel => {
            let magnifier = state.wheel_color.map(|color| {
                let position = Position::new(
                    config.px_to_dp(state.wheel_position.x),
                    config.px_to_dp(state.wheel_position.y),
                );
                magnifier::layout(position, color, state.magnifier_visible)
            });
            SlotView::Wheel(WheelView {
                width: config.wheel.width,
                height: config.wheel.height,
                magnifier,
            })
        }
        Slot::Brightness | Slot::Temperature => {
            let (params, value) = if state.active_slot == Slot::Brightness {
                (&config.brightness, state.brightness)
            } else {
                (&config.temperature, state.temperature)
            };
            let fill_dp = params.fill_for_value(value);
            // The fill always starts from the selected color
            let gradient_bottom = state.selected_color;
            SlotView::Slider(SliderView {
                slot: state.active_slot,
                width_dp: params.width_dp,
                height_dp: params.height_dp,
                fill_dp,
                gradient_bottom,
                gradient_top: params.gradient_top,
                fill_edge_color: Color::lerp(
                    gradient_bottom,
                    params.gradient_top,
                    fill_dp / params.height_dp,
                ),
                value,
            })
        }
    };

    ScreenView {
        background: state.selected_color,
        buttons,
        content,
    }
}
