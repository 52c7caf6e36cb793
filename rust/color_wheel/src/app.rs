//! Application State and Logic
//!
//! This module ties the input queue, drag trackers and screen state
//! together. It's independent of the host toolkit: the host feeds pointer
//! events in, calls `process_input` once per frame and draws `view()`.

use crate::color::Color;
use crate::config::PickerConfig;
use crate::drag::WheelDrag;
use crate::error::ConfigError;
use crate::gradient::{GradientBuffer, GradientCache};
use crate::input::{InputQueue, PointerEvent, PointerEventType};
use crate::screen::{self, Action, ScreenState, ScreenView, Slot};
use crate::slider::{self, SliderTracker};

type ColorCallback = Box<dyn FnMut(Color)>;
type ValueCallback = Box<dyn FnMut(Slot, f32)>;

/// Main application state
pub struct App {
    config: PickerConfig,
    /// Current screen snapshot
    state: ScreenState,
    /// Rasterized wheel, re-rendered on resize
    gradient: GradientCache,
    wheel: WheelDrag,
    brightness: SliderTracker,
    temperature: SliderTracker,
    /// Slot that received the Down of the gesture in progress
    gesture_owner: Option<Slot>,
    input_queue: InputQueue,
    on_color_change: Option<ColorCallback>,
    on_value_change: Option<ValueCallback>,
}

impl App {
    /// Create a new application and render the initial wheel
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = ScreenState::new(&config);
        let mut gradient = GradientCache::new(config.wheel.gradient.clone());
        gradient.get(config.wheel.width, config.wheel.height)?;

        log::info!(
            "Color wheel ready: {}x{} px, density {}",
            config.wheel.width,
            config.wheel.height,
            config.density
        );

        Ok(Self {
            wheel: WheelDrag::new(state.wheel_position),
            brightness: SliderTracker::new(config.brightness),
            temperature: SliderTracker::new(config.temperature),
            gesture_owner: None,
            state,
            gradient,
            input_queue: InputQueue::new(),
            on_color_change: None,
            on_value_change: None,
            config,
        })
    }

    /// Called with every accepted wheel color
    pub fn on_color_change(&mut self, callback: impl FnMut(Color) + 'static) {
        self.on_color_change = Some(Box::new(callback));
    }

    /// Called with every new slider value
    pub fn on_value_change(&mut self, callback: impl FnMut(Slot, f32) + 'static) {
        self.on_value_change = Some(Box::new(callback));
    }

    /// Queue an input event for processing
    pub fn queue_input_event(&mut self, event: PointerEvent) {
        self.input_queue.push_event(event);
    }

    /// Check if there are pending input events
    pub fn has_pending_input(&self) -> bool {
        self.input_queue.has_events()
    }

    /// Process queued input events. Returns how many were handled.
    ///
    /// A gesture belongs to the slot that saw its Down; the rest of it is
    /// dropped if that slot is no longer shown.
    pub fn process_input(&mut self) -> usize {
        let events: Vec<PointerEvent> = self.input_queue.drain_events().collect();
        let mut handled = 0;

        for event in &events {
            let slot = self.state.active_slot;
            if event.event_type == PointerEventType::Down {
                self.gesture_owner = Some(slot);
            } else if self.gesture_owner != Some(slot) {
                log::debug!("Dropping {:?} of a gesture {:?} does not own", event.event_type, slot);
                continue;
            }

            match slot {
                Slot::ColorWheel => self.handle_wheel_event(event),
                Slot::Brightness | Slot::Temperature => self.handle_slider_event(slot, event),
            }

            if matches!(event.event_type, PointerEventType::Up | PointerEventType::Cancel) {
                self.gesture_owner = None;
            }
            handled += 1;
        }

        log::debug!("Processed {} of {} input events", handled, events.len());
        handled
    }

    /// Show a different slot. A gesture in progress is abandoned and a
    /// slider that becomes visible starts over half filled.
    pub fn select_slot(&mut self, slot: Slot) {
        if slot == self.state.active_slot {
            return;
        }

        if self.gesture_owner.take().is_some() {
            self.wheel.cancel();
            self.dispatch(Action::GestureEnded);
        }
        self.dispatch(Action::SelectSlot(slot));

        let (tracker, shown) = match slot {
            Slot::Brightness => (&mut self.brightness, self.state.brightness),
            Slot::Temperature => (&mut self.temperature, self.state.temperature),
            Slot::ColorWheel => return,
        };
        tracker.reset();
        let value = tracker.value();
        if value != shown {
            self.dispatch(Action::SliderMoved { slot, value });
        }
    }

    /// Resize the wheel buffer. The buffer is only re-rendered when the size changes.
    pub fn resize_wheel(&mut self, width: u32, height: u32) -> Result<(), ConfigError> {
        self.gradient.get(width, height)?;
        self.config.wheel.width = width;
        self.config.wheel.height = height;
        log::info!("Wheel resized to {}x{}", width, height);
        Ok(())
    }

    /// Describe the current frame
    pub fn view(&self) -> ScreenView {
        screen::view(&self.state, &self.config)
    }

    pub fn state(&self) -> &ScreenState {
        &self.state
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The wheel buffer the host should display
    pub fn gradient(&self) -> Option<&GradientBuffer> {
        self.gradient.current()
    }

    pub fn slider(&self, slot: Slot) -> Option<&SliderTracker> {
        match slot {
            Slot::Brightness => Some(&self.brightness),
            Slot::Temperature => Some(&self.temperature),
            Slot::ColorWheel => None,
        }
    }

    /// Single entry point for state changes
    fn dispatch(&mut self, action: Action) {
        self.state = self.state.update(action);

        match action {
            Action::ColorPicked { color, .. } => {
                if let Some(callback) = self.on_color_change.as_mut() {
                    callback(color);
                }
            }
            Action::SliderMoved { slot, value } => {
                if let Some(callback) = self.on_value_change.as_mut() {
                    callback(slot, value);
                }
            }
            _ => {}
        }
    }

    fn handle_wheel_event(&mut self, event: &PointerEvent) {
        match event.event_type {
            PointerEventType::Down => self.dispatch(Action::GestureStarted),
            PointerEventType::Move => {}
            PointerEventType::Up => {
                self.wheel.end();
                self.dispatch(Action::GestureEnded);
                return;
            }
            PointerEventType::Cancel => {
                self.wheel.cancel();
                self.dispatch(Action::GestureEnded);
                return;
            }
        }

        let (width, height) = (self.config.wheel.width, self.config.wheel.height);
        let buffer = match self.gradient.get(width, height) {
            Ok(buffer) => buffer,
            Err(err) => {
                log::error!("No wheel buffer to sample: {}", err);
                return;
            }
        };

        let picked = if event.event_type == PointerEventType::Down {
            self.wheel.begin(buffer, event.position)
        } else {
            self.wheel.on_drag_delta(buffer, event.delta)
        };

        if let Some(color) = picked {
            let position = self.wheel.position();
            self.dispatch(Action::ColorPicked { color, position });
        }
    }

    fn handle_slider_event(&mut self, slot: Slot, event: &PointerEvent) {
        match event.event_type {
            PointerEventType::Down => self.dispatch(Action::GestureStarted),
            PointerEventType::Move => {
                let delta_dp = slider::track_delta_from_screen(self.config.px_to_dp(event.delta.y));
                let tracker = if slot == Slot::Brightness {
                    &mut self.brightness
                } else {
                    &mut self.temperature
                };
                let value = tracker.on_drag_delta(delta_dp);
                self.dispatch(Action::SliderMoved { slot, value });
            }
            PointerEventType::Up | PointerEventType::Cancel => {
                self.dispatch(Action::GestureEnded)
            }
        }
    }
}
