//! Browser binding
//!
//! The page owns the canvas: it draws the wheel pixels returned by
//! `pixels()`, forwards pointer events and receives picks through JS
//! callbacks.

use wasm_bindgen::prelude::*;

use crate::config::{PickerConfig, WheelParams};
use crate::gradient::GradientSpec;
use crate::input::{PointerEvent, Position};
use crate::screen::Slot;
use crate::App;

#[wasm_bindgen]
pub struct ColorWheelHandle {
    app: App,
}

#[wasm_bindgen]
impl ColorWheelHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, density: f32) -> Result<ColorWheelHandle, JsError> {
        let config = PickerConfig {
            wheel: WheelParams {
                width,
                height,
                gradient: GradientSpec::default(),
            },
            density,
            ..Default::default()
        };
        let app = App::new(config)?;
        Ok(Self { app })
    }

    /// `callback(argb: number)` for every accepted wheel color
    #[wasm_bindgen(js_name = onColorChange)]
    pub fn on_color_change(&mut self, callback: js_sys::Function) {
        self.app.on_color_change(move |color| {
            let argb = JsValue::from(color.to_argb());
            if let Err(err) = callback.call1(&JsValue::NULL, &argb) {
                log::error!("onColorChange callback failed: {:?}", err);
            }
        });
    }

    /// `callback(slot: string, value: number)` for every slider move
    #[wasm_bindgen(js_name = onValueChange)]
    pub fn on_value_change(&mut self, callback: js_sys::Function) {
        self.app.on_value_change(move |slot, value| {
            let slot = JsValue::from_str(slot_name(slot));
            if let Err(err) = callback.call2(&JsValue::NULL, &slot, &JsValue::from(value)) {
                log::error!("onValueChange callback failed: {:?}", err);
            }
        });
    }

    #[wasm_bindgen(js_name = pointerDown)]
    pub fn pointer_down(&mut self, x: f32, y: f32, timestamp: f64) {
        self.app
            .queue_input_event(PointerEvent::down(Position::new(x, y)).at_time(timestamp));
    }

    #[wasm_bindgen(js_name = pointerMove)]
    pub fn pointer_move(&mut self, x: f32, y: f32, dx: f32, dy: f32, timestamp: f64) {
        let event = PointerEvent::moved(Position::new(x, y), Position::new(dx, dy));
        self.app.queue_input_event(event.at_time(timestamp));
    }

    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self, x: f32, y: f32, timestamp: f64) {
        self.app
            .queue_input_event(PointerEvent::up(Position::new(x, y)).at_time(timestamp));
    }

    #[wasm_bindgen(js_name = pointerCancel)]
    pub fn pointer_cancel(&mut self) {
        self.app.queue_input_event(PointerEvent::cancel());
    }

    /// Process queued events; call once per animation frame
    pub fn frame(&mut self) -> usize {
        self.app.process_input()
    }

    #[wasm_bindgen(js_name = selectSlot)]
    pub fn select_slot(&mut self, name: &str) -> Result<(), JsError> {
        let slot = match name {
            "brightness" => Slot::Brightness,
            "color" => Slot::ColorWheel,
            "temperature" => Slot::Temperature,
            other => return Err(JsError::new(&format!("unknown slot '{}'", other))),
        };
        self.app.select_slot(slot);
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsError> {
        self.app.resize_wheel(width, height)?;
        Ok(())
    }

    /// Wheel pixels as RGBA bytes, suitable for `ImageData`
    pub fn pixels(&self) -> Vec<u8> {
        self.app
            .gradient()
            .map(|buffer| buffer.as_bytes().to_vec())
            .unwrap_or_default()
    }

    /// `#RRGGBB` of the current selection
    #[wasm_bindgen(js_name = selectedHex)]
    pub fn selected_hex(&self) -> String {
        self.app.state().selected_color.to_hex_rgb()
    }
}

fn slot_name(slot: Slot) -> &'static str {
    match slot {
        Slot::Brightness => "brightness",
        Slot::ColorWheel => "color",
        Slot::Temperature => "temperature",
    }
}

/// WASM entry point - called when the module is loaded
#[wasm_bindgen(start)]
pub fn wasm_start() {
    crate::init_logging(crate::LoggingConfig::default());
    log::info!("Color wheel WASM module started");
}
