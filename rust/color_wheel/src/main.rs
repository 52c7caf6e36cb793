//! Color Wheel Demo (Desktop)
//!
//! Plays a scripted drag session against the picker and logs what a host
//! would receive. For WASM/web builds, the entry point is in wasm.rs.

use color_wheel::{init_logging, App, LoggingConfig, PickerConfig, PointerEvent, Position, Slot};

fn main() {
    init_logging(LoggingConfig::default());

    log::info!("Starting color wheel demo");

    let mut app = match App::new(PickerConfig::default()) {
        Ok(app) => app,
        Err(err) => {
            log::error!("Invalid picker config: {}", err);
            std::process::exit(1);
        }
    };

    app.on_color_change(|color| log::info!("Picked {}", color.to_hex_rgb()));
    app.on_value_change(|slot, value| log::info!("{:?} -> {:.1}", slot, value));

    // Sweep around the wheel center, then off the edge
    let center = Position::new(250.0, 400.0);
    app.queue_input_event(PointerEvent::down(center + Position::new(200.0, 0.0)));
    for delta in [
        Position::new(-200.0, 200.0),
        Position::new(-200.0, -200.0),
        Position::new(200.0, -200.0),
        Position::new(0.0, -500.0),
    ] {
        app.queue_input_event(PointerEvent::moved(Position::ZERO, delta));
    }
    app.queue_input_event(PointerEvent::up(Position::ZERO));
    app.process_input();

    for slot in [Slot::Brightness, Slot::Temperature] {
        app.select_slot(slot);
        app.queue_input_event(PointerEvent::down(Position::ZERO));
        app.queue_input_event(PointerEvent::moved(Position::ZERO, Position::new(0.0, -60.0)));
        app.queue_input_event(PointerEvent::moved(Position::ZERO, Position::new(0.0, -200.0)));
        app.queue_input_event(PointerEvent::up(Position::ZERO));
        app.process_input();
    }

    let state = app.state();
    log::info!(
        "Final: color {} brightness {:.1} temperature {:.1}",
        state.selected_color.to_hex_rgb(),
        state.brightness,
        state.temperature
    );
}
