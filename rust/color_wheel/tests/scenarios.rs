//! End-to-end scenarios for the picker.

use color_wheel::{
    sample, App, Color, GradientBuffer, GradientSpec, PickerConfig, PointerEvent, Position,
    SliderParams, SliderTracker, Slot, SlotView, WheelDrag,
};

#[test]
fn sweep_corner_and_outside() {
    // Start the sweep at the top-left corner so (0, 0) lands on the first stop
    let buffer = GradientBuffer::render(100, 100, &GradientSpec::hue_sweep(225.0)).unwrap();

    let corner = sample(&buffer, Position::new(0.0, 0.0)).expect("corner is opaque");
    assert_eq!(corner.r, 1.0);
    assert_eq!(corner.g, 0.0);
    assert!(corner.b < 0.01, "{:?}", corner);

    assert_eq!(sample(&buffer, Position::new(150.0, 150.0)), None);
}

#[test]
fn default_sweep_starts_red_on_the_right() {
    let buffer = GradientBuffer::render(100, 100, &GradientSpec::default()).unwrap();
    let right = sample(&buffer, Position::new(99.0, 50.0)).unwrap();
    assert_eq!((right.r, right.g), (1.0, 0.0));
    assert!(right.b < 0.02);
}

#[test]
fn slider_drag_to_the_top() {
    let mut slider = SliderTracker::new(SliderParams::default());
    assert_eq!(slider.fill(), 120.0);

    slider.on_drag_delta(60.0);
    let value = slider.on_drag_delta(60.0);

    assert_eq!(slider.fill(), 240.0);
    assert_eq!(value, 0.0);
}

#[test]
fn wheel_keeps_last_good_color_when_dragged_off() {
    let buffer = GradientBuffer::render(100, 100, &GradientSpec::default()).unwrap();
    let mut drag = WheelDrag::default();

    let picked = drag.begin(&buffer, Position::new(30.0, 30.0));
    assert!(picked.is_some());

    // (50, 50), (70, 70), (90, 90) are on the wheel; the rest are past its edge
    let mut accepted = Vec::new();
    for _ in 0..6 {
        if let Some(color) = drag.on_drag_delta(&buffer, Position::new(20.0, 20.0)) {
            accepted.push(color);
        }
    }
    assert_eq!(accepted.len(), 3);
    assert_eq!(drag.pointer(), Position::new(150.0, 150.0));
    assert_eq!(drag.position(), Position::new(90.0, 90.0));
    assert_eq!(drag.color(), accepted.last().copied());
    drag.end();
}

#[test]
fn full_screen_session() {
    let mut app = App::new(PickerConfig::default()).unwrap();
    let view = app.view();
    assert!(matches!(view.content, SlotView::Wheel(_)));
    assert_eq!(view.background, Color::from_argb(0xFF83EB34));

    app.queue_input_event(PointerEvent::down(Position::new(450.0, 400.0)));
    app.queue_input_event(PointerEvent::moved(Position::ZERO, Position::new(-400.0, 0.0)));
    app.process_input();

    let picked = app.state().selected_color;
    assert_ne!(picked, Color::from_argb(0xFF83EB34));

    match app.view().content {
        SlotView::Wheel(wheel) => {
            let magnifier = wheel.magnifier.unwrap();
            assert!(magnifier.visible);
            assert_eq!(magnifier.label, picked.to_hex_rgb());
        }
        other => panic!("expected wheel, got {:?}", other),
    }

    app.queue_input_event(PointerEvent::up(Position::ZERO));
    app.select_slot(Slot::Brightness);
    app.process_input();

    match app.view().content {
        SlotView::Slider(slider) => {
            assert_eq!(slider.gradient_bottom, picked);
            assert_eq!(slider.gradient_top, Color::WHITE);
            assert_eq!(slider.fill_edge_color, Color::lerp(picked, Color::WHITE, 0.5));
            assert_eq!(slider.value, 50.0);
        }
        other => panic!("expected slider, got {:?}", other),
    }
}
