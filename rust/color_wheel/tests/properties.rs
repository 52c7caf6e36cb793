//! Property tests for sampling and drag invariants.
//!
//! Uses proptest to verify:
//! 1. Opaque pixels inside the buffer sample to their exact color
//! 2. Coordinates at or beyond width/height sample to nothing
//! 3. Translucent pixels sample to nothing regardless of RGB
//! 4. Drag accumulation does not depend on how deltas are split
//! 5. Slider values are non-increasing in the fill and stay in range

use color_wheel::{
    sample, Color, DragAccumulator, GradientBuffer, GradientKind, GradientSpec, GradientStops,
    Position, SliderParams, SliderRange, SliderTracker,
};
use proptest::prelude::*;

const SIZE: u32 = 48;

fn wheel() -> GradientBuffer {
    GradientBuffer::render(SIZE, SIZE, &GradientSpec::default()).unwrap()
}

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_inside() -> impl Strategy<Value = Position> {
    (0.0..SIZE as f32, 0.0..SIZE as f32).prop_map(|(x, y)| Position::new(x, y))
}

fn arb_delta() -> impl Strategy<Value = Position> {
    // Whole numbers keep f32 sums exact
    (-1000i32..1000, -1000i32..1000).prop_map(|(x, y)| Position::new(x as f32, y as f32))
}

fn arb_range() -> impl Strategy<Value = SliderRange> {
    (-100.0f32..100.0, 1.0f32..200.0).prop_map(|(min, span)| SliderRange::new(min, min + span))
}

// ── 1-3. Sampling ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn opaque_pixels_sample_exactly(position in arb_inside()) {
        let buffer = wheel();
        let px = buffer
            .pixel(position.x.floor() as u32, position.y.floor() as u32)
            .unwrap();
        prop_assert!(px.is_opaque());
        prop_assert_eq!(sample(&buffer, position), Some(Color::from(px)));
    }

    #[test]
    fn outside_samples_nothing(
        beyond in 0.0f32..1000.0,
        other in 0.0f32..SIZE as f32,
        horizontal in any::<bool>(),
    ) {
        let buffer = wheel();
        let far = SIZE as f32 + beyond;
        let position = if horizontal {
            Position::new(far, other)
        } else {
            Position::new(other, far)
        };
        prop_assert_eq!(sample(&buffer, position), None);
    }

    #[test]
    fn translucent_samples_nothing(
        r in 0.0f32..=1.0,
        g in 0.0f32..=1.0,
        b in 0.0f32..=1.0,
        alpha in 0.0f32..0.99,
        position in arb_inside(),
    ) {
        let color = Color::new(r, g, b, alpha);
        let spec = GradientSpec {
            kind: GradientKind::Radial { radius_fraction: 1.0 },
            stops: GradientStops::even(vec![color, color]),
            ..Default::default()
        };
        let buffer = GradientBuffer::render(SIZE, SIZE, &spec).unwrap();
        prop_assert_eq!(sample(&buffer, position), None);
    }
}

// ── 4. Drag accumulation ─────────────────────────────────────────────

proptest! {
    #[test]
    fn split_deltas_match_combined(d1 in arb_delta(), d2 in arb_delta(), origin in arb_delta()) {
        let mut split = DragAccumulator::new(origin);
        split.on_drag_delta(d1);
        split.on_drag_delta(d2);

        let mut combined = DragAccumulator::new(origin);
        combined.on_drag_delta(d1 + d2);

        prop_assert_eq!(split.offset(), combined.offset());
    }

    #[test]
    fn any_delta_sequence_sums(deltas in prop::collection::vec(arb_delta(), 0..20)) {
        let mut acc = DragAccumulator::default();
        let mut total = Position::ZERO;
        for delta in &deltas {
            acc.on_drag_delta(*delta);
            total += *delta;
        }
        prop_assert_eq!(acc.offset(), total);
    }
}

// ── 5. Slider mapping ────────────────────────────────────────────────

proptest! {
    #[test]
    fn slider_value_non_increasing(
        range in arb_range(),
        height in 10.0f32..1000.0,
        a in 0.0f32..=1.0,
        b in 0.0f32..=1.0,
    ) {
        let params = SliderParams { height_dp: height, range, ..Default::default() };
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(params.value_for_fill(low * height) >= params.value_for_fill(high * height));
    }

    #[test]
    fn slider_value_stays_in_range(
        range in arb_range(),
        deltas in prop::collection::vec(-500.0f32..500.0, 1..30),
    ) {
        let mut slider = SliderTracker::new(SliderParams { range, ..Default::default() });
        for delta in deltas {
            let value = slider.on_drag_delta(delta);
            prop_assert!(slider.fill() >= 0.0 && slider.fill() <= slider.params.height_dp);
            prop_assert!(value >= range.min - 1e-3 && value <= range.max + 1e-3,
                "{} outside {:?}", value, range);
        }
    }
}
