//! Drag Tracking
//!
//! Turns a stream of drag deltas into an absolute pointer offset and, for
//! the color wheel, into the color under that offset.

use crate::color::Color;
use crate::gradient::GradientBuffer;
use crate::input::{GestureState, Position};
use crate::sampler;

/// Running sum of drag deltas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragAccumulator {
    offset: Position,
}

impl DragAccumulator {
    pub fn new(origin: Position) -> Self {
        Self { offset: origin }
    }

    /// Add a delta and return the new offset
    pub fn on_drag_delta(&mut self, delta: Position) -> Position {
        self.offset += delta;
        self.offset
    }

    pub fn offset(&self) -> Position {
        self.offset
    }

    /// Restart accumulation from `origin`
    pub fn reset(&mut self, origin: Position) {
        self.offset = origin;
    }
}

/// Drag tracker for the color wheel.
///
/// The accumulator always follows the pointer. The selected position and
/// color only move when the pointer lands on a valid sample, so dragging
/// off the wheel leaves the last good selection in place.
#[derive(Debug, Clone, Default)]
pub struct WheelDrag {
    state: GestureState,
    pointer: DragAccumulator,
    /// Last accepted position
    position: Position,
    /// Last accepted color
    color: Option<Color>,
}

impl WheelDrag {
    /// Tracker with a preselected position and no color yet
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Pointer down at `position`. Returns the sampled color if accepted.
    pub fn begin(&mut self, buffer: &GradientBuffer, position: Position) -> Option<Color> {
        self.state = GestureState::Dragging;
        self.pointer.reset(position);
        self.accept(buffer, position)
    }

    /// Apply a drag delta. Ignored while idle.
    pub fn on_drag_delta(&mut self, buffer: &GradientBuffer, delta: Position) -> Option<Color> {
        if self.state != GestureState::Dragging {
            return None;
        }
        let offset = self.pointer.on_drag_delta(delta);
        self.accept(buffer, offset)
    }

    /// Move the pointer to an absolute position. Ignored while idle.
    pub fn on_position(&mut self, buffer: &GradientBuffer, position: Position) -> Option<Color> {
        if self.state != GestureState::Dragging {
            return None;
        }
        self.pointer.reset(position);
        self.accept(buffer, position)
    }

    /// Pointer released
    pub fn end(&mut self) {
        self.state = GestureState::Idle;
    }

    /// Gesture aborted by the host. The last accepted selection is kept.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    fn accept(&mut self, buffer: &GradientBuffer, position: Position) -> Option<Color> {
        let color = sampler::sample(buffer, position)?;
        self.position = position;
        self.color = Some(color);
        Some(color)
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == GestureState::Dragging
    }

    /// Where the pointer actually is
    pub fn pointer(&self) -> Position {
        self.pointer.offset()
    }

    /// Last accepted position
    pub fn position(&self) -> Position {
        self.position
    }

    /// Last accepted color
    pub fn color(&self) -> Option<Color> {
        self.color
    }
}
