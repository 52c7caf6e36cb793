//! Input Event Handling
//!
//! This module handles pointer input events (mouse, touch) and queues them
//! for processing on the next frame. Only a single pointer is tracked: a
//! second contact while a gesture is active is dropped.

use std::collections::VecDeque;
use std::ops::{Add, AddAssign};

/// A 2D coordinate or displacement in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ZERO: Position = Position::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl From<[f32; 2]> for Position {
    fn from([x, y]: [f32; 2]) -> Self {
        Position::new(x, y)
    }
}

/// A pointer input event
#[derive(Debug, Clone)]
pub struct PointerEvent {
    /// Position in widget space (pixels from top-left)
    pub position: Position,
    /// Displacement since the previous event of the same gesture
    pub delta: Position,
    /// Timestamp in milliseconds since some reference point
    pub timestamp: f64,
    /// Type of event (down, move, up, cancel)
    pub event_type: PointerEventType,
}

impl PointerEvent {
    pub fn down(position: Position) -> Self {
        Self {
            position,
            delta: Position::ZERO,
            timestamp: 0.0,
            event_type: PointerEventType::Down,
        }
    }

    pub fn moved(position: Position, delta: Position) -> Self {
        Self {
            position,
            delta,
            timestamp: 0.0,
            event_type: PointerEventType::Move,
        }
    }

    pub fn up(position: Position) -> Self {
        Self {
            position,
            delta: Position::ZERO,
            timestamp: 0.0,
            event_type: PointerEventType::Up,
        }
    }

    pub fn cancel() -> Self {
        Self {
            position: Position::ZERO,
            delta: Position::ZERO,
            timestamp: 0.0,
            event_type: PointerEventType::Cancel,
        }
    }

    pub fn at_time(mut self, timestamp: f64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Type of pointer event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventType {
    /// Pointer pressed (start of gesture)
    Down,
    /// Pointer moved while pressed (continue gesture)
    Move,
    /// Pointer released (end of gesture)
    Up,
    /// Host aborted the gesture
    Cancel,
}

/// Whether a gesture is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

impl GestureState {
    /// Next state after `event_type`. Returns `None` when the event does
    /// not apply in the current state and should be ignored.
    pub fn transition(self, event_type: PointerEventType) -> Option<GestureState> {
        match (self, event_type) {
            (GestureState::Idle, PointerEventType::Down) => Some(GestureState::Dragging),
            (GestureState::Dragging, PointerEventType::Move) => Some(GestureState::Dragging),
            (GestureState::Dragging, PointerEventType::Up | PointerEventType::Cancel) => {
                Some(GestureState::Idle)
            }
            _ => None,
        }
    }
}

/// Queue for input events that coalesces events between frames
pub struct InputQueue {
    /// Pending events to process
    events: VecDeque<PointerEvent>,
    /// Gesture state as seen by the queue
    gesture: GestureState,
    /// Last known pointer position
    last_position: Option<Position>,
}

impl InputQueue {
    /// Create a new empty input queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
            gesture: GestureState::Idle,
            last_position: None,
        }
    }

    /// Add an event to the queue. Events that make no sense in the current
    /// gesture state (moves while idle, a second down) are dropped.
    pub fn push_event(&mut self, event: PointerEvent) {
        let event_type = event.event_type;

        let Some(next) = self.gesture.transition(event_type) else {
            if event_type != PointerEventType::Move {
                log::warn!("Ignoring {:?} while {:?}", event_type, self.gesture);
            }
            return;
        };

        self.gesture = next;
        if event_type != PointerEventType::Cancel {
            self.last_position = Some(event.position);
        }

        self.events.push_back(event);
        log::debug!(
            "Input event queued: {:?} (queue size: {})",
            event_type,
            self.events.len()
        );
    }

    /// Drain all pending events for processing
    pub fn drain_events(&mut self) -> impl Iterator<Item = PointerEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }

    /// Check if a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        self.gesture == GestureState::Dragging
    }

    /// Get the last known pointer position
    pub fn last_position(&self) -> Option<Position> {
        self.last_position
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_transitions() {
        use GestureState::*;
        use PointerEventType::*;

        assert_eq!(Idle.transition(Down), Some(Dragging));
        assert_eq!(Dragging.transition(Move), Some(Dragging));
        assert_eq!(Dragging.transition(Up), Some(Idle));
        assert_eq!(Dragging.transition(Cancel), Some(Idle));

        assert_eq!(Idle.transition(Move), None);
        assert_eq!(Idle.transition(Up), None);
        assert_eq!(Dragging.transition(Down), None);
    }

    #[test]
    fn test_moves_while_idle_are_dropped() {
        let mut queue = InputQueue::new();
        queue.push_event(PointerEvent::moved(Position::new(1.0, 1.0), Position::new(1.0, 1.0)));
        assert!(!queue.has_events());
        assert_eq!(queue.last_position(), None);
    }

    #[test]
    fn test_single_pointer_session() {
        let mut queue = InputQueue::new();
        queue.push_event(PointerEvent::down(Position::new(5.0, 5.0)));
        queue.push_event(PointerEvent::down(Position::new(50.0, 50.0)));
        queue.push_event(PointerEvent::moved(Position::new(6.0, 7.0), Position::new(1.0, 2.0)));
        assert!(queue.is_dragging());
        assert_eq!(queue.last_position(), Some(Position::new(6.0, 7.0)));

        queue.push_event(PointerEvent::cancel());
        assert!(!queue.is_dragging());
        // Cancel carries no position of its own
        assert_eq!(queue.last_position(), Some(Position::new(6.0, 7.0)));

        let types: Vec<_> = queue.drain_events().map(|e| e.event_type).collect();
        assert_eq!(
            types,
            vec![
                PointerEventType::Down,
                PointerEventType::Move,
                PointerEventType::Cancel
            ]
        );
        assert!(!queue.has_events());
    }

    #[test]
    fn test_position_addition() {
        let mut p = Position::new(1.0, 2.0);
        p += Position::new(0.5, -1.0);
        assert_eq!(p, Position::new(1.5, 1.0));
        assert_eq!(p + Position::ZERO, p);
        assert_eq!(Position::from([3.0, 4.0]), Position::new(3.0, 4.0));
    }
}
