//! Magnifier layout
//!
//! The magnifier floats above the selected point of the wheel: a label with
//! the hex code on top and a selection circle centered on the pointer.

use crate::color::Color;
use crate::input::Position;

pub const MAGNIFIER_WIDTH_DP: f32 = 60.0;
pub const MAGNIFIER_HEIGHT_DP: f32 = 100.0;
pub const MAGNIFIER_LABEL_HEIGHT_DP: f32 = 50.0;
pub const SELECTION_CIRCLE_DIAMETER_DP: f32 = 30.0;

/// What the host needs to draw the magnifier
#[derive(Debug, Clone, PartialEq)]
pub struct MagnifierView {
    /// Top-left corner of the magnifier in dp
    pub offset: Position,
    pub width: f32,
    pub height: f32,
    pub label_height: f32,
    pub circle_diameter: f32,
    pub color: Color,
    /// `#RRGGBB`
    pub label: String,
    pub label_text_color: Color,
    /// Shown only while a gesture is in progress
    pub visible: bool,
}

/// Lay out the magnifier for a selection at `position` (dp)
pub fn layout(position: Position, color: Color, visible: bool) -> MagnifierView {
    let offset = Position::new(
        position.x - MAGNIFIER_WIDTH_DP / 2.0,
        // Align the selection circle's center with the pointer
        position.y - (MAGNIFIER_HEIGHT_DP - SELECTION_CIRCLE_DIAMETER_DP / 2.0),
    );

    MagnifierView {
        offset,
        width: MAGNIFIER_WIDTH_DP,
        height: MAGNIFIER_HEIGHT_DP,
        label_height: MAGNIFIER_LABEL_HEIGHT_DP,
        circle_diameter: SELECTION_CIRCLE_DIAMETER_DP,
        color,
        label: color.to_hex_rgb(),
        label_text_color: color.contrasting_text(),
        visible,
    }
}
