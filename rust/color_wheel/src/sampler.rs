//! Gradient Sampler
//!
//! Maps a pointer position to the color of the gradient pixel under it.

use crate::color::Color;
use crate::gradient::GradientBuffer;
use crate::input::Position;

/// Color of the pixel under `position`, or `None` when the position is
/// outside the buffer or the pixel is not fully opaque.
///
/// The position is floored to pixel coordinates and negative coordinates
/// are clamped to zero.
pub fn sample(buffer: &GradientBuffer, position: Position) -> Option<Color> {
    let x = position.x.floor().max(0.0) as u32;
    let y = position.y.floor().max(0.0) as u32;

    buffer
        .pixel(x, y)
        .filter(|px| px.is_opaque())
        .map(Color::from)
}
