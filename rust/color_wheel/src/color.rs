//! Colors and Pixels
//!
//! This module defines the color type handed to callers and the packed
//! pixel format stored in gradient buffers.
//!
//! Color workflow:
//! - Gradients are evaluated and interpolated in sRGB space
//! - Buffers store 8-bit non-premultiplied RGBA pixels
//! - Sampling widens a pixel back into a `Color` without rounding

/// A non-premultiplied sRGB color with components in 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Build a color from a packed `0xAARRGGBB` value
    pub fn from_argb(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes();
        Rgba8::new(r, g, b, a).into()
    }

    /// Pack into `0xAARRGGBB`
    pub fn to_argb(self) -> u32 {
        let px = Rgba8::from(self);
        u32::from_be_bytes([px.a, px.r, px.g, px.b])
    }

    /// `#RRGGBB` label text, alpha dropped
    pub fn to_hex_rgb(self) -> String {
        let px = Rgba8::from(self);
        format!("#{:02X}{:02X}{:02X}", px.r, px.g, px.b)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Only fully opaque colors count as a valid sample
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }

    /// Linear interpolation between two colors, `t` clamped to 0.0-1.0
    pub fn lerp(a: Color, b: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// WCAG relative luminance (alpha ignored)
    pub fn relative_luminance(&self) -> f32 {
        0.2126 * srgb_to_linear(self.r)
            + 0.7152 * srgb_to_linear(self.g)
            + 0.0722 * srgb_to_linear(self.b)
    }

    /// Black or white, whichever reads better on top of this color
    pub fn contrasting_text(&self) -> Color {
        if self.relative_luminance() > 0.179 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// A packed 8-bit RGBA pixel as stored in a gradient buffer
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }
}

impl From<Rgba8> for Color {
    fn from(px: Rgba8) -> Self {
        Color {
            r: px.r as f32 / 255.0,
            g: px.g as f32 / 255.0,
            b: px.b as f32 / 255.0,
            a: px.a as f32 / 255.0,
        }
    }
}

impl From<Color> for Rgba8 {
    fn from(c: Color) -> Self {
        Rgba8 {
            r: unit_to_u8(c.r),
            g: unit_to_u8(c.g),
            b: unit_to_u8(c.b),
            a: unit_to_u8(c.a),
        }
    }
}

#[inline]
fn unit_to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Convert a single sRGB color component to linear space
///
/// Formula from: https://en.wikipedia.org/wiki/SRGB#From_sRGB_to_CIE_XYZ
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}
