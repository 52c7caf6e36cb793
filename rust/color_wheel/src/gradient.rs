//! Gradient Buffers
//!
//! This module rasterizes hue gradients into immutable CPU pixel buffers.
//! The buffer is what the sampler reads from, so the host only needs to
//! display the same bytes to keep what it draws and what gets picked in sync.

use crate::color::{Color, Rgba8};
use crate::error::ConfigError;

/// Red → magenta → blue → cyan → green → yellow → red
pub const HUE_SWEEP: [Color; 7] = [
    Color::RED,
    Color::MAGENTA,
    Color::BLUE,
    Color::CYAN,
    Color::GREEN,
    Color::YELLOW,
    Color::RED,
];

/// How the gradient parameter `t` is derived from a pixel position
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GradientKind {
    /// Varies by angle around the buffer center. 0° points along +x and
    /// angles grow clockwise on screen (y down).
    ///
    /// With the default 0° start the first stop lies on the ray to the right
    /// of the center, so the top-left pixel of a square buffer is 225° into
    /// the sweep (between cyan and green for [`HUE_SWEEP`]). Use a start
    /// angle of 225° to put the first stop in that corner.
    Sweep { start_angle_degrees: f32 },
    /// Varies by distance from the buffer center. The last stop is reached
    /// at `radius_fraction` of half the larger dimension.
    Radial { radius_fraction: f32 },
}

impl Default for GradientKind {
    fn default() -> Self {
        Self::Sweep {
            start_angle_degrees: 0.0,
        }
    }
}

/// Which pixels of the buffer get painted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientShape {
    /// Every pixel is painted opaquely
    #[default]
    Rect,
    /// Only the largest centered disc is painted, with an anti-aliased rim.
    /// Everything outside stays transparent.
    Circle,
}

/// Color stops of a gradient
#[derive(Debug, Clone, PartialEq)]
pub struct GradientStops {
    colors: Vec<Color>,
    /// Explicit stop positions; evenly spaced when `None`
    positions: Option<Vec<f32>>,
}

impl GradientStops {
    /// Evenly spaced stops
    pub fn even(colors: impl Into<Vec<Color>>) -> Self {
        Self {
            colors: colors.into(),
            positions: None,
        }
    }

    /// Stops at explicit positions in 0.0-1.0
    pub fn at(colors: impl Into<Vec<Color>>, positions: impl Into<Vec<f32>>) -> Self {
        Self {
            colors: colors.into(),
            positions: Some(positions.into()),
        }
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.colors.len() < 2 {
            return Err(ConfigError::TooFewStops(self.colors.len()));
        }
        if let Some(positions) = &self.positions {
            if positions.len() != self.colors.len() {
                return Err(ConfigError::StopCountMismatch {
                    colors: self.colors.len(),
                    positions: positions.len(),
                });
            }
            let in_range = positions.iter().all(|p| (0.0..=1.0).contains(p));
            let increasing = positions.windows(2).all(|w| w[0] < w[1]);
            if !in_range || !increasing {
                return Err(ConfigError::InvalidStopPositions);
            }
        }
        Ok(())
    }

    fn position(&self, index: usize) -> f32 {
        match &self.positions {
            Some(positions) => positions[index],
            None => index as f32 / (self.colors.len() - 1) as f32,
        }
    }

    /// Color at gradient parameter `t` (clamped to 0.0-1.0).
    /// Assumes the stops have been validated.
    pub fn color_at(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let last = self.colors.len() - 1;

        if t <= self.position(0) {
            return self.colors[0];
        }
        if t >= self.position(last) {
            return self.colors[last];
        }

        for i in 0..last {
            let (start, end) = (self.position(i), self.position(i + 1));
            if t <= end {
                let local_t = (t - start) / (end - start);
                return Color::lerp(self.colors[i], self.colors[i + 1], local_t);
            }
        }
        self.colors[last]
    }
}

impl Default for GradientStops {
    fn default() -> Self {
        Self::even(HUE_SWEEP)
    }
}

/// Everything needed to rasterize a gradient buffer, apart from its size
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradientSpec {
    pub kind: GradientKind,
    pub stops: GradientStops,
    pub shape: GradientShape,
}

impl GradientSpec {
    /// The hue wheel: a sweep through [`HUE_SWEEP`] starting at `start_angle_degrees`
    pub fn hue_sweep(start_angle_degrees: f32) -> Self {
        Self {
            kind: GradientKind::Sweep {
                start_angle_degrees,
            },
            ..Default::default()
        }
    }

    pub fn with_shape(mut self, shape: GradientShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let GradientKind::Radial { radius_fraction } = self.kind {
            if !(radius_fraction > 0.0) {
                return Err(ConfigError::InvalidRadius(radius_fraction));
            }
        }
        self.stops.validate()
    }

    /// Unpainted color at a point, before shape coverage is applied
    fn color_at(&self, x: f32, y: f32, width: f32, height: f32) -> Color {
        let (cx, cy) = (width / 2.0, height / 2.0);
        let (dx, dy) = (x - cx, y - cy);

        let t = match self.kind {
            GradientKind::Sweep {
                start_angle_degrees,
            } => {
                let degrees = dy.atan2(dx).to_degrees() - start_angle_degrees;
                let t = degrees.rem_euclid(360.0) / 360.0;
                // rem_euclid can round up to exactly 360 for tiny negative inputs
                if t >= 1.0 {
                    0.0
                } else {
                    t
                }
            }
            GradientKind::Radial { radius_fraction } => {
                let radius = radius_fraction * width.max(height) / 2.0;
                (dx * dx + dy * dy).sqrt() / radius
            }
        };

        self.stops.color_at(t)
    }

    /// Fraction of the pixel centered at (x, y) covered by the shape
    fn coverage(&self, x: f32, y: f32, width: f32, height: f32) -> f32 {
        match self.shape {
            GradientShape::Rect => 1.0,
            GradientShape::Circle => {
                let (dx, dy) = (x - width / 2.0, y - height / 2.0);
                let radius = width.min(height) / 2.0;
                let distance = (dx * dx + dy * dy).sqrt();
                (radius - distance + 0.5).clamp(0.0, 1.0)
            }
        }
    }
}

/// An immutable W×H grid of pixels painted with a gradient
#[derive(Debug, Clone, PartialEq)]
pub struct GradientBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl GradientBuffer {
    /// Rasterize `spec` into a new buffer, evaluating each pixel at its center
    pub fn render(width: u32, height: u32, spec: &GradientSpec) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBuffer { width, height });
        }
        spec.validate()?;

        let (w, h) = (width as f32, height as f32);
        let mut pixels = Vec::with_capacity(width as usize * height as usize);

        for y in 0..height {
            for x in 0..width {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                let coverage = spec.coverage(px, py, w, h);
                let pixel = if coverage <= 0.0 {
                    Rgba8::TRANSPARENT
                } else {
                    let color = spec.color_at(px, py, w, h);
                    Rgba8::from(color.with_alpha(color.a * coverage))
                };
                pixels.push(pixel);
            }
        }

        log::debug!("Rendered {}x{} gradient buffer ({:?})", width, height, spec.kind);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at integer coordinates, `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Row-major RGBA bytes, ready to upload as an image
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }
}

/// Holds the most recently rendered buffer and re-renders it only when the
/// requested dimensions or the spec change
#[derive(Debug, Clone, Default)]
pub struct GradientCache {
    spec: GradientSpec,
    buffer: Option<GradientBuffer>,
    render_count: usize,
}

impl GradientCache {
    pub fn new(spec: GradientSpec) -> Self {
        Self {
            spec,
            buffer: None,
            render_count: 0,
        }
    }

    pub fn spec(&self) -> &GradientSpec {
        &self.spec
    }

    /// Replace the spec, dropping the cached buffer if it differs
    pub fn set_spec(&mut self, spec: GradientSpec) {
        if spec != self.spec {
            self.spec = spec;
            self.buffer = None;
        }
    }

    /// Buffer for the requested size, rendering it if needed
    pub fn get(&mut self, width: u32, height: u32) -> Result<&GradientBuffer, ConfigError> {
        let stale = match &self.buffer {
            Some(buffer) => buffer.width != width || buffer.height != height,
            None => true,
        };

        if stale {
            let buffer = GradientBuffer::render(width, height, &self.spec)?;
            self.render_count += 1;
            self.buffer = Some(buffer);
        }

        // Either still cached or just rendered above
        match &self.buffer {
            Some(buffer) => Ok(buffer),
            None => Err(ConfigError::EmptyBuffer { width, height }),
        }
    }

    /// The cached buffer, if one has been rendered
    pub fn current(&self) -> Option<&GradientBuffer> {
        self.buffer.as_ref()
    }

    /// How many times a buffer has been rasterized
    pub fn render_count(&self) -> usize {
        self.render_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near_red(px: Rgba8) {
        assert_eq!(px.r, 255, "{:?}", px);
        assert_eq!(px.g, 0, "{:?}", px);
        assert!(px.b <= 3, "{:?}", px);
    }

    #[test]
    fn test_even_stops() {
        let stops = GradientStops::default();
        assert_eq!(stops.color_at(0.0), Color::RED);
        assert_eq!(stops.color_at(1.0), Color::RED);
        assert_eq!(Rgba8::from(stops.color_at(3.0 / 6.0)), Rgba8::from(Color::CYAN));

        // Halfway between blue and cyan
        let c = stops.color_at(2.5 / 6.0);
        assert!((c.g - 0.5).abs() < 1e-4);
        assert_eq!(c.b, 1.0);
    }

    #[test]
    fn test_explicit_stops_clamp_outside() {
        let stops = GradientStops::at(vec![Color::BLACK, Color::WHITE], vec![0.25, 0.75]);
        stops.validate().unwrap();
        assert_eq!(stops.color_at(0.1), Color::BLACK);
        assert_eq!(stops.color_at(0.9), Color::WHITE);
        assert!((stops.color_at(0.5).r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_stop_validation() {
        assert_eq!(
            GradientStops::even(vec![Color::RED]).validate(),
            Err(ConfigError::TooFewStops(1))
        );
        assert_eq!(
            GradientStops::at(vec![Color::RED, Color::BLUE], vec![0.5]).validate(),
            Err(ConfigError::StopCountMismatch {
                colors: 2,
                positions: 1
            })
        );
        assert_eq!(
            GradientStops::at(vec![Color::RED, Color::BLUE], vec![0.6, 0.4]).validate(),
            Err(ConfigError::InvalidStopPositions)
        );
    }

    #[test]
    fn test_sweep_starts_at_three_oclock() {
        let buffer = GradientBuffer::render(100, 100, &GradientSpec::default()).unwrap();
        assert_near_red(buffer.pixel(99, 50).unwrap());

        // A quarter turn clockwise (straight down) is halfway between magenta and blue
        let below = buffer.pixel(50, 99).unwrap();
        assert_eq!(below.b, 255);
        assert!(below.r > 100 && below.r < 155, "{:?}", below);
    }

    #[test]
    fn test_default_sweep_corner_is_cyan_green() {
        let buffer = GradientBuffer::render(100, 100, &GradientSpec::default()).unwrap();
        let corner = buffer.pixel(0, 0).unwrap();
        // 225° into the sweep: three quarters of the way from cyan to green
        assert_eq!((corner.r, corner.g), (0, 255));
        assert!(corner.b > 54 && corner.b < 74, "{:?}", corner);
    }

    #[test]
    fn test_sweep_start_angle_rotates_origin() {
        let buffer = GradientBuffer::render(100, 100, &GradientSpec::hue_sweep(225.0)).unwrap();
        assert_near_red(buffer.pixel(0, 0).unwrap());
    }

    #[test]
    fn test_rect_is_fully_opaque() {
        let buffer = GradientBuffer::render(31, 17, &GradientSpec::default()).unwrap();
        assert_eq!(buffer.pixels().len(), 31 * 17);
        assert!(buffer.pixels().iter().all(Rgba8::is_opaque));
        assert_eq!(buffer.as_bytes().len(), 31 * 17 * 4);
    }

    #[test]
    fn test_circle_leaves_corners_transparent() {
        let spec = GradientSpec::default().with_shape(GradientShape::Circle);
        let buffer = GradientBuffer::render(64, 64, &spec).unwrap();
        assert_eq!(buffer.pixel(0, 0), Some(Rgba8::TRANSPARENT));
        assert!(buffer.pixel(32, 32).unwrap().is_opaque());

        // The rim has partially covered pixels
        assert!(buffer.pixels().iter().any(|px| px.a > 0 && px.a < 255));
    }

    #[test]
    fn test_radial_center_is_first_stop() {
        let spec = GradientSpec {
            kind: GradientKind::Radial {
                radius_fraction: 0.95,
            },
            ..Default::default()
        };
        let buffer = GradientBuffer::render(101, 101, &spec).unwrap();
        let center = buffer.pixel(50, 50).unwrap();
        assert_eq!((center.r, center.g), (255, 0));
        assert!(center.b <= 3);
    }

    #[test]
    fn test_invalid_buffers() {
        assert_eq!(
            GradientBuffer::render(0, 10, &GradientSpec::default()),
            Err(ConfigError::EmptyBuffer {
                width: 0,
                height: 10
            })
        );
        let spec = GradientSpec {
            kind: GradientKind::Radial {
                radius_fraction: 0.0,
            },
            ..Default::default()
        };
        assert_eq!(
            GradientBuffer::render(10, 10, &spec),
            Err(ConfigError::InvalidRadius(0.0))
        );
    }

    #[test]
    fn test_pixel_out_of_bounds() {
        let buffer = GradientBuffer::render(4, 3, &GradientSpec::default()).unwrap();
        assert!(buffer.pixel(3, 2).is_some());
        assert!(buffer.pixel(4, 0).is_none());
        assert!(buffer.pixel(0, 3).is_none());
    }

    #[test]
    fn test_cache_reuses_until_resize() {
        let mut cache = GradientCache::new(GradientSpec::default());
        assert!(cache.current().is_none());

        cache.get(20, 20).unwrap();
        cache.get(20, 20).unwrap();
        assert_eq!(cache.render_count(), 1);

        let resized = cache.get(30, 20).unwrap();
        assert_eq!((resized.width(), resized.height()), (30, 20));
        assert_eq!(cache.render_count(), 2);

        cache.set_spec(GradientSpec::default());
        cache.get(30, 20).unwrap();
        assert_eq!(cache.render_count(), 2);

        cache.set_spec(GradientSpec::hue_sweep(90.0));
        cache.get(30, 20).unwrap();
        assert_eq!(cache.render_count(), 3);
    }
}
