//! Drawing surface abstraction
//!
//! The field renders through this trait so the same tick runs against a
//! browser canvas or a headless counter.

use glam::DVec2;

use crate::theme::Rgba;

/// Pixel dimensions of a drawing surface
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whole-pixel size, matching what a canvas backing store can hold
    pub fn rounded(&self) -> Self {
        Self {
            width: self.width.max(0.0).round(),
            height: self.height.max(0.0).round(),
        }
    }

    /// True when nothing can be visible (zero, negative or NaN extent)
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// 2D drawing target for one frame
pub trait Surface {
    /// Clear the whole surface
    fn clear(&mut self, size: SurfaceSize);

    /// Straight line segment
    fn line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: f64);

    /// Filled disc with a radial gradient from `color` at the centre to
    /// fully transparent at `radius`
    fn glow(&mut self, center: DVec2, radius: f64, color: Rgba);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self, size: SurfaceSize) {
        (**self).clear(size);
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: f64) {
        (**self).line(from, to, color, width);
    }

    fn glow(&mut self, center: DVec2, radius: f64, color: Rgba) {
        (**self).glow(center, radius, color);
    }
}

/// Headless surface that only counts draw calls
///
/// Used by the CLI runner and by tests.
#[derive(Clone, Debug, Default)]
pub struct CountingSurface {
    pub clears: usize,
    pub lines: usize,
    pub glows: usize,
    /// Colour of the most recent line
    pub last_line: Option<Rgba>,
    /// Colour of the most recent glow
    pub last_glow: Option<Rgba>,
}

impl CountingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total draw calls of any kind
    pub fn draw_calls(&self) -> usize {
        self.clears + self.lines + self.glows
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Surface for CountingSurface {
    fn clear(&mut self, _size: SurfaceSize) {
        self.clears += 1;
    }

    fn line(&mut self, _from: DVec2, _to: DVec2, color: Rgba, _width: f64) {
        self.lines += 1;
        self.last_line = Some(color);
    }

    fn glow(&mut self, _center: DVec2, _radius: f64, color: Rgba) {
        self.glows += 1;
        self.last_glow = Some(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_sizes() {
        assert!(!SurfaceSize::new(800.0, 600.0).is_degenerate());
        assert!(SurfaceSize::new(0.0, 600.0).is_degenerate());
        assert!(SurfaceSize::new(800.0, -1.0).is_degenerate());
        assert!(SurfaceSize::new(f64::NAN, 1.0).is_degenerate());
    }

    #[test]
    fn rounded_matches_pixel_grid() {
        let size = SurfaceSize::new(799.6, 600.4).rounded();
        assert_eq!(size, SurfaceSize::new(800.0, 600.0));
        assert_eq!(SurfaceSize::new(-3.0, 0.2).rounded(), SurfaceSize::new(0.0, 0.0));
    }

    fn draw_segment<S: Surface>(mut surface: S) {
        surface.clear(SurfaceSize::new(1.0, 1.0));
        surface.line(DVec2::ZERO, DVec2::ONE, Rgba::new(0, 0, 0, 1.0), 1.0);
    }

    #[test]
    fn counting_surface_through_mut_ref() {
        let mut surface = CountingSurface::new();
        draw_segment(&mut surface);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.lines, 1);
        assert_eq!(surface.draw_calls(), 2);

        surface.reset();
        assert_eq!(surface.draw_calls(), 0);
        assert!(surface.last_line.is_none());
    }
}
