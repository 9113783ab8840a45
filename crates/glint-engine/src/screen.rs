//! Logical-to-display scaling.
//!
//! The UI is authored against a fixed logical resolution. The window may be
//! any size; the ratio between the two is what hit tests and the final blit
//! use to map between spaces.

use crate::coords::{Rect, Vec2, Viewport};

/// Logical resolution every screen is authored against.
pub const LOGICAL_WIDTH: u32 = 1280;
pub const LOGICAL_HEIGHT: u32 = 720;

/// Per-axis display/logical ratio.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AspectRatio {
    pub x: f32,
    pub y: f32,
}

impl AspectRatio {
    pub const IDENTITY: AspectRatio = AspectRatio { x: 1.0, y: 1.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Maps a logical rect into display space.
    #[inline]
    pub fn scale_rect(self, rect: Rect) -> Rect {
        rect.scale(self.x, self.y)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Logical canvas size, display (window) size and presentation flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    logical: Viewport,
    display: Viewport,
    vsync: bool,
}

impl Screen {
    /// Sizes are clamped to at least one pixel so the aspect ratio stays finite.
    pub fn new(logical: (u32, u32), display: (u32, u32), vsync: bool) -> Self {
        Self {
            logical: clamp_size(logical),
            display: clamp_size(display),
            vsync,
        }
    }

    #[inline]
    pub fn vsync(&self) -> bool {
        self.vsync
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        AspectRatio::new(
            self.display.width / self.logical.width,
            self.display.height / self.logical.height,
        )
    }

    /// Changes the display size and presentation mode.
    ///
    /// Takes effect for the next frame; the runtime resizes the window and
    /// reconfigures the surface.
    pub fn resize(&mut self, width: u32, height: u32, vsync: bool) {
        self.display = clamp_size((width, height));
        self.vsync = vsync;
        log::debug!(
            "screen resized to {}x{} (vsync {}), aspect {:?}",
            self.display.width, self.display.height, vsync, self.aspect_ratio()
        );
    }

    /// Converts a display-space point into logical coordinates.
    pub fn to_logical(&self, p: Vec2) -> Vec2 {
        let a = self.aspect_ratio();
        Vec2::new(p.x / a.x, p.y / a.y)
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new((LOGICAL_WIDTH, LOGICAL_HEIGHT), (LOGICAL_WIDTH, LOGICAL_HEIGHT), true)
    }
}

fn clamp_size((w, h): (u32, u32)) -> Viewport {
    Viewport::new(w.max(1) as f32, h.max(1) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        let s = Screen::default();
        assert_eq!(s.aspect_ratio(), AspectRatio::IDENTITY);
    }

    #[test]
    fn resize_updates_ratio() {
        let mut s = Screen::default();
        s.resize(1600, 900, false);
        assert_eq!(s.aspect_ratio(), AspectRatio::new(1.25, 1.25));
        assert!(!s.vsync());
    }

    #[test]
    fn rect_scales_with_ratio() {
        let mut s = Screen::default();
        s.resize(1600, 900, true);
        assert_eq!(
            s.aspect_ratio().scale_rect(Rect::new(100.0, 100.0, 300.0, 100.0)),
            Rect::new(125.0, 125.0, 375.0, 125.0)
        );
    }

    #[test]
    fn to_logical_inverts_ratio() {
        let mut s = Screen::default();
        s.resize(2560, 1440, true);
        assert_eq!(s.to_logical(Vec2::new(200.0, 100.0)), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn zero_display_is_clamped() {
        let mut s = Screen::default();
        s.resize(0, 0, true);
        let a = s.aspect_ratio();
        assert!(a.x.is_finite() && a.x > 0.0);
        assert!(a.y.is_finite() && a.y > 0.0);
    }
}
