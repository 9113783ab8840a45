use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// How a rectangle is filled.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RectStyle {
    /// Solid interior.
    Fill,
    /// Outline of the given width (logical pixels), drawn inside the rect.
    Stroke(f32),
}

/// Rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    /// Uniform corner radius. Zero means sharp corners.
    pub radius: f32,
    pub style: RectStyle,
}

impl DrawList {
    /// Records a rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Color, radius: f32, style: RectStyle) {
        self.push(DrawCmd::Rect(RectCmd { rect, color, radius, style }));
    }

    /// Records a solid, sharp-cornered rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        self.push_rect(rect, color, 0.0, RectStyle::Fill);
    }
}
