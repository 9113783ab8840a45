use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Straight line segment draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    /// Thickness in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.push(DrawCmd::Line(LineCmd { from, to, width, color }));
    }
}
