use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};
use crate::text::FontId;

/// Text draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels, before `scale` is applied.
    pub size: f32,
    pub color: Color,
    /// `false` renders hard-edged glyphs (coverage thresholded).
    pub antialias: bool,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
    /// Uniform scale applied to the laid-out glyphs (1.0 = natural size).
    pub scale: f32,
}

impl DrawList {
    /// Records a text draw command.
    pub fn push_text(&mut self, cmd: TextCmd) {
        if cmd.text.is_empty() {
            return;
        }
        self.push(DrawCmd::Text(cmd));
    }
}
