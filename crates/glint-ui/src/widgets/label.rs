use glint_engine::coords::Vec2;
use glint_engine::paint::Color;
use glint_engine::text::FontId;

use crate::painter::Painter;
use crate::text::{FontStyle, LabelBorder, draw_label};
use crate::widget::Widget;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    pub font_size: f32,
    pub color: Color,
    pub antialias: bool,
    pub center_w: bool,
    pub center_h: bool,
    pub border: Option<LabelBorder>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 100.0,
            color: Color::BLACK,
            antialias: true,
            center_w: false,
            center_h: false,
            border: None,
        }
    }
}

impl LabelConfig {
    pub fn font_size(mut self, v: f32) -> Self { self.font_size = v; self }
    pub fn color(mut self, v: Color) -> Self { self.color = v; self }
    pub fn centered(mut self, w: bool, h: bool) -> Self { self.center_w = w; self.center_h = h; self }
    pub fn border(mut self, v: LabelBorder) -> Self { self.border = Some(v); self }
}

/// Static text anchored at a point.
///
/// # Example
/// ```rust,ignore
/// let title = Label::new("Settings", Vec2::new(640.0, 60.0), font, LabelConfig::default().centered(true, true));
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    pos: Vec2,
    style: FontStyle,
    center_w: bool,
    center_h: bool,
    border: Option<LabelBorder>,
}

impl Label {
    pub fn new(text: impl Into<String>, pos: Vec2, font: FontId, config: LabelConfig) -> Self {
        Self {
            text: text.into(),
            pos,
            style: FontStyle::new(font, config.font_size)
                .with_color(config.color)
                .with_antialias(config.antialias),
            center_w: config.center_w,
            center_h: config.center_h,
            border: config.border,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Widget for Label {
    fn draw(&self, painter: &mut Painter<'_>) {
        draw_label(
            painter,
            &self.text,
            &self.style,
            self.pos,
            self.center_w,
            self.center_h,
            self.border.as_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::scene::UiInput;
    use crate::testing::{FixedAdvance, font, text_cmds};
    use glint_engine::scene::DrawList;
    use glint_engine::screen::AspectRatio;

    #[test]
    fn centered_label_draws_around_pos() {
        let mut label = Label::new(
            "fps",
            Vec2::new(100.0, 100.0),
            font(),
            LabelConfig::default().font_size(20.0).centered(true, true),
        );
        label.set_text("60");

        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        label.draw(&mut p);

        let texts = text_cmds(&list);
        assert_eq!(texts[0].text, "60");
        assert_eq!(texts[0].origin, Vec2::new(90.0, 90.0));
    }

    #[test]
    fn labels_ignore_input() {
        let mut label = Label::new("x", Vec2::zero(), font(), LabelConfig::default());
        let input = UiInput::pointer(Vec2::zero(), true);
        assert_eq!(label.handle_input(&input, AspectRatio::IDENTITY), None);
    }
}
