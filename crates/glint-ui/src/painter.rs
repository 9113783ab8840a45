use std::time::Duration;

use glint_engine::coords::{Rect, Vec2};
use glint_engine::paint::Color;
use glint_engine::scene::{DrawList, RectStyle, TextCmd};
use glint_engine::text::{FontId, MeasureText};

/// Drawing surface passed to [`Widget::draw`](crate::widget::Widget::draw).
///
/// Wraps the engine's `DrawList` with a widget-level API. Everything is in
/// logical pixels; commands are painted in the order they are issued.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    fonts: &'a dyn MeasureText,
    /// Time since the application clock started. Drives caret blinking.
    pub now: Duration,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, fonts: &'a dyn MeasureText, now: Duration) -> Self {
        Self { draw_list, fonts, now }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measured `(width, height)` of `text` at natural scale.
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.fonts.measure(text, font, size)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Rectangle body: filled when `outline` is zero, otherwise an outline of
    /// that width.
    pub fn rect(&mut self, rect: Rect, color: Color, radius: f32, outline: f32) {
        if outline > 0.0 {
            self.stroke_rect(rect, color, radius, outline);
        } else {
            self.fill_rect(rect, color, radius);
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color, radius: f32) {
        self.draw_list.push_rect(rect, color, radius, RectStyle::Fill);
    }

    pub fn stroke_rect(&mut self, rect: Rect, color: Color, radius: f32, width: f32) {
        self.draw_list.push_rect(rect, color, radius, RectStyle::Stroke(width));
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.draw_list.push_circle(center, radius, color);
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color) {
        self.draw_list.push_line(from, to, width, color);
    }

    /// Text with its top-left at `origin`, glyphs scaled uniformly by `scale`.
    pub fn text(&mut self, text: &str, style: &crate::text::FontStyle, origin: Vec2, scale: f32) {
        self.draw_list.push_text(TextCmd {
            text: text.to_string(),
            font: style.font,
            size: style.size,
            color: style.color,
            antialias: style.antialias,
            origin,
            scale,
        });
    }

    // ── clipping ──────────────────────────────────────────────────────────

    /// Begin a clip region. Must be paired with [`pop_clip`](Self::pop_clip).
    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedAdvance;
    use glint_engine::scene::DrawCmd;

    #[test]
    fn rect_with_outline_strokes() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        p.rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, 0.0, 0.0);
        p.rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK, 0.0, 3.0);

        let styles: Vec<_> = list
            .items()
            .iter()
            .map(|i| match &i.cmd {
                DrawCmd::Rect(r) => r.style,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(styles, vec![RectStyle::Fill, RectStyle::Stroke(3.0)]);
    }

    #[test]
    fn measure_goes_through_the_measurer() {
        let mut list = DrawList::new();
        let p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        assert_eq!(p.measure_text("abcd", FontId::from_raw(0), 20.0), Vec2::new(40.0, 20.0));
    }
}
