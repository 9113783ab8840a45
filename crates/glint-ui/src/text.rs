//! Text placement policies.
//!
//! Three ways widgets put text on screen:
//! - [`draw_label`]: free-standing text anchored at a point, optionally
//!   centered per axis and outlined
//! - [`draw_button_text`]: centered in a box, shrunk to fit its width
//! - [`draw_textbox_text`]: left-aligned inside an input box, clipped, with
//!   the tail kept visible once the text overflows

use glint_engine::coords::{Rect, Vec2};
use glint_engine::paint::Color;
use glint_engine::text::FontId;

use crate::painter::Painter;

/// Horizontal margin kept free when button text has to shrink.
pub const BUTTON_TEXT_MARGIN: f32 = 20.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontStyle {
    pub font: FontId,
    pub size: f32,
    pub color: Color,
    pub antialias: bool,
}

impl FontStyle {
    /// Black, antialiased text.
    pub fn new(font: FontId, size: f32) -> Self {
        Self { font, size, color: Color::BLACK, antialias: true }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_antialias(mut self, antialias: bool) -> Self {
        self.antialias = antialias;
        self
    }
}

/// Decorative outline drawn around a label's text box.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelBorder {
    /// Stroke width. Zero or less draws nothing.
    pub width: f32,
    pub radius: f32,
    pub color: Color,
    /// Grows the outline horizontally and shrinks it vertically.
    pub padding: f32,
}

impl Default for LabelBorder {
    fn default() -> Self {
        Self { width: 2.0, radius: 0.0, color: Color::BLACK, padding: 0.0 }
    }
}

// ── label ─────────────────────────────────────────────────────────────────

/// Top-left corner for text of `size` anchored at `pos`.
pub fn label_origin(size: Vec2, pos: Vec2, center_w: bool, center_h: bool) -> Vec2 {
    let x = if center_w { pos.x - size.x / 2.0 } else { pos.x };
    let y = if center_h { pos.y - size.y / 2.0 } else { pos.y };
    Vec2::new(x, y)
}

/// Outline rectangle around a label whose text occupies `text_rect`.
pub fn label_border_rect(text_rect: Rect, padding: f32) -> Rect {
    let r = text_rect.inflate(padding, -padding);
    Rect::from_origin_size(Vec2::new(r.origin.x, r.origin.y - padding / 1.5), r.size)
}

pub fn draw_label(
    painter: &mut Painter<'_>,
    text: &str,
    style: &FontStyle,
    pos: Vec2,
    center_w: bool,
    center_h: bool,
    border: Option<&LabelBorder>,
) {
    let size = painter.measure_text(text, style.font, style.size);
    let origin = label_origin(size, pos, center_w, center_h);
    painter.text(text, style, origin, 1.0);

    if let Some(border) = border.filter(|b| b.width > 0.0) {
        let rect = label_border_rect(Rect::from_origin_size(origin, size), border.padding);
        painter.stroke_rect(rect, border.color, border.radius, border.width);
    }
}

// ── button text ───────────────────────────────────────────────────────────

/// Uniform glyph scale that fits `text_width` into `available_width`.
///
/// An `available_width` of zero means unconstrained.
pub fn button_text_scale(text_width: f32, available_width: f32) -> f32 {
    if available_width != 0.0 && text_width > available_width {
        ((available_width - BUTTON_TEXT_MARGIN) / text_width).max(0.0)
    } else {
        1.0
    }
}

/// Draws `text` centered on `center`, shrunk to fit `available_width`.
pub fn draw_button_text(
    painter: &mut Painter<'_>,
    text: &str,
    style: &FontStyle,
    center: Vec2,
    available_width: f32,
) {
    let size = painter.measure_text(text, style.font, style.size);
    let scale = button_text_scale(size.x, available_width);
    let origin = center - size * (scale / 2.0);
    painter.text(text, style, origin, scale);
}

// ── text box text ─────────────────────────────────────────────────────────

/// How far text must shift left so its tail stays inside the box.
pub fn overflow_offset(text_width: f32, box_width: f32, padding: f32) -> f32 {
    (text_width - (box_width - padding * 2.0)).max(0.0)
}

/// Visible text area of an input box.
pub fn textbox_clip(box_rect: Rect, padding: f32) -> Rect {
    Rect::new(
        box_rect.origin.x + padding,
        box_rect.origin.y + box_rect.size.y / 3.0,
        (box_rect.size.x - padding * 2.0).max(0.0),
        box_rect.size.y,
    )
}

pub fn draw_textbox_text(
    painter: &mut Painter<'_>,
    text: &str,
    style: &FontStyle,
    box_rect: Rect,
    offset: f32,
    padding: f32,
) {
    let clip = textbox_clip(box_rect, padding);
    painter.push_clip(clip);
    painter.text(text, style, Vec2::new(clip.origin.x - offset, clip.origin.y), 1.0);
    painter.pop_clip();
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::{FixedAdvance, font, text_cmds};
    use glint_engine::scene::{DrawCmd, DrawList};

    // ── label ─────────────────────────────────────────────────────────────

    #[test]
    fn label_origin_centers_per_axis() {
        let size = Vec2::new(100.0, 40.0);
        let pos = Vec2::new(200.0, 200.0);
        assert_eq!(label_origin(size, pos, false, false), pos);
        assert_eq!(label_origin(size, pos, true, false), Vec2::new(150.0, 200.0));
        assert_eq!(label_origin(size, pos, false, true), Vec2::new(200.0, 180.0));
        assert_eq!(label_origin(size, pos, true, true), Vec2::new(150.0, 180.0));
    }

    #[test]
    fn label_border_only_when_configured() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        let style = FontStyle::new(font(), 20.0);
        draw_label(&mut p, "hi", &style, Vec2::zero(), false, false, None);
        assert_eq!(list.len(), 1);

        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        let border = LabelBorder { padding: 6.0, ..LabelBorder::default() };
        draw_label(&mut p, "hi", &style, Vec2::zero(), false, false, Some(&border));
        assert_eq!(list.len(), 2);
        match &list.items()[1].cmd {
            DrawCmd::Rect(r) => assert_eq!(r.rect, Rect::new(-3.0, -1.0, 26.0, 14.0)),
            other => panic!("expected rect, got {other:?}"),
        }
    }

    // ── button text ───────────────────────────────────────────────────────

    #[test]
    fn button_text_fits_without_scaling() {
        assert_eq!(button_text_scale(100.0, 300.0), 1.0);
        assert_eq!(button_text_scale(500.0, 0.0), 1.0);
    }

    #[test]
    fn button_text_shrinks_with_margin() {
        assert_eq!(button_text_scale(560.0, 300.0), 0.5);
    }

    #[test]
    fn button_text_scale_never_negative() {
        assert_eq!(button_text_scale(50.0, 10.0), 0.0);
    }

    #[test]
    fn button_text_is_centered_after_scaling() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        let style = FontStyle::new(font(), 40.0);
        // 56 chars * 10 px = 560 px into 300 px: scale 0.5 → 280×20.
        let text = "x".repeat(56);
        draw_button_text(&mut p, &text, &style, Vec2::new(640.0, 360.0), 300.0);

        let cmds = text_cmds(&list);
        assert_eq!(cmds[0].scale, 0.5);
        assert_eq!(cmds[0].origin, Vec2::new(500.0, 350.0));
    }

    // ── text box text ─────────────────────────────────────────────────────

    #[test]
    fn overflow_offset_is_zero_until_text_fills_box() {
        assert_eq!(overflow_offset(100.0, 300.0, 10.0), 0.0);
        assert_eq!(overflow_offset(280.0, 300.0, 10.0), 0.0);
        assert_eq!(overflow_offset(300.0, 300.0, 10.0), 20.0);
        assert_eq!(overflow_offset(400.0, 300.0, 10.0), 120.0);
        assert_eq!(overflow_offset(200.0, 300.0, 10.0), 0.0);
    }

    #[test]
    fn textbox_text_is_clipped_and_shifted() {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        let style = FontStyle::new(font(), 40.0);
        let rect = Rect::new(100.0, 90.0, 300.0, 90.0);
        draw_textbox_text(&mut p, "hello", &style, rect, 15.0, 10.0);

        let item = &list.items()[0];
        assert_eq!(item.clip_rect, Some(Rect::new(110.0, 120.0, 280.0, 90.0)));
        match &item.cmd {
            DrawCmd::Text(t) => assert_eq!(t.origin, Vec2::new(95.0, 120.0)),
            other => panic!("expected text, got {other:?}"),
        }
    }
}
