use glint_engine::coords::{Rect, Vec2};
use glint_engine::paint::Color;
use glint_engine::screen::AspectRatio;

use crate::painter::Painter;

/// Drop shadow behind a widget body.
///
/// `offset` doubles as the press depression of buttons.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Shadow {
    pub offset: Vec2,
    pub color: Color,
}

impl Default for Shadow {
    fn default() -> Self {
        Self { offset: Vec2::new(10.0, 10.0), color: Color::BLACK }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    pub thickness: f32,
    pub color: Color,
}

impl Default for Border {
    fn default() -> Self {
        Self { thickness: 1.0, color: Color::BLACK }
    }
}

/// Visual configuration shared by every boxed widget.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxStyle {
    pub size: Vec2,
    pub visible: bool,
    pub box_color: Color,
    pub box_hover_color: Color,
    pub text_color: Color,
    pub text_hover_color: Color,
    /// 0 fills the body; anything above draws it as an outline of that width.
    pub outline: f32,
    pub border_radius: f32,
    pub shadow: Option<Shadow>,
    pub border: Option<Border>,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            size: Vec2::new(100.0, 100.0),
            visible: true,
            box_color: Color::rgb(128, 128, 128),
            box_hover_color: Color::rgb(100, 100, 100),
            text_color: Color::BLACK,
            text_hover_color: Color::BLACK,
            outline: 0.0,
            border_radius: 0.0,
            shadow: None,
            border: None,
        }
    }
}

impl BoxStyle {
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Vec2::new(w, h);
        self
    }

    pub fn colors(mut self, box_color: Color, box_hover_color: Color) -> Self {
        self.box_color = box_color;
        self.box_hover_color = box_hover_color;
        self
    }

    pub fn text_colors(mut self, text_color: Color, text_hover_color: Color) -> Self {
        self.text_color = text_color;
        self.text_hover_color = text_hover_color;
        self
    }

    pub fn radius(mut self, r: f32) -> Self {
        self.border_radius = r;
        self
    }

    pub fn outline(mut self, width: f32) -> Self {
        self.outline = width;
        self
    }

    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Geometry and palette state of a boxed widget.
///
/// `pos` is the resting center. The body may be displaced from it (a pressed
/// button), so `box_rect` is tracked separately and always rebuilt from the
/// current center.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetAttrs {
    pos: Vec2,
    style: BoxStyle,
    box_rect: Rect,
    shadow_rect: Rect,
    hovered: bool,
}

impl WidgetAttrs {
    pub fn new(pos: Vec2, mut style: BoxStyle) -> Self {
        style.size = Vec2::new(style.size.x.max(1.0), style.size.y.max(1.0));
        let offset = style.shadow.map_or(Vec2::zero(), |s| s.offset);
        Self {
            pos,
            box_rect: Rect::from_center(pos, style.size),
            shadow_rect: Rect::from_center(pos + offset, style.size),
            style,
            hovered: false,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn style(&self) -> &BoxStyle {
        &self.style
    }

    pub fn box_rect(&self) -> Rect {
        self.box_rect
    }

    pub fn shadow_rect(&self) -> Rect {
        self.shadow_rect
    }

    pub fn is_visible(&self) -> bool {
        self.style.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.style.visible = visible;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Shadow offset, or zero without a shadow.
    pub fn shadow_offset(&self) -> Vec2 {
        self.style.shadow.map_or(Vec2::zero(), |s| s.offset)
    }

    /// Moves the body without changing the resting center.
    pub fn set_center(&mut self, center: Vec2) {
        self.box_rect = self.box_rect.with_center(center);
    }

    /// Pushes the body onto its shadow, or returns it to rest.
    pub fn set_depressed(&mut self, depressed: bool) {
        let center = if depressed { self.pos + self.shadow_offset() } else { self.pos };
        self.set_center(center);
    }

    pub fn box_color(&self) -> Color {
        if self.hovered { self.style.box_hover_color } else { self.style.box_color }
    }

    pub fn text_color(&self) -> Color {
        if self.hovered { self.style.text_hover_color } else { self.style.text_color }
    }

    /// Body rect in display pixels, for testing against the pointer.
    pub fn hit_rect(&self, aspect: AspectRatio) -> Rect {
        aspect.scale_rect(self.box_rect)
    }

    /// Shadow, body and border, in that order.
    pub fn draw_box(&self, painter: &mut Painter<'_>) {
        let radius = self.style.border_radius;
        if let Some(shadow) = self.style.shadow {
            painter.fill_rect(self.shadow_rect, shadow.color, radius);
        }
        painter.rect(self.box_rect, self.box_color(), radius, self.style.outline);
        if let Some(border) = self.style.border {
            painter.stroke_rect(self.box_rect, border.color, radius, border.thickness);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::testing::FixedAdvance;
    use glint_engine::scene::{DrawCmd, DrawList, RectStyle};

    fn attrs() -> WidgetAttrs {
        let style = BoxStyle::default().size(300.0, 100.0).shadow(Shadow::default());
        WidgetAttrs::new(Vec2::new(250.0, 150.0), style)
    }

    #[test]
    fn rects_derive_from_center() {
        let a = attrs();
        assert_eq!(a.box_rect(), Rect::new(100.0, 100.0, 300.0, 100.0));
        assert_eq!(a.shadow_rect(), Rect::new(110.0, 110.0, 300.0, 100.0));
    }

    #[test]
    fn degenerate_size_is_clamped() {
        let a = WidgetAttrs::new(Vec2::zero(), BoxStyle::default().size(0.0, -5.0));
        assert_eq!(a.box_rect().size, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn depress_moves_body_onto_shadow() {
        let mut a = attrs();
        a.set_depressed(true);
        assert_eq!(a.box_rect(), a.shadow_rect());
        assert_eq!(a.pos(), Vec2::new(250.0, 150.0));
        a.set_depressed(false);
        assert_eq!(a.box_rect(), Rect::new(100.0, 100.0, 300.0, 100.0));
    }

    #[test]
    fn hit_rect_is_scaled() {
        let a = attrs();
        let aspect = AspectRatio::new(1.25, 1.25);
        assert_eq!(a.hit_rect(aspect), Rect::new(125.0, 125.0, 375.0, 125.0));
    }

    #[test]
    fn hover_swaps_palette() {
        let mut a = attrs();
        assert_eq!(a.box_color(), Color::rgb(128, 128, 128));
        a.set_hovered(true);
        assert_eq!(a.box_color(), Color::rgb(100, 100, 100));
    }

    #[test]
    fn draw_box_paints_shadow_body_border() {
        let style = BoxStyle::default()
            .shadow(Shadow::default())
            .border(Border { thickness: 3.0, color: Color::WHITE })
            .outline(2.0);
        let a = WidgetAttrs::new(Vec2::new(50.0, 50.0), style);

        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        a.draw_box(&mut p);

        let rects: Vec<_> = list
            .items()
            .iter()
            .map(|i| match &i.cmd {
                DrawCmd::Rect(r) => (r.rect, r.style),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(rects.len(), 3);
        assert_eq!(rects[0], (a.shadow_rect(), RectStyle::Fill));
        assert_eq!(rects[1], (a.box_rect(), RectStyle::Stroke(2.0)));
        assert_eq!(rects[2], (a.box_rect(), RectStyle::Stroke(3.0)));
    }
}
