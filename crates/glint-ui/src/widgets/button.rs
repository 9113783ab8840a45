use glint_engine::coords::Vec2;
use glint_engine::screen::AspectRatio;
use glint_engine::text::FontId;

use crate::attrs::{BoxStyle, WidgetAttrs};
use crate::event::WidgetEvent;
use crate::painter::Painter;
use crate::scene::UiInput;
use crate::text::{FontStyle, draw_button_text};
use crate::widget::Widget;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Hover,
    Pressed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonConfig {
    pub style: BoxStyle,
    pub font_size: f32,
    pub antialias: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            style: BoxStyle::default().size(300.0, 100.0),
            font_size: 100.0,
            antialias: true,
        }
    }
}

impl ButtonConfig {
    pub fn style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }
}

/// A boxed, clickable label.
///
/// A click fires on release, and only if the pointer never left the button
/// between press and release. While held, the body sits on its shadow.
///
/// # Example
/// ```rust,ignore
/// let style = BoxStyle::default().radius(12.0).shadow(Shadow::default());
/// let mut play = Button::new(Vec2::new(640.0, 300.0), "Play", font, ButtonConfig::default().style(style));
///
/// if play.click(input.pointer, input.pointer_down, aspect) {
///     start_game();
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    attrs: WidgetAttrs,
    label: String,
    font: FontId,
    font_size: f32,
    antialias: bool,
    state: ButtonState,
}

impl Button {
    pub fn new(pos: Vec2, label: impl Into<String>, font: FontId, config: ButtonConfig) -> Self {
        Self {
            attrs: WidgetAttrs::new(pos, config.style),
            label: label.into(),
            font,
            font_size: config.font_size,
            antialias: config.antialias,
            state: ButtonState::Idle,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn attrs(&self) -> &WidgetAttrs {
        &self.attrs
    }

    pub fn is_visible(&self) -> bool {
        self.attrs.is_visible()
    }

    /// Hiding a button also drops any hover or press in progress.
    pub fn set_visible(&mut self, visible: bool) {
        self.attrs.set_visible(visible);
        if !visible {
            self.reset();
        }
    }

    /// Advances the state machine; `true` exactly on the frame a click lands.
    ///
    /// `pointer` is in display pixels.
    pub fn click(&mut self, pointer: Option<Vec2>, pointer_down: bool, aspect: AspectRatio) -> bool {
        if !self.attrs.is_visible() {
            return false;
        }

        let hit = self.attrs.hit_rect(aspect);
        if !pointer.is_some_and(|p| hit.contains(p)) {
            if self.state == ButtonState::Pressed {
                log::trace!("button {:?}: press cancelled", self.label);
            }
            self.reset();
            return false;
        }

        self.attrs.set_hovered(true);
        match (self.state, pointer_down) {
            (_, true) => {
                self.state = ButtonState::Pressed;
                self.attrs.set_depressed(true);
                false
            }
            (ButtonState::Pressed, false) => {
                self.state = ButtonState::Hover;
                self.attrs.set_depressed(false);
                log::trace!("button {:?}: clicked", self.label);
                true
            }
            (_, false) => {
                self.state = ButtonState::Hover;
                false
            }
        }
    }

    fn reset(&mut self) {
        self.state = ButtonState::Idle;
        self.attrs.set_hovered(false);
        self.attrs.set_depressed(false);
    }

    fn font_style(&self) -> FontStyle {
        FontStyle::new(self.font, self.font_size)
            .with_color(self.attrs.text_color())
            .with_antialias(self.antialias)
    }
}

impl Widget for Button {
    fn draw(&self, painter: &mut Painter<'_>) {
        if !self.attrs.is_visible() {
            return;
        }
        self.attrs.draw_box(painter);
        let body = self.attrs.box_rect();
        draw_button_text(painter, &self.label, &self.font_style(), body.center(), body.size.x);
    }

    fn handle_input(&mut self, input: &UiInput, aspect: AspectRatio) -> Option<WidgetEvent> {
        self.click(input.pointer, input.pointer_down, aspect)
            .then_some(WidgetEvent::Clicked)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::attrs::{Border, Shadow};
    use crate::testing::{FixedAdvance, font, text_cmds};
    use glint_engine::coords::Rect;
    use glint_engine::paint::Color;
    use glint_engine::scene::{DrawCmd, DrawList};

    const ID: AspectRatio = AspectRatio::IDENTITY;

    /// 300×100 button centered at (250, 150): rect (100, 100)-(400, 200).
    fn button() -> Button {
        let style = BoxStyle::default()
            .size(300.0, 100.0)
            .shadow(Shadow { offset: Vec2::new(5.0, 5.0), color: Color::BLACK });
        Button::new(Vec2::new(250.0, 150.0), "OK", font(), ButtonConfig::default().style(style))
    }

    fn inside() -> Option<Vec2> {
        Some(Vec2::new(200.0, 150.0))
    }

    fn outside() -> Option<Vec2> {
        Some(Vec2::new(50.0, 50.0))
    }

    // ── state machine ─────────────────────────────────────────────────────

    #[test]
    fn hover_then_press_then_release_clicks_once() {
        let mut b = button();
        assert!(!b.click(inside(), false, ID));
        assert_eq!(b.state(), ButtonState::Hover);

        assert!(!b.click(inside(), true, ID));
        assert_eq!(b.state(), ButtonState::Pressed);

        assert!(b.click(inside(), false, ID));
        assert_eq!(b.state(), ButtonState::Hover);

        assert!(!b.click(inside(), false, ID));
    }

    #[test]
    fn holding_does_not_repeat_clicks() {
        let mut b = button();
        for _ in 0..5 {
            assert!(!b.click(inside(), true, ID));
        }
        assert!(b.click(inside(), false, ID));
    }

    #[test]
    fn leaving_cancels_press() {
        let mut b = button();
        b.click(inside(), true, ID);
        assert!(!b.click(outside(), true, ID));
        assert_eq!(b.state(), ButtonState::Idle);
        // Coming back with the button already released is not a click.
        assert!(!b.click(inside(), false, ID));
    }

    #[test]
    fn pointer_outside_window_is_idle() {
        let mut b = button();
        b.click(inside(), false, ID);
        assert!(!b.click(None, false, ID));
        assert_eq!(b.state(), ButtonState::Idle);
        assert!(!b.attrs().is_hovered());
    }

    #[test]
    fn hit_test_uses_scaled_rect() {
        let mut b = button();
        let aspect = AspectRatio::new(1.25, 1.25);
        // x = 110 is inside the logical rect but left of the scaled one.
        b.click(Some(Vec2::new(110.0, 130.0)), false, aspect);
        assert_eq!(b.state(), ButtonState::Idle);
        b.click(Some(Vec2::new(130.0, 130.0)), false, aspect);
        assert_eq!(b.state(), ButtonState::Hover);
    }

    #[test]
    fn resized_display_moves_hit_area() {
        let style = BoxStyle::default().size(300.0, 100.0);
        let mut b = Button::new(Vec2::new(250.0, 150.0), "OK", font(), ButtonConfig::default().style(style));
        let screen = glint_engine::screen::Screen::new((1280, 720), (1600, 900), true);
        let aspect = screen.aspect_ratio();

        b.click(Some(Vec2::new(125.0, 125.0)), false, aspect);
        assert_eq!(b.state(), ButtonState::Hover);
        b.click(Some(Vec2::new(90.0, 90.0)), false, aspect);
        assert_eq!(b.state(), ButtonState::Idle);
    }

    #[test]
    fn press_depresses_body_and_release_restores() {
        let mut b = button();
        b.click(inside(), true, ID);
        assert_eq!(b.attrs().box_rect(), Rect::new(105.0, 105.0, 300.0, 100.0));
        b.click(inside(), false, ID);
        assert_eq!(b.attrs().box_rect(), Rect::new(100.0, 100.0, 300.0, 100.0));
    }

    #[test]
    fn invisible_button_never_clicks() {
        let mut b = button();
        b.click(inside(), true, ID);
        b.set_visible(false);
        assert!(!b.click(inside(), false, ID));
        assert_eq!(b.state(), ButtonState::Idle);
    }

    #[test]
    fn handle_input_reports_clicked() {
        let mut b = button();
        let down = UiInput::pointer(Vec2::new(200.0, 150.0), true);
        let up = UiInput::pointer(Vec2::new(200.0, 150.0), false);
        assert_eq!(b.handle_input(&down, ID), None);
        assert_eq!(b.handle_input(&up, ID), Some(WidgetEvent::Clicked));
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn draws_shadow_body_border_then_label() {
        let style = BoxStyle::default()
            .size(300.0, 100.0)
            .shadow(Shadow::default())
            .border(Border::default());
        let b = Button::new(Vec2::new(250.0, 150.0), "OK", font(), ButtonConfig::default().style(style));

        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        b.draw(&mut p);

        let kinds: Vec<_> = list
            .items()
            .iter()
            .map(|i| match i.cmd {
                DrawCmd::Rect(_) => "rect",
                DrawCmd::Text(_) => "text",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["rect", "rect", "rect", "text"]);

        // "OK" at size 100 measures 20×100 and is centered on the body.
        let cmds = text_cmds(&list);
        let text = cmds[0];
        assert_eq!(text.origin, Vec2::new(240.0, 100.0));
        assert_eq!(text.scale, 1.0);
    }

    #[test]
    fn hover_applies_text_hover_color() {
        let style = BoxStyle::default()
            .size(300.0, 100.0)
            .text_colors(Color::BLACK, Color::WHITE);
        let mut b = Button::new(Vec2::new(250.0, 150.0), "OK", font(), ButtonConfig::default().style(style));
        b.click(inside(), false, ID);

        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        b.draw(&mut p);
        assert_eq!(text_cmds(&list)[0].color, Color::WHITE);
    }

    #[test]
    fn long_label_shrinks_to_width() {
        let mut b = button();
        b.set_label("x".repeat(56));
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        b.draw(&mut p);
        assert_eq!(text_cmds(&list)[0].scale, 0.5);
    }

    #[test]
    fn invisible_button_draws_nothing() {
        let mut b = button();
        b.set_visible(false);
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, Duration::ZERO);
        b.draw(&mut p);
        assert!(list.is_empty());
    }
}
