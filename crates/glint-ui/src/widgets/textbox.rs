use std::time::Duration;

use glint_engine::coords::Vec2;
use glint_engine::input::{Key, KeyPress};
use glint_engine::paint::Color;
use glint_engine::screen::AspectRatio;
use glint_engine::text::FontId;

use crate::attrs::{Border, BoxStyle, WidgetAttrs};
use crate::event::WidgetEvent;
use crate::painter::Painter;
use crate::scene::UiInput;
use crate::text::{FontStyle, draw_label, draw_textbox_text, overflow_offset};
use crate::widget::Widget;

const CARET: &str = "|";
const MASK: char = '*';

/// Caret blink phase for `elapsed_ms` since focus was gained.
///
/// Solid for the first second, then toggles once per second.
pub fn caret_visible(elapsed_ms: u128) -> bool {
    elapsed_ms <= 1000 || (elapsed_ms / 1000) % 2 == 0
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextBoxConfig {
    pub style: BoxStyle,
    /// Space between the box edge and the text on each side.
    pub padding: f32,
    pub font_size: f32,
    pub antialias: bool,
    pub placeholder: String,
    pub placeholder_color: Color,
    /// Render `*` for every character.
    pub password: bool,
    pub max_chars: Option<usize>,
}

impl Default for TextBoxConfig {
    fn default() -> Self {
        Self {
            style: BoxStyle::default().size(300.0, 100.0).border(Border::default()),
            padding: 10.0,
            font_size: 40.0,
            antialias: true,
            placeholder: String::new(),
            placeholder_color: Color::BLACK,
            password: false,
            max_chars: None,
        }
    }
}

impl TextBoxConfig {
    pub fn style(mut self, v: BoxStyle) -> Self { self.style = v; self }
    pub fn padding(mut self, v: f32) -> Self { self.padding = v; self }
    pub fn font_size(mut self, v: f32) -> Self { self.font_size = v; self }
    pub fn placeholder(mut self, v: impl Into<String>) -> Self { self.placeholder = v.into(); self }
    pub fn placeholder_color(mut self, v: Color) -> Self { self.placeholder_color = v; self }
    pub fn password(mut self, v: bool) -> Self { self.password = v; self }
    pub fn max_chars(mut self, v: usize) -> Self { self.max_chars = Some(v); self }
}

/// A single-line text input field.
///
/// Press inside to focus, press anywhere else to blur. While focused, typed
/// text is appended, Backspace deletes the last character and Enter reports
/// [`WidgetEvent::Submitted`]. Once the text is wider than the box, its tail
/// stays in view.
#[derive(Debug, Clone)]
pub struct TextBox {
    attrs: WidgetAttrs,
    config: TextBoxConfig,
    font: FontId,
    text: String,
    focused: bool,
    /// When focus was last gained.
    blink_start: Duration,
}

impl TextBox {
    pub fn new(pos: Vec2, font: FontId, config: TextBoxConfig) -> Self {
        Self {
            attrs: WidgetAttrs::new(pos, config.style.clone()),
            config,
            font,
            text: String::new(),
            focused: false,
            blink_start: Duration::ZERO,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Some(max) = self.config.max_chars {
            if let Some((idx, _)) = self.text.char_indices().nth(max) {
                self.text.truncate(idx);
            }
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn attrs(&self) -> &WidgetAttrs {
        &self.attrs
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.attrs.set_visible(visible);
        if !visible {
            self.focused = false;
        }
    }

    /// The string drawn on screen: the text itself, or its mask.
    pub fn displayed_text(&self) -> String {
        if self.config.password {
            std::iter::repeat_n(MASK, self.text.chars().count()).collect()
        } else {
            self.text.clone()
        }
    }

    /// Focuses on a press inside the box, blurs on a press outside.
    ///
    /// `pointer` is in display pixels; `now` anchors the caret blink.
    pub fn update_focus(
        &mut self,
        pointer: Option<Vec2>,
        pointer_down: bool,
        aspect: AspectRatio,
        now: Duration,
    ) {
        if !pointer_down || !self.attrs.is_visible() {
            return;
        }
        let hit = self.attrs.hit_rect(aspect);
        let inside = pointer.is_some_and(|p| hit.contains(p));
        if inside && !self.focused {
            log::trace!("text box focused");
            self.focused = true;
            self.blink_start = now;
        } else if !inside && self.focused {
            log::trace!("text box blurred");
            self.focused = false;
        }
    }

    /// Applies one key press. Ignored while unfocused.
    pub fn handle_key(&mut self, press: &KeyPress) -> Option<WidgetEvent> {
        if !self.focused {
            return None;
        }
        match press.key {
            Key::Backspace => {
                self.text.pop();
                None
            }
            Key::Enter => Some(WidgetEvent::Submitted(self.text.clone())),
            _ => {
                if let Some(text) = &press.text {
                    self.append(text);
                }
                None
            }
        }
    }

    fn append(&mut self, text: &str) {
        let room = match self.config.max_chars {
            Some(max) => max.saturating_sub(self.text.chars().count()),
            None => usize::MAX,
        };
        self.text.extend(text.chars().filter(|c| !c.is_control()).take(room));
    }

    fn font_style(&self) -> FontStyle {
        FontStyle::new(self.font, self.config.font_size)
            .with_color(self.attrs.text_color())
            .with_antialias(self.config.antialias)
    }
}

impl Widget for TextBox {
    fn draw(&self, painter: &mut Painter<'_>) {
        if !self.attrs.is_visible() {
            return;
        }
        self.attrs.draw_box(painter);

        let body = self.attrs.box_rect();
        let pad = self.config.padding;
        let style = self.font_style();
        let shown = self.displayed_text();
        let text_w = painter.measure_text(&shown, style.font, style.size).x;
        let offset = overflow_offset(text_w, body.size.x, pad);

        draw_textbox_text(painter, &shown, &style, body, offset, pad);

        if self.text.is_empty() && !self.config.placeholder.is_empty() {
            let hint = style.with_color(self.config.placeholder_color);
            let origin = Vec2::new(body.origin.x + pad, body.origin.y + body.size.y / 3.0);
            painter.text(&self.config.placeholder, &hint, origin, 1.0);
        }

        let elapsed = painter.now.saturating_sub(self.blink_start).as_millis();
        if self.focused && caret_visible(elapsed) {
            let pos = Vec2::new(
                body.origin.x + text_w + pad / 2.0 - offset,
                body.origin.y + body.size.y / 2.0,
            );
            draw_label(painter, CARET, &style, pos, false, true, None);
        }
    }

    fn handle_input(&mut self, input: &UiInput, aspect: AspectRatio) -> Option<WidgetEvent> {
        self.update_focus(input.pointer, input.pointer_down, aspect, input.now);
        let mut event = None;
        for press in &input.keys {
            if let Some(ev) = self.handle_key(press) {
                event = Some(ev);
            }
        }
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FixedAdvance, font, text_cmds};
    use glint_engine::scene::DrawList;

    const ID: AspectRatio = AspectRatio::IDENTITY;

    /// Box (100, 105)-(400, 195).
    fn textbox(config: TextBoxConfig) -> TextBox {
        let config = TextBoxConfig { style: config.style.clone().size(300.0, 90.0), ..config };
        TextBox::new(Vec2::new(250.0, 150.0), font(), config)
    }

    fn focused(config: TextBoxConfig) -> TextBox {
        let mut tb = textbox(config);
        tb.update_focus(Some(Vec2::new(200.0, 150.0)), true, ID, Duration::ZERO);
        tb
    }

    fn typed(text: &str) -> KeyPress {
        KeyPress::with_text(Key::Other(0), text)
    }

    fn draw_at(tb: &TextBox, now: Duration) -> DrawList {
        let mut list = DrawList::new();
        let mut p = Painter::new(&mut list, &FixedAdvance, now);
        tb.draw(&mut p);
        list
    }

    // ── caret blink ───────────────────────────────────────────────────────

    #[test]
    fn caret_solid_for_first_second() {
        assert!(caret_visible(0));
        assert!(caret_visible(1000));
    }

    #[test]
    fn caret_toggles_each_second_after() {
        assert!(!caret_visible(1001));
        assert!(!caret_visible(1999));
        assert!(caret_visible(2000));
        assert!(!caret_visible(3500));
    }

    // ── focus ─────────────────────────────────────────────────────────────

    #[test]
    fn press_inside_focuses_press_outside_blurs() {
        let mut tb = textbox(TextBoxConfig::default());
        tb.update_focus(Some(Vec2::new(200.0, 150.0)), false, ID, Duration::ZERO);
        assert!(!tb.is_focused());
        tb.update_focus(Some(Vec2::new(200.0, 150.0)), true, ID, Duration::ZERO);
        assert!(tb.is_focused());
        tb.update_focus(Some(Vec2::new(10.0, 10.0)), false, ID, Duration::ZERO);
        assert!(tb.is_focused());
        tb.update_focus(Some(Vec2::new(10.0, 10.0)), true, ID, Duration::ZERO);
        assert!(!tb.is_focused());
    }

    #[test]
    fn keys_ignored_while_unfocused() {
        let mut tb = textbox(TextBoxConfig::default());
        assert_eq!(tb.handle_key(&typed("a")), None);
        assert_eq!(tb.text(), "");
    }

    // ── editing ───────────────────────────────────────────────────────────

    #[test]
    fn typing_appends_and_backspace_removes() {
        let mut tb = focused(TextBoxConfig::default());
        tb.handle_key(&typed("h"));
        tb.handle_key(&typed("é"));
        assert_eq!(tb.text(), "hé");
        tb.handle_key(&KeyPress::new(Key::Backspace));
        assert_eq!(tb.text(), "h");
        tb.handle_key(&KeyPress::new(Key::Backspace));
        tb.handle_key(&KeyPress::new(Key::Backspace));
        assert_eq!(tb.text(), "");
    }

    #[test]
    fn backspace_edits_tail_and_is_idempotent_when_empty() {
        let mut tb = focused(TextBoxConfig::default());
        tb.handle_key(&KeyPress::new(Key::Backspace));
        assert_eq!(tb.text(), "");
        tb.handle_key(&typed("a"));
        tb.handle_key(&typed("b"));
        tb.handle_key(&typed("c"));
        tb.handle_key(&KeyPress::new(Key::Backspace));
        tb.handle_key(&typed("d"));
        assert_eq!(tb.text(), "abd");
    }

    #[test]
    fn enter_submits_without_changing_text() {
        let mut tb = focused(TextBoxConfig::default());
        tb.handle_key(&typed("ok"));
        let ev = tb.handle_key(&KeyPress::with_text(Key::Enter, "\r"));
        assert_eq!(ev, Some(WidgetEvent::Submitted("ok".into())));
        assert_eq!(tb.text(), "ok");
    }

    #[test]
    fn control_chars_and_textless_keys_are_ignored() {
        let mut tb = focused(TextBoxConfig::default());
        tb.handle_key(&KeyPress::with_text(Key::Escape, "\u{1b}"));
        tb.handle_key(&KeyPress::new(Key::ArrowLeft));
        tb.handle_key(&KeyPress::with_text(Key::Tab, "\t"));
        assert_eq!(tb.text(), "");
    }

    #[test]
    fn max_chars_limits_input() {
        let mut tb = focused(TextBoxConfig::default().max_chars(3));
        tb.handle_key(&typed("ab"));
        tb.handle_key(&typed("cd"));
        assert_eq!(tb.text(), "abc");
        tb.set_text("wxyz");
        assert_eq!(tb.text(), "wxy");
    }

    #[test]
    fn handle_input_focuses_then_types() {
        let mut tb = textbox(TextBoxConfig::default());
        let input = UiInput::pointer(Vec2::new(200.0, 150.0), true)
            .with_keys([typed("a"), KeyPress::new(Key::Enter)]);
        assert_eq!(tb.handle_input(&input, ID), Some(WidgetEvent::Submitted("a".into())));
    }

    #[test]
    fn password_masks_every_char() {
        let mut tb = focused(TextBoxConfig::default().password(true));
        tb.handle_key(&typed("sécret"));
        assert_eq!(tb.displayed_text(), "******");
        assert_eq!(tb.text(), "sécret");
    }

    // ── drawing ───────────────────────────────────────────────────────────

    #[test]
    fn placeholder_only_when_empty() {
        let mut tb = focused(TextBoxConfig::default().placeholder("name"));
        let list = draw_at(&tb, Duration::from_millis(1500));
        let texts = text_cmds(&list);
        assert_eq!(texts.len(), 1);
        assert_eq!(texts[0].text, "name");
        assert_eq!(texts[0].origin, Vec2::new(110.0, 135.0));

        tb.handle_key(&typed("x"));
        let list = draw_at(&tb, Duration::from_millis(1500));
        assert!(text_cmds(&list).iter().all(|t| t.text != "name"));
    }

    #[test]
    fn caret_follows_text_and_overflow() {
        let mut tb = focused(TextBoxConfig::default());
        tb.handle_key(&typed("abc"));
        let list = draw_at(&tb, Duration::ZERO);
        let texts = text_cmds(&list);
        assert_eq!(texts[1].text, "|");
        // x: 100 + 30 + 5; y: centered on 150 with height 40.
        assert_eq!(texts[1].origin, Vec2::new(135.0, 130.0));

        tb.set_text("x".repeat(30));
        let list = draw_at(&tb, Duration::ZERO);
        let texts = text_cmds(&list);
        assert_eq!(texts[0].origin.x, 90.0);
        assert_eq!(texts[1].origin.x, 385.0);
    }

    #[test]
    fn caret_hidden_when_unfocused_or_blinking_off() {
        let mut tb = textbox(TextBoxConfig::default());
        tb.set_text("abc");
        assert_eq!(text_cmds(&draw_at(&tb, Duration::ZERO)).len(), 1);

        tb.update_focus(Some(Vec2::new(200.0, 150.0)), true, ID, Duration::from_secs(2));
        assert_eq!(text_cmds(&draw_at(&tb, Duration::from_millis(2500))).len(), 2);
        assert_eq!(text_cmds(&draw_at(&tb, Duration::from_millis(3500))).len(), 1);
        assert_eq!(text_cmds(&draw_at(&tb, Duration::from_millis(4200))).len(), 2);
    }

    #[test]
    fn password_overflow_is_measured_on_mask() {
        let mut tb = focused(TextBoxConfig::default().password(true));
        tb.set_text("ab");
        let list = draw_at(&tb, Duration::ZERO);
        let texts = text_cmds(&list);
        assert_eq!(texts[0].text, "**");
        assert_eq!(texts[1].origin.x, 125.0);
    }
}
