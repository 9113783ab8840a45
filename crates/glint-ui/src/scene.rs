use std::path::Path;
use std::time::Duration;

use glint_engine::coords::Vec2;
use glint_engine::input::{InputFrame, InputState, KeyPress, MouseButton};
use glint_engine::scene::DrawList;
use glint_engine::screen::AspectRatio;
use glint_engine::text::{FontId, FontLoadError, FontSystem};

use crate::event::WidgetEvent;
use crate::painter::Painter;
use crate::widget::Widget;

// ── UiInput ───────────────────────────────────────────────────────────────

/// Snapshot of input state for one UI frame.
///
/// Construct this from the engine's `InputState` / `InputFrame` each frame
/// with [`from_frame`](Self::from_frame).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiInput {
    /// Cursor position in display pixels. `None` while outside the window.
    pub pointer: Option<Vec2>,
    /// `true` while the primary button is held down.
    pub pointer_down: bool,
    /// Keys pressed this frame, in order.
    pub keys: Vec<KeyPress>,
    /// Time since the application clock started.
    pub now: Duration,
}

impl UiInput {
    pub fn from_frame(state: &InputState, frame: &InputFrame, now: Duration) -> Self {
        Self {
            pointer: state.pointer_pos,
            pointer_down: state.button_down(MouseButton::Left),
            keys: frame.key_presses.clone(),
            now,
        }
    }

    /// Pointer at `pos`, no keys.
    pub fn pointer(pos: Vec2, down: bool) -> Self {
        Self { pointer: Some(pos), pointer_down: down, ..Self::default() }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = KeyPress>) -> Self {
        self.keys = keys.into_iter().collect();
        self
    }

    pub fn at(mut self, now: Duration) -> Self {
        self.now = now;
        self
    }
}

// ── UiScene ───────────────────────────────────────────────────────────────

/// Owns the fonts and the draw list shared by every widget on screen.
///
/// Each call to [`frame`](Self::frame) rebuilds the draw list: all widgets
/// paint first, then all of them see the input. The caller rasterizes the
/// result with `Canvas::draw(&ui.draw_list, &ui.font_system)`.
pub struct UiScene {
    pub font_system: FontSystem,
    /// Draw list populated by the most recent [`frame`](Self::frame) call.
    ///
    /// Public so callers can split-borrow it alongside `font_system`.
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> Result<FontId, FontLoadError> {
        self.font_system.load_font_file(path)
    }

    /// Draw every widget, then route input to every widget.
    ///
    /// Returns the events produced this frame tagged with the key the caller
    /// paired each widget with.
    pub fn frame<K: Copy>(
        &mut self,
        widgets: &mut [(K, &mut dyn Widget)],
        input: &UiInput,
        aspect: AspectRatio,
    ) -> Vec<(K, WidgetEvent)> {
        self.draw_list.clear();

        // ── paint ─────────────────────────────────────────────────────────
        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system, input.now);
            for (_, widget) in widgets.iter() {
                widget.draw(&mut painter);
            }
        }

        // ── events ────────────────────────────────────────────────────────
        widgets
            .iter_mut()
            .filter_map(|(key, widget)| widget.handle_input(input, aspect).map(|ev| (*key, ev)))
            .collect()
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}
