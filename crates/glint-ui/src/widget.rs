use glint_engine::screen::AspectRatio;

use crate::event::WidgetEvent;
use crate::painter::Painter;
use crate::scene::UiInput;

// ── Widget trait ──────────────────────────────────────────────────────────

/// The trait every widget implements.
///
/// Widgets are retained: they own their position, palette and interaction
/// state across frames. Each frame the owner calls [`draw`](Self::draw) and
/// then [`handle_input`](Self::handle_input), so what is on screen always
/// reflects the state from before this frame's input.
///
/// ```rust,ignore
/// use glint_ui::prelude::*;
///
/// let mut ok = Button::new(Vec2::new(640.0, 360.0), "OK", font, ButtonConfig::default());
///
/// ok.draw(&mut painter);
/// if ok.handle_input(&input, screen.aspect_ratio()) == Some(WidgetEvent::Clicked) {
///     // ...
/// }
/// ```
pub trait Widget {
    /// Paint the widget in logical pixels.
    fn draw(&self, painter: &mut Painter<'_>);

    /// Feed this frame's input.
    ///
    /// Pointer coordinates in `input` are display pixels; `aspect` maps the
    /// widget's logical rect into the same space. The default ignores input.
    fn handle_input(&mut self, _input: &UiInput, _aspect: AspectRatio) -> Option<WidgetEvent> {
        None
    }
}
