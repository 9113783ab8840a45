use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, KeyPress, KeyState, MouseButton, MouseButtonState};

/// Current input state for the window.
///
/// Holds held-button information and the current pointer position.
/// Per-frame key presses are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in display pixels, `None` when outside the window.
    pub pointer_pos: Option<Vec2>,

    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies an input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            // Avoid stuck buttons when focus changes mid-press.
            InputEvent::Focused(false) => self.buttons_down.clear(),
            InputEvent::Focused(true) => {}

            InputEvent::PointerMoved { x, y } => {
                self.pointer_pos = Some(Vec2::new(x, y));
            }

            InputEvent::PointerLeft => {
                self.pointer_pos = None;
            }

            InputEvent::Key { key, state: KeyState::Pressed, text, repeat: false } => {
                frame.key_presses.push(KeyPress { key, text });
            }

            InputEvent::Key { .. } => {}

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => {
                    self.buttons_down.insert(button);
                }
                MouseButtonState::Released => {
                    self.buttons_down.remove(&button);
                }
            },
        }
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}
