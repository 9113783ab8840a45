use super::types::KeyPress;

/// Per-frame input deltas.
///
/// `InputState` provides the current state (held buttons, pointer position).
/// `InputFrame` provides what happened since the previous frame. The runtime
/// clears it after every frame, so nothing is carried over.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Key presses in arrival order, OS repeats excluded.
    pub key_presses: Vec<KeyPress>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.key_presses.clear();
    }
}
