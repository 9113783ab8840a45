use std::fmt;

/// Keyboard key identifier.
///
/// Only keys the UI reacts to by identity are named. Printable characters
/// arrive through [`KeyPress::text`] and do not need their own variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Delete,
    Home,
    End,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Any other key, carrying the platform key code.
    Other(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// A key going down during the current frame.
///
/// `text` is the character sequence the keyboard layout produced for this
/// press, if any (e.g. `"a"`, `"A"`, `"é"`). Control keys usually carry no
/// text or a control character.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPress {
    pub key: Key,
    pub text: Option<String>,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        Self { key, text: None }
    }

    pub fn with_text(key: Key, text: impl Into<String>) -> Self {
        Self { key, text: Some(text.into()) }
    }
}

/// Platform-agnostic input events emitted by the runtime.
///
/// Pointer coordinates are display pixels (window space).
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        text: Option<String>,
        /// True when the event is an OS key-repeat.
        repeat: bool,
    },

    PointerMoved { x: f32, y: f32 },
    PointerButton { button: MouseButton, state: MouseButtonState },

    /// Pointer left the window surface.
    PointerLeft,

    /// Window focus change.
    Focused(bool),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
