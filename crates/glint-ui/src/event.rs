/// What a widget reports back from [`Widget::handle_input`](crate::widget::Widget::handle_input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// A button was pressed and released while the pointer stayed on it.
    Clicked,
    /// A slider moved; carries the new value. Fired on every frame of a drag.
    ValueChanged(i32),
    /// Enter was pressed in a focused text box; carries the current text.
    Submitted(String),
}
