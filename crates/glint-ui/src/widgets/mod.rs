pub mod button;
pub mod label;
pub mod slider;
pub mod textbox;
