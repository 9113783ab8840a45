//! Font loading and text measurement.
//!
//! Fonts are parsed with fontdue. Widgets only see [`FontId`] handles and the
//! [`MeasureText`] trait, so layout logic can be exercised without font files.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem, MeasureText};
