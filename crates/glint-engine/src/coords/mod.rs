//! Coordinate and geometry types shared across the engine and UI.
//!
//! Canonical CPU space:
//! - Logical pixels (the fixed design resolution, e.g. 1280×720)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Display-space points (window pixels) are mapped to logical space through
//! [`crate::screen::AspectRatio`].

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
