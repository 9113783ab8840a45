//! Color model shared between widgets and the canvas rasterizer.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
