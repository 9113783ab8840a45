//! CPU rasterization of draw lists.
//!
//! The whole UI is painted into a fixed-resolution [`Canvas`] in logical
//! pixels; the render module later stretches that canvas over the window.

mod canvas;
mod coverage;

pub use canvas::Canvas;
