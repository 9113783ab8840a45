//! glint engine crate.
//!
//! Geometry, color, the draw list, fonts, the CPU canvas, input snapshots,
//! frame timing, the logical-to-display scaler and the winit/wgpu runtime that
//! presents the canvas.

pub mod coords;
pub mod paint;
pub mod scene;
pub mod text;
pub mod raster;
pub mod screen;

pub mod input;
pub mod time;
pub mod logging;

pub mod device;
pub mod render;
pub mod core;
pub mod window;
