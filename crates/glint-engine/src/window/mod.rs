//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single application window, and wires
//! them to the GPU layer.

mod runtime;

pub use runtime::{frame_interval, Runtime, RuntimeConfig, RuntimeCtx};
