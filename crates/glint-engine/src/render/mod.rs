//! GPU presentation.
//!
//! Widgets never touch the GPU: they paint into a CPU [`crate::raster::Canvas`]
//! at the logical resolution. The [`CanvasBlitter`] uploads that canvas once
//! per frame and stretches it over the window surface.

mod blit;
mod ctx;

pub use blit::CanvasBlitter;
pub use ctx::{RenderCtx, RenderTarget};
