//! Renderer side of the system: animation state, raster output and audio export.
//!
//! Nothing here feeds back into the transforms; it only consumes their output.

mod animation;
mod canvas;
mod frames;
mod plot;
mod wav;

// Re-export public types
pub use animation::{EpicycleAnimation, Frame};
pub use canvas::Canvas;
pub use frames::{render_frame, write_frames};
pub use plot::ReconstructionPlot;
pub use wav::write_wav;
