//! Parameter definitions with units and documented defaults.
//!
//! Every tunable number lives here; the CLI overrides fields of the defaults.

mod animation;
mod reconstruction;

// Re-export all types
pub use animation::{AnimationConfig, PlotConfig, Rgb};
pub use reconstruction::ReconstructionConfig;
