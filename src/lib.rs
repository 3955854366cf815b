//! Epicycles library - direct Fourier transforms and epicycle decomposition

pub mod cli;
pub mod complex;
pub mod dft;
pub mod epicycle;
pub mod error;
pub mod params;
pub mod reference;
pub mod render;
pub mod signal;
pub mod sketch;

pub use complex::Complex;
pub use dft::{forward_transform, inverse_transform, Normalization, Spectrum};
pub use epicycle::{decompose_epicycles, EpicycleComponent};
pub use error::{ErrorKind, TransformError};
