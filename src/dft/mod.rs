//! Discrete Fourier Transform computed directly from its definition.
//!
//! Both directions are O(N²) / O(N·M) sums over complex exponentials. No fast
//! algorithm is used here; `crate::reference` holds an FFT for comparison only.

mod forward;
mod inverse;
mod spectrum;

// Re-export public types
pub use forward::forward_transform;
pub use inverse::{inverse_transform, inverse_transform_checked, linspace, periodic_grid};
pub use spectrum::{SineComponent, Spectrum};

use crate::complex::Complex;
use crate::error::TransformError;

/// Where the division by N happens.
///
/// Each convention must be paired with its own inverse: `Unnormalized`
/// coefficients are divided by N in the inverse step, `PerSample`
/// coefficients already carry sample-domain amplitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Forward sum left as is; the inverse divides by N
    #[default]
    Unnormalized,
    /// Forward sum divided by N; amplitude and phase read straight off each coefficient
    PerSample,
}

impl From<bool> for Normalization {
    /// `true` selects `PerSample`, matching the `normalize` flag of the forward transform
    fn from(normalize: bool) -> Self {
        if normalize {
            Normalization::PerSample
        } else {
            Normalization::Unnormalized
        }
    }
}

/// Reject empty or non-finite sequences before any work is done
pub(crate) fn validate_samples(samples: &[Complex]) -> Result<(), TransformError> {
    if samples.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    match samples.iter().position(|s| !s.is_finite()) {
        Some(index) => Err(TransformError::NonFiniteSample { index }),
        None => Ok(()),
    }
}

/// Reject empty or non-finite coefficient sequences
pub(crate) fn validate_coefficients(coefficients: &[Complex]) -> Result<(), TransformError> {
    if coefficients.is_empty() {
        return Err(TransformError::EmptyInput);
    }
    match coefficients.iter().position(|c| !c.is_finite()) {
        Some(index) => Err(TransformError::NonFiniteCoefficient { index }),
        None => Ok(()),
    }
}

/// Reject non-finite evaluation parameters
pub(crate) fn validate_params(eval_params: &[f64]) -> Result<(), TransformError> {
    match eval_params.iter().position(|p| !p.is_finite()) {
        Some(index) => Err(TransformError::NonFiniteParameter { index }),
        None => Ok(()),
    }
}

/// Elementwise sum of two equal-length sequences
pub fn add_sequences(a: &[Complex], b: &[Complex]) -> Result<Vec<Complex>, TransformError> {
    if a.len() != b.len() {
        return Err(TransformError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(a.iter().zip(b).map(|(x, y)| *x + *y).collect())
}
