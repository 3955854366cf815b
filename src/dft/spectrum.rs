//! Coefficient sequence bundled with the normalization that produced it.

use std::f64::consts::TAU;

use super::inverse::evaluate;
use super::{forward_transform, Normalization};
use crate::complex::Complex;
use crate::error::TransformError;

/// One sinusoid of a real-signal decomposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineComponent {
    /// Coefficient index k
    pub index: usize,
    /// Cycles per sample (k / N)
    pub frequency: f64,
    /// Sample-domain amplitude (|X_k| / N for unnormalized coefficients)
    pub amplitude: f64,
    /// Phase offset in radians, (-π, π]
    pub phase: f64,
}

impl SineComponent {
    /// `amplitude·cos(2π·frequency·t + phase)`
    pub fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * (TAU * self.frequency * t + self.phase).cos()
    }
}

/// Frequency-domain view of a sample sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    coefficients: Vec<Complex>,
    normalization: Normalization,
}

impl Spectrum {
    /// Run the forward transform with the given convention
    pub fn analyze(
        samples: &[Complex],
        normalization: Normalization,
    ) -> Result<Self, TransformError> {
        let coefficients = forward_transform(samples, normalization)?;
        Ok(Self {
            coefficients,
            normalization,
        })
    }

    /// Wrap coefficients produced elsewhere.
    ///
    /// # Errors
    /// `LengthMismatch` if `coefficients.len() != sample_count`, `EmptyInput`
    /// or `NonFiniteCoefficient` for an unusable coefficient sequence.
    pub fn from_coefficients(
        coefficients: Vec<Complex>,
        sample_count: usize,
        normalization: Normalization,
    ) -> Result<Self, TransformError> {
        if coefficients.len() != sample_count {
            return Err(TransformError::LengthMismatch {
                expected: sample_count,
                actual: coefficients.len(),
            });
        }
        super::validate_coefficients(&coefficients)?;
        Ok(Self {
            coefficients,
            normalization,
        })
    }

    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Number of samples N the spectrum describes
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Frequency of each coefficient in cycles per sample (k / N)
    pub fn frequencies(&self) -> Vec<f64> {
        let n = self.len() as f64;
        (0..self.len()).map(|k| k as f64 / n).collect()
    }

    /// Factor turning a stored coefficient into a sample-domain amplitude
    fn amplitude_scale(&self) -> f64 {
        match self.normalization {
            Normalization::Unnormalized => 1.0 / self.len() as f64,
            Normalization::PerSample => 1.0,
        }
    }

    /// Per-frequency sinusoids in sample-domain amplitude
    pub fn sine_components(&self) -> Vec<SineComponent> {
        let scale = self.amplitude_scale();
        let n = self.len() as f64;
        self.coefficients
            .iter()
            .enumerate()
            .map(|(k, c)| SineComponent {
                index: k,
                frequency: k as f64 / n,
                amplitude: c.magnitude() * scale,
                phase: c.phase(),
            })
            .collect()
    }

    /// Total coefficient energy Σ|X_k|²
    pub fn energy(&self) -> f64 {
        self.coefficients.iter().map(|c| c.magnitude_squared()).sum()
    }

    /// Real reconstruction at each parameter, using the inverse that matches
    /// this spectrum's normalization.
    pub fn reconstruct(&self, eval_params: &[f64]) -> Result<Vec<f64>, TransformError> {
        match self.normalization {
            Normalization::Unnormalized => super::inverse_transform(&self.coefficients, eval_params),
            Normalization::PerSample => {
                super::validate_params(eval_params)?;
                Ok(eval_params
                    .iter()
                    .map(|&param| evaluate(&self.coefficients, param).re)
                    .collect())
            }
        }
    }
}
