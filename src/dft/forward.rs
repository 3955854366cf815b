//! Forward transform: samples to frequency coefficients.

use std::f64::consts::TAU;

use super::{validate_samples, Normalization};
use crate::complex::Complex;
use crate::error::TransformError;

/// Compute the DFT of `samples` by direct summation.
///
/// Coefficient `k` is `Σ x[n]·exp(-i·2π·k·n/N)`, divided by N when
/// `normalization` is `PerSample`. Runs in O(N²).
///
/// # Errors
/// `EmptyInput` for an empty slice, `NonFiniteSample` if any sample holds
/// NaN or an infinity.
pub fn forward_transform(
    samples: &[Complex],
    normalization: Normalization,
) -> Result<Vec<Complex>, TransformError> {
    validate_samples(samples)?;

    let n = samples.len();
    log::debug!("forward DFT: N={} ({:?})", n, normalization);

    let coefficients = (0..n)
        .map(|k| {
            let sum: Complex = samples
                .iter()
                .enumerate()
                .map(|(i, sample)| {
                    let angle = -TAU * (k * i) as f64 / n as f64;
                    sample.multiply(Complex::expi(angle))
                })
                .sum();

            match normalization {
                Normalization::Unnormalized => sum,
                Normalization::PerSample => sum.scale(1.0 / n as f64),
            }
        })
        .collect();

    Ok(coefficients)
}
