//! Fast-transform reference used to cross-check the direct DFT.
//!
//! Nothing in the transform path calls this; it exists so the direct sums can
//! be compared against an independent implementation.

use rustfft::{num_complex::Complex64, FftPlanner};

use crate::complex::Complex;
use crate::dft::Normalization;

/// Forward FFT of `samples` with the same sign and normalization conventions
/// as [`crate::dft::forward_transform`]
pub fn reference_transform(samples: &[Complex], normalization: Normalization) -> Vec<Complex> {
    if samples.is_empty() {
        return Vec::new();
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(samples.len());

    let mut buffer: Vec<Complex64> = samples.iter().map(|&s| s.into()).collect();
    fft.process(&mut buffer);

    let scale = match normalization {
        Normalization::Unnormalized => 1.0,
        Normalization::PerSample => 1.0 / samples.len() as f64,
    };
    buffer
        .into_iter()
        .map(|c| Complex::from(c).scale(scale))
        .collect()
}

/// Largest elementwise distance between two sequences.
///
/// Returns `None` when the lengths differ.
pub fn max_deviation(a: &[Complex], b: &[Complex]) -> Option<f64> {
    if a.len() != b.len() {
        return None;
    }
    Some(
        a.iter()
            .zip(b)
            .map(|(x, y)| Complex::new(x.re - y.re, x.im - y.im).magnitude())
            .fold(0.0, f64::max),
    )
}
