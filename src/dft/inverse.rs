//! Inverse transform evaluated at arbitrary (continuous) parameters.

use std::f64::consts::TAU;

use crate::complex::Complex;
use crate::error::TransformError;

/// Reconstruct a real signal from unnormalized coefficients.
///
/// For every parameter `p` the result is `Re(Σ X[k]·exp(i·2π·k·p/N)) / N`
/// with N = `coefficients.len()`. Parameters need not be integers nor lie in
/// `[0, N)`, and their count is independent of N. The imaginary residue is
/// dropped.
///
/// # Errors
/// `EmptyInput` for no coefficients, `NonFiniteCoefficient` for a non-finite
/// coefficient, `NonFiniteParameter` for a non-finite evaluation parameter.
pub fn inverse_transform(
    coefficients: &[Complex],
    eval_params: &[f64],
) -> Result<Vec<f64>, TransformError> {
    super::validate_coefficients(coefficients)?;
    super::validate_params(eval_params)?;

    let n = coefficients.len();
    log::debug!("inverse DFT: N={} M={}", n, eval_params.len());

    Ok(eval_params
        .iter()
        .map(|&param| evaluate(coefficients, param).re / n as f64)
        .collect())
}

/// Same as [`inverse_transform`] but first checks that the coefficients
/// describe exactly `sample_count` samples.
pub fn inverse_transform_checked(
    coefficients: &[Complex],
    sample_count: usize,
    eval_params: &[f64],
) -> Result<Vec<f64>, TransformError> {
    if coefficients.len() != sample_count {
        return Err(TransformError::LengthMismatch {
            expected: sample_count,
            actual: coefficients.len(),
        });
    }
    inverse_transform(coefficients, eval_params)
}

/// Raw inverse sum at one parameter, without the 1/N factor
pub(crate) fn evaluate(coefficients: &[Complex], param: f64) -> Complex {
    let n = coefficients.len() as f64;
    coefficients
        .iter()
        .enumerate()
        .map(|(k, coefficient)| {
            let angle = TAU * k as f64 * param / n;
            coefficient.multiply(Complex::expi(angle))
        })
        .sum()
}

/// `count` evenly spaced values from `start` to `end` inclusive.
///
/// Used to build dense reconstruction grids, e.g. 1000 points over `0..=N-1`.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| start + (end - start) * i as f64 / last)
                .collect()
        }
    }
}

/// `count` evenly spaced values covering one period `[0, period)`.
///
/// The endpoint is left out so that repeating the evaluated values end to end
/// continues the signal without a duplicated or skipped instant.
pub fn periodic_grid(period: f64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| period * i as f64 / count as f64)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::{forward_transform, Normalization};
    use crate::error::ErrorKind;

    fn coefficients_of(values: &[f64]) -> Vec<Complex> {
        let samples: Vec<Complex> = values.iter().copied().map(Complex::from_real).collect();
        forward_transform(&samples, Normalization::Unnormalized).unwrap()
    }

    #[test]
    fn test_dense_grid_hits_original_samples() {
        let values = [0.0, 1.0, 0.0, -1.0];
        let coefficients = coefficients_of(&values);

        // 7 points over 0..=3 land on every original index at even positions
        let params = linspace(0.0, 3.0, 7);
        let output = inverse_transform(&coefficients, &params).unwrap();
        assert_eq!(output.len(), 7);
        for (i, want) in values.iter().enumerate() {
            assert!((output[2 * i] - want).abs() < 1e-9);
        }
    }

    #[test]
    fn test_output_length_independent_of_n() {
        let coefficients = coefficients_of(&[1.0, 2.0, 3.0]);
        let output = inverse_transform(&coefficients, &linspace(0.0, 2.0, 1000)).unwrap();
        assert_eq!(output.len(), 1000);

        let empty = inverse_transform(&coefficients, &[]).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_periodic_outside_base_interval() {
        let values = [2.0, -1.0, 0.5, 3.0, 1.0];
        let coefficients = coefficients_of(&values);

        // Shifting an integer parameter by N returns the same sample
        let output = inverse_transform(&coefficients, &[7.0, -3.0]).unwrap();
        assert!((output[0] - values[2]).abs() < 1e-9);
        assert!((output[1] - values[2]).abs() < 1e-9);
    }

    #[test]
    fn test_checked_rejects_length_mismatch() {
        let coefficients = coefficients_of(&[1.0, 2.0, 3.0, 4.0]);
        let err = inverse_transform_checked(&coefficients, 5, &[0.0]).unwrap_err();
        assert_eq!(
            err,
            TransformError::LengthMismatch {
                expected: 5,
                actual: 4
            }
        );
        assert_eq!(err.kind(), ErrorKind::LengthMismatch);

        assert!(inverse_transform_checked(&coefficients, 4, &[0.0]).is_ok());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        assert_eq!(
            inverse_transform(&[], &[0.0]).unwrap_err(),
            TransformError::EmptyInput
        );

        let coefficients = coefficients_of(&[1.0, 2.0]);
        assert_eq!(
            inverse_transform(&coefficients, &[0.0, f64::INFINITY]).unwrap_err(),
            TransformError::NonFiniteParameter { index: 1 }
        );
    }

    #[test]
    fn test_non_finite_coefficient_rejected() {
        let mut coefficients = coefficients_of(&[1.0, 2.0, 3.0]);
        coefficients[2] = Complex::new(f64::NAN, 0.0);

        let err = inverse_transform(&coefficients, &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, TransformError::NonFiniteCoefficient { index: 2 });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        coefficients[2] = Complex::new(0.0, f64::NEG_INFINITY);
        let err = inverse_transform_checked(&coefficients, 3, &[0.0]).unwrap_err();
        assert_eq!(err, TransformError::NonFiniteCoefficient { index: 2 });
    }

    #[test]
    fn test_periodic_grid_repeats_seamlessly() {
        let values = [0.0, 1.0, 0.0, -1.0];
        let coefficients = coefficients_of(&values);

        let grid = periodic_grid(4.0, 8);
        assert_eq!(grid, vec![0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5]);
        let period = inverse_transform(&coefficients, &grid).unwrap();

        // Two periods laid end to end match one evaluation over 0..8
        let mut repeated = period.clone();
        repeated.extend_from_slice(&period);
        let continuous = inverse_transform(&coefficients, &periodic_grid(8.0, 16)).unwrap();
        for (got, want) in repeated.iter().zip(continuous.iter()) {
            assert!((got - want).abs() < 1e-9);
        }

        assert!(periodic_grid(4.0, 0).is_empty());
    }

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }
}
