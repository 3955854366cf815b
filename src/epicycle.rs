//! Epicycle decomposition of a closed 2D trace.
//!
//! Each coefficient of the per-sample-normalized transform becomes a rotating
//! vector. Chaining all of them tip to tail and advancing the time parameter
//! from 0 to 2π over N steps retraces the input points.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::complex::Complex;
use crate::dft::{forward_transform, Normalization};
use crate::error::TransformError;

/// One rotating vector of the decomposition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpicycleComponent {
    /// Coefficient index k, used directly as angular rate (radians per unit t)
    pub frequency: usize,
    /// Circle radius, >= 0
    pub amplitude: f64,
    /// Starting angle in (-π, π]
    pub phase: f64,
}

impl EpicycleComponent {
    /// Vector contributed at time `t`:
    /// `(amplitude·cos(k·t + phase), amplitude·sin(k·t + phase))`
    pub fn offset(&self, t: f64) -> DVec2 {
        self.rotated_offset(t, 0.0)
    }

    /// Same as [`offset`](Self::offset) with a constant `rotation` added to the angle
    pub fn rotated_offset(&self, t: f64, rotation: f64) -> DVec2 {
        let angle = self.frequency as f64 * t + self.phase + rotation;
        DVec2::new(self.amplitude * angle.cos(), self.amplitude * angle.sin())
    }
}

/// One link of the drawn chain: a circle and the radius vector inside it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub center: DVec2,
    pub radius: f64,
    pub tip: DVec2,
}

/// Decompose 2D points (re = x, im = y) into epicycles, largest first.
///
/// Amplitude and phase come straight off the `PerSample` coefficients. Ties in
/// amplitude keep ascending frequency order.
pub fn decompose_epicycles(
    samples: &[Complex],
) -> Result<Vec<EpicycleComponent>, TransformError> {
    let coefficients = forward_transform(samples, Normalization::PerSample)?;

    let mut components: Vec<EpicycleComponent> = coefficients
        .iter()
        .enumerate()
        .map(|(k, c)| EpicycleComponent {
            frequency: k,
            amplitude: c.magnitude(),
            phase: c.phase(),
        })
        .collect();

    components.sort_by(|a, b| b.amplitude.total_cmp(&a.amplitude));
    Ok(components)
}

/// Time parameter at which sample `index` of `count` is retraced
pub fn sample_instant(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count as f64
}

/// Tip of the full chain at time `t`, relative to the chain origin
pub fn trace_point(components: &[EpicycleComponent], t: f64) -> DVec2 {
    components
        .iter()
        .fold(DVec2::ZERO, |tip, c| tip + c.offset(t))
}

/// Successive links anchored at `origin`, every angle offset by `rotation`
pub fn chain(
    components: &[EpicycleComponent],
    origin: DVec2,
    t: f64,
    rotation: f64,
) -> Vec<Link> {
    let mut center = origin;
    components
        .iter()
        .map(|c| {
            let tip = center + c.rotated_offset(t, rotation);
            let link = Link {
                center,
                radius: c.amplitude,
                tip,
            };
            center = tip;
            link
        })
        .collect()
}
