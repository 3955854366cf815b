//! Chart of original samples, reconstructed signal and sinusoid breakdown.

use std::path::Path;

use glam::DVec2;

use super::canvas::Canvas;
use crate::complex::Complex;
use crate::dft::{linspace, Spectrum};
use crate::error::RenderError;
use crate::params::PlotConfig;

/// Everything the chart shows, evaluated on a shared parameter grid
pub struct ReconstructionPlot {
    /// Original samples at t = 0..N-1 (real parts)
    pub samples: Vec<f64>,
    /// Dense evaluation grid
    pub grid: Vec<f64>,
    /// Reconstruction on `grid`
    pub curve: Vec<f64>,
    /// One curve per frequency on `grid`
    pub components: Vec<Vec<f64>>,
}

impl ReconstructionPlot {
    /// Evaluate the reconstruction and its sinusoids over `points` values spanning `0..=N-1`
    pub fn build(
        samples: &[Complex],
        spectrum: &Spectrum,
        points: usize,
    ) -> Result<Self, RenderError> {
        let last = samples.len().saturating_sub(1) as f64;
        let grid = linspace(0.0, last, points);
        let curve = spectrum.reconstruct(&grid)?;
        let components = spectrum
            .sine_components()
            .iter()
            .map(|c| grid.iter().map(|&t| c.evaluate(t)).collect())
            .collect();

        Ok(Self {
            samples: samples.iter().map(|s| s.re).collect(),
            grid,
            curve,
            components,
        })
    }

    /// Value range covered by everything drawn, padded so flat signals still fit
    fn value_range(&self, include_components: bool) -> (f64, f64) {
        let mut values = self.samples.iter().chain(self.curve.iter()).copied().collect::<Vec<_>>();
        if include_components {
            values.extend(self.components.iter().flatten().copied());
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return (-1.0, 1.0);
        }
        let pad = ((max - min) * 0.05).max(0.5);
        (min - pad, max + pad)
    }

    /// Rasterize the chart
    pub fn render(&self, config: &PlotConfig) -> Result<Canvas, RenderError> {
        config.validate().map_err(RenderError::Config)?;

        let mut canvas = Canvas::new(config.width, config.height, config.background);
        let margin = config.margin as f64;
        let plot_w = config.width as f64 - 2.0 * margin;
        let plot_h = config.height as f64 - 2.0 * margin;

        let t_max = self.grid.last().copied().unwrap_or(0.0).max(1.0);
        let (v_min, v_max) = self.value_range(config.show_components);
        let to_pixel = |t: f64, v: f64| {
            DVec2::new(
                margin + t / t_max * plot_w,
                margin + (v_max - v) / (v_max - v_min) * plot_h,
            )
        };

        // Axes: t along the zero line (if visible) and the left edge
        let zero = if v_min <= 0.0 && v_max >= 0.0 { 0.0 } else { v_min };
        canvas.line(to_pixel(0.0, zero), to_pixel(t_max, zero), config.axis_color);
        canvas.line(to_pixel(0.0, v_min), to_pixel(0.0, v_max), config.axis_color);

        if config.show_components {
            for component in &self.components {
                let points: Vec<DVec2> = self
                    .grid
                    .iter()
                    .zip(component)
                    .map(|(&t, &v)| to_pixel(t, v))
                    .collect();
                for (i, pair) in points.windows(2).enumerate() {
                    // Dashed look: skip every other run of segments
                    if (i / 4) % 2 == 0 {
                        canvas.line(pair[0], pair[1], config.component_color);
                    }
                }
            }
        }

        let curve: Vec<DVec2> = self
            .grid
            .iter()
            .zip(&self.curve)
            .map(|(&t, &v)| to_pixel(t, v))
            .collect();
        canvas.polyline(&curve, config.curve_color);

        for (n, &v) in self.samples.iter().enumerate() {
            canvas.marker(to_pixel(n as f64, v), 3, config.sample_color);
        }

        Ok(canvas)
    }

    /// Render and write the chart as PNG
    pub fn save<P: AsRef<Path>>(&self, path: P, config: &PlotConfig) -> Result<(), RenderError> {
        let canvas = self.render(config)?;
        canvas.save(path.as_ref())?;
        log::info!("Wrote plot to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dft::Normalization;

    fn values() -> Vec<Complex> {
        [1.0, 3.0, -2.0, 0.5, 2.0]
            .into_iter()
            .map(Complex::from_real)
            .collect()
    }

    #[test]
    fn test_build_shapes() {
        let samples = values();
        let spectrum = Spectrum::analyze(&samples, Normalization::Unnormalized).unwrap();
        let plot = ReconstructionPlot::build(&samples, &spectrum, 200).unwrap();

        assert_eq!(plot.grid.len(), 200);
        assert_eq!(plot.curve.len(), 200);
        assert_eq!(plot.components.len(), samples.len());
        assert!(plot.components.iter().all(|c| c.len() == 200));
        assert_eq!(plot.grid[199], 4.0);

        // Curve passes through the first and last samples
        assert!((plot.curve[0] - 1.0).abs() < 1e-9);
        assert!((plot.curve[199] - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_render_marks_samples() {
        let samples = values();
        let spectrum = Spectrum::analyze(&samples, Normalization::Unnormalized).unwrap();
        let plot = ReconstructionPlot::build(&samples, &spectrum, 100).unwrap();
        let config = PlotConfig {
            show_components: false,
            ..Default::default()
        };
        let canvas = plot.render(&config).unwrap();

        assert_eq!(canvas.width(), config.width);
        // First sample sits on the left edge of the plot area
        let (v_min, v_max) = plot.value_range(false);
        let y = config.margin as f64
            + (v_max - 1.0) / (v_max - v_min) * (config.height - 2 * config.margin) as f64;
        assert_eq!(
            canvas.pixel(config.margin, y.round() as u32),
            config.sample_color
        );
    }

    #[test]
    fn test_single_sample_plot() {
        let samples = vec![Complex::from_real(5.0)];
        let spectrum = Spectrum::analyze(&samples, Normalization::Unnormalized).unwrap();
        let plot = ReconstructionPlot::build(&samples, &spectrum, 10).unwrap();
        assert!(plot.curve.iter().all(|v| (v - 5.0).abs() < 1e-9));
        assert!(plot.render(&PlotConfig::default()).is_ok());
    }
}
