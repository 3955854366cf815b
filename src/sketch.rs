//! Pointer-trace recorder that turns a free-hand stroke into samples.

use glam::DVec2;

use crate::complex::Complex;
use crate::error::InputError;

/// Free-hand stroke captured one pointer position per frame
#[derive(Debug, Clone, Default)]
pub struct Sketch {
    points: Vec<DVec2>,
    drawing: bool,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke, discarding any previous one
    pub fn begin(&mut self) {
        self.points.clear();
        self.drawing = true;
    }

    /// Record a pointer position; ignored unless a stroke is in progress
    pub fn push(&mut self, x: f64, y: f64) {
        if self.drawing {
            self.points.push(DVec2::new(x, y));
        }
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// End the stroke and return every `step`-th position as a sample
    /// (x → re, y → im).
    ///
    /// # Errors
    /// `InvalidStep` for `step == 0`, `Empty` if nothing was recorded.
    pub fn finish(&mut self, step: usize) -> Result<Vec<Complex>, InputError> {
        self.drawing = false;
        if step == 0 {
            return Err(InputError::InvalidStep);
        }
        if self.points.is_empty() {
            return Err(InputError::Empty);
        }
        Ok(self
            .points
            .iter()
            .step_by(step)
            .map(|p| Complex::new(p.x, p.y))
            .collect())
    }
}
