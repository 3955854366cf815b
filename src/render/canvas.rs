//! Minimal raster canvas with line and circle primitives.

use std::f64::consts::TAU;
use std::path::Path;

use glam::DVec2;
use image::{Rgb, RgbImage};

use crate::error::RenderError;
use crate::params;

/// RGB image addressed in pixel coordinates (y down)
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Create canvas filled with `background`
    pub fn new(width: u32, height: u32, background: params::Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb(background)),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Set one pixel; positions outside the canvas are ignored
    pub fn plot(&mut self, p: DVec2, color: params::Rgb) {
        if !p.x.is_finite() || !p.y.is_finite() {
            return;
        }
        let (x, y) = (p.x.round(), p.y.round());
        if x < 0.0 || y < 0.0 || x >= self.width() as f64 || y >= self.height() as f64 {
            return;
        }
        self.image.put_pixel(x as u32, y as u32, Rgb(color));
    }

    /// Straight line sampled at one point per pixel of the longer axis.
    ///
    /// The segment is clipped to the canvas first, so only the visible part
    /// is sampled.
    pub fn line(&mut self, from: DVec2, to: DVec2, color: params::Rgb) {
        let Some((from, to)) = self.clip(from, to) else {
            return;
        };
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            self.plot(from + delta * (i as f64 / steps as f64), color);
        }
    }

    /// Liang-Barsky clip of a segment against the pixel grid `[0, w-1] x [0, h-1]`
    fn clip(&self, from: DVec2, to: DVec2) -> Option<(DVec2, DVec2)> {
        if !from.is_finite() || !to.is_finite() || self.width() == 0 || self.height() == 0 {
            return None;
        }
        let max = DVec2::new((self.width() - 1) as f64, (self.height() - 1) as f64);
        let delta = to - from;
        let (mut enter, mut exit) = (0.0_f64, 1.0_f64);

        let edges = [
            (-delta.x, from.x),
            (delta.x, max.x - from.x),
            (-delta.y, from.y),
            (delta.y, max.y - from.y),
        ];
        for (p, q) in edges {
            if p == 0.0 {
                // Parallel to this edge and entirely outside it
                if q < 0.0 {
                    return None;
                }
                continue;
            }
            let r = q / p;
            if p < 0.0 {
                enter = enter.max(r);
            } else {
                exit = exit.min(r);
            }
            if enter > exit {
                return None;
            }
        }

        Some((from + delta * enter, from + delta * exit))
    }

    /// Line drawn in alternating on/off segments of `dash` pixels
    pub fn dashed_line(&mut self, from: DVec2, to: DVec2, dash: f64, color: params::Rgb) {
        let length = (to - from).length();
        if length == 0.0 || dash <= 0.0 {
            self.plot(from, color);
            return;
        }
        let direction = (to - from) / length;
        let mut start = 0.0;
        while start < length {
            let end = (start + dash).min(length);
            self.line(from + direction * start, from + direction * end, color);
            start += 2.0 * dash;
        }
    }

    /// Connected polyline through `points`
    pub fn polyline(&mut self, points: &[DVec2], color: params::Rgb) {
        match points {
            [] => {}
            [single] => self.plot(*single, color),
            _ => {
                for pair in points.windows(2) {
                    self.line(pair[0], pair[1], color);
                }
            }
        }
    }

    /// Circle outline
    pub fn circle(&mut self, center: DVec2, radius: f64, color: params::Rgb) {
        if radius < 0.5 {
            self.plot(center, color);
            return;
        }
        let segments = (TAU * radius).ceil().clamp(16.0, 4096.0) as usize;
        let mut previous = center + DVec2::new(radius, 0.0);
        for i in 1..=segments {
            let angle = TAU * i as f64 / segments as f64;
            let next = center + DVec2::new(radius * angle.cos(), radius * angle.sin());
            self.line(previous, next, color);
            previous = next;
        }
    }

    /// Filled square marker of half-size `half`
    pub fn marker(&mut self, center: DVec2, half: i32, color: params::Rgb) {
        for dy in -half..=half {
            for dx in -half..=half {
                self.plot(center + DVec2::new(dx as f64, dy as f64), color);
            }
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> params::Rgb {
        self.image.get_pixel(x, y).0
    }

    /// Write the canvas as PNG
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        self.image.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: params::Rgb = [255, 255, 255];
    const BLACK: params::Rgb = [0, 0, 0];

    #[test]
    fn test_line_endpoints() {
        let mut canvas = Canvas::new(20, 20, BLACK);
        canvas.line(DVec2::new(2.0, 3.0), DVec2::new(15.0, 9.0), WHITE);

        assert_eq!(canvas.pixel(2, 3), WHITE);
        assert_eq!(canvas.pixel(15, 9), WHITE);
        assert_eq!(canvas.pixel(0, 19), BLACK);
    }

    #[test]
    fn test_out_of_bounds_ignored() {
        let mut canvas = Canvas::new(10, 10, BLACK);
        canvas.plot(DVec2::new(-1.0, 5.0), WHITE);
        canvas.plot(DVec2::new(5.0, 10.0), WHITE);
        canvas.plot(DVec2::new(f64::NAN, 1.0), WHITE);
        canvas.line(DVec2::new(-50.0, 5.0), DVec2::new(50.0, 5.0), WHITE);

        // Only the visible part of the line is drawn
        assert_eq!(canvas.pixel(0, 5), WHITE);
        assert_eq!(canvas.pixel(9, 5), WHITE);
        assert_eq!(canvas.pixel(5, 4), BLACK);
    }

    #[test]
    fn test_long_line_is_solid_where_visible() {
        let mut canvas = Canvas::new(100, 20, BLACK);
        canvas.line(DVec2::new(-10000.0, 7.0), DVec2::new(10000.0, 7.0), WHITE);
        for x in 0..100 {
            assert_eq!(canvas.pixel(x, 7), WHITE, "gap at x={}", x);
        }

        // Steep diagonal mostly above the canvas
        canvas.line(DVec2::new(-5000.0, -10000.0), DVec2::new(19.0, 19.0), WHITE);
        assert_eq!(canvas.pixel(19, 19), WHITE);
        assert_eq!(canvas.pixel(9, 0), WHITE);
        assert_eq!(canvas.pixel(10, 1), WHITE);
        assert_eq!(canvas.pixel(0, 19), BLACK);
    }

    #[test]
    fn test_line_outside_canvas_draws_nothing() {
        let mut canvas = Canvas::new(10, 10, BLACK);
        canvas.line(DVec2::new(-20.0, -5.0), DVec2::new(30.0, -1.0), WHITE);
        canvas.line(DVec2::new(12.0, 0.0), DVec2::new(12.0, 9.0), WHITE);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.pixel(x, y), BLACK);
            }
        }
    }

    #[test]
    fn test_circle_passes_through_cardinal_points() {
        let mut canvas = Canvas::new(41, 41, BLACK);
        canvas.circle(DVec2::new(20.0, 20.0), 10.0, WHITE);

        assert_eq!(canvas.pixel(30, 20), WHITE);
        assert_eq!(canvas.pixel(10, 20), WHITE);
        assert_eq!(canvas.pixel(20, 30), WHITE);
        assert_eq!(canvas.pixel(20, 10), WHITE);
        // Centre stays empty
        assert_eq!(canvas.pixel(20, 20), BLACK);
    }

    #[test]
    fn test_dashed_line_has_gaps() {
        let mut canvas = Canvas::new(40, 3, BLACK);
        canvas.dashed_line(DVec2::new(0.0, 1.0), DVec2::new(39.0, 1.0), 4.0, WHITE);

        assert_eq!(canvas.pixel(1, 1), WHITE);
        assert_eq!(canvas.pixel(6, 1), BLACK);
        assert_eq!(canvas.pixel(9, 1), WHITE);
    }
}
