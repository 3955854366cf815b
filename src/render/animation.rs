//! Epicycle animation state owned by the renderer.
//!
//! The decomposition is computed once; each frame only reads it. Time, the
//! traced path and the completion flag live here rather than in globals.

use std::f64::consts::TAU;

use glam::DVec2;

use crate::epicycle::{chain, EpicycleComponent, Link};

/// Geometry of one animation frame
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame number, 0-based
    pub index: usize,
    /// Time parameter in [0, 2π)
    pub t: f64,
    /// Circles and radius vectors, largest first
    pub links: Vec<Link>,
    /// Tip of the chain (newest point of the traced path)
    pub tip: DVec2,
}

/// Frame-by-frame playback of one full epicycle cycle
pub struct EpicycleAnimation {
    components: Vec<EpicycleComponent>,
    origin: DVec2,
    rotation: f64,
    frame_index: usize,
    path: Vec<DVec2>,
    cycle_complete: bool,
}

impl EpicycleAnimation {
    /// Create animation anchored at `origin` with a constant angle `rotation`.
    ///
    /// One frame is produced per component, so a full cycle retraces the
    /// sampled curve once.
    pub fn new(components: Vec<EpicycleComponent>, origin: DVec2, rotation: f64) -> Self {
        Self {
            components,
            origin,
            rotation,
            frame_index: 0,
            path: Vec::new(),
            cycle_complete: false,
        }
    }

    /// Number of frames in one cycle (N)
    pub fn frame_count(&self) -> usize {
        self.components.len()
    }

    /// Time step between frames (2π / N)
    pub fn time_step(&self) -> f64 {
        TAU / self.frame_count().max(1) as f64
    }

    /// Current time parameter
    pub fn time(&self) -> f64 {
        self.frame_index as f64 * self.time_step()
    }

    pub fn is_complete(&self) -> bool {
        self.cycle_complete
    }

    /// Traced path in drawing order (oldest first)
    pub fn path(&self) -> &[DVec2] {
        &self.path
    }

    pub fn components(&self) -> &[EpicycleComponent] {
        &self.components
    }

    /// Compute the current frame, record its tip and advance time.
    ///
    /// Returns `None` once the cycle is complete.
    pub fn step(&mut self) -> Option<Frame> {
        if self.cycle_complete || self.components.is_empty() {
            return None;
        }

        let t = self.time();
        let links = chain(&self.components, self.origin, t, self.rotation);
        let tip = links.last().map_or(self.origin, |link| link.tip);
        self.path.push(tip);

        let frame = Frame {
            index: self.frame_index,
            t,
            links,
            tip,
        };

        // Counting frames instead of accumulating t avoids an extra frame from rounding
        self.frame_index += 1;
        if self.frame_index >= self.frame_count() {
            self.cycle_complete = true;
        }

        Some(frame)
    }

    /// Reset time and traced path, keeping the decomposition
    pub fn restart(&mut self) {
        self.frame_index = 0;
        self.path.clear();
        self.cycle_complete = false;
    }
}

impl Iterator for EpicycleAnimation {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;
    use crate::epicycle::decompose_epicycles;

    fn triangle() -> Vec<Complex> {
        vec![
            Complex::new(0.0, -40.0),
            Complex::new(35.0, 20.0),
            Complex::new(-35.0, 20.0),
        ]
    }

    #[test]
    fn test_full_cycle_retraces_points() {
        let points = triangle();
        let components = decompose_epicycles(&points).unwrap();
        let mut animation = EpicycleAnimation::new(components, DVec2::ZERO, 0.0);

        let frames: Vec<Frame> = animation.by_ref().collect();
        assert_eq!(frames.len(), points.len());
        assert!(animation.is_complete());
        assert!(animation.step().is_none());

        for (tip, p) in animation.path().iter().zip(points.iter()) {
            assert!((tip.x - p.re).abs() < 1e-9);
            assert!((tip.y - p.im).abs() < 1e-9);
        }
    }

    #[test]
    fn test_time_advances_by_two_pi_over_n() {
        let components = decompose_epicycles(&triangle()).unwrap();
        let mut animation = EpicycleAnimation::new(components, DVec2::new(5.0, 5.0), 0.0);

        let first = animation.step().unwrap();
        let second = animation.step().unwrap();
        assert_eq!(first.index, 0);
        assert_eq!(first.t, 0.0);
        assert!((second.t - TAU / 3.0).abs() < 1e-12);
        assert_eq!(first.links[0].center, DVec2::new(5.0, 5.0));
    }

    #[test]
    fn test_restart_clears_state() {
        let components = decompose_epicycles(&triangle()).unwrap();
        let mut animation = EpicycleAnimation::new(components, DVec2::ZERO, 0.0);
        while animation.step().is_some() {}

        animation.restart();
        assert!(!animation.is_complete());
        assert!(animation.path().is_empty());
        assert_eq!(animation.time(), 0.0);
        assert!(animation.step().is_some());
    }

    #[test]
    fn test_rotation_turns_whole_figure() {
        let points = triangle();
        let components = decompose_epicycles(&points).unwrap();
        let rotation = 0.5;
        let mut animation = EpicycleAnimation::new(components, DVec2::ZERO, rotation);
        while animation.step().is_some() {}

        let turn = DVec2::from_angle(rotation);
        for (tip, p) in animation.path().iter().zip(points.iter()) {
            let expected = turn.rotate(DVec2::new(p.re, p.im));
            assert!((*tip - expected).length() < 1e-9);
        }
    }
}
