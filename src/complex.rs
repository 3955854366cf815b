//! Complex number value type used by the direct transforms.
//!
//! Values are immutable: every operation returns a new `Complex` and never
//! touches its operands.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use rustfft::num_complex::Complex64;

/// Complex number in rectangular form (double precision)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex { re: 0.0, im: 0.0 };

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// Complex value with zero imaginary part
    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Unit phasor `cos(angle) + i·sin(angle)`
    pub fn expi(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { re: cos, im: sin }
    }

    /// Componentwise sum
    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    /// Complex product: (ac - bd) + (ad + bc)i
    pub fn multiply(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Multiply both parts by a real factor
    pub fn scale(self, factor: f64) -> Complex {
        Complex::new(self.re * factor, self.im * factor)
    }

    /// Euclidean length `sqrt(re² + im²)`, always >= 0
    pub fn magnitude(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Squared magnitude (energy of a single coefficient)
    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Principal argument `atan2(im, re)` in (-π, π].
    ///
    /// At the origin this returns 0; callers reading phase off tiny
    /// coefficients must tolerate an arbitrary angle.
    pub fn phase(self) -> f64 {
        self.im.atan2(self.re)
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::add(self, rhs)
    }
}

impl AddAssign for Complex {
    fn add_assign(&mut self, rhs: Complex) {
        *self = Complex::add(*self, rhs);
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        self.multiply(rhs)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, Complex::add)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Complex::from_real(re)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Complex::new(re, im)
    }
}

impl From<Complex64> for Complex {
    fn from(c: Complex64) -> Self {
        Complex::new(c.re, c.im)
    }
}

impl From<Complex> for Complex64 {
    fn from(c: Complex) -> Self {
        Complex64::new(c.re, c.im)
    }
}
