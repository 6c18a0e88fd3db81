//! Complex number value type used for every cell of the augmented matrix.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub, SubAssign};
use std::str::FromStr;

use complex_solver_parser::{ComplexLiteral, ParseError, ParseResult};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::formatting::format_float;

/// Complex number with `f64` components.
///
/// Equality is exact on both components; there is no tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    pub const I: Complex = Complex::new(0.0, 1.0);

    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub const fn from_real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Parse `3`, `-2i`, `i`, `3+4i`, `5-i` and similar literals.
    pub fn parse(text: &str) -> ParseResult<Self> {
        ComplexLiteral::parse(text).map(Self::from)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self {
            re: self.re + other.re,
            im: self.im + other.im,
        }
    }

    pub fn subtract(self, other: Self) -> Self {
        Self {
            re: self.re - other.re,
            im: self.im - other.im,
        }
    }

    pub fn multiply(self, other: Self) -> Self {
        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        Self {
            re: self.re * other.re - self.im * other.im,
            im: self.re * other.im + self.im * other.re,
        }
    }

    /// `self * conj(other) / |other|²`.
    ///
    /// Dividing by zero yields NaN or infinite components rather than an
    /// error; callers treat such a result as invalid.
    pub fn divide(self, other: Self) -> Self {
        let numerator = self.multiply(other.conjugate());
        let denominator = other.modulus().powi(2);
        Self {
            re: numerator.re / denominator,
            im: numerator.im / denominator,
        }
    }

    pub fn conjugate(self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    /// Absolute value `sqrt(re² + im²)`.
    pub fn modulus(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }

    /// Exact zero test, the one used for every pivot decision.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl From<ComplexLiteral> for Complex {
    fn from(literal: ComplexLiteral) -> Self {
        Self::new(literal.real, literal.imaginary)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::from_real(re)
    }
}

impl FromStr for Complex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut text = format_float(self.re);
        if self.im < 0.0 {
            text.push_str(&format_float(self.im));
            text.push('i');
        } else if self.im != 0.0 {
            text.push('+');
            text.push_str(&format_float(self.im));
            text.push('i');
        }
        // Route through `pad` so width/alignment flags apply to the whole number.
        f.pad(&text)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Complex {
        Complex::add(self, rhs)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Complex {
        self.subtract(rhs)
    }
}

impl SubAssign for Complex {
    fn sub_assign(&mut self, rhs: Complex) {
        *self = self.subtract(rhs);
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Complex {
        self.multiply(rhs)
    }
}

impl Div for Complex {
    type Output = Complex;

    fn div(self, rhs: Complex) -> Complex {
        self.divide(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Zero for Complex {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Complex::is_zero(*self)
    }
}

impl One for Complex {
    fn one() -> Self {
        Self::ONE
    }
}
