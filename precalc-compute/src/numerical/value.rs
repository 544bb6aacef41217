use crate::primitive::{float, is_zero};
use rug::{Complex, Float, Rational};
use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of evaluating an expression.
///
/// Values are kept exact as long as possible: adding, multiplying, and raising rational numbers
/// to integer powers produces a [`Value::Exact`]. Operations that cannot be exact, such as `sin`
/// of a non-zero number or the square root of a number that is not a perfect square, produce a
/// [`Value::Real`]. Operations whose result leaves the real line produce a [`Value::Complex`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// An exact rational number.
    Exact(Rational),

    /// An arbitrary-precision floating-point number.
    Real(Float),

    /// A complex number.
    Complex(Complex),
}

impl Value {
    /// Returns the typename of this value.
    pub fn typename(&self) -> &'static str {
        match self {
            Value::Exact(_) => "Exact",
            Value::Real(_) => "Real",
            Value::Complex(_) => "Complex",
        }
    }

    /// Consumes and attempts to coerce the value to a real number. **Note that this coercion can
    /// be lossy** if converting an exact rational to a float.
    ///
    /// A complex number with a zero imaginary part is coerced to its real part.
    pub fn coerce_real(self) -> Self {
        match self {
            Value::Exact(n) => Value::Real(float(&n)),
            Value::Complex(c) if c.imag().is_zero() => Value::Real(c.into_real_imag().0),
            _ => self,
        }
    }

    /// Returns the value as a real float, whatever its exactness. Returns [`None`] if the value
    /// has a non-zero imaginary part.
    pub fn into_real(self) -> Option<Float> {
        match self.coerce_real() {
            Value::Real(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value as an [`f64`], or [`None`] if it is not real.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Exact(n) => Some(n.to_f64()),
            Value::Real(n) => Some(n.to_f64()),
            Value::Complex(c) if c.imag().is_zero() => Some(c.real().to_f64()),
            Value::Complex(_) => None,
        }
    }

    /// Returns true if this value is a real number, or can be coerced to one.
    pub fn is_real(&self) -> bool {
        match self {
            Value::Exact(_) | Value::Real(_) => true,
            Value::Complex(c) => c.imag().is_zero(),
        }
    }

    /// Returns true if this value is zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Exact(n) => is_zero(n),
            Value::Real(n) => n.is_zero(),
            Value::Complex(c) => c.real().is_zero() && c.imag().is_zero(),
        }
    }

    /// Returns true if every component of this value is a finite number.
    pub fn is_finite(&self) -> bool {
        match self {
            Value::Exact(_) => true,
            Value::Real(n) => n.is_finite(),
            Value::Complex(c) => c.real().is_finite() && c.imag().is_finite(),
        }
    }
}

impl From<Rational> for Value {
    fn from(n: Rational) -> Self {
        Value::Exact(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Exact(Rational::from(n))
    }
}

impl From<Float> for Value {
    fn from(n: Float) -> Self {
        Value::Real(n)
    }
}

impl From<Complex> for Value {
    fn from(c: Complex) -> Self {
        Value::Complex(c)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        super::fmt::fmt_value(self, f)
    }
}
