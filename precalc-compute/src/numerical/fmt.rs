//! Formatting of [`Value`]s.
//!
//! Exact values are printed as reduced fractions (`5/2`, `-3`). Inexact values are printed as the
//! shortest decimal that round-trips through an `f64`. Complex values use `I` for the imaginary
//! unit, as in `1 + 2*I`.

use rug::{Complex, Float};
use std::fmt::{Formatter, Result};
use super::value::Value;

/// Formats a real float.
fn fmt_float(n: &Float, f: &mut Formatter) -> Result {
    let n = n.to_f64();
    if n == 0.0 {
        // avoid printing `-0`
        write!(f, "0")
    } else {
        write!(f, "{}", n)
    }
}

/// Formats the coefficient of the imaginary unit.
fn fmt_imag(im: f64, f: &mut Formatter) -> Result {
    if im == 1.0 {
        write!(f, "I")
    } else {
        write!(f, "{}*I", im)
    }
}

/// Formats a complex number.
fn fmt_complex(c: &Complex, f: &mut Formatter) -> Result {
    let (re, im) = (c.real(), c.imag().to_f64());
    if im == 0.0 {
        return fmt_float(re, f);
    }

    if re.is_zero() {
        if im < 0.0 {
            write!(f, "-")?;
        }
        return fmt_imag(im.abs(), f);
    }

    fmt_float(re, f)?;
    if im < 0.0 {
        write!(f, " - ")?;
    } else {
        write!(f, " + ")?;
    }
    fmt_imag(im.abs(), f)
}

/// Formats a [`Value`].
pub fn fmt_value(value: &Value, f: &mut Formatter) -> Result {
    match value {
        Value::Exact(n) => write!(f, "{}", n),
        Value::Real(n) => fmt_float(n, f),
        Value::Complex(c) => fmt_complex(c, f),
    }
}

#[cfg(test)]
mod tests {
    use crate::primitive::{complex, float, rational};
    use super::*;

    #[test]
    fn exact() {
        assert_eq!(Value::Exact(rational((5, 2))).to_string(), "5/2");
        assert_eq!(Value::Exact(rational(-3)).to_string(), "-3");
        assert_eq!(Value::Exact(rational((4, 2))).to_string(), "2");
    }

    #[test]
    fn real() {
        assert_eq!(Value::Real(float(0.5)).to_string(), "0.5");
        assert_eq!(Value::Real(float(2)).to_string(), "2");
        assert_eq!(Value::Real(-float(0)).to_string(), "0");
    }

    #[test]
    fn complex_numbers() {
        assert_eq!(Value::Complex(complex((1, 2))).to_string(), "1 + 2*I");
        assert_eq!(Value::Complex(complex((1.5, -1))).to_string(), "1.5 - I");
        assert_eq!(Value::Complex(complex((0, -2))).to_string(), "-2*I");
        assert_eq!(Value::Complex(complex((3, 0))).to_string(), "3");
    }
}
