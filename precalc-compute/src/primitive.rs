//! Functions to construct [`Integer`]s, [`Rational`]s, [`Float`]s, and [`Complex`] numbers from
//! various types.

use rug::{ops::Pow, Assign, Complex, Float, Integer, Rational};

/// The number of bits of precision to use when computing inexact values.
pub const PRECISION: u32 = 1 << 9;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates a [`Rational`] from the decimal digits of a number literal, such as `16`, `2.5`, or
/// `.125`. The conversion is exact: `2.5` becomes `5/2`.
///
/// Characters other than ASCII digits and the first `.` are ignored.
pub fn rational_from_decimal(s: &str) -> Rational {
    let mut digits = int(0);
    let mut scale = 0u32;
    let mut seen_point = false;

    for c in s.chars() {
        if let Some(d) = c.to_digit(10) {
            digits *= 10;
            digits += d;
            if seen_point {
                scale += 1;
            }
        } else if c == '.' && !seen_point {
            seen_point = true;
        }
    }

    let denom = Integer::from(Integer::u_pow_u(10, scale));
    Rational::from((digits, denom))
}

/// Creates a [`Float`] with the given value.
pub fn float<T>(n: T) -> Float
where
    Float: Assign<T>,
{
    Float::with_val(PRECISION, n)
}

/// Creates a [`Complex`] with the given value.
pub fn complex<T>(n: T) -> Complex
where
    Complex: Assign<T>,
{
    Complex::with_val(PRECISION, n)
}

/// Returns true if the rational number is zero.
pub fn is_zero(n: &Rational) -> bool {
    n.cmp0() == std::cmp::Ordering::Equal
}

/// Returns true if the rational number has a denominator of one.
pub fn is_integer(n: &Rational) -> bool {
    *n.denom() == 1
}

/// Returns the exact `root`th root of a non-negative rational number, if both its numerator and
/// denominator are perfect powers.
pub fn exact_root(n: &Rational, root: u32) -> Option<Rational> {
    if root == 0 || n.cmp0() == std::cmp::Ordering::Less {
        return None;
    }

    let exact = |value: &Integer| {
        let candidate = value.clone().root(root);
        if candidate.clone().pow(root) == *value {
            Some(candidate)
        } else {
            None
        }
    };

    let numer = exact(n.numer())?;
    let denom = exact(n.denom())?;
    Some(Rational::from((numer, denom)))
}
