use crate::primitive::int;
use rug::{Integer, Rational};
use std::{cmp::Ordering, fmt};

/// Square factors are only searched for up to this number when simplifying a radicand.
const MAX_TRIAL_DIVISOR: u32 = 1 << 16;

/// An exact number of the form `rational + coeff*sqrt(radicand)`.
///
/// The radicand is always a positive integer with no square factors found by trial division, and
/// is `1` exactly when `coeff` is zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surd {
    pub rational: Rational,
    pub coeff: Rational,
    pub radicand: Integer,
}

/// Splits `n` into `(outside, inside)` such that `n = outside^2 * inside`.
fn extract_square(n: Integer) -> (Integer, Integer) {
    if n.is_perfect_square() {
        return (n.sqrt(), int(1));
    }

    let mut outside = int(1);
    let mut inside = n;
    let mut divisor = 2u32;
    while divisor <= MAX_TRIAL_DIVISOR && Integer::from(divisor) * divisor <= inside {
        let square = u64::from(divisor) * u64::from(divisor);
        while inside.is_divisible(&Integer::from(square)) {
            inside /= square;
            outside *= divisor;
        }
        divisor += 1;
    }
    (outside, inside)
}

impl Surd {
    /// Creates a rational surd, with no square root part.
    pub fn from_rational(rational: Rational) -> Self {
        Self {
            rational,
            coeff: Rational::new(),
            radicand: int(1),
        }
    }

    /// Returns the square root of a non-negative rational number, in simplest form. Returns
    /// [`None`] if the number is negative.
    pub fn sqrt(n: &Rational) -> Option<Self> {
        if n.cmp0() == Ordering::Less {
            return None;
        }

        // sqrt(p/q) = sqrt(p*q)/q
        let denom = n.denom().clone();
        let (outside, inside) = extract_square(Integer::from(n.numer() * &denom));
        let coeff = Rational::from((outside, denom));
        if inside == 1 {
            Some(Self::from_rational(coeff))
        } else {
            Some(Self {
                rational: Rational::new(),
                coeff,
                radicand: inside,
            })
        }
    }

    /// Returns true if the surd has no square root part.
    pub fn is_rational(&self) -> bool {
        self.coeff.cmp0().is_eq()
    }

    /// Adds a rational number to the surd.
    pub fn add_rational(mut self, n: &Rational) -> Self {
        self.rational += n;
        self
    }

    /// Multiplies the surd by a rational number.
    pub fn scale(mut self, n: &Rational) -> Self {
        self.rational *= n;
        self.coeff *= n;
        if self.is_rational() {
            self.radicand = int(1);
        }
        self
    }

    /// Returns the negation of the surd.
    pub fn neg(self) -> Self {
        self.scale(&Rational::from(-1))
    }

    /// Returns the approximate value of the surd.
    pub fn to_f64(&self) -> f64 {
        self.rational.to_f64() + self.coeff.to_f64() * self.radicand.to_f64().sqrt()
    }

    /// Formats `|coeff|*sqrt(radicand)`.
    fn fmt_root(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (numer, denom) = (Integer::from(self.coeff.numer().abs_ref()), self.coeff.denom());
        if numer != 1 {
            write!(f, "{}*", numer)?;
        }
        write!(f, "sqrt({})", self.radicand)?;
        if *denom != 1 {
            write!(f, "/{}", denom)?;
        }
        Ok(())
    }
}

impl fmt::Display for Surd {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_rational() {
            return write!(f, "{}", self.rational);
        }

        let root_negative = self.coeff.cmp0() == Ordering::Less;
        match self.rational.cmp0() {
            Ordering::Equal => {
                if root_negative {
                    write!(f, "-")?;
                }
                self.fmt_root(f)
            },
            // both parts negative: the root is written first, as in `-sqrt(5)/2 - 1/2`
            Ordering::Less if root_negative => {
                write!(f, "-")?;
                self.fmt_root(f)?;
                write!(f, " - {}", Rational::from(-&self.rational))
            },
            _ => {
                write!(f, "{} {} ", self.rational, if root_negative { "-" } else { "+" })?;
                self.fmt_root(f)
            },
        }
    }
}
