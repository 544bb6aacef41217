//! Functions related to powers, exponentiation, logarithms, and roots.

use crate::numerical::{
    builtin::{check, error::BuiltinError, Builtin, BuiltinParam, ParamKind},
    error::kind::{InvalidLogarithmBase, LogarithmOfZero},
    value::Value,
};
use crate::primitive::{complex, exact_root, float, int, is_integer};
use rug::Rational;
use std::cmp::Ordering;
use super::helper::map_inexact;

/// The square root function, `sqrt(n)`.
///
/// Perfect squares produce exact results, and negative numbers produce imaginary results.
#[derive(Debug)]
pub struct Sqrt;

impl Sqrt {
    pub fn eval_static(n: Value) -> Value {
        match n {
            Value::Exact(n) if n.cmp0() != Ordering::Less => match exact_root(&n, 2) {
                Some(root) => Value::Exact(root),
                None => Value::Real(float(&n).sqrt()),
            },
            Value::Exact(n) => match exact_root(&Rational::from(-&n), 2) {
                Some(root) => Value::Complex(complex((0, &root))),
                None => Value::Complex(complex(&n).sqrt()),
            },
            Value::Real(n) if n.is_sign_negative() && !n.is_zero() => {
                Value::Complex(complex(n).sqrt())
            },
            n => map_inexact(n, |n| n.sqrt(), |c| c.sqrt()),
        }
    }
}

/// The exponential function, `exp(n)`.
#[derive(Debug)]
pub struct Exp;

impl Exp {
    pub fn eval_static(n: Value) -> Value {
        if n.is_zero() {
            return Value::Exact(Rational::from(1));
        }
        map_inexact(n, |n| n.exp(), |c| c.exp())
    }
}

unary_builtin! {
    "sqrt" Sqrt,
    "exp" Exp,
}

/// Computes the natural logarithm of a value that is known to be non-zero.
fn ln_nonzero(n: Value) -> Value {
    match n {
        Value::Exact(n) if n == 1 => Value::Exact(Rational::new()),
        Value::Exact(n) if n.cmp0() == Ordering::Less => Value::Complex(complex(&n).ln()),
        Value::Real(n) if n.is_sign_negative() => Value::Complex(complex(n).ln()),
        n => map_inexact(n, |n| n.ln(), |c| c.ln()),
    }
}

/// The natural logarithm, `ln(n)`.
///
/// The logarithm of a negative number is its principal complex value.
#[derive(Debug)]
pub struct Ln;

impl Ln {
    pub fn eval_static(n: Value) -> Result<Value, BuiltinError> {
        if n.is_zero() {
            return Err(BuiltinError::specific(LogarithmOfZero { name: "ln" }));
        }
        Ok(ln_nonzero(n))
    }
}

impl Builtin for Ln {
    fn name(&self) -> &'static str {
        "ln"
    }

    fn sig(&self) -> &'static [BuiltinParam] {
        &[BuiltinParam { name: "n", kind: ParamKind::Required }]
    }

    fn sig_str(&self) -> &'static str {
        "ln(n)"
    }

    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        let [n] = check::exact::<1>(self, args)?;
        Self::eval_static(n)
    }
}

/// The logarithm function, `log(n, base)`. Without a base, this is the natural logarithm.
///
/// If `n` is an exact integer power of an exact integer base, the result is exact.
#[derive(Debug)]
pub struct Log;

impl Log {
    /// Returns `k` if `n == base^k` for a small non-negative integer `k`.
    fn exact_integer_log(n: &Rational, base: &Rational) -> Option<u32> {
        if !is_integer(n) || !is_integer(base) || *base <= 1 || *n < 1 {
            return None;
        }

        let (n, base) = (n.numer(), base.numer());
        let mut power = int(1);
        let mut k = 0;
        while power < *n {
            power *= base;
            k += 1;
        }
        (power == *n).then_some(k)
    }

    pub fn eval_static(n: Value, base: Option<Value>) -> Result<Value, BuiltinError> {
        if n.is_zero() {
            return Err(BuiltinError::specific(LogarithmOfZero { name: "log" }));
        }

        let Some(base) = base else {
            return Ok(ln_nonzero(n));
        };

        let valid_base = match &base {
            Value::Exact(b) => b.cmp0() == Ordering::Greater && *b != 1,
            Value::Real(b) => b.is_sign_positive() && !b.is_zero() && *b != 1,
            Value::Complex(_) => false,
        };
        if !valid_base {
            return Err(BuiltinError::specific(InvalidLogarithmBase));
        }

        if let (Value::Exact(n), Value::Exact(b)) = (&n, &base) {
            if let Some(k) = Self::exact_integer_log(n, b) {
                return Ok(Value::Exact(Rational::from(k)));
            }
        }

        let denom = ln_nonzero(base);
        Ok(match ln_nonzero(n) {
            Value::Complex(c) => Value::Complex(c / complex(denom.into_real().unwrap_or_else(|| float(1)))),
            num => {
                let num = num.into_real().unwrap_or_else(|| float(0));
                let denom = denom.into_real().unwrap_or_else(|| float(1));
                Value::Real(num / denom)
            },
        })
    }
}

impl Builtin for Log {
    fn name(&self) -> &'static str {
        "log"
    }

    fn sig(&self) -> &'static [BuiltinParam] {
        &[
            BuiltinParam { name: "n", kind: ParamKind::Required },
            BuiltinParam { name: "base", kind: ParamKind::Optional },
        ]
    }

    fn sig_str(&self) -> &'static str {
        "log(n, base = E)"
    }

    fn eval(&self, args: Vec<Value>) -> Result<Value, BuiltinError> {
        check::arity(self, args.len())?;
        let mut args = args.into_iter();
        match args.next() {
            Some(n) => Self::eval_static(n, args.next()),
            None => check::exact::<1>(self, Vec::new()).map(|[n]| n),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::primitive::rational;
    use super::*;

    #[test]
    fn sqrt_of_perfect_square() {
        assert_eq!(Sqrt::eval_static(Value::Exact(rational(16))), Value::Exact(rational(4)));
        assert_eq!(Sqrt::eval_static(Value::Exact(rational((9, 4)))), Value::Exact(rational((3, 2))));
    }

    #[test]
    fn sqrt_of_negative() {
        let result = Sqrt::eval_static(Value::Exact(rational(-4)));
        assert_eq!(result.to_string(), "2*I");
        assert!(!result.is_real());
    }

    #[test]
    fn sqrt_of_non_square() {
        let result = Sqrt::eval_static(Value::Exact(rational(2)));
        assert_eq!(result.to_f64(), Some(2f64.sqrt()));
    }

    #[test]
    fn exp_of_zero() {
        assert_eq!(Exp::eval_static(Value::Exact(rational(0))), Value::Exact(rational(1)));
    }

    #[test]
    fn ln_of_one_and_zero() {
        assert_eq!(Ln::eval_static(Value::Exact(rational(1))).unwrap(), Value::Exact(rational(0)));
        assert!(Ln::eval_static(Value::Exact(rational(0))).is_err());
    }

    #[test]
    fn log_with_base() {
        let result = Log::eval_static(Value::Exact(rational(8)), Some(Value::Exact(rational(2))));
        assert_eq!(result.unwrap(), Value::Exact(rational(3)));

        let result = Log::eval_static(Value::Exact(rational(10)), Some(Value::Exact(rational(2))));
        assert_float_relative_eq!(result.unwrap().to_f64().unwrap(), 10f64.log2());
    }

    #[test]
    fn log_invalid_base() {
        assert!(Log::eval_static(Value::Exact(rational(8)), Some(Value::Exact(rational(1)))).is_err());
    }

    #[test]
    fn log_arity() {
        assert!(Log.eval(vec![]).is_err());
        assert!(Log.eval(vec![Value::from(1), Value::from(2), Value::from(3)]).is_err());
    }
}
