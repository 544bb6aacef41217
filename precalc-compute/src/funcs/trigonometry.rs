//! Trigonometric functions. All inputs are in radians.

use crate::numerical::value::Value;
use rug::Rational;
use super::helper::map_inexact;

/// The sine function, `sin(n)`.
#[derive(Debug)]
pub struct Sin;

impl Sin {
    pub fn eval_static(n: Value) -> Value {
        if n.is_zero() {
            return Value::Exact(Rational::new());
        }
        map_inexact(n, |n| n.sin(), |c| c.sin())
    }
}

/// The cosine function, `cos(n)`.
#[derive(Debug)]
pub struct Cos;

impl Cos {
    pub fn eval_static(n: Value) -> Value {
        if n.is_zero() {
            return Value::Exact(Rational::from(1));
        }
        map_inexact(n, |n| n.cos(), |c| c.cos())
    }
}

/// The tangent function, `tan(n)`.
#[derive(Debug)]
pub struct Tan;

impl Tan {
    pub fn eval_static(n: Value) -> Value {
        if n.is_zero() {
            return Value::Exact(Rational::new());
        }
        map_inexact(n, |n| n.tan(), |c| c.tan())
    }
}

unary_builtin! {
    "sin" Sin,
    "cos" Cos,
    "tan" Tan,
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::{consts::PI, primitive::{float, rational}};
    use super::*;

    #[test]
    fn exact_at_zero() {
        assert_eq!(Sin::eval_static(Value::Exact(rational(0))), Value::Exact(rational(0)));
        assert_eq!(Cos::eval_static(Value::Exact(rational(0))), Value::Exact(rational(1)));
        assert_eq!(Tan::eval_static(Value::Exact(rational(0))), Value::Exact(rational(0)));
    }

    #[test]
    fn sin_of_half_pi() {
        let result = Sin::eval_static(Value::Real(float(&*PI) / 2));
        assert_float_relative_eq!(result.to_f64().unwrap(), 1.0);
    }

    #[test]
    fn cos_of_one() {
        let result = Cos::eval_static(Value::Exact(rational(1)));
        assert_float_relative_eq!(result.to_f64().unwrap(), 1f64.cos());
    }
}
