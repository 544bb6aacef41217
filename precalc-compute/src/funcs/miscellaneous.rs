//! Miscellaneous functions.

use crate::numerical::value::Value;
use rug::Float;

/// The absolute value function, `abs(n)`.
#[derive(Debug)]
pub struct Abs;

impl Abs {
    pub fn eval_static(n: Value) -> Value {
        match n {
            Value::Exact(n) => Value::Exact(n.abs()),
            Value::Real(n) => Value::Real(n.abs()),
            Value::Complex(c) => Value::Real(Float::with_val(c.prec().0, c.abs_ref())),
        }
    }
}

unary_builtin! {
    "abs" Abs,
}

#[cfg(test)]
mod tests {
    use crate::primitive::{complex, rational};
    use super::*;

    #[test]
    fn abs_is_exact() {
        assert_eq!(Abs::eval_static(Value::Exact(rational((-5, 2)))), Value::Exact(rational((5, 2))));
    }

    #[test]
    fn abs_of_complex() {
        assert_eq!(Abs::eval_static(Value::Complex(complex((3, 4)))).to_f64(), Some(5.0));
    }
}
