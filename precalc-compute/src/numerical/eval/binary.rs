use precalc_parser::parser::{binary::Binary, token::op::BinOpKind};
use crate::numerical::{
    ctxt::Ctxt,
    error::{kind::DivisionByZero, Error},
    eval::Eval,
    value::Value,
};
use crate::primitive::{complex, exact_root, float, is_integer};
use rug::{ops::Pow, Complex, Float, Rational};
use std::cmp::Ordering;

/// Exponents larger than this (in absolute value) are computed with floats instead of exactly,
/// to keep the size of exact results reasonable.
const MAX_EXACT_EXPONENT: u32 = 1 << 12;

/// Two operands converted to the same representation.
enum Promoted {
    Exact(Rational, Rational),
    Real(Float, Float),
    Complex(Complex, Complex),
}

/// Converts a value to a float. The imaginary part of a complex value is discarded.
fn into_float(value: Value) -> Float {
    match value {
        Value::Exact(n) => float(&n),
        Value::Real(n) => n,
        Value::Complex(c) => c.into_real_imag().0,
    }
}

/// Converts a value to a complex number.
fn into_complex(value: Value) -> Complex {
    match value {
        Value::Exact(n) => complex(&n),
        Value::Real(n) => complex(n),
        Value::Complex(c) => c,
    }
}

/// Converts both operands to the least general representation that can hold both of them.
fn promote(left: Value, right: Value) -> Promoted {
    match (left, right) {
        (Value::Exact(l), Value::Exact(r)) => Promoted::Exact(l, r),
        (l @ Value::Complex(_), r) | (l, r @ Value::Complex(_)) => {
            Promoted::Complex(into_complex(l), into_complex(r))
        },
        (l, r) => Promoted::Real(into_float(l), into_float(r)),
    }
}

macro_rules! arithmetic {
    ($($name:ident $op:tt; $doc:literal),* $(,)?) => {
        $(
            #[doc = $doc]
            pub fn $name(left: Value, right: Value) -> Value {
                match promote(left, right) {
                    Promoted::Exact(l, r) => Value::Exact(l $op r),
                    Promoted::Real(l, r) => Value::Real(l $op r),
                    Promoted::Complex(l, r) => Value::Complex(l $op r),
                }
            }
        )*
    };
}

arithmetic! {
    add +; "Adds two values.",
    sub -; "Subtracts the second value from the first.",
    mul *; "Multiplies two values.",
}

/// Negates a value.
pub fn neg(value: Value) -> Value {
    match value {
        Value::Exact(n) => Value::Exact(-n),
        Value::Real(n) => Value::Real(-n),
        Value::Complex(c) => Value::Complex(-c),
    }
}

/// Divides the first value by the second.
pub fn div(left: Value, right: Value) -> Result<Value, DivisionByZero> {
    if right.is_zero() {
        return Err(DivisionByZero);
    }

    Ok(match promote(left, right) {
        Promoted::Exact(l, r) => Value::Exact(l / r),
        Promoted::Real(l, r) => Value::Real(l / r),
        Promoted::Complex(l, r) => Value::Complex(l / r),
    })
}

/// Returns true if the value is a negative real number, or has a negative real part.
fn is_negative(value: &Value) -> bool {
    match value {
        Value::Exact(n) => n.cmp0() == Ordering::Less,
        Value::Real(n) => *n < 0,
        Value::Complex(c) => *c.real() < 0,
    }
}

/// Raises an exact base to an exact exponent, staying exact whenever the result is rational.
fn pow_exact(base: Rational, exp: Rational) -> Value {
    if let (Some(p), Some(q)) = (exp.numer().to_i32(), exp.denom().to_u32()) {
        if p.unsigned_abs() <= MAX_EXACT_EXPONENT && q <= MAX_EXACT_EXPONENT {
            if q == 1 {
                return Value::Exact(base.pow(p));
            }

            if base.cmp0() != Ordering::Less {
                if let Some(root) = exact_root(&base, q) {
                    return Value::Exact(root.pow(p));
                }
            }
        }
    }

    pow_inexact(Value::Exact(base), Value::Exact(exp))
}

/// Raises a base to an exponent with floats, moving to the complex plane when the base is
/// negative and the exponent is not an integer.
fn pow_inexact(base: Value, exp: Value) -> Value {
    let integer_exp = match &exp {
        Value::Exact(n) => is_integer(n),
        Value::Real(n) => n.is_integer(),
        Value::Complex(_) => false,
    };
    let leaves_real_line = is_negative(&base) && !integer_exp;

    match (base, exp) {
        (base, exp) if leaves_real_line => {
            Value::Complex(into_complex(base).pow(into_complex(exp)))
        },
        (base, exp) => match promote(base, exp) {
            Promoted::Exact(b, e) => Value::Real(float(&b).pow(float(&e))),
            Promoted::Real(b, e) => Value::Real(b.pow(e)),
            Promoted::Complex(b, e) => Value::Complex(b.pow(e)),
        },
    }
}

/// Raises the first value to the power of the second.
///
/// Zero raised to a negative power is a division by zero.
pub fn pow(base: Value, exp: Value) -> Result<Value, DivisionByZero> {
    if base.is_zero() && is_negative(&exp) {
        return Err(DivisionByZero);
    }

    Ok(match (base, exp) {
        (Value::Exact(base), Value::Exact(exp)) => pow_exact(base, exp),
        (base, exp) => pow_inexact(base, exp),
    })
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error> {
        let left = self.lhs.eval(ctxt)?;
        let right = self.rhs.eval(ctxt)?;
        let result = match self.op.kind {
            BinOpKind::Add => Ok(add(left, right)),
            BinOpKind::Sub => Ok(sub(left, right)),
            BinOpKind::Mul => Ok(mul(left, right)),
            BinOpKind::Div => div(left, right),
            BinOpKind::Exp => pow(left, right),
        };
        result.map_err(|kind| Error::new(vec![self.span()], kind))
    }
}
