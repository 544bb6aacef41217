mod binary;
mod call;
mod expr;
mod literal;
mod unary;

use super::{ctxt::Ctxt, error::Error, value::Value};

pub use binary::{add, div, mul, neg, pow, sub};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<Value, Error>;

    /// Evaluate the expression to produce a value, using the default context.
    fn eval_default(&self) -> Result<Value, Error> {
        self.eval(&Default::default())
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use crate::numerical::error::kind::{DivisionByZero, UndefinedFunction, UndefinedVariable};
    use crate::primitive::rational;
    use pretty_assertions::assert_eq;
    use precalc_parser::parser::{expr::Expr, Parser};
    use super::*;

    fn eval_str(input: &str) -> Result<Value, Error> {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        expr.eval_default()
    }

    fn eval_at(input: &str, x: i32) -> Result<Value, Error> {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        expr.eval(&Ctxt::default().with_var("x", Value::from(x)))
    }

    #[test]
    fn binary_expr() {
        assert_eq!(eval_str("1 + 2").unwrap(), Value::from(3));
        assert_eq!(eval_str("1 + 2 * 3").unwrap(), Value::from(7));
    }

    #[test]
    fn division_is_exact() {
        assert_eq!(eval_str("3 * -5 / 4 + 6").unwrap(), Value::Exact(rational((9, 4))));
        assert_eq!(eval_str("1/3 + 1/6").unwrap(), Value::Exact(rational((1, 2))));
    }

    #[test]
    fn decimals_are_exact() {
        assert_eq!(eval_str("0.1 + 0.2").unwrap(), Value::Exact(rational((3, 10))));
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval_str("((1 + 9) / 5) * 3").unwrap(), Value::from(6));
    }

    #[test]
    fn powers() {
        assert_eq!(eval_str("2^10").unwrap(), Value::from(1024));
        assert_eq!(eval_str("2**-2").unwrap(), Value::Exact(rational((1, 4))));
        assert_eq!(eval_str("-2^2").unwrap(), Value::from(-4));
        assert_eq!(eval_str("(-2)^2").unwrap(), Value::from(4));
        assert_eq!(eval_str("2^3^2").unwrap(), Value::from(512));
    }

    #[test]
    fn rational_powers() {
        assert_eq!(eval_str("16^(1/2)").unwrap(), Value::from(4));
        assert_eq!(eval_str("8^(2/3)").unwrap(), Value::from(4));
        assert_float_relative_eq!(eval_str("2^(1/2)").unwrap().to_f64().unwrap(), 2f64.sqrt());
        assert!(!eval_str("(-1)^(1/2)").unwrap().is_real());
    }

    #[test]
    fn square_table() {
        let values = (-5..=5)
            .map(|x| eval_at("x**2", x).unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["25", "16", "9", "4", "1", "0", "1", "4", "9", "16", "25"]);
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(eval_at("2x^2 + 3x - 1", 2).unwrap(), Value::from(13));
        assert_eq!(eval_at("3(x + 1)", 2).unwrap(), Value::from(9));
    }

    #[test]
    fn constants() {
        assert_float_relative_eq!(eval_str("2pi").unwrap().to_f64().unwrap(), std::f64::consts::TAU);
        assert_float_relative_eq!(eval_str("E").unwrap().to_f64().unwrap(), std::f64::consts::E);
    }

    #[test]
    fn functions() {
        assert_eq!(eval_str("sqrt(16) + abs(-2)").unwrap(), Value::from(6));
        assert_eq!(eval_str("log(8, 2)").unwrap(), Value::from(3));
        assert_float_relative_eq!(eval_str("sin(1)").unwrap().to_f64().unwrap(), 1f64.sin());
    }

    #[test]
    fn division_by_zero() {
        let err = eval_at("1/x", 0).unwrap_err();
        assert!(err.is::<DivisionByZero>());
        assert!(eval_str("0^-1").unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn undefined_variable() {
        let err = eval_str("y + 1").unwrap_err();
        assert_eq!(err.spans, vec![0..1]);
        assert_eq!(err.downcast_ref::<UndefinedVariable>().unwrap().name, "y");
    }

    #[test]
    fn undefined_function_suggestions() {
        let err = eval_str("sqr(4)").unwrap_err();
        let kind = err.downcast_ref::<UndefinedFunction>().unwrap();
        assert_eq!(kind.suggestions, vec!["sqrt".to_string()]);
    }

    #[test]
    fn wrong_argument_count() {
        assert!(eval_str("sqrt(1, 2)").is_err());
        assert!(eval_str("sin()").is_err());
    }

    #[test]
    fn ln_of_zero() {
        assert!(eval_str("ln(0)").is_err());
    }
}
