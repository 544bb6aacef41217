//! All built-in functions that can be called from an expression.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method, and
//! implements the [`Builtin`] trait so that it can be evaluated with arbitrary arguments at
//! runtime.
//!
//! # Example
//!
//! ```
//! use precalc_compute::numerical::{ctxt::Ctxt, eval::Eval};
//! use precalc_parser::parser::{expr::Expr, Parser};
//!
//! let expr = Parser::new("sqrt(16) + abs(-2)").try_parse_full::<Expr>().unwrap();
//! let result = expr.eval(&Ctxt::default()).unwrap();
//! assert_eq!(result.to_string(), "6");
//! ```

#[macro_use]
mod helper;
pub mod miscellaneous;
pub mod power;
pub mod trigonometry;

use crate::numerical::builtin::Builtin;
use std::collections::HashMap;

/// Returns a list of all builtin functions that can be numerically evaluated.
pub fn all() -> HashMap<&'static str, Box<dyn Builtin>> {
    use miscellaneous::*;
    use power::*;
    use trigonometry::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, Box::new($upname) as Box<dyn Builtin>),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "abs" Abs,
        "sqrt" Sqrt,
        "exp" Exp,
        "ln" Ln,
        "log" Log,
        "sin" Sin,
        "cos" Cos,
        "tan" Tan,
    }
}
