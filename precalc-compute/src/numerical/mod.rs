//! Numerical evaluation of parsed expressions.
//!
//! Expressions are evaluated with the [`Eval`](eval::Eval) trait against a [`Ctxt`](ctxt::Ctxt),
//! which holds the values of variables and the builtin functions. Values stay exact rationals for
//! as long as possible.

pub mod builtin;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod fmt;
pub mod value;
