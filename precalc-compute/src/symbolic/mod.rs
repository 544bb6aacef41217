//! Exact symbolic manipulation of polynomial expressions.
//!
//! A parsed [`Expr`](precalc_parser::parser::expr::Expr) can be converted to a [`Polynomial`]
//! with exact rational coefficients, which is the form the linear system solver works with.

pub mod error;
pub mod linear;
pub mod polynomial;

pub use linear::LinearForm;
pub use polynomial::{Monomial, Polynomial};
