//! Exact evaluation, symbolic manipulation, sampling, and closed-form solvers for the precalc
//! notebook.
//!
//! - [`numerical`] evaluates parsed expressions to [`Value`](numerical::value::Value)s, keeping
//!   rational results exact.
//! - [`symbolic`] converts expressions into exact polynomials.
//! - [`solve`] solves 2x2 linear systems, intersects lines, and analyzes quadratics.
//! - [`sample`] evaluates functions at evenly spaced points for plotting.
//!
//! # Example
//!
//! ```
//! use precalc_compute::solve::solve_system;
//! use precalc_parser::parser::{equation::Equation, Parser};
//!
//! let first = Parser::new("x + y - 3").try_parse_full::<Equation>().unwrap();
//! let second = Parser::new("x - y - 1").try_parse_full::<Equation>().unwrap();
//! let solution = solve_system(&first, &second).unwrap();
//! assert_eq!(solution.to_string(), "{x: 2, y: 1}");
//! ```

pub mod consts;
pub mod funcs;
pub mod numerical;
pub mod primitive;
pub mod sample;
pub mod solve;
pub mod symbolic;
