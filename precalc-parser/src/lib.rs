//! Tokenizer and recursive-descent parser for the text typed into the notebook's text boxes.
//!
//! Two kinds of input are understood: a single expression such as `2x^2 - 3x + 1`, and an
//! equation such as `x + y = 3` (an equation without `=` is read as `expr = 0`). The parser
//! produces an abstract syntax tree whose every node remembers the region of the input it came
//! from, so that later stages can point at the exact sub-expression that failed.
//!
//! ```
//! use precalc_parser::parser::{expr::Expr, Parser};
//!
//! let mut parser = Parser::new("3(x + 1)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.to_string(), "3(x + 1)");
//! ```

pub mod parser;
pub mod tokenizer;
