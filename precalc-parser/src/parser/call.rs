use std::{fmt, ops::Range};
use super::{
    error::{kind, Error},
    expr::Expr,
    literal::LitSym,
    token::{CloseParen, OpenParen},
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sqrt(x)` or `log(x, 2)`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns a set of two spans, where the first is the span of the function name (with the
    /// opening parenthesis) and the second is the span of the closing parenthesis.
    pub fn outer_span(&self) -> [Range<usize>; 2] {
        [
            self.name.span.start..self.paren_span.start + 1,
            self.paren_span.end - 1..self.paren_span.end,
        ]
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let open_paren = input.try_parse::<OpenParen>()?;

        // a call with no arguments, like `f()`, is allowed here; the evaluator decides whether
        // the function accepts it
        let args = if input.clone().try_parse::<CloseParen>().is_ok() {
            Vec::new()
        } else {
            input.try_parse_delimited::<Expr>(TokenKind::Comma)?
        };

        let close_paren = input.try_parse::<CloseParen>()
            .map_err(|_| Error::new_fatal(vec![open_paren.span.clone()], kind::UnclosedParenthesis {
                opening: true,
            }))?;

        Ok(Self {
            span: name.span.start..close_paren.span.end,
            name,
            args,
            paren_span: open_paren.span.start..close_paren.span.end,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}(", self.name.name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ")")
    }
}
