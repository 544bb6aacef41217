use std::{fmt, ops::Range};
use crate::parser::{
    binary::Binary,
    expr::{Expr, Primary},
    error::Error,
    token::op::UnaryOp,
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or lower precedence expressions.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        match input.try_parse::<Self>() {
            Ok(unary) => return Ok(Expr::Unary(unary)),
            Err(err) if err.fatal => return Err(err),
            Err(_) => {},
        }

        input.try_parse::<Primary>().map(Into::into)
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = input.try_parse::<UnaryOp>()?;

        // the operand extends over every operator that binds tighter than the unary operator, so
        // `-x^2` is `-(x^2)`, while `-2x` is `(-2)x`
        let operand = {
            let lhs = input.try_parse_with_fn(Unary::parse_or_lower)?;
            Binary::parse_expr(input, lhs, op.precedence())?
        };

        Ok(Self {
            span: op.span.start..operand.span().end,
            operand: Box::new(operand),
            op,
        })
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.op, self.operand)
    }
}
