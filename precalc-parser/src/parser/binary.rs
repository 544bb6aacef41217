use std::{fmt, ops::Range};
use super::{
    expr::{Expr, Primary},
    error::{kind, Error},
    token::op::{BinOp, BinOpKind},
    unary::Unary,
    Associativity,
    Parser,
    Precedence,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

/// Tries to parse a primary expression that directly follows another expression, which would
/// make the two operands of an implicit multiplication. Fatal errors are propagated; other
/// errors mean there is no such expression.
fn try_parse_implicit_operand(input: &mut Parser) -> Result<Option<Expr>, Error> {
    match input.try_parse::<Primary>() {
        Ok(primary) => Ok(Some(primary.into())),
        Err(err) if err.fatal => Err(err),
        Err(_) => Ok(None),
    }
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    fn complete_rhs(input: &mut Parser, lhs: Expr, mut op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // before creating the `lhs op rhs` node, we should check the precedence of the
            // following operator, if any
            // this is because we can't parse an expression like `3 + 4 * 5`, as (3 + 4) * 5

            // clone the input stream to emulate peeking
            let mut input_ahead = input.clone();
            if let Ok(next_op) = input_ahead.try_parse::<BinOp>() {
                let binds_tighter = next_op.precedence() > precedence
                    || (next_op.precedence() == precedence
                        && next_op.associativity() == Associativity::Right);
                if binds_tighter {
                    // parse the expression of the next operator starting with `rhs` first
                    rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
                } else {
                    // this operator has lower precedence, or equal precedence and
                    // left-associativity; this is in scenarios like:
                    // `1 * 2 + 3` or `1 * 2 * 3`
                    //
                    // so just break out of the loop and let `lhs` become `1 * 2`
                    // we will parse this operator on the next iteration of the outside loop
                    break;
                }
            } else {
                // there is no operator; check if there is a primary expression instead
                // if there is, this is implicit multiplication
                //
                // first, check if the previous operator has higher or equal precedence; if so, we
                // cannot give priority to implicit multiplication
                if precedence >= Precedence::Factor {
                    break;
                }

                match try_parse_implicit_operand(input)? {
                    Some(expr) => rhs = Self::complete_rhs(input, rhs, implicit_op(), expr)?,
                    None => break,
                }
            }
        }

        // create the binary node representing `lhs op rhs`
        if op.implicit {
            op.span = lhs.span().end..rhs.span().start;
        }
        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// Parses the operators and operands that follow an already parsed left-hand side, as long
    /// as the operators have at least the given precedence.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let mut input_ahead = input.clone();
            if let Ok(op) = input_ahead.try_parse_then::<BinOp, _>(|op, input| {
                if op.precedence() >= precedence {
                    Ok(())
                } else {
                    Err(input.error(kind::NonFatal))
                }
            }) {
                input.set_cursor(&input_ahead);
                let rhs = input.try_parse_with_fn(Unary::parse_or_lower)?;
                lhs = Self::complete_rhs(input, lhs, op, rhs)?;
            } else if Precedence::Factor >= precedence {
                // implicit multiplication test
                //
                // ensure that we get here because there is *no* operator, not because the operator
                // has lower precedence
                if input_ahead.try_parse::<BinOp>().is_ok() {
                    break;
                }

                // if there is no expression, there is no implicit multiplication and all our
                // attempts to parse a binary expression fail
                let Some(rhs) = try_parse_implicit_operand(input)? else {
                    break;
                };
                lhs = Self::complete_rhs(input, lhs, implicit_op(), rhs)?;
            } else {
                break;
            }
        }

        Ok(lhs)
    }
}

/// The operator used for implicit multiplication. Its span is filled in when the node is built.
fn implicit_op() -> BinOp {
    BinOp {
        kind: BinOpKind::Mul,
        implicit: true,
        span: 0..0,
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.op.implicit {
            write!(f, "{}{}", self.lhs, self.rhs)
        } else if self.op.kind == BinOpKind::Exp {
            write!(f, "{}{}{}", self.lhs, self.op, self.rhs)
        } else {
            write!(f, "{} {} {}", self.lhs, self.op, self.rhs)
        }
    }
}
