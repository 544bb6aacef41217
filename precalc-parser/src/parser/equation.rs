use std::{collections::BTreeSet, fmt, ops::Range};
use super::{
    error::{kind, Error},
    expr::Expr,
    literal::Literal,
    token::Eq,
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation, such as `x + y = 3`.
///
/// The right-hand side is optional: an equation written without `=`, such as `x - y - 1`, means
/// that the expression is equal to zero.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation, if one was written.
    pub rhs: Option<Expr>,

    /// The region of the source code that this equation was parsed from.
    pub span: Range<usize>,
}

impl Equation {
    /// Returns the span of the equation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Returns the names of every symbol used as a value on either side of the equation, in
    /// sorted order. Function names are not included.
    pub fn symbols(&self) -> BTreeSet<String> {
        std::iter::once(&self.lhs)
            .chain(self.rhs.as_ref())
            .flat_map(Expr::post_order_iter)
            .filter_map(|expr| match expr {
                Expr::Literal(Literal::Symbol(sym)) => Some(sym.name.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Parse for Equation {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = input.try_parse::<Expr>()?;
        let rhs = match input.try_parse::<Eq>() {
            Ok(_) => Some(input.try_parse::<Expr>()?),
            Err(_) => None,
        };

        if let Ok(eq) = input.try_parse::<Eq>() {
            return Err(Error::new_fatal(vec![eq.span], kind::ChainedEquation));
        }

        let end = rhs.as_ref().map_or(lhs.span().end, |rhs| rhs.span().end);
        Ok(Self {
            span: lhs.span().start..end,
            lhs,
            rhs,
        })
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.rhs {
            Some(rhs) => write!(f, "{} = {}", self.lhs, rhs),
            None => write!(f, "{}", self.lhs),
        }
    }
}
