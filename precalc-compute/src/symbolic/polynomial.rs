use precalc_error::Error;
use precalc_parser::parser::{
    binary::Binary,
    expr::Expr,
    literal::Literal,
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::numerical::{ctxt::Ctxt, error::kind::DivisionByZero, eval::Eval, value::Value};
use crate::primitive::{is_integer, is_zero, rational_from_decimal};
use rug::{ops::Pow, Rational};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
    fmt,
};
use super::error::NotPolynomial;

/// The largest exponent that can be expanded when converting an expression to a polynomial.
const MAX_EXPANDED_EXPONENT: u32 = 64;

/// A product of symbols raised to positive integer powers, such as `x**2*y`. The empty monomial
/// is the constant `1`.
pub type Monomial = BTreeMap<String, u32>;

/// Returns the total degree of a monomial.
fn total_degree(monomial: &Monomial) -> u32 {
    monomial.values().sum()
}

/// Compares two monomials in graded lexicographic order: higher total degree first, then higher
/// powers of alphabetically earlier symbols first, so that `x**2` comes before `x*y`.
fn grlex(a: &Monomial, b: &Monomial) -> Ordering {
    total_degree(b).cmp(&total_degree(a)).then_with(|| {
        let symbols = a.keys().chain(b.keys()).collect::<BTreeSet<_>>();
        symbols.into_iter()
            .map(|symbol| {
                let exp = |m: &Monomial| m.get(symbol).copied().unwrap_or(0);
                exp(b).cmp(&exp(a))
            })
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Multiplies two monomials.
fn mul_monomials(a: &Monomial, b: &Monomial) -> Monomial {
    let mut result = a.clone();
    for (symbol, exp) in b {
        *result.entry(symbol.clone()).or_insert(0) += exp;
    }
    result
}

/// A polynomial in any number of symbols, with exact rational coefficients.
///
/// Polynomials are always kept in expanded form: `(x + 1)^2` is stored as `x**2 + 2*x + 1`. Terms
/// with a zero coefficient are never stored, so two polynomials are equal exactly when they
/// represent the same function.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Polynomial {
    terms: BTreeMap<Monomial, Rational>,
}

impl Polynomial {
    /// Creates the zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Creates a constant polynomial.
    pub fn constant(n: Rational) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::new(), n);
        poly
    }

    /// Creates a polynomial consisting of a single symbol.
    pub fn symbol(name: &str) -> Self {
        let mut poly = Self::zero();
        poly.add_term(Monomial::from([(name.to_string(), 1)]), Rational::from(1));
        poly
    }

    /// Adds `coeff * monomial` to the polynomial, dropping the term if it cancels out.
    fn add_term(&mut self, monomial: Monomial, coeff: Rational) {
        let entry = self.terms.entry(monomial).or_default();
        *entry += coeff;
        if is_zero(entry) {
            self.terms.retain(|_, coeff| !is_zero(coeff));
        }
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the value of the polynomial if it does not depend on any symbol.
    pub fn as_constant(&self) -> Option<Rational> {
        match self.terms.len() {
            0 => Some(Rational::new()),
            1 => self.terms.get(&Monomial::new()).cloned(),
            _ => None,
        }
    }

    /// Returns the coefficient of the given monomial.
    pub fn coeff(&self, monomial: &Monomial) -> Rational {
        self.terms.get(monomial).cloned().unwrap_or_default()
    }

    /// Returns the coefficient of the given symbol raised to the first power.
    pub fn linear_coeff(&self, symbol: &str) -> Rational {
        self.coeff(&Monomial::from([(symbol.to_string(), 1)]))
    }

    /// Returns the constant term of the polynomial.
    pub fn constant_term(&self) -> Rational {
        self.coeff(&Monomial::new())
    }

    /// Returns the total degree of the polynomial. The zero polynomial has degree zero.
    pub fn degree(&self) -> u32 {
        self.terms.keys().map(total_degree).max().unwrap_or(0)
    }

    /// Returns the symbols the polynomial depends on, in sorted order.
    pub fn symbols(&self) -> BTreeSet<String> {
        self.terms.keys()
            .flat_map(|monomial| monomial.keys().cloned())
            .collect()
    }

    /// Returns the negation of the polynomial.
    pub fn neg(&self) -> Self {
        Self {
            terms: self.terms.iter()
                .map(|(monomial, coeff)| (monomial.clone(), Rational::from(-coeff)))
                .collect(),
        }
    }

    /// Returns the sum of two polynomials.
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        for (monomial, coeff) in &other.terms {
            result.add_term(monomial.clone(), coeff.clone());
        }
        result
    }

    /// Returns the difference of two polynomials.
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Returns the product of two polynomials.
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                result.add_term(mul_monomials(m1, m2), Rational::from(c1 * c2));
            }
        }
        result
    }

    /// Returns the product of the polynomial and a number.
    pub fn scale(&self, factor: &Rational) -> Self {
        self.mul(&Self::constant(factor.clone()))
    }

    /// Raises the polynomial to a non-negative integer power.
    pub fn pow(&self, exp: u32) -> Self {
        (0..exp).fold(Self::constant(Rational::from(1)), |acc, _| acc.mul(self))
    }

    /// Substitutes exact values for symbols, and returns the resulting polynomial.
    pub fn subs(&self, values: &BTreeMap<String, Rational>) -> Self {
        let mut result = Self::zero();
        for (monomial, coeff) in &self.terms {
            let mut remaining = Monomial::new();
            let mut coeff = coeff.clone();
            for (symbol, exp) in monomial {
                match values.get(symbol) {
                    Some(value) => coeff *= value.clone().pow(*exp),
                    None => {
                        remaining.insert(symbol.clone(), *exp);
                    },
                }
            }
            result.add_term(remaining, coeff);
        }
        result
    }

    /// Converts a parsed expression into a polynomial.
    ///
    /// Function calls are allowed as long as they evaluate to exact rational
    /// numbers, such as `sqrt(4)`. Division is only allowed by a non-zero constant, and
    /// exponents must be non-negative integer constants.
    pub fn from_expr(expr: &Expr) -> Result<Self, Error> {
        match expr {
            Expr::Literal(Literal::Number(num)) => {
                Ok(Self::constant(rational_from_decimal(&num.value)))
            },
            Expr::Literal(Literal::Symbol(sym)) => Ok(Self::symbol(&sym.name)),
            Expr::Paren(paren) => Self::from_expr(paren.innermost()),
            Expr::Call(call) => match call.eval(&Ctxt::default())? {
                Value::Exact(n) => Ok(Self::constant(n)),
                _ => Err(Error::new(vec![call.span()], NotPolynomial {
                    reason: "this function call does not have an exact rational value",
                })),
            },
            Expr::Unary(unary) => {
                let operand = Self::from_expr(&unary.operand)?;
                Ok(match unary.op.kind {
                    UnaryOpKind::Neg => operand.neg(),
                    UnaryOpKind::Pos => operand,
                })
            },
            Expr::Binary(binary) => Self::from_binary(binary),
        }
    }

    fn from_binary(binary: &Binary) -> Result<Self, Error> {
        let lhs = Self::from_expr(&binary.lhs)?;
        let rhs = Self::from_expr(&binary.rhs)?;
        match binary.op.kind {
            BinOpKind::Add => Ok(lhs.add(&rhs)),
            BinOpKind::Sub => Ok(lhs.sub(&rhs)),
            BinOpKind::Mul => Ok(lhs.mul(&rhs)),
            BinOpKind::Div => match rhs.as_constant() {
                Some(divisor) if is_zero(&divisor) => {
                    Err(Error::new(vec![binary.span()], DivisionByZero))
                },
                Some(divisor) => Ok(lhs.scale(&divisor.recip())),
                None => Err(Error::new(vec![binary.rhs.span()], NotPolynomial {
                    reason: "only division by a constant is allowed",
                })),
            },
            BinOpKind::Exp => {
                let exp = rhs.as_constant()
                    .filter(|exp| is_integer(exp) && exp.cmp0() != Ordering::Less)
                    .and_then(|exp| exp.numer().to_u32())
                    .filter(|exp| *exp <= MAX_EXPANDED_EXPONENT)
                    .ok_or_else(|| Error::new(vec![binary.rhs.span()], NotPolynomial {
                        reason: "exponents must be small non-negative integers",
                    }))?;
                Ok(lhs.pow(exp))
            },
        }
    }

    /// Returns the terms of the polynomial in the order they are printed, with the constant term
    /// last.
    fn ordered_terms(&self) -> Vec<(&Monomial, &Rational)> {
        let mut terms = self.terms.iter().collect::<Vec<_>>();
        terms.sort_by(|(a, _), (b, _)| grlex(a, b));

        // a leading negative term followed by a single positive term reads better swapped, as in
        // `3 - y` instead of `-y + 3`
        if let [(_, first), (_, second)] = terms.as_slice() {
            if first.cmp0() == Ordering::Less && second.cmp0() == Ordering::Greater {
                terms.swap(0, 1);
            }
        }
        terms
    }
}

/// Formats a single term with a positive coefficient.
fn fmt_term(monomial: &Monomial, coeff: &Rational, f: &mut fmt::Formatter) -> fmt::Result {
    if monomial.is_empty() {
        return write!(f, "{}", coeff);
    }

    let (numer, denom) = (coeff.numer(), coeff.denom());
    if *numer != 1 {
        write!(f, "{}*", numer)?;
    }

    for (i, (symbol, exp)) in monomial.iter().enumerate() {
        if i > 0 {
            write!(f, "*")?;
        }
        write!(f, "{}", symbol)?;
        if *exp > 1 {
            write!(f, "**{}", exp)?;
        }
    }

    if *denom != 1 {
        write!(f, "/{}", denom)?;
    }
    Ok(())
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let terms = self.ordered_terms();
        if terms.is_empty() {
            return write!(f, "0");
        }

        for (i, (monomial, coeff)) in terms.into_iter().enumerate() {
            let negative = coeff.cmp0() == Ordering::Less;
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {},
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            fmt_term(monomial, &Rational::from(coeff.abs_ref()), f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use precalc_parser::parser::Parser;
    use crate::primitive::rational;
    use super::*;

    fn poly(input: &str) -> Result<Polynomial, Error> {
        let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
        Polynomial::from_expr(&expr)
    }

    #[test]
    fn expands_products() {
        assert_eq!(poly("(x + 1)^2").unwrap().to_string(), "x**2 + 2*x + 1");
        assert_eq!(poly("(x - y)(x + y)").unwrap().to_string(), "x**2 - y**2");
        assert_eq!(poly("(x + y)^2").unwrap().to_string(), "x**2 + 2*x*y + y**2");
    }

    #[test]
    fn cancels_terms() {
        let p = poly("x^2 - x^2 + y").unwrap();
        assert_eq!(p.degree(), 1);
        assert_eq!(p.to_string(), "y");
        assert!(poly("x - x").unwrap().is_zero());
    }

    #[test]
    fn fractional_coefficients() {
        assert_eq!(poly("x/2 + 3y/2").unwrap().to_string(), "x/2 + 3*y/2");
        assert_eq!(poly("3/2 - y/2").unwrap().to_string(), "3/2 - y/2");
        assert_eq!(poly("0.5x").unwrap().linear_coeff("x"), rational((1, 2)));
    }

    #[test]
    fn leading_negative_term() {
        assert_eq!(poly("3 - y").unwrap().to_string(), "3 - y");
        assert_eq!(poly("-x - y + 3").unwrap().to_string(), "-x - y + 3");
        assert_eq!(poly("2y + 1").unwrap().to_string(), "2*y + 1");
    }

    #[test]
    fn constant_calls() {
        assert_eq!(poly("sqrt(4) x").unwrap().to_string(), "2*x");
        assert!(poly("sqrt(2) x").is_err());
        assert!(poly("sin(x)").is_err());
    }

    #[test]
    fn rejects_non_polynomials() {
        assert!(poly("1/x").is_err());
        assert!(poly("x^y").is_err());
        assert!(poly("x^(1/2)").is_err());
        assert!(poly("x/0").unwrap_err().is::<DivisionByZero>());
    }

    #[test]
    fn substitution() {
        let p = poly("x^2 + 2x*y + 1").unwrap();
        let values = BTreeMap::from([("x".to_string(), rational(3))]);
        assert_eq!(p.subs(&values).to_string(), "6*y + 10");
    }
}
