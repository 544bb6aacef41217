use precalc_error::Error;
use precalc_parser::parser::equation::Equation;
use rug::Rational;
use super::{
    error::{NonLinear, UnknownSymbol},
    polynomial::Polynomial,
};

/// A linear equation `a_1*x_1 + a_2*x_2 + ... = rhs` in a fixed, ordered list of unknowns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearForm {
    /// The coefficient of each unknown, in the same order as the unknowns.
    pub coeffs: Vec<Rational>,

    /// The constant on the right-hand side.
    pub rhs: Rational,
}

impl LinearForm {
    /// Builds the linear form of `poly = 0`.
    ///
    /// Returns [`None`] if the polynomial depends on a symbol other than the unknowns, or is not
    /// of degree one or less.
    pub fn from_polynomial(poly: &Polynomial, unknowns: &[&str]) -> Option<Self> {
        if poly.degree() > 1 || poly.symbols().iter().any(|s| !unknowns.contains(&s.as_str())) {
            return None;
        }

        Some(Self {
            coeffs: unknowns.iter().map(|unknown| poly.linear_coeff(unknown)).collect(),
            rhs: -poly.constant_term(),
        })
    }

    /// Builds the linear form of an equation in the given unknowns. An equation without a
    /// right-hand side is taken to be equal to zero.
    pub fn from_equation(equation: &Equation, unknowns: &[&str]) -> Result<Self, Error> {
        let lhs = Polynomial::from_expr(&equation.lhs)?;
        let rhs = match &equation.rhs {
            Some(rhs) => Polynomial::from_expr(rhs)?,
            None => Polynomial::zero(),
        };
        let poly = lhs.sub(&rhs);

        if let Some(symbol) = poly.symbols().into_iter().find(|s| !unknowns.contains(&s.as_str())) {
            return Err(Error::new(vec![equation.span()], UnknownSymbol {
                symbol,
                expected: unknowns.iter().map(|s| s.to_string()).collect(),
            }));
        }

        Self::from_polynomial(&poly, unknowns)
            .ok_or_else(|| Error::new(vec![equation.span()], NonLinear { degree: poly.degree() }))
    }

    /// Returns true if every coefficient is zero.
    pub fn is_trivial(&self) -> bool {
        self.coeffs.iter().all(|c| c.cmp0().is_eq())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use precalc_parser::parser::Parser;
    use crate::primitive::rational;
    use super::*;

    fn linear(input: &str) -> Result<LinearForm, Error> {
        let equation = Parser::new(input).try_parse_full::<Equation>().unwrap();
        LinearForm::from_equation(&equation, &["x", "y"])
    }

    #[test]
    fn expression_equals_zero() {
        let form = linear("x + y - 3").unwrap();
        assert_eq!(form.coeffs, vec![rational(1), rational(1)]);
        assert_eq!(form.rhs, rational(3));
    }

    #[test]
    fn both_sides() {
        let form = linear("2x = y + 1/2").unwrap();
        assert_eq!(form.coeffs, vec![rational(2), rational(-1)]);
        assert_eq!(form.rhs, rational((1, 2)));
    }

    #[test]
    fn missing_unknown() {
        let form = linear("y - 4").unwrap();
        assert_eq!(form.coeffs, vec![rational(0), rational(1)]);
    }

    #[test]
    fn non_linear() {
        assert!(linear("x*y - 1").unwrap_err().is::<NonLinear>());
        assert!(linear("x^2 = y").unwrap_err().is::<NonLinear>());
    }

    #[test]
    fn foreign_symbol() {
        let err = linear("x + z = 1").unwrap_err();
        assert_eq!(err.downcast_ref::<UnknownSymbol>().unwrap().symbol, "z");
    }

    #[test]
    fn trivial() {
        assert!(linear("x - x").unwrap().is_trivial());
    }
}
