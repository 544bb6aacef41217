use log::debug;
use precalc_error::Error;
use precalc_parser::parser::equation::Equation;
use crate::symbolic::{LinearForm, Polynomial};
use rug::Rational;
use std::fmt;

/// The unknowns of a system, in the order their coefficients are stored.
const UNKNOWNS: [&str; 2] = ["x", "y"];

/// The solution set of a system of two linear equations in `x` and `y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemSolution {
    /// Exactly one point satisfies both equations.
    Unique {
        x: Rational,
        y: Rational,
    },

    /// Infinitely many points satisfy both equations, and they lie on a line. One unknown is
    /// expressed in terms of the other, which is free.
    Family {
        /// The unknown that is solved for.
        var: &'static str,

        /// The value of the unknown, in terms of the free unknown.
        value: Polynomial,
    },

    /// No point satisfies both equations.
    Inconsistent,

    /// Every point satisfies both equations.
    Unconstrained,
}

impl fmt::Display for SystemSolution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Unique { x, y } => write!(f, "{{x: {}, y: {}}}", x, y),
            Self::Family { var, value } => write!(f, "{{{}: {}}}", var, value),
            Self::Inconsistent => write!(f, "[]"),
            Self::Unconstrained => write!(f, "{{x: x, y: y}}"),
        }
    }
}

/// Returns true if the rational number is zero.
fn is_zero(n: &Rational) -> bool {
    n.cmp0().is_eq()
}

/// Solves the one equation `a*x + b*y = c` of a system whose other equation is redundant.
fn solve_single(a: &Rational, b: &Rational, c: &Rational) -> SystemSolution {
    if !is_zero(a) {
        // x = c/a - (b/a)*y
        let value = Polynomial::constant(Rational::from(c / a))
            .sub(&Polynomial::symbol(UNKNOWNS[1]).scale(&Rational::from(b / a)));
        SystemSolution::Family { var: UNKNOWNS[0], value }
    } else {
        SystemSolution::Family {
            var: UNKNOWNS[1],
            value: Polynomial::constant(Rational::from(c / b)),
        }
    }
}

/// Solves a system of two linear equations in `x` and `y`.
pub fn solve_linear(first: &LinearForm, second: &LinearForm) -> SystemSolution {
    let (a1, b1, c1) = (&first.coeffs[0], &first.coeffs[1], &first.rhs);
    let (a2, b2, c2) = (&second.coeffs[0], &second.coeffs[1], &second.rhs);

    let det = Rational::from(a1 * b2) - Rational::from(a2 * b1);
    if !is_zero(&det) {
        // Cramer's rule
        let x = (Rational::from(c1 * b2) - Rational::from(c2 * b1)) / &det;
        let y = (Rational::from(a1 * c2) - Rational::from(a2 * c1)) / &det;
        return SystemSolution::Unique { x, y };
    }

    // the rows are proportional; pick a row that constrains something, if any
    let (row, other) = match (first.is_trivial(), second.is_trivial()) {
        (true, true) => {
            return if is_zero(c1) && is_zero(c2) {
                SystemSolution::Unconstrained
            } else {
                SystemSolution::Inconsistent
            };
        },
        (false, _) => (first, second),
        (true, false) => (second, first),
    };

    let (ar, br, cr) = (&row.coeffs[0], &row.coeffs[1], &row.rhs);
    let (ao, bo, co) = (&other.coeffs[0], &other.coeffs[1], &other.rhs);

    // `other` is `ratio` times `row` on the left-hand side; the right-hand sides must agree
    let ratio = if !is_zero(ar) {
        Rational::from(ao / ar)
    } else {
        Rational::from(bo / br)
    };
    if *co != Rational::from(&ratio * cr) {
        return SystemSolution::Inconsistent;
    }

    solve_single(ar, br, cr)
}

/// Converts two parsed equations into linear forms in `x` and `y`, and solves the system.
///
/// Fails if either equation is not linear in `x` and `y` with rational coefficients.
pub fn solve_system(first: &Equation, second: &Equation) -> Result<SystemSolution, Error> {
    let first_form = LinearForm::from_equation(first, &UNKNOWNS)?;
    let second_form = LinearForm::from_equation(second, &UNKNOWNS)?;
    debug!("solving linear system {:?}, {:?}", first_form, second_form);

    let solution = solve_linear(&first_form, &second_form);
    debug!("solution: {}", solution);
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use precalc_parser::parser::Parser;
    use crate::primitive::rational;
    use super::*;

    fn solve(first: &str, second: &str) -> Result<SystemSolution, Error> {
        let first = Parser::new(first).try_parse_full::<Equation>().unwrap();
        let second = Parser::new(second).try_parse_full::<Equation>().unwrap();
        solve_system(&first, &second)
    }

    #[test]
    fn unique_solution() {
        let solution = solve("x + y - 3", "x - y - 1").unwrap();
        assert_eq!(solution, SystemSolution::Unique { x: rational(2), y: rational(1) });
        assert_eq!(solution.to_string(), "{x: 2, y: 1}");
    }

    #[test]
    fn fractional_solution() {
        let solution = solve("2x + 3y = 1", "x - y = 1").unwrap();
        assert_eq!(solution.to_string(), "{x: 4/5, y: -1/5}");
    }

    #[test]
    fn parallel_lines() {
        let solution = solve("y - x", "y - x - 1").unwrap();
        assert_eq!(solution, SystemSolution::Inconsistent);
        assert_eq!(solution.to_string(), "[]");
    }

    #[test]
    fn dependent_equations() {
        let solution = solve("x + y = 3", "2x + 2y = 6").unwrap();
        assert_eq!(solution.to_string(), "{x: 3 - y}");

        let solution = solve("x - 2y = 1", "3x - 6y = 3").unwrap();
        assert_eq!(solution.to_string(), "{x: 2*y + 1}");
    }

    #[test]
    fn only_y_constrained() {
        let solution = solve("y = 1", "2y = 2").unwrap();
        assert_eq!(solution.to_string(), "{y: 1}");
    }

    #[test]
    fn one_trivial_equation() {
        let solution = solve("x - x", "x + y = 3").unwrap();
        assert_eq!(solution.to_string(), "{x: 3 - y}");

        let solution = solve("0 = 1", "x + y = 3").unwrap();
        assert_eq!(solution, SystemSolution::Inconsistent);
    }

    #[test]
    fn unconstrained() {
        let solution = solve("x - x", "0").unwrap();
        assert_eq!(solution.to_string(), "{x: x, y: y}");
    }

    #[test]
    fn non_linear_fails() {
        assert!(solve("x*y = 1", "x + y = 2").is_err());
        assert!(solve("x + z = 1", "x + y = 2").is_err());
    }
}
