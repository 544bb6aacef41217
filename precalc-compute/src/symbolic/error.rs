use ariadne::Fmt;
use precalc_attrs::ErrorKind;
use precalc_error::EXPR;

/// The expression cannot be written as a polynomial with rational coefficients.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a polynomial expression",
    labels = ["this expression"],
    help = self.reason,
)]
pub struct NotPolynomial {
    /// Why the expression is not a polynomial.
    pub reason: &'static str,
}

/// The equation is not linear in its unknowns.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a linear equation",
    labels = ["this equation"],
    help = format!("this equation has degree {}; only equations of degree {} can be solved here", self.degree, "1".fg(EXPR)),
)]
pub struct NonLinear {
    /// The degree of the equation.
    pub degree: u32,
}

/// The equation contains a symbol that is not one of the unknowns.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected symbol `{}`", self.symbol),
    labels = ["this equation"],
    help = format!(
        "only these symbols can be used: {}",
        self.expected
            .iter()
            .map(|s| format!("`{}`", s.fg(EXPR)))
            .collect::<Vec<_>>()
            .join(", ")
    ),
)]
pub struct UnknownSymbol {
    /// The symbol that was found.
    pub symbol: String,

    /// The symbols that are allowed.
    pub expected: Vec<String>,
}
