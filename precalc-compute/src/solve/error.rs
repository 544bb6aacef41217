use precalc_attrs::ErrorKind;

/// The leading coefficient of a quadratic is zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "'a' cannot be zero in a quadratic function.",
    help = "a quadratic function has the form a*x**2 + b*x + c, with a non-zero",
)]
pub struct ZeroLeadingCoefficient;
