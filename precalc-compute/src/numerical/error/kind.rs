use ariadne::Fmt;
use precalc_attrs::ErrorKind;
use precalc_error::EXPR;

/// The variable is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", self.name),
    labels = ["this variable"],
    help = format!("the only variables available here are {}", self.available
        .iter()
        .map(|name| format!("`{}`", name.fg(EXPR)))
        .collect::<Vec<_>>()
        .join(", ")),
)]
pub struct UndefinedVariable {
    /// The name of the variable that was undefined.
    pub name: String,

    /// The names of the variables that are defined, in sorted order.
    pub available: Vec<String>,
}

/// The function is undefined.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function", ""],
    help = if self.suggestions.is_empty() {
        "the available functions are: sqrt, abs, sin, cos, tan, exp, ln, log".to_string()
    } else if self.suggestions.len() == 1 {
        format!("did you mean the `{}` function?", (&*self.suggestions[0]).fg(EXPR))
    } else {
        format!(
            "did you mean one of these functions? {}",
            self.suggestions
                .iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
)]
pub struct UndefinedFunction {
    /// The name of the function that was undefined.
    pub name: String,

    /// A list of similarly named functions, if any.
    pub suggestions: Vec<String>,
}

/// Too many arguments were given to a function call.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("too many arguments were given to the `{}` function", self.name),
    labels = ["this function call", ""],
    help = format!(
        "the `{}` function takes at most {} argument(s); there are {} argument(s) provided here",
        (&self.name).fg(EXPR),
        self.expected,
        self.given
    )
)]
pub struct TooManyArguments {
    /// The name of the function that was called.
    pub name: String,

    /// The maximum number of arguments the function accepts.
    pub expected: usize,

    /// The number of arguments that were given.
    pub given: usize,
}

/// An argument to a function call is missing.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing required argument(s) for the `{}` function", self.name),
    labels = ["this function call", ""],
    help = format!("the function signature is: `{}`", (&self.signature).fg(EXPR)),
)]
pub struct MissingArgument {
    /// The name of the function that was called.
    pub name: String,

    /// The signature of the function, such as `log(n, base)`.
    pub signature: String,

    /// The number of arguments that were given.
    pub given: usize,
}

/// Division by zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = ["this expression divides by zero"],
    note = "the expression is undefined at this point",
)]
pub struct DivisionByZero;

/// The logarithm of zero was taken.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function is undefined at zero", self.name),
    labels = ["this function call", ""],
)]
pub struct LogarithmOfZero {
    /// The name of the logarithm function, `ln` or `log`.
    pub name: &'static str,
}

/// A logarithm was taken to a base of one, zero, or a negative number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid logarithm base",
    labels = ["this function call", ""],
    help = format!("the base of a logarithm must be positive and not equal to {}", "1".fg(EXPR)),
)]
pub struct InvalidLogarithmBase;

/// The result of a function call was infinite or not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function did not produce a finite value", self.name),
    labels = ["this function call", ""],
)]
pub struct NonFiniteResult {
    /// The name of the function that was called.
    pub name: String,
}
