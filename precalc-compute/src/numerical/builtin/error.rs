use precalc_error::ErrorKind;
use precalc_parser::parser::call::Call;
use crate::numerical::error::{kind, Error};

/// Represents an error that can occur while evaluating a builtin function.
#[derive(Debug)]
pub enum BuiltinError {
    /// The function was called with too many arguments.
    TooManyArguments(kind::TooManyArguments),

    /// An argument to the function call is missing.
    MissingArgument(kind::MissingArgument),

    /// A function specific error, such as taking the logarithm of zero.
    FunctionSpecific(Box<dyn ErrorKind>),
}

impl BuiltinError {
    /// Wraps a function specific error kind.
    pub fn specific(kind: impl ErrorKind + 'static) -> Self {
        Self::FunctionSpecific(Box::new(kind))
    }

    /// Converts the [`BuiltinError`] into an [`Error`], pointing at the given function call.
    pub fn into_error(self, call: &Call) -> Error {
        let spans = call.outer_span().to_vec();
        match self {
            Self::TooManyArguments(kind) => Error::new(spans, kind),
            Self::MissingArgument(kind) => Error::new(spans, kind),
            Self::FunctionSpecific(kind) => Error { spans, kind },
        }
    }
}
