//! Argument count checks shared by every builtin function.

use crate::numerical::{error::kind::{MissingArgument, TooManyArguments}, value::Value};
use super::{error::BuiltinError, Builtin, ParamKind};

/// Checks that the number of given arguments fits the signature of the builtin.
pub fn arity(builtin: &dyn Builtin, given: usize) -> Result<(), BuiltinError> {
    let sig = builtin.sig();
    let required = sig.iter()
        .filter(|param| param.kind == ParamKind::Required)
        .count();

    if given > sig.len() {
        Err(BuiltinError::TooManyArguments(TooManyArguments {
            name: builtin.name().to_string(),
            expected: sig.len(),
            given,
        }))
    } else if given < required {
        Err(BuiltinError::MissingArgument(MissingArgument {
            name: builtin.name().to_string(),
            signature: builtin.sig_str().to_string(),
            given,
        }))
    } else {
        Ok(())
    }
}

/// Checks that exactly `N` arguments were given, and moves them into an array.
pub fn exact<const N: usize>(
    builtin: &dyn Builtin,
    args: Vec<Value>,
) -> Result<[Value; N], BuiltinError> {
    arity(builtin, args.len())?;
    args.try_into().map_err(|args: Vec<Value>| {
        BuiltinError::MissingArgument(MissingArgument {
            name: builtin.name().to_string(),
            signature: builtin.sig_str().to_string(),
            given: args.len(),
        })
    })
}
