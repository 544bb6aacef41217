use crate::numerical::value::Value;
use crate::primitive::float;
use rug::{Complex, Float};

/// Implements [`Builtin`] for functions that take a single argument and cannot fail.
///
/// [`Builtin`]: crate::numerical::builtin::Builtin
macro_rules! unary_builtin {
    ($($name:literal $upname:ident),* $(,)?) => {
        $(
            impl $crate::numerical::builtin::Builtin for $upname {
                fn name(&self) -> &'static str {
                    $name
                }

                fn sig(&self) -> &'static [$crate::numerical::builtin::BuiltinParam] {
                    &[$crate::numerical::builtin::BuiltinParam {
                        name: "n",
                        kind: $crate::numerical::builtin::ParamKind::Required,
                    }]
                }

                fn sig_str(&self) -> &'static str {
                    concat!($name, "(n)")
                }

                fn eval(
                    &self,
                    args: Vec<$crate::numerical::value::Value>,
                ) -> Result<
                    $crate::numerical::value::Value,
                    $crate::numerical::builtin::error::BuiltinError,
                > {
                    let [n] = $crate::numerical::builtin::check::exact::<1>(self, args)?;
                    Ok(Self::eval_static(n))
                }
            }
        )*
    };
}

/// Applies `real` to real arguments and `complex` to complex arguments. Exact arguments are
/// converted to floats first.
pub(crate) fn map_inexact(
    value: Value,
    real: impl FnOnce(Float) -> Float,
    complex: impl FnOnce(Complex) -> Complex,
) -> Value {
    match value {
        Value::Exact(n) => Value::Real(real(float(&n))),
        Value::Real(n) => Value::Real(real(n)),
        Value::Complex(c) => Value::Complex(complex(c)),
    }
}
