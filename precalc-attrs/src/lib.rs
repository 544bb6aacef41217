mod structures;

use proc_macro::TokenStream;
use quote::quote;
use structures::ErrorKindTarget;
use syn::parse_macro_input;

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for any struct with named fields, or any unit struct.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
///
/// ```
/// use precalc_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("`{}` is not defined", self.name),
///     labels = ["this variable"],
///     help = "only `x` can be used here",
/// )]
/// pub struct UndefinedVariable {
///     name: String,
/// }
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An iterable of label texts, one for each span the error is created with.    |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
/// | `note`      | Optional note with additional context about the error.                       |
///
/// Each tag accepts an expression that should evaluate to something displayable. The expressions
/// are evaluated inside the generated method, so `self` can be used to refer to the fields of the
/// error. Labels are paired with spans in order; extra labels or spans are ignored.
///
/// The generated code refers to the `ariadne` and `precalc_error` crates by absolute path, so
/// both must be dependencies of the crate using the derive.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let target = parse_macro_input!(item as ErrorKindTarget);
    let name = &target.name;
    quote! {
        impl ::precalc_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
