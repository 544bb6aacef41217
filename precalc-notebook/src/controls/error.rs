use ariadne::Fmt;
use precalc_attrs::ErrorKind;
use precalc_error::EXPR;

fn quoted_list(names: &[String]) -> String {
    names.iter()
        .map(|name| format!("`{}`", name.fg(EXPR)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// No control with the given name is displayed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("there is no control named `{}`", self.name),
    labels = ["this control"],
    help = if self.available.is_empty() {
        format!("select a mode first with `{}`", "menu <1-4>".fg(EXPR))
    } else {
        format!("the controls displayed right now are {}", quoted_list(&self.available))
    },
)]
pub struct UnknownControl {
    /// The name that was given.
    pub name: String,

    /// The names of the controls that are displayed.
    pub available: Vec<String>,
}

/// The value cannot be assigned to the control.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid value for `{}`", self.control),
    labels = ["this value"],
    help = format!("expected {}", self.expected),
)]
pub struct InvalidValue {
    /// The name of the control.
    pub control: String,

    /// A description of the values the control accepts.
    pub expected: String,
}

/// Buttons have no value to set.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is a button and has no value", self.control),
    labels = ["this value"],
    help = format!("to press it, use `{}`", format!("click {}", self.control).fg(EXPR)),
)]
pub struct NotSettable {
    /// The name of the button.
    pub control: String,
}

/// Only text boxes can be submitted.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a text box", self.control),
    labels = ["this control"],
    help = format!("only text boxes can be submitted; use `{}` instead", (&self.instead).fg(EXPR)),
)]
pub struct NotATextBox {
    /// The name of the control.
    pub control: String,

    /// The command to use for this kind of control.
    pub instead: String,
}

/// Only buttons can be clicked.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not a button", self.control),
    labels = ["this control"],
    help = format!("use `{}` to change its value", format!("set {} <value>", self.control).fg(EXPR)),
)]
pub struct NotAButton {
    /// The name of the control.
    pub control: String,
}
