//! Widgets displayed by the notebook.
//!
//! Every widget implements [`Control`], which gives it a name to address it by and a way to set
//! its value from text. What happens when a control changes is decided by the mode that owns it.

pub mod error;
pub mod slider;

use error::{InvalidValue, NotSettable};
use precalc_error::ErrorKind;
pub use slider::Slider;
use std::fmt::Debug;

/// The kind of widget a control is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// A single-line text input, which is submitted explicitly.
    Text,

    /// A slider over a range of integers.
    IntSlider,

    /// A slider over a range of decimal numbers.
    FloatSlider,

    /// A button, which has no value and can only be clicked.
    Button,

    /// A selection from a fixed list of options.
    Dropdown,
}

/// A widget with a name and a value.
pub trait Control: Debug {
    /// The name used to address the control in commands.
    fn name(&self) -> &str;

    /// The label displayed next to the control.
    fn description(&self) -> &str;

    /// The kind of widget.
    fn kind(&self) -> ControlKind;

    /// Formats the current value of the control.
    fn display_value(&self) -> String;

    /// Sets the value of the control from user input.
    ///
    /// Returns true if the value changed.
    fn set(&mut self, input: &str) -> Result<bool, Box<dyn ErrorKind>>;
}

/// A text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    name: &'static str,
    description: &'static str,
    value: String,
}

impl TextBox {
    /// Creates an empty text box.
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description, value: String::new() }
    }

    /// Returns the text in the text box.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Control for TextBox {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn kind(&self) -> ControlKind {
        ControlKind::Text
    }

    fn display_value(&self) -> String {
        format!("{:?}", self.value)
    }

    fn set(&mut self, input: &str) -> Result<bool, Box<dyn ErrorKind>> {
        if self.value == input {
            return Ok(false);
        }
        self.value = input.to_string();
        Ok(true)
    }
}

/// A button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    name: &'static str,
    description: &'static str,
}

impl Button {
    /// Creates a new button.
    pub fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

impl Control for Button {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn kind(&self) -> ControlKind {
        ControlKind::Button
    }

    fn display_value(&self) -> String {
        format!("[{}]", self.description)
    }

    fn set(&mut self, _: &str) -> Result<bool, Box<dyn ErrorKind>> {
        Err(Box::new(NotSettable { control: self.name.to_string() }))
    }
}

/// A selection from a list of labelled options. The selected option is identified by its index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    name: &'static str,
    description: &'static str,
    options: &'static [&'static str],
    selected: usize,
}

impl Dropdown {
    /// Creates a dropdown with the first option selected.
    pub fn new(
        name: &'static str,
        description: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        Self { name, description, options, selected: 0 }
    }

    /// Returns the index of the selected option.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns the labels of the options.
    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Finds the option matching the input, by index or by exact label.
    fn find(&self, input: &str) -> Option<usize> {
        match input.parse::<usize>() {
            Ok(index) => (index < self.options.len()).then_some(index),
            Err(_) => self.options.iter().position(|option| *option == input),
        }
    }
}

impl Control for Dropdown {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn kind(&self) -> ControlKind {
        ControlKind::Dropdown
    }

    fn display_value(&self) -> String {
        self.options.get(self.selected).copied().unwrap_or_default().to_string()
    }

    fn set(&mut self, input: &str) -> Result<bool, Box<dyn ErrorKind>> {
        let Some(index) = self.find(input.trim()) else {
            return Err(Box::new(InvalidValue {
                control: self.name.to_string(),
                expected: format!(
                    "an option number from 0 to {}",
                    self.options.len().saturating_sub(1),
                ),
            }));
        };

        let changed = index != self.selected;
        self.selected = index;
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    const OPTIONS: &[&str] = &["Select one", "1. Graph and table", "2. Solve system"];

    #[test]
    fn text_box_reports_changes() {
        let mut text = TextBox::new("y", "y =");
        assert_eq!(text.set("x**2").unwrap(), true);
        assert_eq!(text.set("x**2").unwrap(), false);
        assert_eq!(text.value(), "x**2");
        assert_eq!(text.display_value(), "\"x**2\"");
    }

    #[test]
    fn button_has_no_value() {
        let mut button = Button::new("solve", "Solve");
        let err = button.set("1").unwrap_err();
        assert!(err.as_any().is::<NotSettable>());
    }

    #[test]
    fn dropdown_by_index_or_label() {
        let mut menu = Dropdown::new("menu", "Menu:", OPTIONS);
        assert_eq!(menu.selected(), 0);
        assert_eq!(menu.set("2").unwrap(), true);
        assert_eq!(menu.display_value(), "2. Solve system");
        assert_eq!(menu.set("2. Solve system").unwrap(), false);
        assert_eq!(menu.set("1. Graph and table").unwrap(), true);
        assert_eq!(menu.selected(), 1);
    }

    #[test]
    fn dropdown_rejects_unknown_option() {
        let mut menu = Dropdown::new("menu", "Menu:", OPTIONS);
        let err = menu.set("7").unwrap_err();
        assert_eq!(err.as_any().downcast_ref::<InvalidValue>(), Some(&InvalidValue {
            control: "menu".to_string(),
            expected: "an option number from 0 to 2".to_string(),
        }));
        assert_eq!(menu.selected(), 0);
    }
}
