//! The events that drive the notebook.
//!
//! Every interaction with the notebook is an [`Event`] aimed at a control by name. The active
//! view turns each event into an [`Action`] on one of its controls, and the mode owning the
//! control handles the action.

use std::ops::Range;

/// A value with the region of the input it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Range<usize>,
}

impl<T> Spanned<T> {
    /// Creates a new spanned value.
    pub fn new(value: T, span: Range<usize>) -> Self {
        Self { value, span }
    }
}

impl<'a> Spanned<&'a str> {
    /// Converts the borrowed value into an owned one.
    pub fn owned(&self) -> Spanned<String> {
        Spanned::new(self.value.to_string(), self.span.clone())
    }
}

impl Spanned<String> {
    /// Creates a spanned value without a meaningful source region, for events created in code.
    pub fn bare(value: impl Into<String>) -> Self {
        Spanned::new(value.into(), 0..0)
    }
}

/// A user interaction with one control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Set the value of a text box, slider, or the menu.
    Set {
        control: Spanned<String>,
        value: Spanned<String>,
    },

    /// Submit a text box, optionally setting its value first.
    Submit {
        control: Spanned<String>,
        value: Option<Spanned<String>>,
    },

    /// Click a button.
    Click {
        control: Spanned<String>,
    },
}

impl Event {
    /// Creates a [`Event::Set`] event.
    pub fn set(control: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            control: Spanned::bare(control),
            value: Spanned::bare(value),
        }
    }

    /// Creates a [`Event::Submit`] event that sets the value of the text box first.
    pub fn submit(control: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Submit {
            control: Spanned::bare(control),
            value: Some(Spanned::bare(value)),
        }
    }

    /// Creates a [`Event::Click`] event.
    pub fn click(control: impl Into<String>) -> Self {
        Self::Click {
            control: Spanned::bare(control),
        }
    }

    /// Returns the name of the control the event is aimed at.
    pub fn control(&self) -> &Spanned<String> {
        match self {
            Self::Set { control, .. }
                | Self::Submit { control, .. }
                | Self::Click { control } => control,
        }
    }
}

/// What happened to a control, as seen by the mode that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    /// The value of the named control changed.
    Changed(&'a str),

    /// The named text box was submitted.
    Submitted(&'a str),

    /// The named button was clicked.
    Clicked(&'a str),
}
