//! The notebook: a menu and the view of the selected mode.

use crate::{
    controls::{
        error::{NotAButton, NotATextBox, UnknownControl},
        Control,
        ControlKind,
        Dropdown,
    },
    event::{Action, Event, Spanned},
    modes::{mode_for, Mode, Settings},
    output::{Cell, ViewOutput},
};
use log::{debug, info};
use precalc_error::{Error, ErrorKind};
use std::ops::Range;

/// The options of the menu. Option `0` selects no mode.
pub const MENU_OPTIONS: &[&str] = &[
    "Select one",
    "1. Graph and table",
    "2. Solve system",
    "3. Graph system and intersection",
    "4. Quadratic solver",
];

/// The name of the menu control.
pub const MENU: &str = "menu";

/// A selected mode and everything it has displayed.
#[derive(Debug)]
struct ActiveView {
    mode: Box<dyn Mode>,
    output: ViewOutput,
}

/// What an event changed in the displayed output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    /// True if the previous view was discarded, along with all of its output.
    pub cleared: bool,

    /// The cells displayed since the previous event.
    pub cells: Vec<Cell>,
}

/// The notebook. It routes every [`Event`] to the menu or to a control of the active view.
///
/// Changing the menu selection replaces the active view wholesale, so no output survives a mode
/// switch.
#[derive(Debug)]
pub struct Notebook {
    settings: Settings,
    menu: Dropdown,
    view: Option<ActiveView>,
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Wraps an error reported by a control with the span it applies to.
fn spanned_error(span: &Range<usize>, kind: Box<dyn ErrorKind>) -> Error {
    Error { spans: vec![span.clone()], kind }
}

impl Notebook {
    /// Creates a notebook with nothing selected.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            menu: Dropdown::new(MENU, "Menu:", MENU_OPTIONS),
            view: None,
        }
    }

    /// Returns the menu.
    pub fn menu(&self) -> &Dropdown {
        &self.menu
    }

    /// Returns the index of the selected menu option.
    pub fn selection(&self) -> usize {
        self.menu.selected()
    }

    /// Returns the menu followed by the controls of the active view, in display order.
    pub fn controls(&self) -> Vec<&dyn Control> {
        let mut controls: Vec<&dyn Control> = vec![&self.menu];
        if let Some(view) = &self.view {
            controls.extend(view.mode.controls());
        }
        controls
    }

    /// Returns every cell the active view displays.
    pub fn output(&self) -> Vec<&Cell> {
        self.view.iter().flat_map(|view| view.output.cells()).collect()
    }

    /// Handles one event.
    ///
    /// Fails if the event names a control that is not displayed, gives a value the control
    /// rejects, or does something the control does not support, such as clicking a slider.
    /// Failures change nothing.
    pub fn handle(&mut self, event: Event) -> Result<Update, Error> {
        debug!("handling {:?}", event);
        if event.control().value == MENU {
            return self.handle_menu(event);
        }

        let available = self.mode_control_names();
        let Some(view) = self.view.as_mut() else {
            return Err(unknown_control(event.control(), available));
        };

        let name = event.control().value.as_str();
        let Some(control) = view.mode.control_mut(name) else {
            return Err(unknown_control(event.control(), available));
        };

        let action = match &event {
            Event::Set { value, .. } => {
                let changed = control.set(&value.value)
                    .map_err(|kind| spanned_error(&value.span, kind))?;
                changed.then_some(Action::Changed(name))
            },
            Event::Submit { control: spanned, value } => {
                if control.kind() != ControlKind::Text {
                    return Err(Error::new(vec![spanned.span.clone()], NotATextBox {
                        control: name.to_string(),
                        instead: instead_of_submit(control.kind(), name),
                    }));
                }
                if let Some(value) = value {
                    control.set(&value.value).map_err(|kind| spanned_error(&value.span, kind))?;
                }
                Some(Action::Submitted(name))
            },
            Event::Click { control: spanned } => {
                if control.kind() != ControlKind::Button {
                    return Err(Error::new(vec![spanned.span.clone()], NotAButton {
                        control: name.to_string(),
                    }));
                }
                Some(Action::Clicked(name))
            },
        };

        if let Some(action) = action {
            view.mode.handle(action, &mut view.output);
        }
        Ok(Update { cleared: false, cells: view.output.take_new() })
    }

    /// Handles an event aimed at the menu. Only a change of selection switches the view.
    fn handle_menu(&mut self, event: Event) -> Result<Update, Error> {
        match event {
            Event::Set { value, .. } => {
                let changed = self.menu.set(&value.value)
                    .map_err(|kind| spanned_error(&value.span, kind))?;
                if changed {
                    Ok(self.switch_view())
                } else {
                    Ok(Update::default())
                }
            },
            Event::Submit { control, .. } => Err(Error::new(vec![control.span], NotATextBox {
                control: MENU.to_string(),
                instead: "menu <0-4>".to_string(),
            })),
            Event::Click { control } => Err(Error::new(vec![control.span], NotAButton {
                control: MENU.to_string(),
            })),
        }
    }

    /// Replaces the active view with a new view of the selected mode.
    fn switch_view(&mut self) -> Update {
        let selection = self.menu.selected();
        info!("menu changed to `{}`", self.menu.display_value());

        self.view = mode_for(selection, self.settings).map(|mut mode| {
            let mut output = ViewOutput::default();
            mode.activate(&mut output);
            ActiveView { mode, output }
        });

        let cells = self.view.as_mut()
            .map(|view| view.output.take_new())
            .unwrap_or_default();
        Update { cleared: true, cells }
    }

    fn mode_control_names(&self) -> Vec<String> {
        self.view.iter()
            .flat_map(|view| view.mode.controls())
            .map(|control| control.name().to_string())
            .collect()
    }
}

fn unknown_control(control: &Spanned<String>, available: Vec<String>) -> Error {
    Error::new(vec![control.span.clone()], UnknownControl {
        name: control.value.clone(),
        available,
    })
}

/// Returns the command that changes a control that cannot be submitted.
fn instead_of_submit(kind: ControlKind, name: &str) -> String {
    match kind {
        ControlKind::Button => format!("click {}", name),
        _ => format!("set {} <value>", name),
    }
}
