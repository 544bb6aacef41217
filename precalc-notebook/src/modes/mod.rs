//! The four modes of the notebook. Each mode owns its controls and decides what to display when
//! one of them changes.

pub mod grapher;
pub mod lines;
pub mod quadratic;
pub mod system;

use crate::{config::NotebookConfig, controls::Control, event::Action, output::{OutputArea, ViewOutput}};
use log::{debug, warn};
use precalc_error::Error;
use precalc_graph::GraphOptions;
use std::fmt::Debug;

pub use grapher::Grapher;
pub use lines::TwoLines;
pub use quadratic::QuadraticAnalyzer;
pub use system::SystemSolver;

/// The settings every mode computes and renders with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// The number of points each curve is sampled at.
    pub sample_count: usize,

    /// The options of every plot.
    pub graph: GraphOptions,

    /// Whether to display the full error report after the short message of a failure.
    pub verbose_errors: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&NotebookConfig::default())
    }
}

impl From<&NotebookConfig> for Settings {
    fn from(config: &NotebookConfig) -> Self {
        Self {
            sample_count: config.sample_count,
            graph: config.graph_options(),
            verbose_errors: config.verbose_errors,
        }
    }
}

/// A mode of the notebook.
pub trait Mode: Debug {
    /// Called once, when the mode is selected from the menu.
    fn activate(&mut self, _output: &mut ViewOutput) {}

    /// Returns the controls of the mode, in display order.
    fn controls(&self) -> Vec<&dyn Control>;

    /// Returns the control with the given name.
    fn control_mut(&mut self, name: &str) -> Option<&mut dyn Control>;

    /// Handles an action on one of the mode's controls.
    fn handle(&mut self, action: Action<'_>, output: &mut ViewOutput);
}

/// Creates the mode for a menu selection, or [`None`] for an unknown selection.
pub fn mode_for(selection: usize, settings: Settings) -> Option<Box<dyn Mode>> {
    match selection {
        1 => Some(Box::new(Grapher::new(settings))),
        2 => Some(Box::new(SystemSolver::new(settings))),
        3 => Some(Box::new(TwoLines::new(settings))),
        4 => Some(Box::new(QuadraticAnalyzer::new(settings))),
        _ => None,
    }
}

/// Reports errors from the given input. The full reports are always logged, and displayed only
/// when `verbose_errors` is set.
fn report(
    output: &mut OutputArea,
    settings: &Settings,
    src_id: &str,
    input: &str,
    errors: &[Error],
) {
    for error in errors {
        match error.report_to_string(src_id, input) {
            Ok(report) => {
                debug!("error in `{}`:\n{}", input, report);
                if settings.verbose_errors {
                    output.print(report.trim_end());
                }
            },
            Err(err) => warn!("could not build error report: {}", err),
        }
    }
}
