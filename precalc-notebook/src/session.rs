//! A text session with the notebook: commands in, text and plot files out.

use crate::{
    command::{self, Command, HELP},
    config::NotebookConfig,
    controls::{Control, ControlKind},
    error::NotebookError,
    modes::Settings,
    notebook::{Notebook, Update},
    output::Cell,
    render::PlotWriter,
};
use log::debug;
use std::io::{BufRead, Write};

/// Whether the session goes on after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Runs commands against a [`Notebook`] and writes what it displays to `out`.
///
/// Text cells are written as lines. Plot cells are rendered to PNG files, and a line with the
/// path of the file is written in their place.
#[derive(Debug)]
pub struct Session<W> {
    notebook: Notebook,
    plots: PlotWriter,
    out: W,
}

/// Returns a short name for a kind of control.
fn kind_name(kind: ControlKind) -> &'static str {
    match kind {
        ControlKind::Text => "text",
        ControlKind::IntSlider => "integer slider",
        ControlKind::FloatSlider => "slider",
        ControlKind::Button => "button",
        ControlKind::Dropdown => "menu",
    }
}

impl<W: Write> Session<W> {
    /// Creates a session with nothing selected.
    pub fn new(config: &NotebookConfig, out: W) -> Self {
        Self {
            notebook: Notebook::new(Settings::from(config)),
            plots: PlotWriter::new(&config.output_dir),
            out,
        }
    }

    /// Returns the notebook.
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Returns the writer output goes to.
    pub fn out(&self) -> &W {
        &self.out
    }

    /// Consumes the session, returning the writer output goes to.
    pub fn into_out(self) -> W {
        self.out
    }

    /// Writes the menu, the way it is shown after every menu change.
    pub fn show_menu(&mut self) -> Result<(), NotebookError> {
        let menu = self.notebook.menu();
        writeln!(self.out, "{} {}", menu.description(), menu.display_value())?;
        Ok(())
    }

    /// Runs one line of input.
    pub fn run_line(&mut self, line: &str) -> Result<Flow, NotebookError> {
        match command::parse(line)? {
            Command::Nothing => {},
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Controls => self.show_controls()?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Event(event) => {
                let update = self.notebook.handle(event)?;
                self.show(update)?;
            },
        }
        Ok(Flow::Continue)
    }

    /// Runs one line of input, reporting errors to stderr. Only a failure to read input or write
    /// output ends the session. Plot files that cannot be written are reported like any other
    /// error.
    pub fn step(&mut self, line: &str) -> Result<Flow, NotebookError> {
        match self.run_line(line) {
            Err(err @ NotebookError::Io(_)) => Err(err),
            Err(err) => {
                debug!("command `{}` failed: {}", line, err);
                err.report_to_stderr(line);
                Ok(Flow::Continue)
            },
            flow => flow,
        }
    }

    /// Runs every line of a script, stopping early at a `quit` command.
    pub fn run_script(&mut self, script: impl BufRead) -> Result<(), NotebookError> {
        for line in script.lines() {
            if self.step(&line?)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    fn show(&mut self, update: Update) -> Result<(), NotebookError> {
        if update.cleared {
            self.show_menu()?;
        }
        for cell in update.cells {
            match cell {
                Cell::Text(text) => writeln!(self.out, "{}", text)?,
                Cell::Plot(graph) => {
                    let path = self.plots.write(&graph)?;
                    writeln!(self.out, "[plot: {}]", path.display())?;
                },
            }
        }
        Ok(())
    }

    fn show_controls(&mut self) -> Result<(), NotebookError> {
        for control in self.notebook.controls() {
            writeln!(
                self.out,
                "{:<6} {} {} ({})",
                control.name(),
                control.description(),
                control.display_value(),
                kind_name(control.kind()),
            )?;
        }
        Ok(())
    }
}
