//! Runs text sessions and checks what they write.

use precalc_notebook::{
    config::NotebookConfig,
    error::NotebookError,
    session::{Flow, Session},
};
use pretty_assertions::assert_eq;
use std::{env, io::Cursor, path::PathBuf};

fn strip(text: &str) -> String {
    String::from_utf8(strip_ansi_escapes::strip(text)).unwrap()
}

/// A configuration writing plots to a directory of its own.
fn config(test: &str) -> (NotebookConfig, PathBuf) {
    let dir = env::temp_dir().join(format!("precalc-notebook-{}-{}", test, std::process::id()));
    (NotebookConfig::default().output_dir(&dir), dir)
}

fn run_script(config: &NotebookConfig, script: &str) -> String {
    let mut session = Session::new(config, Vec::new());
    session.run_script(Cursor::new(script)).unwrap();
    String::from_utf8(session.into_out()).unwrap()
}

#[test]
fn solve_system_script() {
    let (config, _) = config("solve");
    let output = run_script(&config, "\
        # solve a system\n\
        menu 2\n\
        eq1 = x + y - 3\n\
        set eq2 x - y - 1\n\
        click solve\n");
    assert_eq!(output, "Menu: 2. Solve system\nSolution: {x: 2, y: 1}\n");
}

#[test]
fn quit_ends_the_script() {
    let (config, _) = config("quit");
    let output = run_script(&config, "menu 2\nquit\nmenu 0\n");
    assert_eq!(output, "Menu: 2. Solve system\n");
}

#[test]
fn errors_do_not_end_the_script() {
    let (config, _) = config("errors");
    let output = run_script(&config, "menu 9\nclik solve\nmenu 2\neq1 = y\neq2 = x\nclick solve\n");
    assert_eq!(output, "Menu: 2. Solve system\nSolution: {x: 0, y: 0}\n");
}

#[test]
fn command_errors_are_reported_against_the_line() {
    let (config, _) = config("report");
    let mut session = Session::new(&config, Vec::new());
    let line = "clik solve";
    let Err(NotebookError::Command(err)) = session.run_line(line) else {
        panic!("expected a command error");
    };

    let report = strip(&err.report_to_string("input", line).unwrap());
    assert!(report.contains("unknown command `clik`"));
    assert!(report.contains("did you mean `click`?"));
}

#[test]
fn unknown_control_lists_available_controls() {
    let (config, _) = config("controls-error");
    let mut session = Session::new(&config, Vec::new());
    session.run_line("menu 2").unwrap();
    let line = "set eq3 x";
    let Err(NotebookError::Command(err)) = session.run_line(line) else {
        panic!("expected a command error");
    };

    let report = strip(&err.report_to_string("input", line).unwrap());
    assert!(report.contains("there is no control named `eq3`"));
    assert!(report.contains("`eq1`, `eq2`, `solve`"));
}

#[test]
fn verbose_errors_print_the_report() {
    let (config, _) = config("verbose");
    let quiet = run_script(&config, "menu 2\neq1 = x*y\neq2 = x\nclick solve\n");
    assert_eq!(quiet, "Menu: 2. Solve system\nInvalid equations.\n");

    let verbose = strip(&run_script(&config.verbose_errors(true), "menu 2\neq1 = x*y\neq2 = x\nclick solve\n"));
    assert!(verbose.starts_with("Menu: 2. Solve system\nInvalid equations.\n"));
    assert!(verbose.contains("Error"));
    assert!(verbose.contains("x*y"));
}

#[test]
fn list_controls() {
    let (config, _) = config("list");
    let output = run_script(&config, "controls\nmenu 3\nm1 = 2.5\ncontrols\n");
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines[0], "menu   Menu: Select one (menu)");
    assert!(lines.contains(&"m1     m1 2.5 (slider)"));
    assert!(lines.contains(&"zoom   zoom 10 (integer slider)"));
}

#[test]
fn plots_are_written_to_files() {
    let (config, dir) = config("plots");
    let output = run_script(&config, "menu 4\n");
    let path = dir.join("plot-0001.png");
    assert!(output.contains(&format!("[plot: {}]", path.display())));
    assert!(path.is_file());

    let mut session = Session::new(&config, Vec::new());
    assert_eq!(session.run_line("help").unwrap(), Flow::Continue);
    assert!(String::from_utf8(session.into_out()).unwrap().contains("click <control>"));
}

#[test]
fn unwritable_plot_directory_does_not_end_the_script() {
    let (_, dir) = config("not-a-dir");
    std::fs::write(&dir, "").unwrap();
    let config = NotebookConfig::default().output_dir(&dir);

    let output = run_script(&config, "menu 3\nmenu 2\neq1 = x - 1\neq2 = y\nclick solve\n");
    assert_eq!(
        output,
        "Menu: 3. Graph system and intersection\nMenu: 2. Solve system\nSolution: {x: 1, y: 0}\n",
    );
}
