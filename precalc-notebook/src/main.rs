//! Interactive algebra notebook.
//!
//! Run `precalc-notebook` for an interactive prompt, or `precalc-notebook script.txt` to run the
//! commands in a file. Commands piped through stdin are also run without a prompt. Type `help`
//! at the prompt for the list of commands.

use precalc_notebook::{
    config::NotebookConfig,
    error::NotebookError,
    logging,
    session::{Flow, Session},
};
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{
    env,
    fs::File,
    io::{self, BufReader, IsTerminal, Write},
    path::PathBuf,
    process::ExitCode,
};

const USAGE: &str = "usage: precalc-notebook [--config <file>] [script]";

/// Command line arguments.
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    script: Option<PathBuf>,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, NotebookError> {
        let usage = || NotebookError::Args(USAGE.to_string());
        let mut parsed = Self::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" | "-c" => parsed.config = Some(args.next().ok_or_else(usage)?.into()),
                "--help" | "-h" => return Err(usage()),
                _ if parsed.script.is_none() && !arg.starts_with('-') => {
                    parsed.script = Some(PathBuf::from(&arg));
                },
                _ => return Err(usage()),
            }
        }
        Ok(parsed)
    }
}

fn repl<W: Write>(session: &mut Session<W>) -> Result<(), NotebookError> {
    let mut rl = DefaultEditor::new()?;
    println!("precalc-notebook: type `help` for the list of commands");
    session.show_menu()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => break,
            Err(err) => return Err(err.into()),
        };
        rl.add_history_entry(&input)?;
        if session.step(&input)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

fn run() -> Result<(), NotebookError> {
    let args = Args::parse(env::args().skip(1))?;
    let config = NotebookConfig::discover(args.config.as_deref())?;
    logging::init(&config)?;

    let mut session = Session::new(&config, io::stdout());
    match args.script {
        Some(path) => session.run_script(BufReader::new(File::open(path)?)),
        None if !io::stdin().is_terminal() => session.run_script(io::stdin().lock()),
        None => repl(&mut session),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            err.report_to_stderr("");
            ExitCode::FAILURE
        },
    }
}
