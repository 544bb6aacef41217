use log::SetLoggerError;
use precalc_error::Error as CommandError;
use rustyline::error::ReadlineError;
use std::{fmt, io, path::PathBuf};

/// An error reading the configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Read {
        path: PathBuf,
        source: io::Error,
    },

    /// The file is not valid TOML, or has unknown keys or values of the wrong type.
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// A value is out of range.
    Invalid {
        path: PathBuf,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            },
            Self::Parse { path, source } => {
                write!(f, "invalid configuration in {}: {}", path.display(), source)
            },
            Self::Invalid { path, reason } => {
                write!(f, "invalid configuration in {}: {}", path.display(), reason)
            },
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Invalid { .. } => None,
        }
    }
}

/// Utility enum to package errors that can occur while running the notebook.
#[derive(Debug)]
pub enum NotebookError {
    /// The command line arguments are invalid.
    Args(String),

    /// A malformed command, or one that a control rejected. It is reported against the line it
    /// was read from.
    Command(CommandError),

    /// The configuration could not be loaded.
    Config(ConfigError),

    /// A plot could not be rendered or written.
    Render(cairo::IoError),

    /// Reading input or writing output failed.
    Io(io::Error),

    /// The logger could not be installed.
    Logger(SetLoggerError),

    /// The interactive prompt failed.
    Readline(ReadlineError),
}

impl NotebookError {
    /// Report the error to stderr. Command errors are reported with the line they came from.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Command(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("{}", io_err);
                }
            },
            other => eprintln!("error: {}", other),
        }
    }
}

impl fmt::Display for NotebookError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Args(usage) => write!(f, "{}", usage),
            Self::Command(err) => write!(f, "invalid command: {:?}", err.kind),
            Self::Config(err) => write!(f, "{}", err),
            Self::Render(err) => write!(f, "could not render plot: {}", err),
            Self::Io(err) => write!(f, "{}", err),
            Self::Logger(err) => write!(f, "could not initialize logging: {}", err),
            Self::Readline(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for NotebookError {}

impl From<CommandError> for NotebookError {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

impl From<ConfigError> for NotebookError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<cairo::IoError> for NotebookError {
    fn from(err: cairo::IoError) -> Self {
        Self::Render(err)
    }
}

impl From<io::Error> for NotebookError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<SetLoggerError> for NotebookError {
    fn from(err: SetLoggerError) -> Self {
        Self::Logger(err)
    }
}

impl From<ReadlineError> for NotebookError {
    fn from(err: ReadlineError) -> Self {
        Self::Readline(err)
    }
}
