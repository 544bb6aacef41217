use crate::{config::NotebookConfig, error::NotebookError};
use simplelog::{
    ColorChoice,
    CombinedLogger,
    ConfigBuilder,
    SharedLogger,
    TermLogger,
    TerminalMode,
    WriteLogger,
};
use std::fs::File;

/// Installs the global logger: a terminal logger on stderr, plus a file logger if
/// [`NotebookConfig::log_file`] is set. Only messages from the notebook's own crates are
/// written.
///
/// This can only be done once per process.
pub fn init(config: &NotebookConfig) -> Result<(), NotebookError> {
    let log_config = ConfigBuilder::new()
        .add_filter_allow_str("precalc")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        config.log_level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(path) = &config.log_file {
        let file = File::create(path)?;
        loggers.push(WriteLogger::new(config.log_level, log_config, file));
    }

    CombinedLogger::init(loggers)?;
    Ok(())
}
