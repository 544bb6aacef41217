//! Notebook configuration, optionally read from a TOML file.
//!
//! Every key is optional; missing keys take their default value:
//!
//! ```toml
//! output_dir = "plots"
//! canvas_width = 1000
//! canvas_height = 1000
//! sample_count = 400
//! verbose_errors = false
//! log_level = "warn"
//! # log_file = "precalc.log"
//! ```

use crate::error::ConfigError;
use log::{debug, LevelFilter};
use precalc_graph::GraphOptions;
use serde::Deserialize;
use std::{fs, path::{Path, PathBuf}};

/// The file read when no configuration file is given explicitly, if it exists.
pub const DEFAULT_CONFIG_FILE: &str = "precalc.toml";

/// Options for the notebook and its front end.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotebookConfig {
    /// The directory rendered plots are written to. It is created if it does not exist.
    ///
    /// The default value is `plots`.
    pub output_dir: PathBuf,

    /// The width of rendered plots, in pixels.
    ///
    /// The default value is `1000`.
    pub canvas_width: u16,

    /// The height of rendered plots, in pixels.
    ///
    /// The default value is `1000`.
    pub canvas_height: u16,

    /// The number of points each curve is sampled at.
    ///
    /// The default value is `400`.
    pub sample_count: usize,

    /// Whether to display the full error report after the short message of a failure.
    ///
    /// The default value is `false`.
    pub verbose_errors: bool,

    /// The most verbose level of log messages to write.
    ///
    /// The default value is `warn`.
    pub log_level: LevelFilter,

    /// A file to write log messages to, in addition to the terminal.
    ///
    /// The default value is `None`.
    pub log_file: Option<PathBuf>,
}

/// The default configuration. Returns a [`NotebookConfig`] with the following values:
///
/// - [`output_dir`](NotebookConfig::output_dir): `plots`
/// - [`canvas_width`](NotebookConfig::canvas_width): `1000`
/// - [`canvas_height`](NotebookConfig::canvas_height): `1000`
/// - [`sample_count`](NotebookConfig::sample_count): `400`
/// - [`verbose_errors`](NotebookConfig::verbose_errors): `false`
/// - [`log_level`](NotebookConfig::log_level): `warn`
/// - [`log_file`](NotebookConfig::log_file): `None`
impl Default for NotebookConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("plots"),
            canvas_width: 1000,
            canvas_height: 1000,
            sample_count: 400,
            verbose_errors: false,
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl NotebookConfig {
    /// Set the output directory. Returns an updated [`NotebookConfig`] for chaining.
    pub fn output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Set the canvas size. Returns an updated [`NotebookConfig`] for chaining.
    pub fn canvas_size(mut self, width: u16, height: u16) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Set the number of sample points. Returns an updated [`NotebookConfig`] for chaining.
    pub fn sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set whether to display full error reports. Returns an updated [`NotebookConfig`] for
    /// chaining.
    pub fn verbose_errors(mut self, verbose_errors: bool) -> Self {
        self.verbose_errors = verbose_errors;
        self
    }

    /// Set the log level. Returns an updated [`NotebookConfig`] for chaining.
    pub fn log_level(mut self, log_level: LevelFilter) -> Self {
        self.log_level = log_level;
        self
    }

    /// Set the log file. Returns an updated [`NotebookConfig`] for chaining.
    pub fn log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = Some(log_file.into());
        self
    }
}

impl NotebookConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml(path: &Path, text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate(path)?;
        Ok(config)
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(path, &text)?;
        debug!("loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reads the given configuration file, or [`DEFAULT_CONFIG_FILE`] if none is given and it
    /// exists. Otherwise, returns the default configuration.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load(default_path)
                } else {
                    Ok(Self::default())
                }
            },
        }
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        };

        if self.sample_count < 2 {
            return Err(invalid("`sample_count` must be at least 2"));
        }
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(invalid("`canvas_width` and `canvas_height` must be positive"));
        }
        Ok(())
    }

    /// Returns the graph options for rendered plots.
    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions::default().canvas_size(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse(text: &str) -> Result<NotebookConfig, ConfigError> {
        NotebookConfig::from_toml(Path::new("precalc.toml"), text)
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse("").unwrap(), NotebookConfig::default());
    }

    #[test]
    fn every_key() {
        let config = parse(r#"
            output_dir = "out"
            canvas_width = 640
            canvas_height = 480
            sample_count = 100
            verbose_errors = true
            log_level = "debug"
            log_file = "precalc.log"
        "#).unwrap();

        assert_eq!(config, NotebookConfig::default()
            .output_dir("out")
            .canvas_size(640, 480)
            .sample_count(100)
            .verbose_errors(true)
            .log_level(LevelFilter::Debug)
            .log_file("precalc.log"));
    }

    #[test]
    fn unknown_key() {
        assert!(matches!(parse("zoom = 3"), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn too_few_samples() {
        assert!(matches!(parse("sample_count = 1"), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn graph_options_use_canvas_size() {
        let options = NotebookConfig::default().canvas_size(640, 480).graph_options();
        assert_eq!(options.canvas_size.0, 640);
        assert_eq!(options.canvas_size.1, 480);
    }
}
