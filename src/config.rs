//! @ai:module:intent Settings of a parse run, resolved from the command line
//! @ai:module:layer application
//! @ai:module:public_api ParseConfig, DEFAULT_OUTPUT_FILE, DEFAULT_LOG_FILE
//! @ai:module:depends_on output, logging
//! @ai:module:stateless true

use crate::logging::{LogDestination, LogLevel};
use crate::output::{OutputFormat, OutputTarget};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_FILE: &str = "annotations.json";
pub const DEFAULT_LOG_FILE: &str = "annotations.log";

/// @ai:intent Everything `annotator parse` needs to run
#[derive(Debug, Clone)]
pub struct ParseConfig {
    pub directory: PathBuf,
    pub output: PathBuf,
    pub stdout: bool,
    pub compact: bool,
    pub log_level: LogLevel,
    pub log_to_console: bool,
    pub log_file: PathBuf,
}

impl ParseConfig {
    /// @ai:intent Create a config with default output and logging settings
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            stdout: false,
            compact: false,
            log_level: LogLevel::default(),
            log_to_console: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// @ai:intent Resolve where the JSON goes
    /// @ai:post an explicit output path wins over --stdout
    /// @ai:effects pure
    pub fn output_target(&self) -> OutputTarget {
        if self.stdout && self.output == Path::new(DEFAULT_OUTPUT_FILE) {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(self.output.clone())
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_compact(self.compact)
    }

    pub fn log_destination(&self) -> LogDestination {
        if self.log_to_console {
            LogDestination::Console
        } else {
            LogDestination::File(self.log_file.clone())
        }
    }
}
