//! @ai:module:intent Configure tracing output for the annotator binary
//! @ai:module:layer infrastructure
//! @ai:module:public_api LogLevel, LogDestination, init_logging
//! @ai:module:depends_on error

use crate::error::{Error, Result};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// @ai:intent Verbosity accepted by `--loglevel`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    None,
    Error,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// @ai:intent Parse a level name, falling back to info for unknown names
    /// @ai:example ("DEBUG") -> Debug
    /// @ai:example ("verbose") -> Info
    /// @ai:effects pure
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "none" => LogLevel::None,
            "error" => LogLevel::Error,
            "info" => LogLevel::Info,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::None => LevelFilter::OFF,
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

/// @ai:intent Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    Console,
    File(PathBuf),
}

/// @ai:intent Install the global tracing subscriber
/// @ai:pre called at most once per process
/// @ai:effects fs:write, global
pub fn init_logging(level: LogLevel, destination: &LogDestination) -> Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level.level_filter().into())
        .from_env_lossy();

    let installed = match destination {
        LogDestination::Console => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
        LogDestination::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| Error::LogInit(format!("{}: {}", path.display(), e)))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    installed.map_err(|e| Error::LogInit(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_levels() {
        assert_eq!(LogLevel::parse_lenient("none"), LogLevel::None);
        assert_eq!(LogLevel::parse_lenient("Error"), LogLevel::Error);
        assert_eq!(LogLevel::parse_lenient("TRACE"), LogLevel::Trace);
        assert_eq!(LogLevel::parse_lenient("chatty"), LogLevel::Info);
    }

    #[test]
    fn test_none_disables_logging() {
        assert_eq!(LogLevel::None.level_filter(), LevelFilter::OFF);
        assert_eq!(LogLevel::default().level_filter(), LevelFilter::INFO);
    }

    #[test]
    fn test_unwritable_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let destination = LogDestination::File(dir.path().join("missing").join("a.log"));
        let err = init_logging(LogLevel::Info, &destination).unwrap_err();
        assert!(matches!(err, Error::LogInit(_)));
    }
}
