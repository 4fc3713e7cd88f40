//! @ai:module:intent Define error types for the annotator
//! @ai:module:layer domain
//! @ai:module:public_api Error, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for scanning, extraction and output
///
/// The parsing core never produces one of these; they come from the
/// file system, serialization and logger setup around it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot access directory {path}: {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialize logger: {0}")]
    LogInit(String),
}

impl Error {
    /// @ai:intent Process exit code the CLI reports for this error
    /// @ai:example (NotADirectory) -> 2
    /// @ai:example (Json) -> 1
    /// @ai:effects pure
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::DirectoryAccess { .. } | Error::NotADirectory(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
