use std::{io, path::PathBuf};

use thiserror::Error;

use crate::keyfile::KeyFileError;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The `section.key` path does not name a known setting.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// The value cannot be parsed as the setting's type.
    #[error("Type mismatch at {path}: expected {expected}, got {value:?}")]
    TypeMismatch {
        /// Path of the setting
        path: String,
        /// Expected type name
        expected: &'static str,
        /// The rejected input
        value: String,
    },

    /// The configuration file is not a valid key file.
    #[error("Unable to read the configuration from {}: {source}", .path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying parse error
        source: KeyFileError,
    },

    /// The document could not be rendered.
    #[error("Unable to generate the configuration file: {source}")]
    Serialization {
        /// Destination that was not written
        path: PathBuf,
        /// Underlying rendering error
        source: KeyFileError,
    },

    /// The configuration file could not be opened, read, or written.
    #[error("Unable to access the configuration file {}: {source}", .path.display())]
    Io {
        /// File involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The destination accepted fewer bytes than the rendered document.
    #[error(
        "Failed to save the configuration to {} (wrote only {written} of {expected} bytes)",
        .path.display()
    )]
    ShortWrite {
        /// Destination file
        path: PathBuf,
        /// Bytes actually written
        written: usize,
        /// Bytes in the rendered document
        expected: usize,
    },

    /// A document query failed.
    #[error(transparent)]
    KeyFile(#[from] KeyFileError),
}
