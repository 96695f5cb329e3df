use std::{io, result};

use thiserror::Error;

use crate::{
    address::AddressParseError,
    config_store::ConfigError,
    keyfile::KeyFileError,
};

/// Error types for the MTscan configuration tooling.
///
/// Wraps the per-module error types so that binaries can propagate any of
/// them with `?`.
#[derive(Error, Debug)]
pub enum MtscanError {
    /// Configuration store operation failed
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Key file document could not be parsed or rendered
    #[error(transparent)]
    KeyFile(#[from] KeyFileError),

    /// Address string could not be parsed
    #[error(transparent)]
    Address(#[from] AddressParseError),

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON rendering error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid command-line usage
    #[error("{0}")]
    Usage(String),
}

/// A specialized `Result` type for MTscan operations.
pub type Result<T> = result::Result<T, MtscanError>;
