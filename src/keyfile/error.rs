use thiserror::Error;

/// Errors produced while parsing, querying, or rendering a [`KeyFile`](super::KeyFile).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyFileError {
    /// The document text is not a valid key file
    #[error("invalid key file at line {line}: {reason}")]
    Parse {
        /// One-based line number of the offending line
        line: usize,
        /// Why the line was rejected
        reason: String,
    },

    /// The requested group does not exist
    #[error("group '{group}' not found")]
    GroupNotFound {
        /// Name of the missing group
        group: String,
    },

    /// The requested key does not exist in an existing group
    #[error("key '{key}' not found in group '{group}'")]
    KeyNotFound {
        /// Group that was searched
        group: String,
        /// Name of the missing key
        key: String,
    },

    /// The stored value cannot be interpreted as the requested type
    #[error("value '{value}' of '{group}.{key}' is not a valid {expected}")]
    InvalidValue {
        /// Group containing the key
        group: String,
        /// Key holding the value
        key: String,
        /// Type the caller asked for
        expected: &'static str,
        /// Raw value as stored in the document
        value: String,
    },

    /// A group name or key cannot be represented in the rendered document
    #[error("'{name}' cannot be written as a group name or key")]
    InvalidName {
        /// The offending name
        name: String,
    },
}
