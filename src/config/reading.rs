//! Lenient typed reads.
//!
//! Every scalar falls back to its compiled-in default when the key is missing
//! or its value cannot be parsed. Malformed values are only logged.

use tracing::debug;

use crate::keyfile::{KeyFile, KeyFileError};

pub(crate) fn read_integer(document: &KeyFile, group: &str, key: &str, default: i32) -> i32 {
    document
        .get_integer(group, key)
        .unwrap_or_else(|error| fallback(error, default))
}

pub(crate) fn read_boolean(document: &KeyFile, group: &str, key: &str, default: bool) -> bool {
    document
        .get_boolean(group, key)
        .unwrap_or_else(|error| fallback(error, default))
}

pub(crate) fn read_string(document: &KeyFile, group: &str, key: &str, default: &str) -> String {
    document
        .get_string(group, key)
        .unwrap_or_else(|error| fallback(error, default.to_string()))
}

fn fallback<T>(error: KeyFileError, default: T) -> T {
    if matches!(error, KeyFileError::InvalidValue { .. }) {
        debug!(%error, "ignoring malformed setting");
    }
    default
}
