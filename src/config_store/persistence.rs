use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use super::ConfigError;
use crate::keyfile::KeyFile;

/// Reads and parses the configuration document.
pub(super) fn read_document(path: &Path) -> Result<KeyFile, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    KeyFile::parse(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Replaces the file at `path` with `data`.
///
/// The data goes to a temporary file next to the destination which is synced
/// and renamed over it, so the previous file stays intact when anything
/// fails. A symlinked destination is resolved first so the link survives, and
/// an existing file keeps its permissions.
pub(super) fn write_atomic(path: &Path, data: &[u8]) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let target = resolve_target(path);
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
    if let Ok(metadata) = fs::metadata(&target) {
        file.as_file()
            .set_permissions(metadata.permissions())
            .map_err(io_error)?;
    }
    write_counted(file.as_file_mut(), data, path)?;
    file.as_file().sync_all().map_err(io_error)?;
    file.persist(&target).map_err(|error| io_error(error.error))?;

    Ok(())
}

/// Follows symlinks to the file that is actually written.
///
/// A destination that does not exist yet is used as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Writes all of `data`, reporting how far it got when the writer stalls.
///
/// An error after some bytes went through is reported as a short write so
/// the byte counts are not lost.
fn write_counted<W: Write>(writer: &mut W, data: &[u8], path: &Path) -> Result<(), ConfigError> {
    let mut written = 0;

    while written < data.len() {
        match writer.write(&data[written..]) {
            Ok(0) => return Err(short_write(path, written, data.len())),
            Ok(count) => written += count,
            Err(error) if error.kind() == ErrorKind::Interrupted => continue,
            Err(error) if written > 0 => {
                debug!(%error, written, "write failed part way");
                return Err(short_write(path, written, data.len()));
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }

    Ok(())
}

fn short_write(path: &Path, written: usize, expected: usize) -> ConfigError {
    ConfigError::ShortWrite {
        path: path.to_path_buf(),
        written,
        expected,
    }
}
