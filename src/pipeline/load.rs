//! Fragment loading: fragment name → raw UTF-8 source text.
//!
//! The path is derived deterministically from the name: same directory,
//! name + fixed extension. A missing or unreadable file aborts the whole
//! run — this is a one-shot build tool, so there is nothing sensible to
//! do with a half-assembled book.

use crate::error::BookError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Derive the source path for a fragment name.
pub fn fragment_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    dir.join(format!("{name}.{extension}"))
}

/// Read a fragment's raw text from disk.
///
/// # Errors
/// [`BookError::FragmentNotFound`] if the file does not exist,
/// [`BookError::PermissionDenied`] if it cannot be opened for reading,
/// [`BookError::FragmentReadFailed`] for any other read failure
/// (including invalid UTF-8).
pub fn load_fragment(dir: &Path, name: &str, extension: &str) -> Result<String, BookError> {
    let path = fragment_path(dir, name, extension);

    let raw = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => BookError::FragmentNotFound { path: path.clone() },
        std::io::ErrorKind::PermissionDenied => BookError::PermissionDenied { path: path.clone() },
        _ => BookError::FragmentReadFailed {
            path: path.clone(),
            source: e,
        },
    })?;

    debug!("Loaded fragment '{}' ({} bytes) from {}", name, raw.len(), path.display());
    Ok(raw)
}
