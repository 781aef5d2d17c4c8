//! Virtual path validation and normalization.
//!
//! Virtual paths are `/`-separated, absolute, and independent of any real
//! filesystem layout. Normalization is purely lexical and happens before
//! any backend call, so `..` cannot escape the configured root even
//! through symlinked or non-existent intermediate segments.

use std::path::{Path, PathBuf};

use crate::error::{StorageError, StorageResult};

/// ## Summary
/// Lexically normalizes an absolute virtual path.
///
/// Collapses repeated separators, resolves `.` and `..` segments, and
/// validates the input without touching the filesystem.
///
/// ## Errors
/// Returns [`StorageError::BadRequest`] if the path contains the
/// platform path separator as a literal segment character (on platforms
/// where it is not `/`), contains a NUL byte, is not absolute, or uses
/// `..` to climb above the virtual root.
pub fn clean_virtual_path(path: &str) -> StorageResult<String> {
    if std::path::MAIN_SEPARATOR != '/' && path.contains(std::path::MAIN_SEPARATOR) {
        return Err(StorageError::bad_request(format!(
            "invalid character in path: {path:?}"
        )));
    }
    if path.contains('\0') {
        return Err(StorageError::bad_request(format!(
            "invalid character in path: {path:?}"
        )));
    }
    if !path.starts_with('/') {
        return Err(StorageError::bad_request(format!(
            "expected absolute path: {path:?}"
        )));
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if segments.pop().is_none() {
                    return Err(StorageError::bad_request(format!(
                        "path escapes the virtual root: {path:?}"
                    )));
                }
            }
            other => segments.push(other),
        }
    }

    Ok(format!("/{}", segments.join("/")))
}

/// ## Summary
/// Resolves a virtual path to a concrete path under the given root.
///
/// The virtual path is normalized first and then joined onto the root
/// segment by segment; the virtual path is never interpolated into the
/// concrete path by raw string concatenation.
///
/// ## Errors
/// Returns [`StorageError::BadRequest`] for the same inputs as
/// [`clean_virtual_path`].
pub fn resolve(root: &Path, virtual_path: &str) -> StorageResult<PathBuf> {
    let cleaned = clean_virtual_path(virtual_path)?;
    let mut concrete = root.to_path_buf();
    concrete.extend(cleaned.split('/').filter(|s| !s.is_empty()));
    Ok(concrete)
}
