use thiserror::Error;

/// Storage layer error type.
///
/// Malformed virtual paths are client errors and are reported as
/// [`StorageError::BadRequest`]; everything the backend reports (not
/// found, permission denied, I/O failures) passes through unchanged
/// inside [`StorageError::Io`]. This layer adds no retry logic.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = std::result::Result<T, StorageError>;

impl StorageError {
    /// Creates a bad-request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Returns whether this is a pass-through not-found error.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
