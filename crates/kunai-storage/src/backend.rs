//! Storage backend capability set.

use chrono::{DateTime, Utc};
use tokio::io::AsyncRead;

use crate::error::StorageResult;

/// Metadata for a stored resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceMetadata {
    /// Size in bytes.
    pub size: u64,
    /// Last modification time.
    pub mod_time: DateTime<Utc>,
    /// Whether the resource is a directory.
    pub is_dir: bool,
}

/// ## Summary
/// The capability set a storage backend must expose.
///
/// Local disk, remote object stores, and in-memory fixtures are
/// interchangeable behind this trait. Implementations take virtual
/// paths, validate and normalize them, and surface backend errors
/// unchanged. Returned handles are owned by the caller; dropping the
/// handle releases the resource.
pub trait FileSystem {
    /// Readable byte-stream handle for an open resource.
    type File: AsyncRead + Send + Unpin;

    /// ## Summary
    /// Opens the resource at the given virtual path for reading.
    ///
    /// ## Errors
    /// Returns a bad-request error for malformed virtual paths; backend
    /// errors (not found, permission denied) pass through unchanged.
    fn open(
        &self,
        virtual_path: &str,
    ) -> impl Future<Output = StorageResult<Self::File>> + Send;

    /// ## Summary
    /// Returns metadata for the resource at the given virtual path.
    ///
    /// ## Errors
    /// Returns a bad-request error for malformed virtual paths; backend
    /// errors pass through unchanged.
    fn stat(
        &self,
        virtual_path: &str,
    ) -> impl Future<Output = StorageResult<ResourceMetadata>> + Send;
}
