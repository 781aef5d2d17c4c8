//! Address object retrieval from a storage backend.

use chrono::{DateTime, Utc};
use kunai_storage::{FileSystem, StorageResult};
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

/// Raw bytes and metadata for a stored address object.
///
/// Parsing the payload into a record is the external vCard
/// collaborator's job; this layer never inspects the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAddressObject {
    /// Virtual path of the resource.
    pub path: String,
    /// Last modification time reported by the backend.
    pub mod_time: DateTime<Utc>,
    /// Entity tag derived from the content.
    pub etag: String,
    /// Resource content.
    pub data: Vec<u8>,
}

/// ## Summary
/// Generates an `ETag` from canonical bytes using SHA256.
///
/// The `ETag` is the hex-encoded SHA256 hash of the content, wrapped in quotes.
#[must_use]
pub fn generate_etag(canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(canonical_bytes);
    let hash = hasher.finalize();
    format!("\"{}\"", hex::encode(hash))
}

/// ## Summary
/// Loads the raw bytes and metadata of an address object.
///
/// Resolves the virtual path through the backend, reads the resource to
/// the end, and derives the entity tag from the content.
///
/// ## Side Effects
/// Opens a backend resource handle; the handle is released when reading
/// completes.
///
/// ## Errors
/// Returns a bad-request error for malformed virtual paths; backend
/// errors (not found, permission denied, I/O) pass through unchanged.
pub async fn load_raw_address_object<F: FileSystem>(
    fs: &F,
    virtual_path: &str,
) -> StorageResult<RawAddressObject> {
    tracing::debug!(virtual_path = %virtual_path, "Loading address object");

    let metadata = fs.stat(virtual_path).await?;
    let mut file = fs.open(virtual_path).await?;
    let mut data = Vec::new();
    file.read_to_end(&mut data).await?;

    let etag = generate_etag(&data);
    tracing::trace!(size = data.len(), etag = %etag, "Address object loaded");

    Ok(RawAddressObject {
        path: virtual_path.to_string(),
        mod_time: metadata.mod_time,
        etag,
        data,
    })
}
