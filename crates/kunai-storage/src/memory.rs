//! In-memory storage backend for tests and fixtures.

use std::collections::BTreeMap;
use std::io::Cursor;

use chrono::{DateTime, Utc};

use crate::backend::{FileSystem, ResourceMetadata};
use crate::error::StorageResult;
use crate::path::clean_virtual_path;

#[derive(Debug, Clone)]
struct MemoryEntry {
    data: Vec<u8>,
    mod_time: DateTime<Utc>,
}

/// A storage backend holding resources in memory.
///
/// Keys are normalized virtual paths; directories exist implicitly as
/// prefixes of stored entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    entries: BTreeMap<String, MemoryEntry>,
}

impl MemoryFileSystem {
    /// Creates an empty backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ## Summary
    /// Stores a resource at the given virtual path.
    ///
    /// ## Errors
    /// Returns [`crate::error::StorageError::BadRequest`] if the path is
    /// malformed.
    pub fn insert(&mut self, virtual_path: &str, data: impl Into<Vec<u8>>) -> StorageResult<()> {
        self.insert_with_mod_time(virtual_path, data, Utc::now())
    }

    /// ## Summary
    /// Stores a resource with an explicit modification time.
    ///
    /// ## Errors
    /// Returns [`crate::error::StorageError::BadRequest`] if the path is
    /// malformed.
    pub fn insert_with_mod_time(
        &mut self,
        virtual_path: &str,
        data: impl Into<Vec<u8>>,
        mod_time: DateTime<Utc>,
    ) -> StorageResult<()> {
        let cleaned = clean_virtual_path(virtual_path)?;
        self.entries.insert(
            cleaned,
            MemoryEntry {
                data: data.into(),
                mod_time,
            },
        );
        Ok(())
    }

    fn not_found(virtual_path: &str) -> std::io::Error {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("no such resource: {virtual_path}"),
        )
    }

    fn is_implicit_dir(&self, cleaned: &str) -> bool {
        if cleaned == "/" {
            return true;
        }
        let prefix = format!("{cleaned}/");
        self.entries.keys().any(|k| k.starts_with(&prefix))
    }
}

impl FileSystem for MemoryFileSystem {
    type File = Cursor<Vec<u8>>;

    async fn open(&self, virtual_path: &str) -> StorageResult<Self::File> {
        let cleaned = clean_virtual_path(virtual_path)?;
        let entry = self
            .entries
            .get(&cleaned)
            .ok_or_else(|| Self::not_found(virtual_path))?;
        Ok(Cursor::new(entry.data.clone()))
    }

    async fn stat(&self, virtual_path: &str) -> StorageResult<ResourceMetadata> {
        let cleaned = clean_virtual_path(virtual_path)?;
        if let Some(entry) = self.entries.get(&cleaned) {
            return Ok(ResourceMetadata {
                size: entry.data.len() as u64,
                mod_time: entry.mod_time,
                is_dir: false,
            });
        }
        if self.is_implicit_dir(&cleaned) {
            let mod_time = self
                .entries
                .values()
                .map(|e| e.mod_time)
                .max()
                .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
            return Ok(ResourceMetadata {
                size: 0,
                mod_time,
                is_dir: true,
            });
        }
        Err(Self::not_found(virtual_path).into())
    }
}
