//! Local-disk storage backend.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::backend::{FileSystem, ResourceMetadata};
use crate::error::StorageResult;
use crate::path;

/// A storage backend serving a configured root directory.
///
/// Every virtual path is validated and lexically normalized before it
/// is joined onto the root, so remote-supplied paths cannot escape it.
/// The root is immutable after construction and safe to share across
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    root: PathBuf,
}

impl LocalFileSystem {
    /// Creates a backend rooted at the given directory.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Creates a backend from loaded storage settings.
    #[must_use]
    pub fn from_settings(storage: &kunai_core::config::StorageConfig) -> Self {
        Self::new(storage.root.clone())
    }

    /// Returns the configured root directory.
    #[must_use]
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// ## Summary
    /// Resolves a virtual path to a concrete path under the root.
    ///
    /// ## Errors
    /// Returns [`crate::error::StorageError::BadRequest`] for malformed
    /// virtual paths.
    pub fn resolve(&self, virtual_path: &str) -> StorageResult<PathBuf> {
        path::resolve(&self.root, virtual_path)
    }
}

impl FileSystem for LocalFileSystem {
    type File = tokio::fs::File;

    async fn open(&self, virtual_path: &str) -> StorageResult<Self::File> {
        let concrete = self.resolve(virtual_path)?;
        tracing::trace!(virtual_path = %virtual_path, concrete = %concrete.display(), "Opening local resource");
        Ok(tokio::fs::File::open(concrete).await?)
    }

    async fn stat(&self, virtual_path: &str) -> StorageResult<ResourceMetadata> {
        let concrete = self.resolve(virtual_path)?;
        let metadata = tokio::fs::metadata(concrete).await?;
        let mod_time = DateTime::<Utc>::from(metadata.modified()?);
        Ok(ResourceMetadata {
            size: metadata.len(),
            mod_time,
            is_dir: metadata.is_dir(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use tokio::io::AsyncReadExt;

    fn fixture() -> (tempfile::TempDir, LocalFileSystem) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("contacts")).unwrap();
        std::fs::write(
            dir.path().join("contacts/a.vcf"),
            b"BEGIN:VCARD\r\nEND:VCARD\r\n",
        )
        .unwrap();
        let fs = LocalFileSystem::new(dir.path());
        (dir, fs)
    }

    #[test]
    fn resolve_joins_onto_root() {
        let fs = LocalFileSystem::new("/data");
        assert_eq!(
            fs.resolve("/contacts/a.vcf").unwrap(),
            PathBuf::from("/data/contacts/a.vcf")
        );
    }

    #[test_log::test(tokio::test)]
    async fn open_reads_resource_contents() {
        let (_dir, fs) = fixture();
        let mut file = fs.open("/contacts/a.vcf").await.unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).await.unwrap();
        assert!(contents.starts_with("BEGIN:VCARD"));
    }

    #[test_log::test(tokio::test)]
    async fn stat_reports_metadata() {
        let (_dir, fs) = fixture();
        let meta = fs.stat("/contacts/a.vcf").await.unwrap();
        assert_eq!(meta.size, 24);
        assert!(!meta.is_dir);

        let dir_meta = fs.stat("/contacts").await.unwrap();
        assert!(dir_meta.is_dir);
    }

    #[test_log::test(tokio::test)]
    async fn backend_not_found_passes_through() {
        let (_dir, fs) = fixture();
        let err = fs.open("/contacts/missing.vcf").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test_log::test(tokio::test)]
    async fn escape_is_rejected_before_touching_backend() {
        let (_dir, fs) = fixture();
        let err = fs.open("/contacts/../../etc/passwd").await.unwrap_err();
        assert!(matches!(err, StorageError::BadRequest(_)));
        let err = fs.stat("/contacts/../../etc/passwd").await.unwrap_err();
        assert!(matches!(err, StorageError::BadRequest(_)));
    }
}
