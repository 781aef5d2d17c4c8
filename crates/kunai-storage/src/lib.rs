//! Storage abstraction for the `kunai` contacts toolkit.
//!
//! Maps virtual, protocol-visible resource paths onto a real storage
//! backend safely. The [`FileSystem`] trait is the capability set a
//! backend must expose; [`LocalFileSystem`] serves a configured root
//! directory and [`MemoryFileSystem`] is an in-memory fixture for tests.

pub mod backend;
pub mod error;
pub mod local;
pub mod memory;
pub mod path;

pub use backend::{FileSystem, ResourceMetadata};
pub use error::{StorageError, StorageResult};
pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;
