use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw key-value storage.
///
/// This trait handles the "how" of storage (filesystem vs memory), while
/// [`super::persist::Persistence`] handles the "what" (serialization, fallback,
/// diagnostics).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save(&self, key: &str, value: &str) -> Result<()>;

    /// Where the value for `key` lives. For FsBackend this is the real path,
    /// for MemBackend a virtual one.
    fn location(&self, key: &str) -> PathBuf;
}
