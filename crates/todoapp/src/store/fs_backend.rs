use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// File-based backend: each key is stored as `<root>/<key>.json`.
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodoError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TodoError::Io)?;
        Ok(Some(content))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(TodoError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.slot_path(key)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TodoError::Io(e));
        }
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        self.slot_path(key)
    }
}
