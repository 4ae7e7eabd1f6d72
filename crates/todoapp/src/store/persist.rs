use super::backend::StorageBackend;
use crate::error::Result;
use crate::model::TodoList;

/// Key of the slot holding the serialized list.
pub const STORAGE_KEY: &str = "todos";

/// Write-through persistence of the list state to a single backend slot.
///
/// Every failure is logged and swallowed: a missing, unreadable or malformed slot
/// restores as an empty list, and a failed write leaves in-memory state
/// authoritative.
pub struct Persistence<B: StorageBackend> {
    backend: B,
    key: String,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    pub fn with_key(backend: B, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the stored list, or an empty one if the slot is absent or unusable.
    pub fn restore(&self) -> TodoList {
        match self.try_restore() {
            Ok(Some(state)) => {
                log::debug!("restored {} todos from '{}'", state.len(), self.key);
                state
            }
            Ok(None) => {
                log::debug!("no stored state under '{}', starting empty", self.key);
                TodoList::default()
            }
            Err(e) => {
                log::warn!(
                    "could not load state from {}: {}; starting empty",
                    self.backend.location(&self.key).display(),
                    e
                );
                TodoList::default()
            }
        }
    }

    fn try_restore(&self) -> Result<Option<TodoList>> {
        let Some(raw) = self.backend.load(&self.key)? else {
            return Ok(None);
        };
        let state: TodoList = serde_json::from_str(&raw)?;
        state.validate()?;
        Ok(Some(state))
    }

    /// Write the list to the slot. Returns whether the write succeeded.
    pub fn persist(&self, state: &TodoList) -> bool {
        match self.try_persist(state) {
            Ok(()) => true,
            Err(e) => {
                log::error!(
                    "could not save state to {}: {}",
                    self.backend.location(&self.key).display(),
                    e
                );
                false
            }
        }
    }

    fn try_persist(&self, state: &TodoList) -> Result<()> {
        let raw = serde_json::to_string(state)?;
        self.backend.save(&self.key, &raw)
    }
}
