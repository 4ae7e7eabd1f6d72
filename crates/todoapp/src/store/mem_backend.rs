use super::backend::StorageBackend;
use crate::error::{Result, TodoError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Default)]
struct Slots {
    values: HashMap<String, String>,
    simulate_write_error: bool,
    writes: usize,
}

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
/// Clones share the same slots, so a test can keep a handle to inspect what the
/// store persisted or to inject failures after handing the backend over.
#[derive(Clone, Default)]
pub struct MemBackend {
    slots: Rc<RefCell<Slots>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, as if a previous session had written it.
    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.slots
            .borrow_mut()
            .values
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.slots.borrow_mut().simulate_write_error = simulate;
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().values.get(key).cloned()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.slots.borrow().writes
    }
}

impl StorageBackend for MemBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.borrow_mut();
        if slots.simulate_write_error {
            return Err(TodoError::Store("Simulated write error".to_string()));
        }
        slots.values.insert(key.to_string(), value.to_string());
        slots.writes += 1;
        Ok(())
    }

    fn location(&self, key: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}", key))
    }
}
