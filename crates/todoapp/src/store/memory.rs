use super::mem_backend::MemBackend;
use super::TodoStore;

pub type InMemoryStore = TodoStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        TodoStore::open(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_todos(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.add(&format!("Test todo {}", i + 1));
            }
            self
        }

        pub fn with_active(mut self, text: &str) -> Self {
            self.store.add(text);
            self
        }

        pub fn with_completed(mut self, text: &str) -> Self {
            let result = self.store.add(text);
            if let Some(todo) = result.affected_todos.first() {
                self.store.toggle(todo.id);
            }
            self
        }
    }
}
