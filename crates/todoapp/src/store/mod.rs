//! # Store
//!
//! [`TodoStore`] is the single owner of the canonical list. It is an ordinary value:
//! construct one per session, pass it around explicitly, drop it when done.
//!
//! ## Dispatch Cycle
//!
//! Every mutation goes through [`TodoStore::dispatch`]:
//!
//! 1. **Reduce**: [`crate::reducer::reduce`] computes the next state from the
//!    current one. Invalid actions produce an unchanged state.
//! 2. **Commit**: the next state replaces the current one.
//! 3. **Persist**: the whole list is written through to the backend slot.
//! 4. **Notify**: subscribed observers receive the new state.
//!
//! Persistence runs after every dispatch, no-ops included, so the stored slot always
//! mirrors the last applied transition.
//!
//! ## Storage Layout
//!
//! A single slot keyed [`persist::STORAGE_KEY`] holds
//! `{"list":[{"id":…,"text":"…","completed":…},…]}`. For [`fs_backend::FsBackend`]
//! the slot is the file `<data dir>/todos.json`.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production, one JSON file per key.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.

use crate::commands::CmdResult;
use crate::model::{IdGenerator, Todo, TodoId, TodoList};
use crate::reducer::{reduce, Action};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod persist;

use backend::StorageBackend;
use persist::Persistence;

/// Handle returned by [`TodoStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&TodoList)>;

pub struct TodoStore<B: StorageBackend> {
    state: TodoList,
    ids: IdGenerator,
    persistence: Persistence<B>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl<B: StorageBackend> TodoStore<B> {
    /// Open a store over `backend`, restoring whatever state it holds.
    pub fn open(backend: B) -> Self {
        Self::with_persistence(Persistence::new(backend))
    }

    pub fn with_persistence(persistence: Persistence<B>) -> Self {
        let state = persistence.restore();
        let mut ids = IdGenerator::new();
        ids.seed_past(&state);
        Self {
            state,
            ids,
            persistence,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn state(&self) -> &TodoList {
        &self.state
    }

    pub fn todos(&self) -> &[Todo] {
        &self.state.list
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.state.get(id)
    }

    pub fn backend(&self) -> &B {
        self.persistence.backend()
    }

    /// Apply `action`, persist the result and notify observers.
    pub fn dispatch(&mut self, action: Action) -> CmdResult {
        let (next, result) = reduce(&self.state, &action);
        log::debug!(
            "dispatch {}: {} affected, {} todos",
            action.name(),
            result.affected_todos.len(),
            next.len()
        );
        self.state = next;
        self.persistence.persist(&self.state);
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.state);
        }
        result
    }

    pub fn add(&mut self, text: &str) -> CmdResult {
        let id = self.ids.next_id();
        self.dispatch(Action::Add {
            id,
            text: text.to_string(),
        })
    }

    pub fn toggle(&mut self, id: TodoId) -> CmdResult {
        self.dispatch(Action::Toggle { id })
    }

    pub fn delete(&mut self, id: TodoId) -> CmdResult {
        self.dispatch(Action::Delete { id })
    }

    /// Replace a record's text. The record is deleted and re-added, so it comes back
    /// with a new id at the end of the list.
    pub fn edit(&mut self, id: TodoId, text: &str) -> CmdResult {
        let new_id = self.ids.next_id();
        self.dispatch(Action::Edit {
            id,
            new_id,
            text: text.to_string(),
        })
    }

    pub fn clear_all(&mut self) -> CmdResult {
        self.dispatch(Action::ClearAll)
    }

    /// Register a callback invoked with the new state after every dispatch.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&TodoList) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }
}
