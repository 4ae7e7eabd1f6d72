use crate::error::{Result, TodoError};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Identifier of a todo record.
///
/// Ids are time-based (milliseconds since the Unix epoch) and strictly increasing
/// within an [`IdGenerator`], so they are never reused during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(pub u64);

impl TodoId {
    /// Largest id a valid list may hold. Leaves room above it so the generator can
    /// always issue a strictly greater id.
    pub const MAX: TodoId = TodoId(i64::MAX as u64);
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Todo {
    /// Builds a record from user text. Returns `None` when the text is blank.
    pub fn new(id: TodoId, text: &str) -> Option<Self> {
        let text = normalize_text(text)?;
        Some(Self {
            id,
            text,
            completed: false,
        })
    }
}

/// Trims user input, rejecting whitespace-only text.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// The persisted list state: `{ "list": [{id, text, completed}, ...] }`.
///
/// Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    pub list: Vec<Todo>,
}

impl TodoList {
    pub fn new(list: Vec<Todo>) -> Self {
        Self { list }
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.list.iter().find(|t| t.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn max_id(&self) -> Option<TodoId> {
        self.list.iter().map(|t| t.id).max()
    }

    /// Checks the list invariants: unique ids within range and non-blank text.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.list.len());
        for todo in &self.list {
            if todo.id > TodoId::MAX {
                return Err(TodoError::InvalidState(format!(
                    "todo id {} is out of range",
                    todo.id
                )));
            }
            if !seen.insert(todo.id) {
                return Err(TodoError::InvalidState(format!(
                    "duplicate todo id {}",
                    todo.id
                )));
            }
            if todo.text.trim().is_empty() {
                return Err(TodoError::InvalidState(format!(
                    "todo {} has empty text",
                    todo.id
                )));
            }
        }
        Ok(())
    }
}

/// Allocates fresh, strictly increasing ids.
///
/// Uses wall-clock milliseconds, bumping by one whenever the clock has not moved past
/// the last issued id (same millisecond, or clock stepped backwards).
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures every future id is greater than any id already in `list`.
    pub fn seed_past(&mut self, list: &TodoList) {
        if let Some(max) = list.max_id() {
            self.last = self.last.max(max.0.min(TodoId::MAX.0));
        }
    }

    pub fn next_id(&mut self) -> TodoId {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last = if now > self.last {
            now
        } else {
            self.last.saturating_add(1)
        };
        TodoId(self.last)
    }
}
