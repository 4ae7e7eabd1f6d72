//! # Commands
//!
//! One module per list transition. Each `run` mutates the list it is handed and
//! reports what it touched in a [`CmdResult`]. Commands never fail: an intent that
//! cannot apply (unknown id, blank text) leaves the list untouched and returns an
//! empty result.
//!
//! Commands are not called directly by clients. The [`crate::reducer`] applies them
//! to a copy of the current state, which keeps transitions pure from the store's
//! point of view.

use crate::model::Todo;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmdResult {
    /// Records created, changed or removed by the transition, in the state they
    /// ended up in (removed records are reported as they were before removal).
    pub affected_todos: Vec<Todo>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_todos(mut self, todos: Vec<Todo>) -> Self {
        self.affected_todos = todos;
        self
    }

    /// Appends another result's records and messages to this one.
    pub fn merge(&mut self, other: CmdResult) {
        self.affected_todos.extend(other.affected_todos);
        self.messages.extend(other.messages);
    }

    pub fn is_noop(&self) -> bool {
        self.affected_todos.is_empty()
    }
}
