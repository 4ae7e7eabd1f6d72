//! # Reducer
//!
//! [`reduce`] is the only way list state changes. It takes the current state and an
//! [`Action`] and returns the next state plus a [`CmdResult`] describing what changed.
//! The input state is never mutated.
//!
//! Actions that create records carry their new id. Ids are allocated by the store
//! before dispatch, so reducing the same action against the same state always yields
//! the same result.

use crate::commands::{self, CmdResult};
use crate::model::{TodoId, TodoList};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add { id: TodoId, text: String },
    Toggle { id: TodoId },
    Delete { id: TodoId },
    Edit { id: TodoId, new_id: TodoId, text: String },
    ClearAll,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add { .. } => "add",
            Action::Toggle { .. } => "toggle",
            Action::Delete { .. } => "delete",
            Action::Edit { .. } => "edit",
            Action::ClearAll => "clear_all",
        }
    }
}

pub fn reduce(state: &TodoList, action: &Action) -> (TodoList, CmdResult) {
    let mut list = state.list.clone();

    let result = match action {
        Action::Add { id, text } => commands::add::run(&mut list, *id, text),
        Action::Toggle { id } => commands::toggle::run(&mut list, *id),
        Action::Delete { id } => commands::delete::run(&mut list, *id),
        Action::Edit { id, new_id, text } => commands::edit::run(&mut list, *id, *new_id, text),
        Action::ClearAll => commands::clear::run(&mut list),
    };

    (TodoList::new(list), result)
}
