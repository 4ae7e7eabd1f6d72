//! Editing replaces a record rather than rewriting it in place: the old record is
//! deleted and the new text is added under `new_id`, at the end of the list, with
//! `completed` reset to false.
//!
//! Consequences callers can observe:
//! - the edited record's id changes
//! - it moves to the end of the list
//! - editing to blank text removes the record (the add half is a no-op)

use crate::commands::{add, delete, CmdMessage, CmdResult};
use crate::model::{Todo, TodoId};

pub fn run(list: &mut Vec<Todo>, id: TodoId, new_id: TodoId, text: &str) -> CmdResult {
    if !list.iter().any(|t| t.id == id) {
        return CmdResult::default();
    }

    let removed = delete::run(list, id);
    let added = add::run(list, new_id, text);

    let mut result = CmdResult::default();
    match (removed.affected_todos.first(), added.affected_todos.first()) {
        (Some(old), Some(new)) => result.add_message(CmdMessage::success(format!(
            "Todo updated: {} -> {}",
            old.text, new.text
        ))),
        (Some(old), None) => result.add_message(CmdMessage::warning(format!(
            "Todo removed by empty edit: {}",
            old.text
        ))),
        _ => {}
    }
    result.affected_todos.extend(removed.affected_todos);
    result.affected_todos.extend(added.affected_todos);
    result
}
