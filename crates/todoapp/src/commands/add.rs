use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Todo, TodoId};

/// Appends a new record with `id` and trimmed `text`.
///
/// Blank text is ignored, as is an `id` already present in the list.
pub fn run(list: &mut Vec<Todo>, id: TodoId, text: &str) -> CmdResult {
    let mut result = CmdResult::default();

    if list.iter().any(|t| t.id == id) {
        log::debug!("add ignored: id {} already in use", id);
        return result;
    }

    let Some(todo) = Todo::new(id, text) else {
        return result;
    };

    result.add_message(CmdMessage::success(format!("Todo added: {}", todo.text)));
    list.push(todo.clone());
    result.affected_todos.push(todo);
    result
}
