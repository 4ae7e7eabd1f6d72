use crate::commands::{CmdMessage, CmdResult};
use crate::model::Todo;

pub fn run(list: &mut Vec<Todo>) -> CmdResult {
    let mut result = CmdResult::default();
    if list.is_empty() {
        return result;
    }

    let removed: Vec<Todo> = std::mem::take(list);
    let noun = if removed.len() == 1 { "todo" } else { "todos" };
    result.add_message(CmdMessage::success(format!(
        "Cleared {} {}",
        removed.len(),
        noun
    )));
    result.with_affected_todos(removed)
}
