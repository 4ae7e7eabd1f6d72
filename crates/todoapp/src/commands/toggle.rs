use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Todo, TodoId};

pub fn run(list: &mut [Todo], id: TodoId) -> CmdResult {
    let mut result = CmdResult::default();

    if let Some(todo) = list.iter_mut().find(|t| t.id == id) {
        todo.completed = !todo.completed;
        let verb = if todo.completed {
            "completed"
        } else {
            "reopened"
        };
        result.add_message(CmdMessage::success(format!("Todo {}: {}", verb, todo.text)));
        result.affected_todos.push(todo.clone());
    }

    result
}
