use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Todo, TodoId};

pub fn run(list: &mut Vec<Todo>, id: TodoId) -> CmdResult {
    let mut result = CmdResult::default();

    if let Some(pos) = list.iter().position(|t| t.id == id) {
        let removed = list.remove(pos);
        result.add_message(CmdMessage::success(format!(
            "Todo deleted: {}",
            removed.text
        )));
        result.affected_todos.push(removed);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_matching_record_and_reports_it() {
        let mut list = vec![
            Todo::new(TodoId(1), "a").unwrap(),
            Todo::new(TodoId(2), "b").unwrap(),
            Todo::new(TodoId(3), "c").unwrap(),
        ];
        let result = run(&mut list, TodoId(2));

        let texts: Vec<&str> = list.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
        assert_eq!(result.affected_todos[0].id, TodoId(2));
        assert_eq!(result.affected_todos[0].text, "b");
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut list = vec![Todo::new(TodoId(1), "a").unwrap()];
        assert!(run(&mut list, TodoId(5)).is_noop());
        assert_eq!(list.len(), 1);
    }
}
