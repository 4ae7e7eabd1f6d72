//! Plain-string rendering of lists, footers and command messages.
//!
//! Functions here return `String`s and never print, so they can be tested directly.
//! Styling goes through `console`, which drops escape codes when the output is not a
//! terminal.

use super::styles::palette;
use todoapp::commands::{CmdMessage, MessageLevel};
use todoapp::index::index_todos;
use todoapp::model::{Todo, TodoId};
use todoapp::session::{SessionView, Theme};
use todoapp::view::{active_count, active_count_label, Filter};

pub fn render_messages(messages: &[CmdMessage], theme: Theme) -> String {
    let p = palette(theme);
    messages
        .iter()
        .map(|msg| {
            let style = match msg.level {
                MessageLevel::Info => &p.info,
                MessageLevel::Success => &p.success,
                MessageLevel::Warning => &p.warning,
                MessageLevel::Error => &p.error,
            };
            format!("{}\n", style.apply_to(&msg.content))
        })
        .collect()
}

/// Renders the todos kept by `filter`, numbered by their position in the full list.
pub fn render_list(list: &[Todo], filter: Filter, editing: Option<TodoId>, theme: Theme) -> String {
    let p = palette(theme);
    let entries = index_todos(list, filter);
    if entries.is_empty() {
        return match filter {
            Filter::All => "No todos.\n".to_string(),
            other => format!("No {} todos.\n", other),
        };
    }

    let width = list.len().to_string().len();
    let mut out = String::new();
    for entry in entries {
        let todo = &entry.todo;
        let mark = if todo.completed { "[x]" } else { "[ ]" };
        let index = format!("{:>width$}.", entry.index, width = width);
        let text = if editing == Some(todo.id) {
            format!("{} (editing)", p.editing.apply_to(&todo.text))
        } else if todo.completed {
            p.completed.apply_to(&todo.text).to_string()
        } else {
            p.active.apply_to(&todo.text).to_string()
        };
        out.push_str(&format!("  {} {} {}\n", p.index.apply_to(index), mark, text));
    }
    out
}

/// "2 tasks left" followed by the filter choices, the selected one marked.
pub fn render_footer(list: &[Todo], filter: Filter, theme: Theme) -> String {
    let p = palette(theme);
    let label = active_count_label(active_count(list));
    let filters: Vec<String> = Filter::ALL
        .iter()
        .map(|f| {
            if *f == filter {
                p.filter_selected.apply_to(format!("[{}]", f)).to_string()
            } else {
                f.to_string()
            }
        })
        .collect();
    format!("{}  {}\n", p.footer.apply_to(label), filters.join(" "))
}

pub fn render_view(view: &SessionView) -> String {
    let p = palette(view.theme);
    let editing = view.editing.as_ref().map(|e| e.id);
    let mut out = render_list(&view.todos, view.filter, editing, view.theme);
    if view.can_clear {
        out.push_str(&render_footer(&view.todos, view.filter, view.theme));
    }
    if view.undo_available {
        out.push_str(&format!(
            "{}\n",
            p.hint.apply_to("Todo deleted. Type `undo` to restore it.")
        ));
    }
    if let Some(buffer) = &view.editing {
        out.push_str(&format!(
            "{}\n",
            p.hint.apply_to(format!(
                "Editing \"{}\". Type the new text (an empty line removes it).",
                buffer.text
            ))
        ));
    }
    out
}
