//! # Display Positions
//!
//! Ids are opaque millisecond numbers and not something anyone wants to type. Terminal
//! clients refer to todos by a 1-based **position** instead.
//!
//! Positions are canonical: a todo's position is its place in the full, unfiltered
//! list, so `todo toggle 2` targets the same record whether or not a filter is active.
//! A filtered listing shows gaps in the numbering rather than renumbering.
//!
//! Positions are resolved to ids *before* any mutation. Edits move a record to the end
//! of the list, so positions taken from an older listing can go stale, but ids can't.

use crate::error::{Result, TodoError};
use crate::model::{Todo, TodoId};
use crate::view::Filter;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTodo {
    pub index: usize,
    pub todo: Todo,
}

/// Pair each todo with its canonical position, keeping only those `filter` matches.
pub fn index_todos(list: &[Todo], filter: Filter) -> Vec<DisplayTodo> {
    list.iter()
        .enumerate()
        .filter(|(_, todo)| filter.matches(todo))
        .map(|(i, todo)| DisplayTodo {
            index: i + 1,
            todo: todo.clone(),
        })
        .collect()
}

pub fn resolve(list: &[Todo], position: usize) -> Option<TodoId> {
    position
        .checked_sub(1)
        .and_then(|i| list.get(i))
        .map(|t| t.id)
}

fn out_of_range(position: usize, total: usize) -> TodoError {
    TodoError::Store(format!(
        "No todo at position {} ({} total)",
        position, total
    ))
}

/// Resolve every position, failing on the first one out of range.
pub fn resolve_all(list: &[Todo], positions: &[usize]) -> Result<Vec<TodoId>> {
    positions
        .iter()
        .map(|&p| resolve(list, p).ok_or_else(|| out_of_range(p, list.len())))
        .collect()
}

/// Parses `"3"` or an inclusive range `"2-4"` into positions of a list of `total`
/// todos. Bounds are checked before a range is expanded.
pub fn parse_index_or_range(s: &str, total: usize) -> Result<Vec<usize>> {
    let parse_one = |part: &str| -> Result<usize> {
        let n = part
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| TodoError::Store(format!("Invalid position: {}", part.trim())))?;
        if n > total {
            return Err(out_of_range(n, total));
        }
        Ok(n)
    };

    match s.split_once('-') {
        Some((start, end)) => {
            let (start, end) = (parse_one(start)?, parse_one(end)?);
            if start > end {
                return Err(TodoError::Store(format!("Invalid range: {}", s)));
            }
            Ok((start..=end).collect())
        }
        None => Ok(vec![parse_one(s)?]),
    }
}

/// Parses each argument and flattens, dropping repeats while keeping first-seen order.
pub fn parse_positions(args: &[String], total: usize) -> Result<Vec<usize>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for arg in args {
        for p in parse_index_or_range(arg, total)? {
            if seen.insert(p) {
                out.push(p);
            }
        }
    }
    Ok(out)
}
