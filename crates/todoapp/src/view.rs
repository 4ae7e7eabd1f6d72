//! Derived, read-only projections of the list.

use crate::model::Todo;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !todo.completed,
            Filter::Completed => todo.completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" | "done" => Ok(Filter::Completed),
            other => Err(format!(
                "unknown filter '{}' (expected all, active or completed)",
                other
            )),
        }
    }
}

/// The subsequence of `list` kept by `filter`, in source order.
pub fn filtered_view(list: &[Todo], filter: Filter) -> Vec<&Todo> {
    list.iter().filter(|t| filter.matches(t)).collect()
}

pub fn active_count(list: &[Todo]) -> usize {
    list.iter().filter(|t| !t.completed).count()
}

/// Footer wording: "1 task left", "3 tasks left".
pub fn active_count_label(count: usize) -> String {
    let noun = if count == 1 { "task" } else { "tasks" };
    format!("{} {} left", count, noun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TodoId;

    fn list() -> Vec<Todo> {
        let mut milk = Todo::new(TodoId(1), "Buy milk").unwrap();
        milk.completed = true;
        vec![
            milk,
            Todo::new(TodoId(2), "Walk dog").unwrap(),
            Todo::new(TodoId(3), "Feed cat").unwrap(),
        ]
    }

    fn texts(view: Vec<&Todo>) -> Vec<&str> {
        view.into_iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn filters_preserve_source_order() {
        let list = list();
        assert_eq!(
            texts(filtered_view(&list, Filter::All)),
            vec!["Buy milk", "Walk dog", "Feed cat"]
        );
        assert_eq!(
            texts(filtered_view(&list, Filter::Active)),
            vec!["Walk dog", "Feed cat"]
        );
        assert_eq!(
            texts(filtered_view(&list, Filter::Completed)),
            vec!["Buy milk"]
        );
    }

    #[test]
    fn active_count_ignores_completed() {
        assert_eq!(active_count(&list()), 2);
        assert_eq!(active_count(&[]), 0);
    }

    #[test]
    fn label_pluralizes() {
        assert_eq!(active_count_label(0), "0 tasks left");
        assert_eq!(active_count_label(1), "1 task left");
        assert_eq!(active_count_label(2), "2 tasks left");
    }

    #[test]
    fn parses_filter_names() {
        assert_eq!("Active".parse::<Filter>(), Ok(Filter::Active));
        assert_eq!("done".parse::<Filter>(), Ok(Filter::Completed));
        assert_eq!(" all ".parse::<Filter>(), Ok(Filter::All));
        assert!("pending".parse::<Filter>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>(), Ok(filter));
        }
    }
}
