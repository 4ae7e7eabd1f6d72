//! # Data Directory Resolution
//!
//! All persisted state lives in one data directory: the `todos.json` slot, the optional
//! `todo.toml` and the client's log files. It is resolved during [`initialize`]:
//!
//! 1. `data_override` (the client's `--data-dir` flag), if given.
//! 2. The `TODO_DATA_DIR` environment variable, if set and non-empty.
//! 3. The OS-appropriate data directory from [`directories::ProjectDirs`].
//!
//! The directory is created if needed.

use crate::config::TodoConfig;
use crate::error::{Result, TodoError};
use crate::session::Session;
use crate::store::fs_backend::FsBackend;
use crate::store::TodoStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_ENV: &str = "TODO_DATA_DIR";

pub struct TodoContext {
    pub store: TodoStore<FsBackend>,
    pub config: TodoConfig,
    pub data_dir: PathBuf,
}

impl TodoContext {
    /// Wrap the store in a [`Session`] using the configured undo window.
    pub fn into_session(self) -> Session<FsBackend> {
        let window = self.config.undo_window();
        Session::new(self.store, window)
    }
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = data_override {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "todo", "todo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TodoError::Config("could not determine a home directory".to_string()))
}

/// Resolve the data directory, load config and open the store.
pub fn initialize(data_override: Option<PathBuf>) -> Result<TodoContext> {
    let data_dir = resolve_data_dir(data_override)?;
    open_at(&data_dir)
}

pub fn open_at(data_dir: &Path) -> Result<TodoContext> {
    std::fs::create_dir_all(data_dir)?;
    let config = TodoConfig::load(data_dir)?;
    let store = TodoStore::open(FsBackend::new(data_dir.to_path_buf()));
    log::debug!(
        "opened {} todos from {}",
        store.todos().len(),
        data_dir.display()
    );

    Ok(TodoContext {
        store,
        config,
        data_dir: data_dir.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn override_wins() {
        let dir = TempDir::new().unwrap();
        let resolved = resolve_data_dir(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(resolved, dir.path());
    }

    #[test]
    fn open_at_creates_missing_directory() {
        let root = TempDir::new().unwrap();
        let data_dir = root.path().join("nested").join("todo");

        let ctx = open_at(&data_dir).unwrap();
        assert!(data_dir.is_dir());
        assert!(ctx.store.todos().is_empty());
        assert_eq!(ctx.data_dir, data_dir);
    }

    #[test]
    fn context_persists_across_opens() {
        let dir = TempDir::new().unwrap();
        {
            let mut ctx = open_at(dir.path()).unwrap();
            ctx.store.add("Buy milk");
        }
        let ctx = open_at(dir.path()).unwrap();
        assert_eq!(ctx.store.todos()[0].text, "Buy milk");
        assert!(dir.path().join("todos.json").exists());
    }

    #[test]
    fn session_uses_configured_window() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("todo.toml"), "undo_window_ms = 1200").unwrap();
        let mut session = open_at(dir.path()).unwrap().into_session();

        let now = std::time::Instant::now();
        let id = session.add("a").affected_todos[0].id;
        session.delete(id, now);
        assert_eq!(
            session.next_deadline(),
            Some(now + std::time::Duration::from_millis(1200))
        );
    }
}
