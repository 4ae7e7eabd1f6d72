//! # Configuration
//!
//! Settings are declared with [`confique`] and resolved in priority order:
//!
//! 1. **Environment variables**: `TODO_UNDO_WINDOW_MS`, `TODO_LOG_LEVEL`.
//! 2. **Data-dir file**: `<data dir>/todo.toml`, if present.
//! 3. **Compiled defaults**: via `#[config(default = ...)]`.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `undo_window_ms` | `5000` | How long a deleted todo can be restored |
//! | `log_level` | `info` | Level for the client's log file |

use crate::error::{Result, TodoError};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CONFIG_FILE: &str = "todo.toml";

#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    /// Milliseconds a deleted todo stays restorable.
    #[config(default = 5000, env = "TODO_UNDO_WINDOW_MS")]
    pub undo_window_ms: u64,

    #[config(default = "info", env = "TODO_LOG_LEVEL")]
    pub log_level: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            undo_window_ms: 5000,
            log_level: "info".to_string(),
        }
    }
}

impl TodoConfig {
    /// Load from the environment and `<data_dir>/todo.toml`. A missing file is fine.
    pub fn load(data_dir: &Path) -> Result<Self> {
        TodoConfig::builder()
            .env()
            .file(data_dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| TodoError::Config(e.to_string()))
    }

    pub fn undo_window(&self) -> Duration {
        Duration::from_millis(self.undo_window_ms)
    }
}
