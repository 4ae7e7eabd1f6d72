//! # CLI Behavior
//!
//! This is **one possible UI client** for todoapp, not the application itself.
//!
//! ## Two Modes
//!
//! ### One-shot (`todo add milk`, `todo toggle 2`, `todo list -f active`)
//!
//! Each invocation loads the list, applies one change, writes it back and exits.
//! Todos are addressed by 1-based position in the full list, so `todo toggle 2`
//! means the same todo whatever filter was last used. Ranges work too: `todo rm 2-4`.
//!
//! ### Shell (`todo`, `todo shell`)
//!
//! Naked execution starts a line shell over a long-lived session. This is where the
//! transient state lives: the active filter, the edit buffer, the undo window for the
//! last delete and the light/dark theme. None of it is persisted.
//!
//! ## Data Directory
//!
//! `--data-dir` beats `TODO_DATA_DIR`, which beats the OS data directory. The list is
//! stored as `todos.json`, settings are read from `todo.toml` and logs go to `logs/`.
//!
//! ## Module Structure
//!
//! - `commands`: entry point and one-shot handlers
//! - `shell`: the interactive loop
//! - `render`: output formatting (lists, footer, messages)
//! - `setup`: argument parsing via clap
//! - `styles`: light and dark palettes

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;

pub use commands::run;
