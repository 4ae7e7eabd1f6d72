//! # Todo CLI
//!
//! The binary is thin: the CLI lives in `src/cli/`, this file only invokes
//! `cli::run()` and turns an error into an exit code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/todo/src/cli/)                           │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - one-shot dispatch (commands.rs), line shell (shell.rs)   │
//! │  - terminal rendering via console styles (render.rs)        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  todoapp                                                    │
//! │  - Session (intents, filter, edit buffer, undo window)      │
//! │  - TodoStore (reducer, write-through persistence)           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in `todoapp` is UI agnostic. The CLI owns every user-facing concern:
//! parsing, data directory selection, log setup, rendering and exit codes.

mod cli;
mod logging;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
