//! # Todoapp Architecture
//!
//! Todoapp is a **UI-agnostic to-do list library**. The terminal client in `crates/todo`
//! is one rendering surface for it; nothing in here knows about terminals, browsers or
//! exit codes.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session.rs)                                 │
//! │  - Transient UI state: filter, edit buffer, undo, theme     │
//! │  - Turns user intents into store actions                    │
//! │  - Owns the undo window (timer.rs)                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/mod.rs)                                       │
//! │  - Canonical list state + id allocation                     │
//! │  - dispatch(action) → reducer → persist → notify observers  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Reducer + Commands (reducer.rs, commands/*.rs)             │
//! │  - Pure transitions over the list                           │
//! │  - Invalid intents are silent no-ops                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence (store/persist.rs, store/*_backend.rs)         │
//! │  - Abstract StorageBackend trait (key → string)             │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Derived views (`view.rs`) are plain functions over the list and are used by the
//! session to build the observed state handed to renderers.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the session inward, code:
//! - Takes regular Rust function arguments, including the current `Instant`
//! - Returns regular Rust types (`CmdResult`, `SessionView`)
//! - **Never** writes to stdout/stderr (diagnostics go through the `log` facade)
//! - **Never** surfaces persistence failures to the caller
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): transition logic on plain vectors.
//! 2. **Store / persistence**: `MemBackend` with simulated write failures.
//! 3. **Session**: intents driven with synthetic `Instant`s, so undo expiry is
//!    deterministic.
//!
//! ## Module Overview
//!
//! - [`session`]: The intent layer, entry point for rendering surfaces
//! - [`store`]: State container, storage abstraction and implementations
//! - [`reducer`]: Actions and the pure transition function
//! - [`commands`]: Business logic for each transition
//! - [`view`]: Filters and derived counts
//! - [`timer`]: Cancellable deferred-expiry slot used for undo
//! - [`model`]: Core data types (`Todo`, `TodoId`, `TodoList`)
//! - [`index`]: 1-based display positions
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and store setup
//! - [`error`]: Error types

pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod reducer;
pub mod session;
pub mod store;
pub mod timer;
pub mod view;
