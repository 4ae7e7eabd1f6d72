//! # Session: the Intent Layer
//!
//! A [`Session`] is what a rendering surface talks to. It owns the [`TodoStore`] plus
//! the transient UI state that is never persisted:
//!
//! - the current [`Filter`]
//! - the edit buffer of the record being edited, if any
//! - the pending-undo snapshot of the last deleted record, held in an [`UndoWindow`]
//! - the light/dark [`Theme`]
//!
//! Renderers send [`Intent`]s through [`Session::handle`] and read back a
//! [`SessionView`].
//!
//! ## Undo
//!
//! Deleting a record arms the undo window with a copy of it. Undo within the window
//! re-adds the copied text as a **new** record (new id, appended, not completed) and
//! cancels the window. Once the window lapses the copy is discarded and undo does
//! nothing. A second delete replaces the held copy and restarts the window.
//!
//! Time is an argument, not ambient: every time-sensitive call takes `now`, and hosts
//! wake at [`Session::next_deadline`] to call [`Session::fire_due`].
//!
//! ## Editing
//!
//! ```text
//! viewing ──begin_edit──▶ editing ──commit_edit──▶ viewing
//! ```
//!
//! There is no cancel. Committing replaces the record through
//! [`TodoStore::edit`], so the record gets a new id. Starting an edit on another
//! record commits the one in progress first. Edit commits do not arm the undo window.

use crate::commands::{CmdMessage, CmdResult};
use crate::model::{Todo, TodoId};
use crate::store::backend::StorageBackend;
use crate::store::TodoStore;
use crate::timer::UndoWindow;
use crate::view::{active_count, active_count_label, filtered_view, Filter};
use std::fmt;
use std::time::{Duration, Instant};

/// Default lifetime of the pending-undo snapshot.
pub const DEFAULT_UNDO_WINDOW: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("Light"),
            Theme::Dark => f.write_str("Dark"),
        }
    }
}

/// A user action forwarded by the rendering surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Toggle(TodoId),
    Delete(TodoId),
    ClearAll,
    /// Replace a record's text in one step (begin + update + commit).
    Edit(TodoId, String),
    BeginEdit(TodoId),
    UpdateEdit(String),
    CommitEdit,
    SetFilter(Filter),
    Undo,
    ToggleTheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub id: TodoId,
    pub text: String,
}

/// Observed state handed to renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub todos: Vec<Todo>,
    pub visible: Vec<Todo>,
    pub filter: Filter,
    pub active_count: usize,
    pub active_label: String,
    pub undo_available: bool,
    pub editing: Option<EditBuffer>,
    pub theme: Theme,
    pub can_clear: bool,
}

pub struct Session<B: StorageBackend> {
    store: TodoStore<B>,
    filter: Filter,
    editing: Option<EditBuffer>,
    undo: UndoWindow<Todo>,
    theme: Theme,
}

impl<B: StorageBackend> Session<B> {
    pub fn new(store: TodoStore<B>, undo_window: Duration) -> Self {
        Self {
            store,
            filter: Filter::default(),
            editing: None,
            undo: UndoWindow::new(undo_window),
            theme: Theme::default(),
        }
    }

    pub fn store(&self) -> &TodoStore<B> {
        &self.store
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn editing(&self) -> Option<&EditBuffer> {
        self.editing.as_ref()
    }

    pub fn handle(&mut self, intent: Intent, now: Instant) -> CmdResult {
        self.fire_due(now);
        let result = match intent {
            Intent::Add(text) => self.add(&text),
            Intent::Toggle(id) => self.toggle(id),
            Intent::Delete(id) => self.delete(id, now),
            Intent::ClearAll => self.clear_all(),
            Intent::Edit(id, text) => self.edit(id, &text),
            Intent::BeginEdit(id) => self.begin_edit(id),
            Intent::UpdateEdit(text) => self.update_edit(&text),
            Intent::CommitEdit => self.commit_edit(),
            Intent::SetFilter(filter) => self.set_filter(filter),
            Intent::Undo => self.undo(now),
            Intent::ToggleTheme => self.toggle_theme(),
        };
        self.drop_stale_edit();
        result
    }

    pub fn add(&mut self, text: &str) -> CmdResult {
        self.store.add(text)
    }

    pub fn toggle(&mut self, id: TodoId) -> CmdResult {
        self.store.toggle(id)
    }

    /// Delete a record and hold a copy of it for undo.
    pub fn delete(&mut self, id: TodoId, now: Instant) -> CmdResult {
        let mut result = self.store.delete(id);
        if let Some(removed) = result.affected_todos.first() {
            if let Some(replaced) = self.undo.arm(removed.clone(), now) {
                log::debug!("undo snapshot of {} replaced", replaced.id);
            }
            result.add_message(CmdMessage::info(format!(
                "Undo available for {}s",
                self.undo.window().as_secs()
            )));
        }
        result
    }

    pub fn clear_all(&mut self) -> CmdResult {
        self.store.clear_all()
    }

    pub fn edit(&mut self, id: TodoId, text: &str) -> CmdResult {
        if self.editing.as_ref().is_some_and(|e| e.id == id) {
            self.editing = None;
        }
        self.store.edit(id, text)
    }

    /// Enter edit mode for `id`, seeding the buffer with its current text.
    pub fn begin_edit(&mut self, id: TodoId) -> CmdResult {
        let Some(todo) = self.store.get(id) else {
            return CmdResult::default();
        };
        if self.editing.as_ref().is_some_and(|e| e.id == id) {
            return CmdResult::default();
        }
        let buffer = EditBuffer {
            id,
            text: todo.text.clone(),
        };

        let mut result = self.commit_edit();
        self.editing = Some(buffer);
        result.add_message(CmdMessage::info("Editing"));
        result
    }

    pub fn update_edit(&mut self, text: &str) -> CmdResult {
        if let Some(buffer) = self.editing.as_mut() {
            buffer.text = text.to_string();
        }
        CmdResult::default()
    }

    /// Leave edit mode, replacing the record with the buffer's text.
    pub fn commit_edit(&mut self) -> CmdResult {
        match self.editing.take() {
            Some(buffer) => self.store.edit(buffer.id, &buffer.text),
            None => CmdResult::default(),
        }
    }

    pub fn set_filter(&mut self, filter: Filter) -> CmdResult {
        self.filter = filter;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("Showing {}", filter)));
        result
    }

    /// Re-add the held snapshot as a new record, if its window is still open.
    pub fn undo(&mut self, now: Instant) -> CmdResult {
        match self.undo.take(now) {
            Some(snapshot) => {
                let mut result = self.store.add(&snapshot.text);
                result.messages.clear();
                result.add_message(CmdMessage::success(format!(
                    "Restored: {}",
                    snapshot.text
                )));
                result
            }
            None => CmdResult::default(),
        }
    }

    pub fn toggle_theme(&mut self) -> CmdResult {
        self.theme = self.theme.toggled();
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("{} mode", self.theme)));
        result
    }

    /// Discard the undo snapshot if its window has lapsed.
    pub fn fire_due(&mut self, now: Instant) -> Option<Todo> {
        let expired = self.undo.fire_due(now);
        if let Some(todo) = &expired {
            log::debug!("undo window for {} expired", todo.id);
        }
        expired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.undo.next_deadline()
    }

    pub fn undo_available(&self, now: Instant) -> bool {
        self.undo.is_pending(now)
    }

    pub fn view(&self, now: Instant) -> SessionView {
        let todos = self.store.todos();
        let active = active_count(todos);
        SessionView {
            todos: todos.to_vec(),
            visible: filtered_view(todos, self.filter)
                .into_iter()
                .cloned()
                .collect(),
            filter: self.filter,
            active_count: active,
            active_label: active_count_label(active),
            undo_available: self.undo_available(now),
            editing: self.editing.clone(),
            theme: self.theme,
            can_clear: !todos.is_empty(),
        }
    }

    fn drop_stale_edit(&mut self) {
        if let Some(buffer) = &self.editing {
            if self.store.get(buffer.id).is_none() {
                self.editing = None;
            }
        }
    }
}
