//! # Interactive Shell
//!
//! The shell owns a [`Session`], so it supports everything one-shot commands can't:
//! filters, two-step editing, undo of the last delete and the theme toggle.
//!
//! Each input line is split on whitespace and parsed as a [`ShellLine`]. Before a
//! line is handled, any lapsed undo window is fired. After it, the messages and the
//! current list are printed.
//!
//! While an edit is in progress (`edit <n>` without text) the next line is not parsed
//! as a command: it becomes the todo's new text and is committed immediately.

use super::render::{render_messages, render_view};
use super::setup::{shell_help, ShellCommand, ShellLine};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::time::Instant;
use todoapp::commands::{CmdMessage, CmdResult};
use todoapp::index::{parse_index_or_range, parse_positions, resolve, resolve_all};
use todoapp::session::{Intent, Session};
use todoapp::store::backend::StorageBackend;

enum Flow {
    Continue(String),
    Quit,
}

pub struct Shell<B: StorageBackend> {
    session: Session<B>,
    clock: Box<dyn Fn() -> Instant>,
}

impl<B: StorageBackend> Shell<B> {
    pub fn new(session: Session<B>) -> Self {
        Self::with_clock(session, Instant::now)
    }

    pub fn with_clock(session: Session<B>, clock: impl Fn() -> Instant + 'static) -> Self {
        Self {
            session,
            clock: Box::new(clock),
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session<B> {
        &self.session
    }

    /// Read lines from `input` until it ends or the user quits.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W, prompt: bool) -> io::Result<()> {
        let now = (self.clock)();
        write!(out, "{}", render_view(&self.session.view(now)))?;

        let mut lines = input.lines();
        loop {
            if prompt {
                let label = if self.session.editing().is_some() {
                    "edit> "
                } else {
                    "todo> "
                };
                write!(out, "{}", label)?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;

            match self.handle_line(&line) {
                Flow::Continue(output) => write!(out, "{}", output)?,
                Flow::Quit => break,
            }
        }

        // Input ended mid-edit: keep what was typed.
        if self.session.editing().is_some() {
            self.session.commit_edit();
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let now = (self.clock)();
        self.session.fire_due(now);

        if self.session.editing().is_some() {
            self.session.handle(Intent::UpdateEdit(line.to_string()), now);
            let result = self.session.handle(Intent::CommitEdit, now);
            return Flow::Continue(self.render(&result, now));
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Flow::Continue(String::new());
        }

        let command = match ShellLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) => return Flow::Continue(format!("{}\n", e.to_string().trim_end())),
        };
        log::debug!("shell command: {:?}", command);

        let result = match command {
            ShellCommand::Quit => return Flow::Quit,
            ShellCommand::Help => return Flow::Continue(shell_help()),
            ShellCommand::List => CmdResult::default(),
            ShellCommand::Add { text } => self.session.handle(Intent::Add(text.join(" ")), now),
            ShellCommand::Toggle { positions } => {
                match self.resolve_positions(&positions) {
                    Ok(ids) => self.apply_all(ids.into_iter().map(Intent::Toggle), now),
                    Err(result) => result,
                }
            }
            ShellCommand::Delete { positions } => {
                match self.resolve_positions(&positions) {
                    Ok(ids) => {
                        let count = ids.len();
                        let mut result = self.apply_all(ids.into_iter().map(Intent::Delete), now);
                        if count > 1 {
                            result.add_message(CmdMessage::warning(format!(
                                "Deleted {} todos. Only the last one can be restored with `undo`",
                                count
                            )));
                        }
                        result
                    }
                    Err(result) => result,
                }
            }
            ShellCommand::Edit { position, text } => self.edit(&position, text, now),
            ShellCommand::Clear => {
                if self.session.view(now).can_clear {
                    self.session.handle(Intent::ClearAll, now)
                } else {
                    error_result("Nothing to clear")
                }
            }
            ShellCommand::Filter { filter } => self.session.handle(Intent::SetFilter(filter), now),
            ShellCommand::Undo => {
                let result = self.session.handle(Intent::Undo, now);
                if result.is_noop() {
                    warning_result("Nothing to undo")
                } else {
                    result
                }
            }
            ShellCommand::Theme => self.session.handle(Intent::ToggleTheme, now),
        };

        Flow::Continue(self.render(&result, now))
    }

    fn edit(&mut self, position: &str, text: Vec<String>, now: Instant) -> CmdResult {
        let id = match parse_index_or_range(position, self.session.store().todos().len()) {
            Ok(positions) if positions.len() == 1 => {
                match resolve(self.session.store().todos(), positions[0]) {
                    Some(id) => id,
                    None => return error_result(format!("No todo at position {}", position)),
                }
            }
            Ok(_) => return error_result("Edit takes a single position"),
            Err(e) => return error_result(e.to_string()),
        };

        if text.is_empty() {
            self.session.handle(Intent::BeginEdit(id), now)
        } else {
            self.session.handle(Intent::Edit(id, text.join(" ")), now)
        }
    }

    fn resolve_positions(&self, args: &[String]) -> Result<Vec<todoapp::model::TodoId>, CmdResult> {
        let total = self.session.store().todos().len();
        parse_positions(args, total)
            .and_then(|positions| resolve_all(self.session.store().todos(), &positions))
            .map_err(|e| error_result(e.to_string()))
    }

    fn apply_all(&mut self, intents: impl Iterator<Item = Intent>, now: Instant) -> CmdResult {
        let mut result = CmdResult::default();
        for intent in intents {
            result.merge(self.session.handle(intent, now));
        }
        result
    }

    fn render(&self, result: &CmdResult, now: Instant) -> String {
        let view = self.session.view(now);
        let mut out = render_messages(&result.messages, view.theme);
        out.push_str(&render_view(&view));
        out
    }
}

fn error_result(message: impl Into<String>) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(message));
    result
}

fn warning_result(message: impl Into<String>) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::warning(message));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;
    use todoapp::session::{Theme, DEFAULT_UNDO_WINDOW};
    use todoapp::store::mem_backend::MemBackend;
    use todoapp::store::memory::InMemoryStore;
    use todoapp::view::Filter;

    fn shell() -> Shell<MemBackend> {
        Shell::new(Session::new(InMemoryStore::new(), DEFAULT_UNDO_WINDOW))
    }

    fn run(shell: &mut Shell<MemBackend>, script: &str) -> String {
        let mut out = Vec::new();
        shell.run(script.as_bytes(), &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn texts(shell: &Shell<MemBackend>) -> Vec<String> {
        shell
            .session()
            .store()
            .todos()
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn add_toggle_and_filter() {
        let mut sh = shell();
        let output = run(
            &mut sh,
            "add Buy milk\nadd Walk dog\ntoggle 1\nfilter active\n",
        );

        assert!(output.contains("Todo added: Buy milk"));
        assert!(output.contains("1 task left"));
        assert_eq!(sh.session().filter(), Filter::Active);
        assert!(sh.session().store().todos()[0].completed);
    }

    #[test]
    fn delete_then_undo_restores_text() {
        let mut sh = shell();
        let output = run(&mut sh, "add X\ndelete 1\nundo\n");

        assert!(output.contains("Type `undo` to restore it."));
        assert!(output.contains("Restored: X"));
        assert_eq!(texts(&sh), vec!["X"]);
    }

    #[test]
    fn undo_after_window_does_nothing() {
        let t0 = Instant::now();
        let ticks = Rc::new(Cell::new(0u64));
        let clock_ticks = Rc::clone(&ticks);
        let clock = move || {
            let n = clock_ticks.get();
            clock_ticks.set(n + 1);
            t0 + Duration::from_secs(3 * n)
        };
        let mut sh = Shell::with_clock(
            Session::new(InMemoryStore::new(), DEFAULT_UNDO_WINDOW),
            clock,
        );

        // Each handled line advances the clock by three seconds.
        let output = run(&mut sh, "add X\ndelete 1\nlist\nundo\n");
        assert!(output.contains("Nothing to undo"));
        assert!(texts(&sh).is_empty());
    }

    #[test]
    fn two_step_edit_commits_next_line() {
        let mut sh = shell();
        let output = run(&mut sh, "add first\nadd second\nedit 1\nfirst, revised\n");

        assert!(output.contains("Editing \"first\""));
        assert_eq!(texts(&sh), vec!["second", "first, revised"]);
        assert!(sh.session().editing().is_none());
    }

    #[test]
    fn one_step_edit() {
        let mut sh = shell();
        run(&mut sh, "add a\nedit 1 b c\n");
        assert_eq!(texts(&sh), vec!["b c"]);
    }

    #[test]
    fn empty_edit_line_removes_todo() {
        let mut sh = shell();
        run(&mut sh, "add a\nedit 1\n\n");
        assert!(texts(&sh).is_empty());
    }

    #[test]
    fn bad_input_is_reported_not_fatal() {
        let mut sh = shell();
        let output = run(&mut sh, "frobnicate\ntoggle 9\nadd ok\n");
        assert!(output.contains("frobnicate"));
        assert!(output.contains("No todo at position 9"));
        assert_eq!(texts(&sh), vec!["ok"]);
    }

    #[test]
    fn clear_and_theme() {
        let mut sh = shell();
        let output = run(&mut sh, "clear\nadd a\nadd b\nclear\ntheme\n");
        assert!(output.contains("Nothing to clear"));
        assert!(output.contains("Cleared 2 todos"));
        assert!(texts(&sh).is_empty());
        assert_eq!(sh.session().theme(), Theme::Dark);
    }

    #[test]
    fn quit_stops_reading() {
        let mut sh = shell();
        run(&mut sh, "add a\nquit\nadd b\n");
        assert_eq!(texts(&sh), vec!["a"]);
    }

    #[test]
    fn delete_range_warns_that_only_last_is_restorable() {
        let mut sh = shell();
        let output = run(&mut sh, "add a\nadd b\nadd c\ndelete 1-2\n");
        assert_eq!(texts(&sh), vec!["c"]);
        assert!(output.contains("Deleted 2 todos. Only the last one can be restored"));

        run(&mut sh, "undo\n");
        assert_eq!(texts(&sh), vec!["c", "b"]);
    }

    #[test]
    fn single_delete_has_no_bulk_warning() {
        let mut sh = shell();
        let output = run(&mut sh, "add a\ndelete 1\n");
        assert!(!output.contains("Only the last one"));
    }

    #[test]
    fn huge_range_is_rejected_without_expanding() {
        let mut sh = shell();
        let output = run(&mut sh, "add a\nadd b\nadd c\ndelete 1-300000000\n");
        assert!(output.contains("No todo at position 300000000 (3 total)"));
        assert_eq!(texts(&sh).len(), 3);
    }
}
