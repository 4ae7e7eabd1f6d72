//! # CLI Layer
//!
//! The CLI layer is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Picks the data directory and installs the log backend
//! - Formats output for human consumption
//!
//! One-shot commands work on the store directly: they have no filter, edit buffer or
//! undo window to keep, since the process exits right after.

use super::render::{render_footer, render_list, render_messages};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use crate::logging;
use anyhow::Result;
use clap::Parser;
use std::io::{self, IsTerminal};
use todoapp::commands::CmdResult;
use todoapp::index::{parse_index_or_range, parse_positions, resolve_all};
use todoapp::init::{initialize, TodoContext};
use todoapp::session::Theme;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let ctx = initialize(cli.data_dir.clone())?;

    let level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| ctx.config.log_level.clone());
    if let Err(e) = logging::init_logging(&level, &logging::log_dir(&ctx.data_dir)) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match cli.command {
        None => run_shell(ctx),
        Some(command) => run_command(ctx, command),
    }
}

fn run_shell(ctx: TodoContext) -> Result<()> {
    let interactive = io::stdin().is_terminal();
    let mut shell = Shell::new(ctx.into_session());
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    shell.run(stdin.lock(), &mut stdout, interactive)?;
    Ok(())
}

fn run_command(ctx: TodoContext, command: Commands) -> Result<()> {
    let mut store = ctx.store;
    let result = match command {
        Commands::Shell => {
            return run_shell(TodoContext { store, ..ctx });
        }
        Commands::Add { text } => store.add(&text.join(" ")),
        Commands::List { filter } => {
            print!("{}", render_list(store.todos(), filter, None, Theme::default()));
            if !store.todos().is_empty() {
                print!("{}", render_footer(store.todos(), filter, Theme::default()));
            }
            return Ok(());
        }
        Commands::Toggle { positions } => {
            let positions = parse_positions(&positions, store.todos().len())?;
            let ids = resolve_all(store.todos(), &positions)?;
            let mut result = CmdResult::default();
            for id in ids {
                result.merge(store.toggle(id));
            }
            result
        }
        Commands::Edit { position, text } => {
            let positions = parse_index_or_range(&position, store.todos().len())?;
            if positions.len() != 1 {
                anyhow::bail!("Edit takes a single position");
            }
            let ids = resolve_all(store.todos(), &positions)?;
            store.edit(ids[0], &text.join(" "))
        }
        Commands::Delete { positions } => {
            let positions = parse_positions(&positions, store.todos().len())?;
            let ids = resolve_all(store.todos(), &positions)?;
            let mut result = CmdResult::default();
            for id in ids {
                result.merge(store.delete(id));
            }
            result
        }
        Commands::Clear => store.clear_all(),
    };

    if result.is_noop() && result.messages.is_empty() {
        println!("Nothing changed.");
    } else {
        print!("{}", render_messages(&result.messages, Theme::default()));
    }
    Ok(())
}
