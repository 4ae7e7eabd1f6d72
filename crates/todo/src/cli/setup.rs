use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use todoapp::view::Filter;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.3.0"
/// Format for dev builds: "v0.3.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    bin_name = "todo",
    version = get_version(),
    disable_help_subcommand = true,
    after_help = "Run without a command to start the interactive shell."
)]
#[command(about = "A terminal to-do list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding todos.json, todo.toml and logs
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Log level for the log file (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL", help_heading = "Options")]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a todo
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Todo text (words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// List todos
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Which todos to show
        #[arg(short, long, default_value_t = Filter::All)]
        filter: Filter,
    },

    /// Mark todos completed, or reopen them
    #[command(alias = "t", display_order = 3)]
    Toggle {
        /// Positions of the todos (e.g. 1 3 or 2-4)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Replace a todo's text. The todo moves to the end of the list
    #[command(alias = "e", display_order = 4)]
    Edit {
        /// Position of the todo
        position: String,

        /// New text (words are joined with spaces)
        #[arg(required = true, trailing_var_arg = true)]
        text: Vec<String>,
    },

    /// Delete todos
    #[command(alias = "rm", display_order = 5)]
    Delete {
        /// Positions of the todos (e.g. 1 3 or 2-4)
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Delete every todo
    #[command(display_order = 6)]
    Clear,

    /// Start the interactive shell (the default)
    #[command(display_order = 7)]
    Shell,
}

/// One line typed into the interactive shell.
#[derive(Parser, Debug)]
#[command(
    name = "todo>",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// Add a todo
    #[command(alias = "a")]
    Add {
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Toggle todos between active and completed
    #[command(alias = "t")]
    Toggle {
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Delete todos (the last one deleted can be restored with `undo`)
    #[command(alias = "rm")]
    Delete {
        #[arg(required = true, num_args = 1..)]
        positions: Vec<String>,
    },

    /// Edit a todo. Without text, the next line you type becomes its text
    #[command(alias = "e")]
    Edit {
        position: String,

        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete every todo
    Clear,

    /// Show all, active or completed todos
    #[command(alias = "f")]
    Filter { filter: Filter },

    /// Restore the most recently deleted todo
    #[command(alias = "u")]
    Undo,

    /// Switch between light and dark styles
    Theme,

    /// Show the list
    #[command(alias = "ls")]
    List,

    /// Show this help
    #[command(alias = "?")]
    Help,

    /// Leave the shell
    #[command(alias = "exit", alias = "q")]
    Quit,
}

pub fn shell_help() -> String {
    ShellLine::command()
        .override_usage("<command> [args]")
        .render_help()
        .to_string()
}
