// CLI module
// Command-line arguments and the interactive console

mod args;
mod commands;
mod repl;

pub use args::{Cli, RunMode};
pub use commands::{format_due, format_help, format_stats, Command};
pub use repl::Repl;
