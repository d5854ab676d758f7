// Command-line arguments

use clap::Parser;
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Send vocabulary words via WhatsApp
#[derive(Debug, Clone, Parser)]
#[command(name = "wordcapsule", version, about)]
pub struct Cli {
    /// Send a vocabulary word now and exit
    #[arg(long)]
    pub send: bool,

    /// Send one message with all words due for review and exit
    #[arg(long, conflicts_with = "send")]
    pub review: bool,

    /// Run the interactive console
    #[arg(long, conflicts_with_all = ["send", "review"])]
    pub interactive: bool,

    /// Daily send time for the scheduler (24h HH:MM, local time)
    #[arg(long, value_name = "HH:MM")]
    pub time: Option<String>,

    /// Configuration file (default: ~/.wordcapsule/config.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Word list, one "word - definition" per line
    #[arg(long, value_name = "PATH")]
    pub vocab_file: Option<PathBuf>,

    /// Learning history file
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Debug-level logging for this crate
    #[arg(short, long)]
    pub verbose: bool,
}

/// What the process does after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    SendNow,
    SendReviews,
    Interactive,
    Scheduler,
}

impl Cli {
    /// Resolve the run mode. In CI the default scheduler becomes a single send.
    pub fn mode(&self, ci: bool) -> RunMode {
        if self.send {
            RunMode::SendNow
        } else if self.review {
            RunMode::SendReviews
        } else if self.interactive {
            RunMode::Interactive
        } else if ci {
            RunMode::SendNow
        } else {
            RunMode::Scheduler
        }
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            vocab_file: self.vocab_file.clone(),
            history_file: self.history_file.clone(),
            send_time: self.time.clone(),
        }
    }
}
