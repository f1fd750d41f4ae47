use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Pong against the computer, in the terminal")]
pub struct Cli {
    /// Append log output to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Mode {
    /// Play with the arrow keys against the AI paddle
    Play,
    /// Run the simulation without a terminal and log a summary
    Headless {
        /// Number of ticks to simulate
        #[arg(long, default_value_t = 1000)]
        ticks: u64,
    },
}

impl Cli {
    pub fn mode(&self) -> Mode {
        self.mode.unwrap_or(Mode::Play)
    }
}
