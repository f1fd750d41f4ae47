//! Terminal host for the rect-pong simulation
//!
//! Owns everything the core treats as a collaborator: the tick scheduler,
//! keyboard wiring and drawing to the terminal.

mod app;
mod cli;
mod clock;
mod input;
mod logging;
mod surface;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("client_tui: {err}");
            ExitCode::FAILURE
        }
    }
}
