//! ## weft-cli
//! **Operational interface to the weft logging environment**
//!
//! Sends messages through the environment's logger and shows the
//! configuration the runtime would start with.

use clap::Parser;

mod commands;

use commands::Cli;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    commands::run_command(cli)
}
