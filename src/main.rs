//! Tic-tac-toe - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictactoe::{GameConfig, console, logging, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(filter) = cli.log_filter {
        config.log_mut().set_filter(filter);
    }

    match cli.command {
        Command::Tui => tui::run_tui(&config),
        Command::Console => run_console(&config),
    }
}

/// Play one round on stdin/stdout
fn run_console(config: &GameConfig) -> Result<()> {
    logging::init(config.log())?;
    info!(config = ?config, "Console mode");

    console::run_console(config)?;
    Ok(())
}
