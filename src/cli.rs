//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: std::path::PathBuf,

    /// Log filter directive, overrides the config file (RUST_LOG still wins)
    #[arg(long, global = true)]
    pub log_filter: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI (mouse or keyboard, scores kept across rounds)
    Tui,

    /// Play one round over a text prompt
    Console,
}
