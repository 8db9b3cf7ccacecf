//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - headless tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play {
        /// Path to a TOML layout config used for 'click X Y' input
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Apply a sequence of cell indices and print the result
    Replay {
        /// Cell indices (0-8) in move order; O moves first
        #[arg(required = true, allow_negative_numbers = true)]
        moves: Vec<isize>,

        /// Print the final status as JSON
        #[arg(long)]
        json: bool,
    },
}
