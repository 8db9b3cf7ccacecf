//! Noughts - command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use noughts::{BoardLayout, Cli, Command, GameSession, LayoutConfig, render, replay, run_script};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the game.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument]
fn run_play(config: Option<PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => LayoutConfig::from_file(&path)
            .with_context(|| format!("Loading layout from {}", path.display()))?,
        None => LayoutConfig::default(),
    };

    info!("Starting interactive session");
    let mut session = GameSession::new(BoardLayout::new(&config));
    let stdin = io::stdin();
    let summary = run_script(&mut session, stdin.lock(), io::stdout())?;
    info!(
        marks = summary.marks,
        games = summary.games_finished,
        "Session ended"
    );
    Ok(())
}

/// Replay a move list and print the outcome
#[instrument]
fn run_replay(moves: &[isize], json: bool) -> Result<()> {
    let board = replay(moves).context("Replay rejected a move")?;
    let status = board.evaluate();

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::to_string(&status)?)?;
    } else {
        writeln!(stdout, "{}", render::render_board(&board))?;
        writeln!(stdout, "{}", render::status_line(&status, board.current_turn()))?;
    }
    Ok(())
}
