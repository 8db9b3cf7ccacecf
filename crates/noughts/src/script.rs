//! Line-oriented game driver.
//!
//! Reads one command per line, feeds it into a [`GameSession`] and
//! writes the resulting board and status back out.

use crate::render::{render_board, status_line};
use crate::{ClickOutcome, GameSession, Point};
use derive_more::{Display, Error};
use noughts_tictactoe::{BoardState, MarkError, Position};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// A parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputCommand {
    /// Mark a cell by number (0-8) or label.
    Select(Position),
    /// Mark whatever cell lies under a pointer location.
    Click(Point),
    /// Start a new game.
    Reset,
    /// Print the board again.
    Board,
    /// Stop reading input.
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum CommandError {
    /// `click` needs two numeric coordinates.
    #[display("Expected 'click X Y', got '{input}'")]
    BadCoordinates {
        /// The offending line.
        input: String,
    },

    /// Neither a keyword nor a cell.
    #[display("Unknown command or cell: '{input}'")]
    Unknown {
        /// The offending line.
        input: String,
    },
}

impl InputCommand {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let mut words = line.split_whitespace();

        match words.next().map(str::to_lowercase).as_deref() {
            Some("reset" | "r") => Ok(InputCommand::Reset),
            Some("board" | "b") => Ok(InputCommand::Board),
            Some("quit" | "q" | "exit") => Ok(InputCommand::Quit),
            Some("click") => {
                let coords: Option<Vec<f32>> = words
                    .map(|w| w.parse::<f32>().ok().filter(|v| v.is_finite()))
                    .collect();
                match coords.as_deref() {
                    Some([x, y]) => Ok(InputCommand::Click(Point::new(*x, *y))),
                    _ => Err(CommandError::BadCoordinates {
                        input: line.to_string(),
                    }),
                }
            }
            _ => Position::from_label_or_number(line)
                .map(InputCommand::Select)
                .ok_or_else(|| CommandError::Unknown {
                    input: line.to_string(),
                }),
        }
    }
}

/// Failure while driving a session from a stream.
#[derive(Debug, Display, Error)]
pub enum ScriptError {
    /// Reading input or writing output failed.
    #[display("I/O error: {source}")]
    Io {
        /// Underlying error.
        source: std::io::Error,
    },
}

impl From<std::io::Error> for ScriptError {
    fn from(source: std::io::Error) -> Self {
        ScriptError::Io { source }
    }
}

/// Counts of what a script run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Marks that landed on the board.
    pub marks: usize,
    /// Games that ended in a win or draw.
    pub games_finished: usize,
    /// Lines that could not be parsed.
    pub rejected: usize,
}

/// Runs commands from `input` until end of input or `quit`.
///
/// Bad lines are reported to `output` and skipped.
#[instrument(skip_all)]
pub fn run_script<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> Result<ScriptSummary, ScriptError> {
    let mut summary = ScriptSummary::default();
    write_board(session, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match InputCommand::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                warn!(error = %err, "Rejected input line");
                summary.rejected += 1;
                writeln!(output, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Command parsed");

        let outcome = match command {
            InputCommand::Quit => break,
            InputCommand::Board => {
                write_board(session, &mut output)?;
                continue;
            }
            InputCommand::Reset => {
                session.reset();
                write_board(session, &mut output)?;
                continue;
            }
            InputCommand::Select(position) => session.select(position),
            InputCommand::Click(point) => session.click(point),
        };

        match outcome {
            ClickOutcome::Marked { status, .. } => {
                summary.marks += 1;
                if status.is_over() {
                    summary.games_finished += 1;
                }
                write_board(session, &mut output)?;
            }
            ClickOutcome::Occupied(position) => {
                writeln!(output, "{} is already taken", position)?;
            }
            ClickOutcome::Missed => writeln!(output, "No cell there")?,
            ClickOutcome::Frozen(status) => {
                writeln!(output, "{}", status_line(&status, session.board().current_turn()))?;
            }
        }
    }

    info!(?summary, "Script finished");
    Ok(summary)
}

fn write_board<W: Write>(session: &GameSession, output: &mut W) -> std::io::Result<()> {
    writeln!(output, "{}", render_board(session.board()))?;
    writeln!(
        output,
        "{}",
        status_line(&session.status(), session.board().current_turn())
    )
}

/// Plays `moves` in order on a fresh board.
///
/// # Errors
///
/// Stops at the first rejected move.
#[instrument]
pub fn replay(moves: &[isize]) -> Result<BoardState, MarkError> {
    let mut board = BoardState::new();
    for &index in moves {
        board.mark(index)?;
    }
    info!(status = %board.evaluate(), "Replay finished");
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keywords() {
        assert_eq!(InputCommand::parse("reset"), Ok(InputCommand::Reset));
        assert_eq!(InputCommand::parse(" Q "), Ok(InputCommand::Quit));
        assert_eq!(InputCommand::parse("board"), Ok(InputCommand::Board));
    }

    #[test]
    fn test_parse_cells() {
        assert_eq!(InputCommand::parse("4"), Ok(InputCommand::Select(Position::Center)));
        assert_eq!(
            InputCommand::parse("top-right"),
            Ok(InputCommand::Select(Position::TopRight))
        );
    }

    #[test]
    fn test_parse_click() {
        assert_eq!(
            InputCommand::parse("click 210 70.5"),
            Ok(InputCommand::Click(Point::new(210.0, 70.5)))
        );
        assert!(matches!(
            InputCommand::parse("click 210"),
            Err(CommandError::BadCoordinates { .. })
        ));
    }

    #[test]
    fn test_parse_click_rejects_stray_words() {
        for line in ["click 1 foo 2", "click 1 2 3", "click x 2", "click nan 2", "click 1 inf"] {
            assert_eq!(
                InputCommand::parse(line),
                Err(CommandError::BadCoordinates {
                    input: line.to_string()
                })
            );
        }
    }

    #[test]
    fn test_parse_rejects_label_fragments() {
        for line in ["e", "-", "right"] {
            assert_eq!(
                InputCommand::parse(line),
                Err(CommandError::Unknown {
                    input: line.to_string()
                })
            );
        }
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            InputCommand::parse("9"),
            Err(CommandError::Unknown {
                input: "9".to_string()
            })
        );
    }

    #[test]
    fn test_replay_stops_at_bad_move() {
        assert_eq!(
            replay(&[0, 0]).unwrap_err(),
            MarkError::CellOccupied {
                position: Position::TopLeft
            }
        );
        assert_eq!(replay(&[10]).unwrap_err(), MarkError::InvalidIndex { index: 10 });
    }
}
