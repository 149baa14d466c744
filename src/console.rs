//! Text console front end: one round over a prompt loop.

use crate::config::GameConfig;
use crate::status::StatusText;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use tictactoe_core::{InvalidMove, Mark, Match, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// How a console round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// A player completed a line.
    Won(Mark),
    /// The board filled up.
    Draw,
    /// Input ran out before the round finished.
    Abandoned,
}

/// Console I/O error.
#[derive(Debug, Clone, Display, Error)]
#[display("Console error: {} at {}:{}", message, file, line)]
pub struct ConsoleError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConsoleError {
    /// Creates a new console error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

/// Parses a 1-based cell number into a board index.
///
/// Returns `None` for anything that is not a positive integer. Numbers
/// past 9 still parse; the match rejects them as off the board.
pub fn parse_cell(input: &str) -> Option<usize> {
    input.trim().parse::<usize>().ok()?.checked_sub(1)
}

/// A round of tic-tac-toe played over a reader and a writer.
pub struct ConsoleGame<R, W> {
    game: Match,
    text: StatusText,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a console round reading moves from `input`.
    pub fn new(text: StatusText, input: R, output: W) -> Self {
        Self {
            game: Match::new(),
            text,
            input,
            output,
        }
    }

    /// Returns the match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Returns the writer.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays until the round is won, drawn, or input ends.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<RoundEnd, ConsoleError> {
        info!("Starting console round");
        writeln!(self.output, "{}\n", self.game.board())?;

        loop {
            let mark = self.game.current_player().mark();
            write!(self.output, "{}, choose a cell (1-9): ", self.text.name(mark))?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed before the round ended");
                writeln!(self.output)?;
                return Ok(RoundEnd::Abandoned);
            }

            let Some(position) = parse_cell(&line) else {
                debug!(input = %line.trim(), "Unparseable input");
                writeln!(self.output, "Please enter a number from 1 to 9.")?;
                continue;
            };

            match self.game.play(position) {
                MoveOutcome::Rejected(reason) => {
                    debug!(%reason, "Move rejected");
                    let notice = match reason {
                        InvalidMove::OutOfRange(_) => "Choose a cell from 1 to 9.".to_string(),
                        InvalidMove::Occupied(index) => {
                            format!("Cell {} is already taken.", index + 1)
                        }
                        InvalidMove::RoundOver => reason.to_string(),
                    };
                    writeln!(self.output, "Invalid move: {} Try again.", notice)?;
                }
                MoveOutcome::NextTurn(_) => {
                    writeln!(self.output, "\n{}\n", self.game.board())?;
                }
                MoveOutcome::Won(winner) => {
                    writeln!(self.output, "\n{}\n", self.game.board())?;
                    writeln!(self.output, "{}", self.text.win(winner))?;
                    return Ok(RoundEnd::Won(winner));
                }
                MoveOutcome::Draw => {
                    writeln!(self.output, "\n{}\n", self.game.board())?;
                    writeln!(self.output, "{}", self.text.draw())?;
                    return Ok(RoundEnd::Draw);
                }
            }
        }
    }
}

/// Runs one console round on stdin/stdout.
pub fn run_console(config: &GameConfig) -> anyhow::Result<RoundEnd> {
    let text = StatusText::new(config.players().clone());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut round = ConsoleGame::new(text, stdin.lock(), stdout.lock());
    let end = round.run()?;
    info!(?end, "Console round finished");
    Ok(end)
}
