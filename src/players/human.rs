//! Human player reading moves from a line-oriented input.

use super::Player;
use crate::games::tictactoe::{GameState, Position};
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Where a human's typed lines come from.
pub trait LineSource {
    /// Reads one line, or `None` once the input is exhausted.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: BufRead> LineSource for T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Process standard input, shared by every player reading from it.
///
/// Each read takes the stdin lock only for that line, so two human
/// players at one terminal never hold it at once.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match io::stdin().read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }
}

/// Human player typing a cell number (1-9) or a label such as "center".
pub struct HumanPlayer<I, O> {
    name: String,
    input: I,
    output: O,
}

impl<I: LineSource, O: Write> HumanPlayer<I, O> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> O {
        self.output
    }
}

impl<I: LineSource, O: Write> Player for HumanPlayer<I, O> {
    fn get_move(&mut self, state: &GameState) -> Result<Position> {
        loop {
            write!(self.output, "{} ({}) > ", self.name, state.to_move())?;
            self.output.flush()?;

            let Some(line) = self.input.next_line()? else {
                anyhow::bail!("Input closed");
            };

            match Position::from_label_or_number(&line) {
                Some(pos) if state.board().is_empty(pos) => return Ok(pos),
                Some(pos) => {
                    debug!(%pos, "Occupied square entered");
                    writeln!(self.output, "{} is taken, pick another square.", pos)?;
                }
                None => {
                    writeln!(
                        self.output,
                        "Enter a square number 1-9 or a name like \"center\"."
                    )?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
