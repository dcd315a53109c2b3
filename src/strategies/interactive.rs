//! A strategy that asks a human for the move.

use super::super::error::SearchError;
use super::super::interface::*;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Prompts on `output` and reads one move per line from `input`, asking
/// again until the line parses to a legal move.
pub struct Interactive<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Interactive { input, output }
    }
}

impl Interactive<StdinLock<'static>, Stdout> {
    /// Play through the terminal.
    pub fn stdio() -> Self {
        Interactive::new(io::stdin().lock(), io::stdout())
    }
}

impl<G: Game, R: BufRead, W: Write> Strategy<G> for Interactive<R, W> {
    fn choose_move(&mut self, game: &mut G) -> Result<MoveOf<G>, SearchError> {
        let state = game.current_state();
        if state.possible_moves().is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }
        loop {
            write!(self.output, "Enter a move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(SearchError::EndOfInput);
            }
            match game.str_to_move(&line) {
                Some(m) if state.is_valid_move(&m) => return Ok(m),
                Some(m) => writeln!(self.output, "{} is not a legal move here.", m)?,
                None => writeln!(self.output, "Could not understand {:?}.", line.trim())?,
            }
        }
    }
}
