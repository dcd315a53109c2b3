//! Error types for games and strategies.

use std::io;
use thiserror::Error;

/// A violation of a game's rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move `{mv}` at state: {state}")]
    InvalidMove { mv: String, state: String },
}

/// Failure to produce a move.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("failed to read move: {0}")]
    Io(#[from] io::Error),
    #[error("input ended before a valid move was entered")]
    EndOfInput,
}
