//! Utility functions for playing games out.

use super::error::SearchError;
use super::interface::{Game, GameState, Player, Strategy};
use log::debug;
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A match is drawn once the same position has come up this many times.
pub const REPETITIONS_FOR_DRAW: usize = 3;

/// How a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    /// Either the game ended without a winner, or a position repeated
    /// `REPETITIONS_FOR_DRAW` times.
    Draw,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// Play `game` from its current state until it is over, with `first` moving
/// for the player to move now and `second` for the other one.
///
/// Every chosen move is checked against the rules before it is played.
/// Positions are compared by canonical key, so games with cycles still end:
/// the match is a draw as soon as one position has been seen
/// `REPETITIONS_FOR_DRAW` times, counting the starting one.
pub fn play<G: Game>(
    game: &mut G, first: &mut dyn Strategy<G>, second: &mut dyn Strategy<G>,
) -> Result<Outcome, SearchError> {
    let mut strategies: [&mut dyn Strategy<G>; 2] = [first, second];
    let mut seen = HashMap::new();
    seen.insert(game.current_state().canonical_key(), 1usize);
    let mut s = 0;
    while !game.is_over(game.current_state()) {
        let m = strategies[s].choose_move(game)?;
        let next = game.current_state().make_move(&m)?;
        debug!("{} plays {}: {}", game.current_state().current_player(), m, next);
        let count = seen.entry(next.canonical_key()).or_insert(0);
        *count += 1;
        let repeated = *count >= REPETITIONS_FOR_DRAW;
        game.replace_state(next);
        if repeated {
            debug!("{} seen {} times, calling it a draw", game.current_state(), REPETITIONS_FOR_DRAW);
            return Ok(Outcome::Draw);
        }
        s = 1 - s;
    }
    Ok(if game.is_winner(Player::P1) {
        Outcome::Winner(Player::P1)
    } else if game.is_winner(Player::P2) {
        Outcome::Winner(Player::P2)
    } else {
        Outcome::Draw
    })
}
