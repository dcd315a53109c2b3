//! A strategy that randomly chooses a move, for use in tests.

use super::super::error::SearchError;
use super::super::interface::*;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct Random<R = ThreadRng> {
    rng: R,
}

impl Random {
    pub fn new() -> Random {
        Random { rng: rand::thread_rng() }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Random<R> {
    /// Draw from a specific generator, e.g. a seeded one.
    pub fn with_rng(rng: R) -> Random<R> {
        Random { rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for Random<R> {
    fn choose_move(&mut self, game: &mut G) -> Result<MoveOf<G>, SearchError> {
        let moves = game.current_state().possible_moves();
        moves.choose(&mut self.rng).cloned().ok_or(SearchError::NoAvailableMoves)
    }
}
