//! Minimax with alpha-beta pruning.
//!
//! Unlike negamax, every value is from the point of view of the player who
//! is choosing the move at the root: that player maximizes, the opponent
//! minimizes. Nothing is cached, so identical positions reached along
//! different lines are searched again, and a game with cycles will never
//! finish. Pruning only skips work; the root values match plain minimax.

use super::super::error::SearchError;
use super::super::interface::*;
use super::util::*;

use log::{debug, trace};
use std::cmp::{max, min};

#[derive(Default)]
pub struct AlphaBeta {
    prev_value: Evaluation,
    // Runtime stats for the last move generated.
    nodes_visited: usize,
    cutoffs: usize,
}

impl AlphaBeta {
    pub fn new() -> AlphaBeta {
        AlphaBeta::default()
    }

    #[doc(hidden)]
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// Number of positions examined by the last search.
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Number of times the last search abandoned the remaining moves of a
    /// position.
    pub fn cutoffs(&self) -> usize {
        self.cutoffs
    }

    fn alphabeta<G: Game>(
        &mut self, game: &G, state: &G::State, root_player: Player, mut alpha: Evaluation,
        mut beta: Evaluation,
    ) -> Result<Evaluation, SearchError> {
        self.nodes_visited += 1;
        let mover = state.current_player();
        if game.is_over(state) {
            return Ok(loss_for(mover, root_player));
        }
        let moves = state.possible_moves();
        if moves.is_empty() {
            warn_stuck(state);
            return Ok(loss_for(mover, root_player));
        }

        if mover == root_player {
            let mut best = BELOW_LOSS;
            for m in moves.iter() {
                let child = state.make_move(m)?;
                let value = self.alphabeta(game, &child, root_player, alpha, beta)?;
                best = max(best, value);
                alpha = max(alpha, value);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        } else {
            let mut best = ABOVE_WIN;
            for m in moves.iter() {
                let child = state.make_move(m)?;
                let value = self.alphabeta(game, &child, root_player, alpha, beta)?;
                best = min(best, value);
                beta = min(beta, value);
                if beta <= alpha {
                    self.cutoffs += 1;
                    break;
                }
            }
            Ok(best)
        }
    }
}

impl<G: Game> Strategy<G> for AlphaBeta {
    fn choose_move(&mut self, game: &mut G) -> Result<MoveOf<G>, SearchError> {
        self.nodes_visited = 0;
        self.cutoffs = 0;
        let game = &*game;
        let root = game.current_state();
        let root_player = root.current_player();
        let moves = root_moves(root)?;

        let mut best_value = BELOW_LOSS;
        let mut best_move = None;
        for m in moves {
            let child = root.make_move(&m)?;
            // Each root move gets the full window, so its value is exact.
            let value = self.alphabeta(game, &child, root_player, BELOW_LOSS, ABOVE_WIN)?;
            trace!("{} scores {}", m, value);
            if value > best_value {
                best_value = value;
                best_move = Some(m);
            }
        }

        self.prev_value = best_value;
        debug!(
            "alpha-beta visited {} nodes with {} cutoffs, root value {}",
            self.nodes_visited, self.cutoffs, best_value
        );
        best_move.ok_or(SearchError::NoAvailableMoves)
    }
}
