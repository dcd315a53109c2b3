//! Exhaustive move selection for finite, two-player, zero-sum games of
//! perfect information.
//!
//! Games implement [`GameState`] and [`Game`]; any of the strategies then
//! picks an optimal move for the player to move:
//!
//! * [`IterativeMinimax`] builds the whole game tree with an explicit stack.
//! * [`MemoizedMinimax`] runs recursive negamax with a per-call memo table,
//!   and scores positions that repeat as draws.
//! * [`AlphaBeta`] runs recursive minimax with alpha-beta pruning.
//!
//! ```
//! use exhaustive_minimax::games::SubtractSquare;
//! use exhaustive_minimax::{MemoizedMinimax, Strategy, WIN};
//!
//! let mut game = SubtractSquare::new(true, 9);
//! let mut strategy = MemoizedMinimax::default();
//! let m = strategy.choose_move(&mut game).unwrap();
//! assert_eq!(m.0, 4);
//! assert_eq!(strategy.root_value(), WIN);
//! ```

pub mod error;
pub mod games;
pub mod interface;
pub mod strategies;
pub mod util;

pub use error::{GameError, SearchError};
pub use interface::{
    Evaluation, Game, GameState, MoveOf, Player, Strategy, Substitution, DRAW, LOSS, WIN,
};
pub use strategies::alphabeta::AlphaBeta;
pub use strategies::interactive::Interactive;
pub use strategies::iterative::{IterativeMinimax, IterativeOptions};
pub use strategies::memoized::{MemoOptions, MemoizedMinimax};
pub use strategies::random::Random;
