//! The common structures and traits.

use super::error::{GameError, SearchError};
use std::fmt::{Debug, Display, Formatter, Result};
use std::hash::Hash;
use std::ops::Deref;

/// An assessment of a game state.
///
/// Exhaustive search only ever produces `LOSS`, `DRAW` or `WIN`. Whose point
/// of view that is depends on the strategy: negamax scores are relative to
/// the player to move, the other strategies score from the root mover's side.
pub type Evaluation = i32;

/// The player to move has no recourse left.
pub const LOSS: Evaluation = -1;
/// Nobody can force a win, or the position repeats forever.
pub const DRAW: Evaluation = 0;
/// The player can force a win.
pub const WIN: Evaluation = 1;

// Sentinels just outside the range of real evaluations, so that the first
// real value always replaces them.
pub(crate) const BELOW_LOSS: Evaluation = LOSS - 1;
pub(crate) const ABOVE_WIN: Evaluation = WIN + 1;

/// One of the two sides of a game.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Player {
    P1,
    P2,
}

impl Player {
    /// The opponent of this player.
    pub fn other(self) -> Player {
        match self {
            Player::P1 => Player::P2,
            Player::P2 => Player::P1,
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match *self {
            Player::P1 => write!(f, "p1"),
            Player::P2 => write!(f, "p2"),
        }
    }
}

/// An immutable snapshot of a game: whose turn it is, plus the game-specific
/// payload.
///
/// Transitions never mutate a state; they build a new one.
pub trait GameState: Clone + Display {
    /// The type of game moves.
    type Move: Clone + PartialEq + Debug + Display;
    /// A symmetry-normalized identity for this state.
    type Key: Clone + Hash + Eq;

    /// All legal moves for the player to move, in a fixed order.
    ///
    /// Searches are deterministic only if identical states always enumerate
    /// their moves in the same order.
    fn possible_moves(&self) -> Vec<Self::Move>;

    /// Whether `m` is one of `possible_moves()`.
    fn is_valid_move(&self, m: &Self::Move) -> bool {
        self.possible_moves().contains(m)
    }

    /// Return the state that results from playing `m`, with the turn passed
    /// to the other player.
    ///
    /// Fails with `GameError::InvalidMove` if `m` is not valid here.
    fn make_move(&self, m: &Self::Move) -> std::result::Result<Self, GameError>;

    /// The player whose turn it is.
    fn current_player(&self) -> Player;

    /// Key used for equality and memoization. Two states that only differ by a
    /// symmetry of the game (e.g. swapped hands) must share a key.
    fn canonical_key(&self) -> Self::Key;

    #[doc(hidden)]
    fn invalid_move(&self, m: &Self::Move) -> GameError {
        GameError::InvalidMove { mv: m.to_string(), state: self.to_string() }
    }
}

/// Shorthand for the move type of a game.
pub type MoveOf<G> = <<G as Game>::State as GameState>::Move;

/// Defines the rules for a two-player, perfect-knowledge game, and holds the
/// state the game is currently in.
pub trait Game {
    /// The type of the game state.
    type State: GameState;

    /// The state the game is currently in.
    fn current_state(&self) -> &Self::State;

    /// Install `state` as the current state, returning the previous one.
    ///
    /// Strategies that need to look at the game through another state should
    /// go through `Substitution` instead, which puts the original back.
    fn replace_state(&mut self, state: Self::State) -> Self::State;

    /// Whether the game has ended at `state`.
    ///
    /// The default is that the player to move has no legal moves. Games that
    /// override this must stay equivalent to it: every strategy in this crate
    /// treats either signal as the end of the game.
    fn is_over(&self, state: &Self::State) -> bool {
        state.possible_moves().is_empty()
    }

    /// Whether `player` has won at the current state: the game is over and
    /// the player stuck without a move is the other one.
    fn is_winner(&self, player: Player) -> bool {
        let state = self.current_state();
        self.is_over(state) && state.current_player() != player
    }

    /// Parse a move leniently. Returns `None` for text that is not a move at
    /// all; a parsed move still needs to be checked with `is_valid_move`.
    fn str_to_move(&self, text: &str) -> Option<<Self::State as GameState>::Move>;

    /// Human-readable rules.
    fn instructions(&self) -> &'static str;
}

/// Temporarily replaces the current state of a game.
///
/// The original state is put back when this is dropped, whichever way the
/// enclosing scope is left.
pub struct Substitution<'a, G: Game> {
    game: &'a mut G,
    original: Option<G::State>,
}

impl<'a, G: Game> Substitution<'a, G> {
    pub fn new(game: &'a mut G, state: G::State) -> Self {
        let original = game.replace_state(state);
        Substitution { game, original: Some(original) }
    }
}

impl<'a, G: Game> Deref for Substitution<'a, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.game
    }
}

impl<'a, G: Game> Drop for Substitution<'a, G> {
    fn drop(&mut self) {
        if let Some(original) = self.original.take() {
            self.game.replace_state(original);
        }
    }
}

/// Defines a method of choosing a move for the player to move in a game.
pub trait Strategy<G: Game> {
    /// Choose a move for the current state of `game`.
    ///
    /// The game is borrowed mutably so that a strategy may look at other
    /// states through a `Substitution`; the current state is the same when
    /// this returns.
    fn choose_move(&mut self, game: &mut G) -> std::result::Result<MoveOf<G>, SearchError>;
}
