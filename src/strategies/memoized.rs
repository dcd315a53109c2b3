//! Recursive negamax with a memo table keyed by canonical state.
//!
//! Scores are relative to the player to move at each state, so a parent's
//! score is the best negated child score. The memo table lives for a single
//! call to `choose_move`. States still being evaluated further up the
//! recursion are marked in the table; reaching one again means the game can
//! loop, and that branch is scored as a draw. This is the only strategy in
//! the crate that terminates on games with cycles.

use super::super::error::SearchError;
use super::super::interface::*;
use super::util::*;

use log::{debug, trace};
use std::cmp::max;
use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Entry {
    // On the current recursion path.
    InProgress,
    Resolved(Evaluation),
}

struct Memo<K> {
    table: HashMap<K, Entry>,
    hits: usize,
    cycles: usize,
}

impl<K: Clone + std::hash::Hash + Eq> Memo<K> {
    fn with_capacity(capacity: usize) -> Self {
        Memo { table: HashMap::with_capacity(capacity), hits: 0, cycles: 0 }
    }

    // Negamax value of `state` for its player to move.
    fn score<G>(&mut self, game: &mut G, state: &G::State) -> Result<Evaluation, SearchError>
    where
        G: Game,
        G::State: GameState<Key = K>,
    {
        let key = state.canonical_key();
        match self.table.get(&key) {
            Some(&Entry::Resolved(value)) => {
                self.hits += 1;
                return Ok(value);
            }
            Some(Entry::InProgress) => {
                self.cycles += 1;
                trace!("cycle through {}", state);
                return Ok(DRAW);
            }
            None => {}
        }
        self.table.insert(key.clone(), Entry::InProgress);

        let value = if game.is_over(state) {
            terminal_value(game, state)
        } else {
            let moves = state.possible_moves();
            if moves.is_empty() {
                warn_stuck(state);
                LOSS
            } else {
                let mut best = BELOW_LOSS;
                for m in moves.iter() {
                    let child = state.make_move(m)?;
                    best = max(best, -self.score(game, &child)?);
                }
                best
            }
        };

        self.table.insert(key, Entry::Resolved(value));
        Ok(value)
    }
}

// Ask the game who won at a finished `state`, by making it the current state
// for the duration of the query.
fn terminal_value<G: Game>(game: &mut G, state: &G::State) -> Evaluation {
    let mover = state.current_player();
    let game = Substitution::new(game, state.clone());
    if game.is_winner(mover) {
        WIN
    } else if game.is_winner(mover.other()) {
        LOSS
    } else {
        DRAW
    }
}

/// Options to use for the memoized minimax engine.
#[derive(Clone, Copy, Debug)]
pub struct MemoOptions {
    table_capacity: usize,
}

impl MemoOptions {
    pub fn new() -> Self {
        MemoOptions { table_capacity: 256 }
    }

    /// How many states the memo table has room for up front.
    pub fn with_table_capacity(mut self, capacity: usize) -> Self {
        self.table_capacity = capacity;
        self
    }
}

impl Default for MemoOptions {
    fn default() -> Self {
        Self::new()
    }
}

pub struct MemoizedMinimax {
    opts: MemoOptions,
    prev_value: Evaluation,
    // Runtime stats for the last move generated.
    states_scored: usize,
    memo_hits: usize,
    cycles: usize,
}

impl MemoizedMinimax {
    pub fn new(opts: MemoOptions) -> MemoizedMinimax {
        MemoizedMinimax { opts, prev_value: DRAW, states_scored: 0, memo_hits: 0, cycles: 0 }
    }

    #[doc(hidden)]
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// How many times the last search ran into a state already on its path.
    pub fn cycles_detected(&self) -> usize {
        self.cycles
    }

    /// Return a human-readable summary of the last move generation.
    pub fn stats(&self) -> String {
        format!(
            "Scored {} distinct states.\n{} memo hits.\n{} cycles scored as draws.",
            self.states_scored, self.memo_hits, self.cycles
        )
    }
}

impl Default for MemoizedMinimax {
    fn default() -> Self {
        Self::new(MemoOptions::default())
    }
}

impl<G: Game> Strategy<G> for MemoizedMinimax {
    fn choose_move(&mut self, game: &mut G) -> Result<MoveOf<G>, SearchError> {
        let root = game.current_state().clone();
        let moves = root_moves(&root)?;
        // The root itself is not marked: a line that comes back to it expands
        // it once more, and the cycle is caught one level further down.
        let mut memo = Memo::with_capacity(self.opts.table_capacity);

        let mut best_value = BELOW_LOSS;
        let mut best_move = None;
        for m in moves {
            let child = root.make_move(&m)?;
            let value = -memo.score(game, &child)?;
            trace!("{} scores {}", m, value);
            if value > best_value {
                best_value = value;
                best_move = Some(m);
            }
        }

        self.prev_value = best_value;
        self.states_scored = memo.table.len();
        self.memo_hits = memo.hits;
        self.cycles = memo.cycles;
        debug!("memoized minimax: {}", self.stats().replace('\n', " "));
        best_move.ok_or(SearchError::NoAvailableMoves)
    }
}
