//! Subtract-a-square: players take turns removing a positive perfect square
//! from a running total. A player facing a total of zero has lost.

use crate::error::GameError;
use crate::interface::{self, GameState, Player};
use std::fmt::{Display, Formatter, Result};

/// Subtract `n` from the total. Only perfect squares are legal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Take(pub u32);

impl Display for Take {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    p1_turn: bool,
    total: u32,
}

impl State {
    pub fn new(p1_turn: bool, total: u32) -> State {
        State { p1_turn, total }
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "Current total: {}", self.total)
    }
}

impl GameState for State {
    type Move = Take;
    type Key = (bool, u32);

    fn possible_moves(&self) -> Vec<Take> {
        // `i <= total / i` rather than `i * i <= total`, which overflows near u32::MAX.
        (1u32..).take_while(|&i| i <= self.total / i).map(|i| Take(i * i)).collect()
    }

    fn make_move(&self, m: &Take) -> std::result::Result<State, GameError> {
        if !self.is_valid_move(m) {
            return Err(self.invalid_move(m));
        }
        Ok(State::new(!self.p1_turn, self.total - m.0))
    }

    fn current_player(&self) -> Player {
        if self.p1_turn {
            Player::P1
        } else {
            Player::P2
        }
    }

    fn canonical_key(&self) -> Self::Key {
        (self.p1_turn, self.total)
    }
}

pub struct SubtractSquare {
    current: State,
}

impl SubtractSquare {
    pub fn new(p1_starts: bool, total: u32) -> SubtractSquare {
        SubtractSquare { current: State::new(p1_starts, total) }
    }
}

impl interface::Game for SubtractSquare {
    type State = State;

    fn current_state(&self) -> &State {
        &self.current
    }

    fn replace_state(&mut self, state: State) -> State {
        std::mem::replace(&mut self.current, state)
    }

    fn is_over(&self, state: &State) -> bool {
        state.total == 0
    }

    fn str_to_move(&self, text: &str) -> Option<Take> {
        text.trim().parse().ok().map(Take)
    }

    fn instructions(&self) -> &'static str {
        "Players take turns subtracting square numbers from the starting \
         number. The winner is the person who subtracts to 0."
    }
}
