//! Chopsticks: each player has two hands holding one to four fingers. A move
//! taps one of your live hands against one of the opponent's live hands,
//! adding your count to theirs modulo 5. A hand at zero is dead; the first
//! player with two dead hands loses.
//!
//! The game graph has cycles, so only strategies with a cycle guard can
//! search it.

use crate::error::GameError;
use crate::interface::{self, GameState, Player};
use std::fmt::{Display, Formatter, Result};

const FINGERS: u8 = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Hand {
    Left,
    Right,
}

impl Hand {
    fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }

    fn from_char(c: char) -> Option<Hand> {
        match c {
            'l' => Some(Hand::Left),
            'r' => Some(Hand::Right),
            _ => None,
        }
    }
}

const HANDS: [Hand; 2] = [Hand::Left, Hand::Right];

/// Tap the opponent's `to` hand with your `from` hand. Written `lr`, `rl`, etc.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Tap {
    pub from: Hand,
    pub to: Hand,
}

impl Display for Tap {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let c = |h: Hand| if h == Hand::Left { 'l' } else { 'r' };
        write!(f, "{}{}", c(self.from), c(self.to))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    p1_turn: bool,
    p1: [u8; 2],
    p2: [u8; 2],
}

impl State {
    pub fn new(p1_turn: bool, p1: [u8; 2], p2: [u8; 2]) -> State {
        State { p1_turn, p1, p2 }
    }

    pub fn hands(&self, player: Player) -> [u8; 2] {
        match player {
            Player::P1 => self.p1,
            Player::P2 => self.p2,
        }
    }

    // (mover, opponent)
    fn sides(&self) -> ([u8; 2], [u8; 2]) {
        if self.p1_turn {
            (self.p1, self.p2)
        } else {
            (self.p2, self.p1)
        }
    }
}

fn sorted(hands: [u8; 2]) -> [u8; 2] {
    [hands[0].min(hands[1]), hands[0].max(hands[1])]
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "Player 1: {} - {}; Player 2: {} - {}",
            self.p1[0], self.p1[1], self.p2[0], self.p2[1]
        )
    }
}

impl GameState for State {
    type Move = Tap;
    type Key = (bool, [u8; 2], [u8; 2]);

    fn possible_moves(&self) -> Vec<Tap> {
        let (mine, theirs) = self.sides();
        let mut moves = Vec::with_capacity(4);
        for &from in HANDS.iter() {
            if mine[from.index()] == 0 {
                continue;
            }
            for &to in HANDS.iter() {
                if theirs[to.index()] != 0 {
                    moves.push(Tap { from, to });
                }
            }
        }
        moves
    }

    fn make_move(&self, m: &Tap) -> std::result::Result<State, GameError> {
        if !self.is_valid_move(m) {
            return Err(self.invalid_move(m));
        }
        let (mine, mut theirs) = self.sides();
        let target = &mut theirs[m.to.index()];
        *target = (*target + mine[m.from.index()]) % FINGERS;
        Ok(if self.p1_turn {
            State::new(false, mine, theirs)
        } else {
            State::new(true, theirs, mine)
        })
    }

    fn current_player(&self) -> Player {
        if self.p1_turn {
            Player::P1
        } else {
            Player::P2
        }
    }

    fn canonical_key(&self) -> Self::Key {
        (self.p1_turn, sorted(self.p1), sorted(self.p2))
    }
}

pub struct Chopsticks {
    current: State,
}

impl Chopsticks {
    pub fn new(p1_starts: bool) -> Chopsticks {
        Chopsticks { current: State::new(p1_starts, [1, 1], [1, 1]) }
    }

    /// Start from an arbitrary position.
    pub fn from_state(state: State) -> Chopsticks {
        Chopsticks { current: state }
    }
}

impl interface::Game for Chopsticks {
    type State = State;

    fn current_state(&self) -> &State {
        &self.current
    }

    fn replace_state(&mut self, state: State) -> State {
        std::mem::replace(&mut self.current, state)
    }

    fn is_over(&self, state: &State) -> bool {
        state.p1 == [0, 0] || state.p2 == [0, 0]
    }

    fn str_to_move(&self, text: &str) -> Option<Tap> {
        let text = text.trim().to_lowercase();
        let mut chars = text.chars();
        let from = Hand::from_char(chars.next()?)?;
        let to = Hand::from_char(chars.next()?)?;
        if chars.next().is_some() {
            return None;
        }
        Some(Tap { from, to })
    }

    fn instructions(&self) -> &'static str {
        "Players take turns adding the values of one of their hands to one of \
         their opponent's hands (modulo 5). A hand with a total of 5 (or 0; 5 \
         modulo 5) is considered 'dead'. The first player to have 2 dead hands \
         is the loser."
    }
}
