// Contract checks for the bundled games: move enumeration agrees with
// validation, transitions don't touch the original state, canonical keys
// ignore hand order, and "no legal moves" and `is_over` agree everywhere.

use exhaustive_minimax::games::chopsticks::{self, Chopsticks, Hand, Tap};
use exhaustive_minimax::games::subtract_square::{self, SubtractSquare, Take};
use exhaustive_minimax::*;
use std::collections::HashSet;

const ALL_TAPS: [Tap; 4] = [
    Tap { from: Hand::Left, to: Hand::Left },
    Tap { from: Hand::Left, to: Hand::Right },
    Tap { from: Hand::Right, to: Hand::Left },
    Tap { from: Hand::Right, to: Hand::Right },
];

// Every state reachable from the start of a chopsticks game.
fn reachable_chopsticks() -> Vec<chopsticks::State> {
    let game = Chopsticks::new(true);
    let mut seen = HashSet::new();
    let mut states = Vec::new();
    let mut frontier = vec![game.current_state().clone()];
    while let Some(state) = frontier.pop() {
        // Use the exact hands here, not the canonical key.
        let id = format!("{:?}", state);
        if !seen.insert(id) {
            continue;
        }
        for m in state.possible_moves() {
            frontier.push(state.make_move(&m).unwrap());
        }
        states.push(state);
    }
    states
}

#[test]
fn chopsticks_initial_moves() {
    let game = Chopsticks::new(true);
    let moves = game.current_state().possible_moves();
    assert_eq!(moves, ALL_TAPS.to_vec());
    assert_eq!(
        moves.iter().map(|m| m.to_string()).collect::<Vec<_>>(),
        vec!["ll", "lr", "rl", "rr"]
    );
    assert_eq!(game.current_state().current_player(), Player::P1);
    assert_eq!(Chopsticks::new(false).current_state().current_player(), Player::P2);
}

#[test]
fn chopsticks_contract_holds_on_reachable_states() {
    let game = Chopsticks::new(true);
    let states = reachable_chopsticks();
    assert!(states.len() > 50);
    for state in states.iter() {
        let moves = state.possible_moves();
        for tap in ALL_TAPS.iter() {
            assert_eq!(moves.contains(tap), state.is_valid_move(tap), "{} at {}", tap, state);
            if !state.is_valid_move(tap) {
                assert!(matches!(state.make_move(tap), Err(GameError::InvalidMove { .. })));
            }
        }
        assert_eq!(game.is_over(state), moves.is_empty(), "{}", state);
        for m in moves.iter() {
            let before = state.clone();
            let next = state.make_move(m).unwrap();
            assert_eq!(&before, state);
            assert_ne!(next.current_player(), state.current_player());
        }
    }
}

#[test]
fn chopsticks_transition() {
    let state = chopsticks::State::new(true, [1, 3], [2, 4]);
    let next = state.make_move(&Tap { from: Hand::Right, to: Hand::Left }).unwrap();
    assert_eq!(next, chopsticks::State::new(false, [1, 3], [0, 4]));
    let next = next.make_move(&Tap { from: Hand::Right, to: Hand::Right }).unwrap();
    assert_eq!(next, chopsticks::State::new(true, [1, 2], [0, 4]));
    // A dead hand can neither tap nor be tapped.
    assert_eq!(
        next.possible_moves(),
        vec![Tap { from: Hand::Left, to: Hand::Right }, Tap { from: Hand::Right, to: Hand::Right }]
    );
}

#[test]
fn chopsticks_canonical_key_ignores_hand_order() {
    let a = chopsticks::State::new(true, [1, 2], [3, 4]);
    let b = chopsticks::State::new(true, [2, 1], [4, 3]);
    let c = chopsticks::State::new(true, [2, 1], [3, 4]);
    assert_ne!(a, b);
    assert_eq!(a.canonical_key(), b.canonical_key());
    assert_eq!(a.canonical_key(), c.canonical_key());
    let other_turn = chopsticks::State::new(false, [1, 2], [3, 4]);
    assert_ne!(a.canonical_key(), other_turn.canonical_key());
}

#[test]
fn chopsticks_winner() {
    let mut game = Chopsticks::from_state(chopsticks::State::new(false, [1, 2], [0, 0]));
    assert!(game.is_over(game.current_state()));
    assert!(game.is_winner(Player::P1));
    assert!(!game.is_winner(Player::P2));
    game.replace_state(chopsticks::State::new(true, [1, 2], [0, 3]));
    assert!(!game.is_winner(Player::P1));
    assert!(!game.is_winner(Player::P2));
}

#[test]
fn chopsticks_parses_moves_leniently() {
    let game = Chopsticks::new(true);
    assert_eq!(game.str_to_move(" LR \n"), Some(Tap { from: Hand::Left, to: Hand::Right }));
    assert_eq!(game.str_to_move("rl"), Some(Tap { from: Hand::Right, to: Hand::Left }));
    assert_eq!(game.str_to_move("x"), None);
    assert_eq!(game.str_to_move("l"), None);
    assert_eq!(game.str_to_move("lrr"), None);
    assert_eq!(game.str_to_move(""), None);
    assert!(game.instructions().contains("modulo 5"));
}

#[test]
fn subtract_square_scenarios() {
    let one = subtract_square::State::new(true, 1);
    assert_eq!(one.possible_moves(), vec![Take(1)]);
    let zero = one.make_move(&Take(1)).unwrap();
    assert_eq!(zero.total(), 0);
    assert_eq!(zero.current_player(), Player::P2);
    assert!(zero.possible_moves().is_empty());

    let two = subtract_square::State::new(true, 2);
    assert_eq!(two.possible_moves(), vec![Take(1)]);

    let huge = subtract_square::State::new(true, u32::MAX);
    let moves = huge.possible_moves();
    assert_eq!(moves.len(), 65535);
    assert_eq!(moves.last(), Some(&Take(65535 * 65535)));
    assert!(huge.make_move(&Take(65535 * 65535)).is_ok());

    let seventeen = subtract_square::State::new(false, 17);
    assert_eq!(seventeen.possible_moves(), vec![Take(1), Take(4), Take(9), Take(16)]);
    assert_eq!(seventeen.to_string(), "Current total: 17");
}

#[test]
fn subtract_square_contract() {
    let game = SubtractSquare::new(true, 0);
    for total in 0..50 {
        let state = subtract_square::State::new(total % 2 == 0, total);
        let moves = state.possible_moves();
        assert_eq!(game.is_over(&state), moves.is_empty());
        assert_eq!(state.canonical_key(), (total % 2 == 0, total));
        for n in 0..60 {
            let m = Take(n);
            assert_eq!(moves.contains(&m), state.is_valid_move(&m), "{} at {}", n, total);
            let before = state.clone();
            match state.make_move(&m) {
                Ok(next) => assert_eq!(next.total(), total - n),
                Err(e) => {
                    assert!(!state.is_valid_move(&m));
                    assert_eq!(
                        e,
                        GameError::InvalidMove { mv: n.to_string(), state: state.to_string() }
                    );
                }
            }
            assert_eq!(before, state);
        }
    }
}

#[test]
fn subtract_square_parses_moves_leniently() {
    let game = SubtractSquare::new(true, 10);
    assert_eq!(game.str_to_move(" 4\n"), Some(Take(4)));
    // Parsed, but not legal at 10.
    assert_eq!(game.str_to_move("3"), Some(Take(3)));
    assert!(!game.current_state().is_valid_move(&Take(3)));
    assert_eq!(game.str_to_move("four"), None);
    assert_eq!(game.str_to_move("-4"), None);
}

#[test]
fn substitution_restores_state() {
    let mut game = SubtractSquare::new(true, 5);
    {
        let swapped = Substitution::new(&mut game, subtract_square::State::new(false, 0));
        assert_eq!(swapped.current_state().total(), 0);
        assert!(swapped.is_winner(Player::P1));
    }
    assert_eq!(game.current_state(), &subtract_square::State::new(true, 5));
    assert!(!game.is_winner(Player::P1));
    assert!(!game.is_winner(Player::P2));
}

#[test]
fn substitution_restores_state_on_panic() {
    let mut game = SubtractSquare::new(true, 5);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        let swapped = Substitution::new(&mut game, subtract_square::State::new(false, 3));
        assert_eq!(swapped.current_state().total(), 3);
        panic!("query failed");
    }));
    assert!(result.is_err());
    assert_eq!(game.current_state(), &subtract_square::State::new(true, 5));
}
