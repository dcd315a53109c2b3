use super::super::error::SearchError;
use super::super::interface::*;

use log::warn;

// Legal moves at the root of a search. Fails if there is nothing to choose.
pub(super) fn root_moves<S: GameState>(state: &S) -> Result<Vec<S::Move>, SearchError> {
    let moves = state.possible_moves();
    if moves.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    Ok(moves)
}

// Value, from `perspective`'s side, of a finished game in which `mover` was
// left to move and therefore lost.
pub(super) fn loss_for(mover: Player, perspective: Player) -> Evaluation {
    if mover == perspective {
        LOSS
    } else {
        WIN
    }
}

// The game says it is not over, yet the player to move has no moves. Such a
// state is scored like a finished game.
pub(super) fn warn_stuck<S: GameState>(state: &S) {
    warn!("{} has no legal moves but the game is not over at {}", state.current_player(), state);
}
