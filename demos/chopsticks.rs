//! Play chopsticks against the memoized minimax strategy.
//!
//! By default the opponent picks random moves. Pass `--interactive` to play
//! the second hand yourself. Set `RUST_LOG=debug` to see search statistics.
//! The game has cycles, so a match that keeps repeating itself is a draw.

use exhaustive_minimax::games::Chopsticks;
use exhaustive_minimax::util::play;
use exhaustive_minimax::{Game, Interactive, MemoizedMinimax, Random, SearchError, Strategy};

fn main() -> Result<(), SearchError> {
    env_logger::init();
    let interactive = std::env::args().any(|arg| arg == "--interactive");

    let mut game = Chopsticks::new(true);
    println!("{}", game.instructions());
    println!("{}", game.current_state());

    let mut computer = MemoizedMinimax::default();
    let mut opponent: Box<dyn Strategy<Chopsticks>> =
        if interactive { Box::new(Interactive::stdio()) } else { Box::new(Random::new()) };
    let outcome = play(&mut game, &mut computer, opponent.as_mut())?;

    println!("{}", game.current_state());
    println!("{} ({})", outcome, computer.stats().replace('\n', " "));
    Ok(())
}
