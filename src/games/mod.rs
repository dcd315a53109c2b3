//! Small games implementing the library's interface.

pub mod chopsticks;
pub mod subtract_square;

pub use chopsticks::Chopsticks;
pub use subtract_square::SubtractSquare;
