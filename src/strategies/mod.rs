//! Strategy implementations.

pub mod alphabeta;
pub mod interactive;
pub mod iterative;
pub mod memoized;
pub mod random;
mod util;
