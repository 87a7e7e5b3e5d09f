//! Board rules: sliding tiles and judging the result.
//!
//! Everything here is a pure function of a `Board`. The `game` module owns
//! the state these functions are applied to.

pub mod outcome;
pub mod slide;

pub use outcome::evaluate;
pub use slide::{can_move, legal_moves, slide_board, slide_line, LineSlide, MoveOutcome};
