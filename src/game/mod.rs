//! The board engine: a game of 2048 with its board, score and status.

mod builder;
mod engine;

pub use builder::GameBuilder;
pub use engine::{Cell, Game, TurnReport};
