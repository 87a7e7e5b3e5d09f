//! Core engine types: board, directions, status, RNG, configuration, errors.
//!
//! Nothing in here knows about game flow. The `rules` module slides and
//! judges boards, and `game` strings everything together.

pub mod board;
pub mod config;
pub mod direction;
pub mod error;
pub mod rng;
pub mod status;

pub use board::{Board, Line};
pub use config::GameConfig;
pub use direction::{Axis, Direction, Order, ParseDirectionError};
pub use error::EngineError;
pub use rng::{GameRng, GameRngState, TileSource};
pub use status::Status;
