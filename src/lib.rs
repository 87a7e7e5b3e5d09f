//! # rust-2048
//!
//! The board engine of the sliding-tile game 2048: a square grid of
//! power-of-two tiles that merge when equal tiles collide during a move.
//!
//! ## Design Principles
//!
//! 1. **Presentation-free**: The engine never renders. Callers read
//!    `state()`, `score()` and `status()` after each command and draw
//!    whatever they like.
//!
//! 2. **One slide algorithm**: All four directions run the same line
//!    transform, reading rows or columns in travel order.
//!
//! 3. **Injected randomness**: Tile spawning draws from a `TileSource`,
//!    so games are reproducible from a seed and scriptable in tests.
//!
//! ## Game Loop
//!
//! ```
//! use rust_2048::{Direction, Game, Status};
//!
//! let mut game = Game::builder().seed(42).build().unwrap();
//! game.start().unwrap();
//!
//! for dir in Direction::ALL.iter().cycle().take(40) {
//!     if game.status() != Status::Playing {
//!         break;
//!     }
//!     if game.move_tiles(*dir).unwrap() {
//!         game.add_new_tile().unwrap();
//!         game.check_game_over();
//!     }
//! }
//! assert!(game.board().tile_sum() >= 4);
//! ```
//!
//! ## Modules
//!
//! - `core`: Board, directions, status, RNG, configuration, errors
//! - `rules`: Sliding/merging and win/lose evaluation
//! - `game`: The stateful engine and its builder

pub mod core;
pub mod game;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Board, Direction, EngineError, GameConfig, GameRng, GameRngState, Status, TileSource,
};

pub use crate::game::{Cell, Game, GameBuilder, TurnReport};

pub use crate::rules::{slide_board, slide_line, MoveOutcome};
