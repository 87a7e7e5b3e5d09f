//! The board engine.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{
    Board, Direction, EngineError, GameConfig, GameRng, GameRngState, Status, TileSource,
};
use crate::rules;

use super::builder::GameBuilder;

/// Cell coordinates as `(row, col)`.
pub type Cell = (usize, usize);

/// What one call to [`Game::play_turn`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Whether any tile moved.
    pub moved: bool,
    /// Score earned by the move.
    pub score_delta: u64,
    /// Where a new tile was placed, if any.
    pub spawned: Option<Cell>,
    /// Status after the turn.
    pub status: Status,
}

/// A single game of 2048.
///
/// Owns the board, score and status. Every command runs to completion
/// synchronously; rendering is left to whoever holds the game.
///
/// A caller drives play the way the classic web page does:
///
/// ```
/// use rust_2048::{Direction, Game, Status};
///
/// let mut game = Game::builder().seed(7).build().unwrap();
/// game.start().unwrap();
/// assert_eq!(game.status(), Status::Playing);
/// assert_eq!(game.board().tile_count(), 2);
///
/// if game.move_tiles(Direction::Left).unwrap() {
///     game.add_new_tile().unwrap();
///     game.check_game_over();
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Game<R = GameRng> {
    config: GameConfig,
    initial: Board,
    board: Board,
    score: u64,
    status: Status,
    rng: R,
}

impl Game<GameRng> {
    /// Blank classic game with a randomly seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(GameConfig::default(), Board::default(), GameRng::from_entropy())
    }

    /// Classic game starting from `rows`.
    pub fn with_initial_state<T: AsRef<[u32]>>(rows: &[T]) -> Result<Self, EngineError> {
        Self::builder().initial_state(rows).build()
    }

    pub fn builder() -> GameBuilder<GameRng> {
        GameBuilder::new()
    }

    /// Snapshot of the spawn RNG.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }
}

impl Default for Game<GameRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TileSource> Game<R> {
    pub(crate) fn from_parts(config: GameConfig, initial: Board, rng: R) -> Self {
        Self {
            board: initial.clone(),
            initial,
            config,
            score: 0,
            status: Status::Idle,
            rng,
        }
    }

    // === Commands ===

    /// Top the board up to `start_tiles` tiles and begin playing.
    ///
    /// Tiles already present (from the initial state) count toward the total.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.config.strict && self.status != Status::Idle {
            return Err(self.refuse("start"));
        }

        while self.board.tile_count() < self.config.start_tiles {
            if self.spawn_tile().is_none() {
                break;
            }
        }

        debug!("game started with {} tiles", self.board.tile_count());
        self.set_status(Status::Playing);
        Ok(())
    }

    /// Reset score and status.
    ///
    /// A board with tiles on it is cleared to blank. A board that is already
    /// blank goes back to the initial state instead, so pressing restart
    /// twice returns to the starting layout.
    pub fn restart(&mut self) {
        self.board = if self.board.is_blank() {
            self.initial.clone()
        } else {
            Board::new(self.config.size)
        };
        self.score = 0;

        debug!("game restarted, board has {} tiles", self.board.tile_count());
        self.set_status(Status::Idle);
    }

    /// Slide all tiles in `direction`.
    ///
    /// Returns whether any cell changed. A move that changes nothing leaves
    /// board and score untouched. Spawning and game-over checks are the
    /// caller's job (see [`Game::play_turn`]).
    pub fn move_tiles(&mut self, direction: Direction) -> Result<bool, EngineError> {
        self.ensure_playing("move")?;

        let outcome = rules::slide_board(&self.board, direction);
        trace!(
            "move {}: moved={} merges={} gained={}",
            direction,
            outcome.moved,
            outcome.merges,
            outcome.gained
        );

        if outcome.moved {
            self.board = outcome.board;
            self.score += outcome.gained;
        }
        Ok(outcome.moved)
    }

    pub fn move_left(&mut self) -> Result<bool, EngineError> {
        self.move_tiles(Direction::Left)
    }

    pub fn move_right(&mut self) -> Result<bool, EngineError> {
        self.move_tiles(Direction::Right)
    }

    pub fn move_up(&mut self) -> Result<bool, EngineError> {
        self.move_tiles(Direction::Up)
    }

    pub fn move_down(&mut self) -> Result<bool, EngineError> {
        self.move_tiles(Direction::Down)
    }

    /// Place a 2 (or, with `four_probability`, a 4) on a random empty cell.
    ///
    /// Returns the cell used, or `None` when the board is full.
    pub fn add_new_tile(&mut self) -> Result<Option<Cell>, EngineError> {
        self.ensure_playing("add a tile")?;
        Ok(self.spawn_tile())
    }

    /// Update the status from the board and return it.
    ///
    /// A stuck board loses; a board holding the win tile wins. Both checks
    /// run, in that order, so the win tile takes precedence.
    pub fn check_game_over(&mut self) -> Status {
        let next = rules::evaluate(&self.board, self.status, self.config.win_tile);
        self.set_status(next);
        next
    }

    /// One full turn: move, then on success spawn a tile and check for game over.
    ///
    /// Input outside `Playing` is ignored (or refused in strict mode).
    pub fn play_turn(&mut self, direction: Direction) -> Result<TurnReport, EngineError> {
        if self.status != Status::Playing {
            if self.config.strict {
                return Err(self.refuse("play a turn"));
            }
            return Ok(TurnReport {
                moved: false,
                score_delta: 0,
                spawned: None,
                status: self.status,
            });
        }

        let before = self.score;
        let moved = self.move_tiles(direction)?;
        let mut spawned = None;
        if moved {
            spawned = self.add_new_tile()?;
            self.check_game_over();
        }

        Ok(TurnReport {
            moved,
            score_delta: self.score - before,
            spawned,
            status: self.status,
        })
    }

    // === Queries ===

    /// Copy of the board as rows.
    #[must_use]
    pub fn state(&self) -> Vec<Vec<u32>> {
        self.board.to_rows()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The layout the game was constructed with.
    #[must_use]
    pub fn initial_state(&self) -> &Board {
        &self.initial
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// True if the board is full and nothing can merge.
    #[must_use]
    pub fn has_no_moves(&self) -> bool {
        self.board.has_no_moves()
    }

    /// True if the win tile is on the board.
    #[must_use]
    pub fn has_win_tile(&self) -> bool {
        self.board.contains(self.config.win_tile)
    }

    /// Directions that would change the board.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Direction> {
        rules::legal_moves(&self.board)
    }

    // === Internals ===

    fn spawn_tile(&mut self) -> Option<Cell> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let (row, col) = empty[self.rng.pick_index(empty.len())];
        let value = if self.rng.chance(self.config.four_probability) { 4 } else { 2 };
        self.board.set(row, col, value);

        trace!("spawned {} at ({}, {})", value, row, col);
        Some((row, col))
    }

    fn ensure_playing(&self, operation: &'static str) -> Result<(), EngineError> {
        if self.config.strict && self.status != Status::Playing {
            return Err(self.refuse(operation));
        }
        Ok(())
    }

    fn refuse(&self, operation: &'static str) -> EngineError {
        debug!("refused to {} while {}", operation, self.status);
        EngineError::InvalidStateTransition {
            operation,
            status: self.status,
        }
    }

    fn set_status(&mut self, status: Status) {
        if status != self.status {
            debug!("status {} -> {}", self.status, status);
            self.status = status;
        }
    }
}
