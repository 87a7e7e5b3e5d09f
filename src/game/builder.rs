//! Game construction.

use log::debug;

use crate::core::{Board, EngineError, GameConfig, GameRng, TileSource};

use super::engine::Game;

/// Builder for [`Game`].
///
/// ```
/// use rust_2048::{Game, GameConfig};
///
/// let game = Game::builder()
///     .config(GameConfig::default().with_win_tile(1024))
///     .initial_state(&[[2u32, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 2]])
///     .seed(42)
///     .build()
///     .unwrap();
/// assert_eq!(game.board().tile_count(), 2);
/// ```
pub struct GameBuilder<R = GameRng> {
    config: GameConfig,
    initial: Option<Vec<Vec<u32>>>,
    rng: R,
}

impl Default for GameBuilder<GameRng> {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
            initial: None,
            rng: GameRng::from_entropy(),
        }
    }
}

impl GameBuilder<GameRng> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the spawn RNG for a reproducible game.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = GameRng::new(seed);
        self
    }
}

impl<R: TileSource> GameBuilder<R> {
    #[must_use]
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Layout to start from and to come back to on restart.
    ///
    /// Defaults to a blank board of the configured size.
    #[must_use]
    pub fn initial_state<T: AsRef<[u32]>>(mut self, rows: &[T]) -> Self {
        self.initial = Some(rows.iter().map(|row| row.as_ref().to_vec()).collect());
        self
    }

    /// Replace the spawn randomness.
    pub fn tile_source<S: TileSource>(self, source: S) -> GameBuilder<S> {
        GameBuilder {
            config: self.config,
            initial: self.initial,
            rng: source,
        }
    }

    /// Validate the config and initial state, then build the game.
    pub fn build(self) -> Result<Game<R>, EngineError> {
        self.config.validate()?;

        let initial = match &self.initial {
            Some(rows) => Board::from_rows(rows)?,
            None => Board::new(self.config.size),
        };

        if initial.size() != self.config.size {
            return Err(EngineError::InvalidBoardState(format!(
                "initial state is {0}x{0}, config expects {1}x{1}",
                initial.size(),
                self.config.size
            )));
        }

        debug!(
            "built {}x{} game with {} initial tiles",
            initial.size(),
            initial.size(),
            initial.tile_count()
        );
        Ok(Game::from_parts(self.config, initial, self.rng))
    }
}
