//! Game configuration.
//!
//! Defaults reproduce the classic game: a 4×4 board, a win at 2048, new
//! tiles being 4 one time in ten, and two tiles placed by `start`.
//!
//! Configs load from TOML; every key is optional:
//!
//! ```toml
//! win_tile = 1024
//! four_probability = 0.25
//! strict = true
//! ```

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::board::{is_tile_value, Board};
use super::error::EngineError;

/// Tunables for a game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the board.
    pub size: usize,

    /// Tile value that wins the game.
    pub win_tile: u32,

    /// Probability that a spawned tile is a 4 rather than a 2.
    pub four_probability: f64,

    /// Tiles `start` tops the board up to.
    pub start_tiles: usize,

    /// Refuse moves and spawns outside `Playing` instead of performing them.
    pub strict: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Board::SIZE,
            win_tile: 2048,
            four_probability: 0.1,
            start_tiles: 2,
            strict: false,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_win_tile(mut self, tile: u32) -> Self {
        self.win_tile = tile;
        self
    }

    #[must_use]
    pub fn with_four_probability(mut self, probability: f64) -> Self {
        self.four_probability = probability;
        self
    }

    #[must_use]
    pub fn with_start_tiles(mut self, count: usize) -> Self {
        self.start_tiles = count;
        self
    }

    /// Enable or disable status checks on moves and spawns.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Check that the values describe a playable game.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.size < 2 {
            return Err(EngineError::InvalidConfig(format!(
                "size must be at least 2, got {}",
                self.size
            )));
        }
        if self.win_tile < 4 || !is_tile_value(self.win_tile) {
            return Err(EngineError::InvalidConfig(format!(
                "win_tile must be a power of two >= 4, got {}",
                self.win_tile
            )));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(EngineError::InvalidConfig(format!(
                "four_probability must be within [0, 1], got {}",
                self.four_probability
            )));
        }
        if self.start_tiles > self.size * self.size {
            return Err(EngineError::InvalidConfig(format!(
                "start_tiles ({}) exceeds the {} cells of a {}x{} board",
                self.start_tiles,
                self.size * self.size,
                self.size,
                self.size
            )));
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self, EngineError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load and validate a TOML file.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Self::from_toml_str(&contents)
    }
}
