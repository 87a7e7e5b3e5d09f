//! Game status.
//!
//! ```text
//! idle --start--> playing --check_game_over--> win | lose
//!   ^                                             |
//!   +------------------restart--------------------+
//! ```

use serde::{Deserialize, Serialize};

/// Lifecycle status of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Before `start`, or after `restart`.
    #[default]
    Idle,
    /// Game in progress.
    Playing,
    /// A tile reached the win value.
    Win,
    /// No empty cell and no adjacent equal pair left.
    Lose,
}

impl Status {
    /// Win and lose hold until an explicit restart.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Win | Status::Lose)
    }

    /// Lowercase name, as shown to players.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Playing => "playing",
            Status::Win => "win",
            Status::Lose => "lose",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
