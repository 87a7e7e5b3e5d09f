//! Engine error type.

use std::io;

use super::Status;

/// Errors returned by the board engine.
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// A supplied board has the wrong shape or a value that is not a tile.
    #[error("invalid board state: {0}")]
    InvalidBoardState(String),

    /// An operation was refused in strict mode because of the current status.
    #[error("cannot {operation} while the game is {status}")]
    InvalidStateTransition {
        operation: &'static str,
        status: Status,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::InvalidStateTransition {
            operation: "move",
            status: Status::Lose,
        };
        assert_eq!(err.to_string(), "cannot move while the game is lose");

        let err = EngineError::InvalidBoardState("row 2 has 3 cells".into());
        assert_eq!(err.to_string(), "invalid board state: row 2 has 3 cells");
    }
}
