//! Move directions.
//!
//! Every direction decomposes into an [`Axis`] (which lines slide) and an
//! [`Order`] (which end of the line tiles travel toward). The slide
//! algorithm only ever sees lines already read in travel order.

use serde::{Deserialize, Serialize};

/// A direction to slide tiles in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

/// Lines a move operates on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Rows, for left and right.
    Row,
    /// Columns, for up and down.
    Column,
}

/// Read/write order of a line relative to its natural index order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Tiles travel toward index 0 (left, up).
    Forward,
    /// Tiles travel toward the last index (right, down).
    Reverse,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert a u8 (0=Up, 1=Down, 2=Left, 3=Right).
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Direction::Up),
            1 => Some(Direction::Down),
            2 => Some(Direction::Left),
            3 => Some(Direction::Right),
            _ => None,
        }
    }

    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Row,
            Direction::Up | Direction::Down => Axis::Column,
        }
    }

    #[must_use]
    pub const fn order(self) -> Order {
        match self {
            Direction::Left | Direction::Up => Order::Forward,
            Direction::Right | Direction::Down => Order::Reverse,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no direction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown direction: {0:?}")]
pub struct ParseDirectionError(pub String);

impl std::str::FromStr for Direction {
    type Err = ParseDirectionError;

    /// Accepts direction names, browser key names (`ArrowLeft`),
    /// and the usual `wasd` / `hjkl` keys. Case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "arrowup" | "w" | "k" => Ok(Direction::Up),
            "down" | "arrowdown" | "s" | "j" => Ok(Direction::Down),
            "left" | "arrowleft" | "a" | "h" => Ok(Direction::Left),
            "right" | "arrowright" | "d" | "l" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}
