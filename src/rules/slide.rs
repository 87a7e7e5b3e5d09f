//! Sliding and merging.
//!
//! One line transform serves all four directions. A move reads each row
//! (left/right) or column (up/down) in travel order, slides it toward index
//! 0, and writes it back in the same order. Right and down are left and up
//! with the read order reversed.

use serde::{Deserialize, Serialize};

use crate::core::board::can_merge;
use crate::core::{Board, Direction, Line};

/// Result of sliding one line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineSlide {
    /// The line after the move, zero-padded to its original length.
    pub cells: Line,
    /// Sum of the tiles created by merges.
    pub gained: u64,
    /// Number of merges.
    pub merges: usize,
}

/// Slide a line toward index 0.
///
/// Tiles are compacted, then scanned once in travel order: equal neighbours
/// merge into one tile of double value and the scan skips past both, so a
/// tile takes part in at most one merge. The result is compacted again and
/// padded with zeros at the far end.
///
/// ```
/// use rust_2048::rules::slide_line;
///
/// let slid = slide_line(&[2, 2, 2, 2]);
/// assert_eq!(slid.cells.as_slice(), &[4, 4, 0, 0]);
/// assert_eq!(slid.gained, 8);
/// ```
#[must_use]
pub fn slide_line(line: &[u32]) -> LineSlide {
    let mut tiles: Line = line.iter().copied().filter(|&v| v != 0).collect();
    let mut gained = 0u64;
    let mut merges = 0;

    let mut i = 0;
    while i + 1 < tiles.len() {
        if can_merge(tiles[i], tiles[i + 1]) {
            tiles[i] *= 2;
            gained += u64::from(tiles[i]);
            tiles[i + 1] = 0;
            merges += 1;
            i += 2;
        } else {
            i += 1;
        }
    }

    tiles.retain(|v| *v != 0);
    tiles.resize(line.len(), 0);

    LineSlide {
        cells: tiles,
        gained,
        merges,
    }
}

/// Result of sliding a whole board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub board: Board,
    /// Score earned by this move.
    pub gained: u64,
    pub merges: usize,
    /// True iff any cell changed.
    pub moved: bool,
}

/// Slide every line of `board` in `direction`.
#[must_use]
pub fn slide_board(board: &Board, direction: Direction) -> MoveOutcome {
    let axis = direction.axis();
    let order = direction.order();

    let mut next = board.clone();
    let mut gained = 0;
    let mut merges = 0;

    for index in 0..board.size() {
        let line = board.line(axis, index, order);
        let slid = slide_line(&line);
        gained += slid.gained;
        merges += slid.merges;
        next.write_line(axis, index, order, &slid.cells);
    }

    let moved = next != *board;
    MoveOutcome {
        board: next,
        gained,
        merges,
        moved,
    }
}

/// True if sliding in `direction` would change `board`.
#[must_use]
pub fn can_move(board: &Board, direction: Direction) -> bool {
    slide_board(board, direction).moved
}

/// Directions that would change `board`, in `Direction::ALL` order.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| can_move(board, dir))
        .collect()
}
