//! Win/lose evaluation.

use crate::core::{Board, Status};

/// Status after a game-over check.
///
/// The two conditions are checked independently, lose first and win second,
/// so a board that is both stuck and holding the win tile ends in `Win`.
/// When neither holds, `current` is returned unchanged.
#[must_use]
pub fn evaluate(board: &Board, current: Status, win_tile: u32) -> Status {
    let mut status = current;

    if board.has_no_moves() {
        status = Status::Lose;
    }

    if board.contains(win_tile) {
        status = Status::Win;
    }

    status
}
