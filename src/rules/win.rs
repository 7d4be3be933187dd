//! Win-condition checking (spec §4.1 "terminal state"): a capture win (5
//! pairs taken) is checked before a five-in-a-row win.
//!
//! The teacher's `win.rs` additionally tracks whether a five-in-a-row can
//! still be broken by an immediate counter-capture ("breakable five");
//! spec §4.1 has no such nuance (a five is a win the moment it appears),
//! so that check is dropped here — see `DESIGN.md`.

use crate::board::{Board, Color};
use crate::eval::find_line_winner;

/// Capture count at which the capturing color wins (5 pairs == 10 stones).
const CAPTURE_WIN_THRESHOLD: u32 = 5;

/// The winner of `board`, if any. Capture wins are checked before
/// five-in-a-row wins, per spec §4.1.
pub fn check_winner(board: &Board) -> Option<Color> {
    if board.captures(Color::Black) >= CAPTURE_WIN_THRESHOLD {
        return Some(Color::Black);
    }
    if board.captures(Color::White) >= CAPTURE_WIN_THRESHOLD {
        return Some(Color::White);
    }

    find_line_winner(board)
}
