//! Double-free-three forbidden move rule (spec §4.5).
//!
//! A move is a forbidden double-free-three when it raises the mover's own
//! `free_three` total (spec §4.4) by at least two in one placement, unless
//! the same move also captures — captures lift the restriction per the
//! original Ninuki-renju rule the teacher's `forbidden.rs` encodes. Where
//! the teacher's version hand-scans lines with a gap-tolerant
//! `LinePattern`, this reuses the `free_three` window scorer directly: the
//! delta is just `free_three_total(color, after) - free_three_total(color,
//! before)`, resolving the "which color's counter" open question from
//! spec §9 by always counting for the mover `color` on boards `color`
//! itself produced.

use crate::board::{Board, Color, Pos};
use crate::eval::EvalCache;

use super::capture::has_capture;

/// Free-three delta at or above which a move is a forbidden double-three.
const DOUBLE_FREE_THREE_THRESHOLD: f64 = 2.0;

/// Whether placing `color` at `pos` on `before` is a forbidden
/// double-free-three. `before` must not yet contain a stone at `pos`.
pub fn is_double_free_three(
    cache: &mut EvalCache,
    before: &Board,
    pos: Pos,
    color: Color,
) -> bool {
    if has_capture(before, pos, color) {
        return false;
    }

    let after = before.after_move(pos, color, &[], 0);
    let delta = cache.free_three_total(color, &after) - cache.free_three_total(color, before);
    delta >= DOUBLE_FREE_THREE_THRESHOLD
}

/// Whether a move is legal: the cell is empty and it is not a forbidden
/// double-free-three.
pub fn is_legal_move(cache: &mut EvalCache, board: &Board, pos: Pos, color: Color) -> bool {
    if !board.is_empty(pos) {
        return false;
    }
    !is_double_free_three(cache, board, pos, color)
}
