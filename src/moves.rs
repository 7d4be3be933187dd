//! Move application (spec §4.2 "C2"): the single entry point that turns a
//! candidate `(pos, color)` into a new [`Board`], or rejects it.
//!
//! This is the only place outside `gameplay`/`player` permitted to log
//! (spec §7): an illegal-move rejection is logged at `debug` level so a
//! game trace shows why a human or AI move was refused, without `moves`
//! itself ever touching a terminal or socket.

use crate::board::{Board, Color, Pos};
use crate::error::{GomokuError, IllegalMoveReason};
use crate::eval::EvalCache;
use crate::rules::{find_captures, is_double_free_three};

/// Apply `color`'s move at `pos` to `board`, returning the resulting board.
///
/// Rejects off-board coordinates, occupied cells, and double-free-three
/// moves (unless the move also captures, per spec §4.5). On success,
/// captures are resolved and the mover's `free_three` count is updated
/// before the child board is built.
pub fn apply(cache: &mut EvalCache, board: &Board, pos: Pos, color: Color) -> Result<Board, GomokuError> {
    if !Board::on_board(pos.x as i32, pos.y as i32) {
        log::debug!("rejecting move at ({}, {}): off board", pos.x, pos.y);
        return Err(GomokuError::IllegalMove {
            pos,
            reason: IllegalMoveReason::OffBoard,
        });
    }

    if !board.is_empty(pos) {
        log::debug!("rejecting move at ({}, {}): cell occupied", pos.x, pos.y);
        return Err(GomokuError::IllegalMove {
            pos,
            reason: IllegalMoveReason::Occupied,
        });
    }

    let captured = find_captures(board, pos, color);

    if captured.is_empty() && is_double_free_three(cache, board, pos, color) {
        log::debug!(
            "rejecting move at ({}, {}): double free-three",
            pos.x,
            pos.y
        );
        return Err(GomokuError::IllegalMove {
            pos,
            reason: IllegalMoveReason::DoubleFreeThree,
        });
    }

    let after = board.after_move(pos, color, &captured, 0);
    let free_three_count = cache.free_three_total(color, &after) as u32;
    Ok(after.with_free_threes(color, free_three_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_occupied_cell() {
        let mut cache = EvalCache::new();
        let board = Board::empty().after_move(Pos::new(9, 9), Color::Black, &[], 0);
        let result = apply(&mut cache, &board, Pos::new(9, 9), Color::White);
        assert!(matches!(
            result,
            Err(GomokuError::IllegalMove {
                reason: IllegalMoveReason::Occupied,
                ..
            })
        ));
    }

    #[test]
    fn accepts_simple_move() {
        let mut cache = EvalCache::new();
        let board = Board::empty();
        let result = apply(&mut cache, &board, Pos::new(9, 9), Color::Black);
        assert!(result.is_ok());
        assert_eq!(result.unwrap().get(Pos::new(9, 9)), Color::Black);
    }

    #[test]
    fn rejects_double_free_three() {
        let mut cache = EvalCache::new();
        let board = Board::empty()
            .after_move(Pos::new(9, 8), Color::Black, &[], 0)
            .after_move(Pos::new(9, 10), Color::Black, &[], 0)
            .after_move(Pos::new(8, 9), Color::Black, &[], 0)
            .after_move(Pos::new(10, 9), Color::Black, &[], 0);

        let result = apply(&mut cache, &board, Pos::new(9, 9), Color::Black);
        assert!(matches!(
            result,
            Err(GomokuError::IllegalMove {
                reason: IllegalMoveReason::DoubleFreeThree,
                ..
            })
        ));
    }

    #[test]
    fn capture_resolves_before_move_is_applied() {
        let mut cache = EvalCache::new();
        let board = Board::empty()
            .after_move(Pos::new(9, 5), Color::Black, &[], 0)
            .after_move(Pos::new(9, 7), Color::White, &[], 0)
            .after_move(Pos::new(9, 8), Color::White, &[], 0);

        let after = apply(&mut cache, &board, Pos::new(9, 9), Color::Black).unwrap();
        assert_eq!(after.captures(Color::Black), 1);
        assert!(after.is_empty(Pos::new(9, 7)));
        assert!(after.is_empty(Pos::new(9, 8)));
    }
}
