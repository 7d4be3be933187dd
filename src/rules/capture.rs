//! Pair-capture rule (spec §4.2): `X-O-O-X` captures the `O-O` pair.
//!
//! Grounded on the teacher's `rules/capture.rs`, which implements the same
//! four-direction, `X-O-O-X` scan over a mutable board; here it is read-only,
//! returning the captured positions for [`crate::moves::apply`] to hand to
//! `Board::after_move` rather than mutating anything itself.

use crate::board::{Board, Color, Pos};

/// Direction vectors for capture checking (4 directions, each also scanned
/// negated so all 8 rays around the placed stone are covered).
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Positions that would be captured if `color` places a stone at `pos`.
/// Always an even-length list: each captured pair contributes two entries.
pub fn find_captures(board: &Board, pos: Pos, color: Color) -> Vec<Pos> {
    let mut captured = Vec::new();
    let opponent = color.opponent();

    for &(dx, dy) in &DIRECTIONS {
        for sign in [-1i32, 1i32] {
            let dx = dx * sign;
            let dy = dy * sign;

            let x1 = pos.x as i32 + dx;
            let y1 = pos.y as i32 + dy;
            let x2 = pos.x as i32 + dx * 2;
            let y2 = pos.y as i32 + dy * 2;
            let x3 = pos.x as i32 + dx * 3;
            let y3 = pos.y as i32 + dy * 3;

            if !Pos::is_valid(x3, y3) {
                continue;
            }

            let pos1 = Pos::new(x1 as u8, y1 as u8);
            let pos2 = Pos::new(x2 as u8, y2 as u8);
            let pos3 = Pos::new(x3 as u8, y3 as u8);

            if board.get(pos1) == opponent && board.get(pos2) == opponent && board.get(pos3) == color {
                captured.push(pos1);
                captured.push(pos2);
            }
        }
    }

    captured
}

/// Whether placing `color` at `pos` would capture anything — the
/// double-free-three exception (spec §4.5) only needs a boolean.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, color: Color) -> bool {
    !find_captures(board, pos, color).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_horizontal() {
        let board = Board::empty()
            .after_move(Pos::new(9, 5), Color::Black, &[], 0)
            .after_move(Pos::new(9, 7), Color::White, &[], 0)
            .after_move(Pos::new(9, 8), Color::White, &[], 0)
            .after_move(Pos::new(9, 9), Color::Black, &[], 0);

        let captured = find_captures(&board, Pos::new(9, 6), Color::Black);
        assert_eq!(captured.len(), 2);
        assert!(captured.contains(&Pos::new(9, 7)));
        assert!(captured.contains(&Pos::new(9, 8)));
    }

    #[test]
    fn capture_diagonal() {
        let board = Board::empty()
            .after_move(Pos::new(5, 5), Color::Black, &[], 0)
            .after_move(Pos::new(7, 7), Color::White, &[], 0)
            .after_move(Pos::new(8, 8), Color::White, &[], 0)
            .after_move(Pos::new(9, 9), Color::Black, &[], 0);

        let captured = find_captures(&board, Pos::new(6, 6), Color::Black);
        assert_eq!(captured.len(), 2);
    }

    #[test]
    fn no_capture_for_three_in_a_row() {
        let board = Board::empty()
            .after_move(Pos::new(9, 5), Color::Black, &[], 0)
            .after_move(Pos::new(9, 7), Color::White, &[], 0)
            .after_move(Pos::new(9, 8), Color::White, &[], 0)
            .after_move(Pos::new(9, 9), Color::White, &[], 0)
            .after_move(Pos::new(9, 10), Color::Black, &[], 0);

        let captured = find_captures(&board, Pos::new(9, 6), Color::Black);
        assert!(captured.is_empty());
    }

    #[test]
    fn multiple_captures_in_one_move() {
        let board = Board::empty()
            .after_move(Pos::new(9, 3), Color::Black, &[], 0)
            .after_move(Pos::new(9, 4), Color::White, &[], 0)
            .after_move(Pos::new(9, 5), Color::White, &[], 0)
            .after_move(Pos::new(9, 7), Color::White, &[], 0)
            .after_move(Pos::new(9, 8), Color::White, &[], 0)
            .after_move(Pos::new(9, 9), Color::Black, &[], 0);

        let captured = find_captures(&board, Pos::new(9, 6), Color::Black);
        assert_eq!(captured.len(), 4);
    }

    #[test]
    fn no_capture_out_of_bounds() {
        let board = Board::empty()
            .after_move(Pos::new(0, 0), Color::Black, &[], 0)
            .after_move(Pos::new(0, 1), Color::White, &[], 0);

        let captured = find_captures(&board, Pos::new(0, 2), Color::Black);
        assert!(captured.is_empty());
    }
}
