//! Window scorers (spec §4.4): `bin`, `count`, `count_with_move`, and
//! `free_three`, plus the board-level aggregation and its memoization.
//!
//! Grounded on `examples/original_source/heuristics/sliding.py` and
//! `sliding_jit.py`, which define the same four scorers over the same
//! sliding windows; `Score` uses `f64` here exactly as the original uses
//! `numpy` floats, so `+inf` is a real sentinel value rather than a
//! saturating integer constant.

use std::collections::HashMap;

use crate::board::{Board, Color};

use super::scan::{self, colors_of};

/// A window or board score. `f64::INFINITY` marks an immediate win / an
/// open four, per spec §4.4.
pub type Score = f64;

/// `bin`: the unique non-empty color occupying every cell of `window`, or
/// `Empty` if the window is not monochromatic (mixed colors or all empty).
pub fn bin(window: &[Color; 5]) -> Color {
    let first = window[0];
    if first == Color::Empty {
        return Color::Empty;
    }
    if window.iter().all(|&c| c == first) {
        first
    } else {
        Color::Empty
    }
}

/// `count`: `sign · 19^k` on a length-5 window. A window containing both
/// colors scores `0` (it can never become a five for either side). A
/// window containing only `color`'s stones scores `+19^k` (`+inf` at
/// `k == 5`); a window containing only the opponent's scores `-19^k`
/// (`-inf` at `k == 5`), so `H` punishes enemy lines exactly as it
/// rewards friendly ones.
pub fn count(color: Color, window: &[Color; 5]) -> Score {
    let opponent = color.opponent();
    let has_color = window.iter().any(|&c| c == color);
    let has_opponent = window.iter().any(|&c| c == opponent);

    if has_color && has_opponent {
        return 0.0;
    }
    if has_opponent {
        let k = window.iter().filter(|&&c| c == opponent).count();
        return if k == 5 { Score::NEG_INFINITY } else { -(19f64.powi(k as i32)) };
    }
    let k = window.iter().filter(|&&c| c == color).count();
    if k == 5 {
        Score::INFINITY
    } else {
        19f64.powi(k as i32)
    }
}

/// `count_with_move`: like `count`, but flags the two decisive
/// almost-five shapes spec §4.4 calls out. In a length-5 window, 4
/// stones leave exactly one empty cell, so a four can never be open on
/// *both* ends at once — the decisive four shape is "at least one empty
/// end", scored `+inf` for either side. An open three (3 stones, both
/// ends empty) is only decisive for the side to move, since it takes
/// that side's own next move to convert it.
pub fn count_with_move(color: Color, whos_move: Color, window: &[Color; 5]) -> Score {
    let base = count(color, window);
    if !base.is_finite() {
        return base;
    }
    let k = window.iter().filter(|&&c| c == color).count();
    let open_end = window[0] == Color::Empty || window[4] == Color::Empty;
    if k == 4 && open_end {
        Score::INFINITY
    } else if k == 3 && window[0] == Color::Empty && window[4] == Color::Empty && whos_move == color {
        Score::INFINITY
    } else {
        base
    }
}

/// `free_three`: on a length-6 window, an open ("free") three for
/// `target` scores `1.0` when both inner-edge cells (`window[1]`,
/// `window[4]`) belong to `target`, `0.5` when only one does, and `0.0`
/// otherwise. Requires both outer cells empty and exactly three `target`
/// stones among the inner four.
pub fn free_three(target: Color, window: &[Color; 6]) -> Score {
    if window[0] != Color::Empty || window[5] != Color::Empty {
        return 0.0;
    }
    let inner = &window[1..5];
    if inner.iter().any(|&c| c == target.opponent()) {
        return 0.0;
    }
    let s = inner.iter().filter(|&&c| c == target).count();
    if s != 3 {
        return 0.0;
    }
    let left_edge = window[1] == target;
    let right_edge = window[4] == target;
    match (left_edge, right_edge) {
        (true, true) => 1.0,
        (true, false) | (false, true) => 0.5,
        (false, false) => 0.0,
    }
}

/// Per-turn memoization of the board-level evaluators, keyed on
/// `(scorer, color[, whos_move], board_hash)` per spec §4.4's purity
/// claim. Scoped to one call site (never a process-wide global) per the
/// design note in spec §9 — a new `EvalCache` is created per search and
/// dropped at its end.
#[derive(Debug, Default)]
pub struct EvalCache {
    count: HashMap<(Color, u128), Score>,
    count_with_move: HashMap<(Color, Color, u128), Score>,
    free_three: HashMap<(Color, u128), Score>,
}

impl EvalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// `H(color, board)` using the `count` scorer: sum over every
    /// length-5 window. The general-purpose scalar evaluator (spec §4.4)
    /// and the move-ordering heuristic (spec §4.5).
    pub fn count_total(&mut self, color: Color, board: &Board) -> Score {
        let key = (color, board.hash());
        if let Some(&v) = self.count.get(&key) {
            return v;
        }
        let mut total = 0.0;
        for w in scan::windows5() {
            let colors = colors_of(board, w);
            let s = count(color, &colors);
            if s.is_infinite() {
                total = s;
                break;
            }
            total += s;
        }
        self.count.insert(key, total);
        total
    }

    /// `H(color, board)` using `count_with_move`: the leaf-node evaluator
    /// for alpha-beta (spec §4.6), aware of whose move it is so open
    /// fours are scored as decisive regardless of search depth parity.
    pub fn count_with_move_total(&mut self, color: Color, whos_move: Color, board: &Board) -> Score {
        let key = (color, whos_move, board.hash());
        if let Some(&v) = self.count_with_move.get(&key) {
            return v;
        }
        let mut total = 0.0;
        for w in scan::windows5() {
            let colors = colors_of(board, w);
            let s = count_with_move(color, whos_move, &colors);
            if s.is_infinite() {
                total = s;
                break;
            }
            total += s;
        }
        self.count_with_move.insert(key, total);
        total
    }

    /// Sum of `free_three` over every length-6 window, for `target` on
    /// `board`. Used by the double-free-three legality check (spec §4.5)
    /// and by the forbidden-move rule.
    pub fn free_three_total(&mut self, target: Color, board: &Board) -> Score {
        let key = (target, board.hash());
        if let Some(&v) = self.free_three.get(&key) {
            return v;
        }
        let mut total = 0.0;
        for w in scan::windows6() {
            let colors = colors_of(board, w);
            total += free_three(target, &colors);
        }
        self.free_three.insert(key, total);
        total
    }
}

/// First non-empty monochromatic length-5 window found, if any. Drives
/// terminal detection (spec §4.4's `bin`) independently of the `H`
/// aggregator, since a winner is a witness, not a sum.
pub fn find_line_winner(board: &Board) -> Option<Color> {
    for w in scan::windows5() {
        let colors = colors_of(board, w);
        let winner = bin(&colors);
        if winner != Color::Empty {
            return Some(winner);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn bin_requires_monochromatic_window() {
        let all_black = [Color::Black; 5];
        assert_eq!(bin(&all_black), Color::Black);

        let mixed = [Color::Black, Color::Black, Color::White, Color::Black, Color::Black];
        assert_eq!(bin(&mixed), Color::Empty);

        let empty = [Color::Empty; 5];
        assert_eq!(bin(&empty), Color::Empty);
    }

    #[test]
    fn count_scales_exponentially_and_punishes_opponent() {
        let empty = [Color::Empty; 5];
        assert_eq!(count(Color::Black, &empty), 1.0); // 19^0

        let two_black = [Color::Black, Color::Black, Color::Empty, Color::Empty, Color::Empty];
        assert_eq!(count(Color::Black, &two_black), 19f64.powi(2));

        let five_black = [Color::Black; 5];
        assert_eq!(count(Color::Black, &five_black), Score::INFINITY);

        let mixed = [Color::Black, Color::Black, Color::White, Color::Empty, Color::Empty];
        assert_eq!(count(Color::Black, &mixed), 0.0);

        let two_white = [Color::White, Color::White, Color::Empty, Color::Empty, Color::Empty];
        assert_eq!(count(Color::Black, &two_white), -(19f64.powi(2)));

        let five_white = [Color::White; 5];
        assert_eq!(count(Color::Black, &five_white), Score::NEG_INFINITY);
    }

    #[test]
    fn count_with_move_flags_four_with_an_open_end_for_either_side() {
        let closed_four = [Color::White, Color::Black, Color::Black, Color::Black, Color::Black];
        assert_eq!(
            count_with_move(Color::Black, Color::White, &closed_four),
            19f64.powi(4)
        );

        let open_end_four = [Color::Empty, Color::Black, Color::Black, Color::Black, Color::Black];
        assert_eq!(
            count_with_move(Color::Black, Color::White, &open_end_four),
            Score::INFINITY
        );
    }

    #[test]
    fn count_with_move_flags_open_three_only_for_the_side_to_move() {
        let open_three = [Color::Empty, Color::Black, Color::Black, Color::Black, Color::Empty];

        assert_eq!(
            count_with_move(Color::Black, Color::Black, &open_three),
            Score::INFINITY
        );
        assert_eq!(
            count_with_move(Color::Black, Color::White, &open_three),
            19f64.powi(3)
        );
    }

    #[test]
    fn free_three_scores_edges() {
        let one_edge = [
            Color::Empty,
            Color::Black,
            Color::Black,
            Color::Black,
            Color::Empty,
            Color::Empty,
        ];
        assert_eq!(free_three(Color::Black, &one_edge), 0.5);

        let full_open = [
            Color::Empty,
            Color::Black,
            Color::Empty,
            Color::Black,
            Color::Black,
            Color::Empty,
        ];
        assert_eq!(free_three(Color::Black, &full_open), 1.0);

        let blocked = [
            Color::White,
            Color::Black,
            Color::Black,
            Color::Black,
            Color::Empty,
            Color::Empty,
        ];
        assert_eq!(free_three(Color::Black, &blocked), 0.0);
    }

    #[test]
    fn eval_cache_memoizes_by_hash() {
        let mut cache = EvalCache::new();
        let board = Board::empty().after_move(Pos::new(9, 9), Color::Black, &[], 0);
        let first = cache.count_total(Color::Black, &board);
        let second = cache.count_total(Color::Black, &board);
        assert_eq!(first, second);
    }

    #[test]
    fn find_line_winner_detects_five_in_a_row() {
        let mut board = Board::empty();
        for i in 0..5u8 {
            board = board.after_move(Pos::new(i, 0), Color::Black, &[], 0);
        }
        assert_eq!(find_line_winner(&board), Some(Color::Black));
    }
}
