//! Candidate move generation (spec §4.5 "C5"): restricts search to cells
//! near existing stones (plus a center seed on an empty board), ordered by
//! the `count` heuristic so alpha-beta's cuts bite early.
//!
//! Grounded on the teacher's move-ordering scheme in `search/alphabeta.rs`
//! (proximity-filtered candidates scored then sorted before recursion) and
//! on `examples/gyk-michi-rust/src/position.rs`'s neighbor-generation
//! style.

use lazy_static::lazy_static;

use crate::board::{Board, Color, Pos, BOARD_SIZE};
use crate::eval::{EvalCache, Score};
use crate::rules::is_legal_move;

/// Neighbourhood radius: any empty cell within one step of a stone is a
/// candidate.
const NEIGHBOUR_RADIUS: i32 = 1;

/// Below this move index the board is sparse enough that skipping the
/// (more expensive) free-three legality filter doesn't matter — early
/// moves essentially never form a double-free-three, per spec §4.5.
const SKIP_LEGALITY_FILTER_BEFORE: u32 = 8;

lazy_static! {
    /// Seed candidates for a completely empty board: the center cell and
    /// its immediate neighbours, since proximity search alone would find
    /// nothing to anchor on.
    static ref CENTER_SEED: Vec<Pos> = {
        let c = (BOARD_SIZE / 2) as i32;
        let mut seeds = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                let (x, y) = (c + dx, c + dy);
                if Pos::is_valid(x, y) {
                    seeds.push(Pos::new(x as u8, y as u8));
                }
            }
        }
        seeds
    };
}

/// Legal candidate moves for `color` on `board`, ordered best-first from
/// `color`'s perspective (descending `count` heuristic, spec §4.5).
///
/// Returns `Some(vec![pos])` with a single forced move when `pos` is an
/// immediate win — the short-circuit spec §4.5 calls out so the search
/// doesn't waste a ply exploring alternatives once a winner is in hand.
pub fn generate(cache: &mut EvalCache, board: &Board, color: Color) -> Vec<Pos> {
    if board.is_board_empty() {
        return CENTER_SEED.clone();
    }

    let mut candidates: Vec<Pos> = neighbour_cells(board)
        .into_iter()
        .filter(|&pos| {
            if board.move_idx() < SKIP_LEGALITY_FILTER_BEFORE {
                board.is_empty(pos)
            } else {
                is_legal_move(cache, board, pos, color)
            }
        })
        .collect();

    if let Some(forced) = find_forced_win(cache, board, color, &candidates) {
        return vec![forced];
    }

    candidates.sort_by(|&a, &b| {
        let after_a = board.after_move(a, color, &[], 0);
        let after_b = board.after_move(b, color, &[], 0);
        let score_a = cache.count_total(color, &after_a);
        let score_b = cache.count_total(color, &after_b);
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    candidates
}

/// Every empty cell within [`NEIGHBOUR_RADIUS`] of an existing stone,
/// de-duplicated.
fn neighbour_cells(board: &Board) -> Vec<Pos> {
    let mut seen = [false; crate::board::TOTAL_CELLS];
    let mut out = Vec::new();

    for color in [Color::Black, Color::White] {
        let Some(stones) = board.stones(color) else {
            continue;
        };
        for stone_pos in stones.iter_ones() {
            for dx in -NEIGHBOUR_RADIUS..=NEIGHBOUR_RADIUS {
                for dy in -NEIGHBOUR_RADIUS..=NEIGHBOUR_RADIUS {
                    if dx == 0 && dy == 0 {
                        continue;
                    }
                    let (x, y) = (stone_pos.x as i32 + dx, stone_pos.y as i32 + dy);
                    if !Pos::is_valid(x, y) {
                        continue;
                    }
                    let candidate = Pos::new(x as u8, y as u8);
                    if !board.is_empty(candidate) {
                        continue;
                    }
                    let idx = candidate.to_index();
                    if !seen[idx] {
                        seen[idx] = true;
                        out.push(candidate);
                    }
                }
            }
        }
    }

    out
}

/// If any candidate is an immediate five-in-a-row for `color`, return it —
/// no point scoring or searching alternatives once a winning move exists.
///
/// Checked against `+infinity` specifically (not just non-finite): `count`
/// is signed (spec §4.4), so a pure-opponent five elsewhere on the board
/// would score `-infinity` for `color`, which is not a forced win for
/// `color` and must not short-circuit the search here.
fn find_forced_win(cache: &mut EvalCache, board: &Board, color: Color, candidates: &[Pos]) -> Option<Pos> {
    for &pos in candidates {
        let after = board.after_move(pos, color, &[], 0);
        if cache.count_total(color, &after) == Score::INFINITY {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_yields_center_seed() {
        let mut cache = EvalCache::new();
        let board = Board::empty();
        let candidates = generate(&mut cache, &board, Color::Black);
        assert!(candidates.contains(&Pos::new(9, 9)));
        assert_eq!(candidates.len(), 9);
    }

    #[test]
    fn candidates_stay_near_stones() {
        let mut cache = EvalCache::new();
        let board = Board::empty().after_move(Pos::new(9, 9), Color::Black, &[], 0);
        let candidates = generate(&mut cache, &board, Color::White);
        assert!(!candidates.is_empty());
        for pos in &candidates {
            let dx = (pos.x as i32 - 9).abs();
            let dy = (pos.y as i32 - 9).abs();
            assert!(dx <= 1 && dy <= 1);
        }
    }

    #[test]
    fn forced_win_short_circuits_to_one_candidate() {
        let mut cache = EvalCache::new();
        let mut board = Board::empty();
        for i in 0..4u8 {
            board = board.after_move(Pos::new(9, i), Color::Black, &[], 0);
        }
        let candidates = generate(&mut cache, &board, Color::Black);
        assert_eq!(candidates.len(), 1);
        assert!(candidates.contains(&Pos::new(9, 4)));
    }
}
