//! Minimax search with alpha-beta pruning (spec §4.6 "C6").
//!
//! A single fixed-depth search, no iterative deepening and no VCF/VCT
//! threat search — spec §4.6 calls for exactly the minimax contract below,
//! leaving the teacher's iterative-deepening time management and
//! null-move/LMR/PVS pruning behind (see `DESIGN.md`). Move ordering and
//! candidate restriction are delegated to [`crate::candidates::generate`];
//! the evaluator is [`EvalCache::count_with_move_total`], taken from the
//! perspective of the side searching the tree (`maximizing_color`), aware
//! of whose move it is at the leaf.

use crate::board::{Board, Color, Pos};
use crate::candidates;
use crate::eval::EvalCache;
use crate::moves;
use crate::rules::check_winner;

use super::tt::TranspositionTable;

/// Result of a completed search: the move to play and its minimax score
/// from `maximizing_color`'s perspective.
#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Option<Pos>,
    pub score: f64,
}

/// Fixed-depth alpha-beta searcher. Owns its own evaluation and
/// transposition caches, scoped to one search call (spec §9 "scope it to
/// one turn") — construct a fresh `Searcher` per move rather than reusing
/// one across a whole game.
pub struct Searcher {
    cache: EvalCache,
    tt: TranspositionTable,
}

impl Searcher {
    pub fn new() -> Self {
        Self {
            cache: EvalCache::new(),
            tt: TranspositionTable::new(),
        }
    }

    /// Search `depth` plies for `color`'s best move on `board`.
    pub fn search(&mut self, board: &Board, color: Color, depth: u32) -> SearchResult {
        let candidates = candidates::generate(&mut self.cache, board, color);
        if candidates.is_empty() {
            return SearchResult {
                best_move: None,
                score: self.cache.count_with_move_total(color, color, board),
            };
        }
        if candidates.len() == 1 {
            return SearchResult {
                best_move: Some(candidates[0]),
                score: f64::INFINITY,
            };
        }

        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = None;

        for pos in candidates {
            let child = moves::apply(&mut self.cache, board, pos, color)
                .expect("candidate move from `candidates::generate` is always legal");
            let score = self.minimax(
                &child,
                color,
                color.opponent(),
                depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
            );
            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
        }
    }

    /// Recursive minimax with alpha-beta pruning. `maximizing_color` is
    /// fixed for the whole search (the root mover); `to_move` alternates
    /// each ply.
    fn minimax(
        &mut self,
        board: &Board,
        maximizing_color: Color,
        to_move: Color,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
    ) -> f64 {
        if let Some(winner) = check_winner(board) {
            return if winner == maximizing_color {
                f64::INFINITY
            } else {
                f64::NEG_INFINITY
            };
        }

        if depth == 0 {
            return self.cache.count_with_move_total(maximizing_color, to_move, board);
        }

        let is_maximizing = to_move == maximizing_color;
        if let Some(score) = self.tt.get(board.hash(), depth, is_maximizing) {
            return score;
        }

        let candidates = candidates::generate(&mut self.cache, board, to_move);
        if candidates.is_empty() {
            let score = self.cache.count_with_move_total(maximizing_color, to_move, board);
            self.tt.insert(board.hash(), depth, is_maximizing, score);
            return score;
        }

        let mut best = if is_maximizing { f64::NEG_INFINITY } else { f64::INFINITY };

        for pos in candidates {
            let child = moves::apply(&mut self.cache, board, pos, to_move)
                .expect("candidate move from `candidates::generate` is always legal");
            let score = self.minimax(&child, maximizing_color, to_move.opponent(), depth - 1, alpha, beta);

            if is_maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }

            if beta <= alpha {
                break;
            }
        }

        self.tt.insert(board.hash(), depth, is_maximizing, best);
        best
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new()
    }
}
