//! Transposition table (spec §4.6): memoizes minimax results keyed on
//! `(board_hash, depth, is_maximizing)`, since the same position can be
//! reached at different depths and on different sides to move.
//!
//! Grounded on the teacher's `search/tt.rs`, which keys on `(hash, depth)`
//! with a direct-mapped array; here the key additionally carries
//! `is_maximizing` (the 128-bit content hash already makes collisions
//! vanishingly unlikely, so a `HashMap` replaces the fixed-size array —
//! no depth/size budget needs tuning up front).

use std::collections::HashMap;

/// `(board_hash, depth, is_maximizing) -> minimax score`.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<(u128, u32, bool), f64>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, hash: u128, depth: u32, is_maximizing: bool) -> Option<f64> {
        self.entries.get(&(hash, depth, is_maximizing)).copied()
    }

    #[inline]
    pub fn insert(&mut self, hash: u128, depth: u32, is_maximizing: bool, score: f64) {
        self.entries.insert((hash, depth, is_maximizing), score);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
