//! Process-wide Zobrist keys used to incrementally hash `Board::position`.
//!
//! Each `(color, cell)` pair gets a random 128-bit key. A board's `hash` is
//! the XOR of the keys for every occupied cell; placing or removing a stone
//! updates the hash in O(1) by XORing that single key in or out. XOR is
//! commutative and self-inverse, so two boards reaching the same position
//! via different move/capture histories always hash identically — this is
//! what lets the transposition table treat `hash` as a content address.
//!
//! Keys are generated with a fixed-seed 128-bit LCG rather than a real RNG
//! crate: the table is initialized once per process and never needs to be
//! reproducible across *processes*, only stable within one, so there is no
//! ecosystem crate this would pull its weight over a few lines of
//! arithmetic (contrast with the AI's search heuristics, which do lean on
//! `lazy_static` for precomputed tables).

use lazy_static::lazy_static;

use super::TOTAL_CELLS;

pub struct ZobristKeys {
    black: [u128; TOTAL_CELLS],
    white: [u128; TOTAL_CELLS],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut state: u128 = 0x9E37_79B9_7F4A_7C15_F39C_C060_5CED_C834;
        let mut next = move || {
            // 128-bit LCG, constants from Knuth's MMIX widened with a second
            // odd multiplier so the low and high halves don't degenerate.
            state = state
                .wrapping_mul(0x2545_F491_4F6C_DD1D_0000_0000_0000_0001)
                .wrapping_add(0xB5AD_4ECE_DA1C_E2A9);
            state
        };

        let mut black = [0u128; TOTAL_CELLS];
        let mut white = [0u128; TOTAL_CELLS];
        for i in 0..TOTAL_CELLS {
            black[i] = next();
            white[i] = next();
        }
        Self { black, white }
    }

    #[inline]
    pub fn key(&self, color_is_black: bool, idx: usize) -> u128 {
        if color_is_black {
            self.black[idx]
        } else {
            self.white[idx]
        }
    }
}

lazy_static! {
    pub static ref ZOBRIST: ZobristKeys = ZobristKeys::new();
}
