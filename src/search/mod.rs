//! Search module: fixed-depth minimax with alpha-beta pruning (spec §4.6).
//!
//! `search/threat.rs` (VCF/VCT) and `search/zobrist.rs` (superseded by the
//! 128-bit hash in [`crate::board`]) carried no spec counterpart and were
//! dropped in the final trim pass; see `DESIGN.md`.

pub mod alphabeta;
pub mod tt;

pub use alphabeta::{SearchResult, Searcher};
pub use tt::TranspositionTable;
