//! Position evaluation: the line scanner (C3) and window scorers (C4).

pub mod patterns;
pub mod scan;

pub use patterns::{bin, count, count_with_move, find_line_winner, free_three, EvalCache, Score};
