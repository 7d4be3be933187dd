//! Error taxonomy (spec §7). `moves` and `eval` never log — they return
//! values or errors; logging and player-facing messages live in
//! `player`/`gameplay`.

use thiserror::Error;

use crate::board::Pos;

/// Why a move was rejected by the move engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// Target cell is occupied.
    Occupied,
    /// Coordinate is outside the board.
    OffBoard,
    /// The move would create two free-threes at once (spec §4.5).
    DoubleFreeThree,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            IllegalMoveReason::Occupied => "target cell is not empty",
            IllegalMoveReason::OffBoard => "coordinate is off the board",
            IllegalMoveReason::DoubleFreeThree => "move creates a double free-three",
        };
        write!(f, "{msg}")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GomokuError {
    #[error("illegal move at ({}, {}): {reason}", .pos.x, .pos.y)]
    IllegalMove { pos: Pos, reason: IllegalMoveReason },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("coordinate {value} is out of range [0, 18]")]
    OutOfRange { value: i32 },

    #[error("internal assertion failed: {0}")]
    InternalAssert(String),
}
