//! Game loop (spec §4.8 "C8"): alternates players, applies moves, and
//! detects terminal state, per spec's single-threaded cooperative model
//! (§5) — a `GameState` that a driver steps through one ply at a time.
//!
//! Grounded on `examples/original_source/gameplay/terminal.py`'s
//! `game_iterator` generator (itself grounded on `gameplay.py`'s
//! `play_game` loop): both alternate an "active player", apply a move,
//! and yield control between plies. Here the two concerns split along
//! spec §9's suspendable-iterator note: `GameState::try_ply` is the
//! iterator's `step()`, and presentation (board printing, timing stats,
//! snapshot persistence) lives in the drivers (`terminal`, `visual`).

pub mod terminal;
pub mod visual;

use std::time::{Duration, Instant};

use crate::board::{Board, Color, Pos};
use crate::error::GomokuError;
use crate::eval::EvalCache;
use crate::moves;
use crate::player::Player;
use crate::rules::check_winner;

/// What happened on the last successfully-applied ply, for drivers that
/// want to print per-move statistics without re-deriving them.
#[derive(Debug, Clone, Copy)]
pub struct PlyInfo {
    pub pos: Pos,
    pub color: Color,
    pub think_time: Duration,
}

/// Mutable state for one match: the board, both players, whose turn it
/// is, and the per-turn evaluation cache (spec §9: scoped to the search,
/// but retained here across plies within one game since it is never
/// shared across games or threads).
pub struct GameState {
    board: Board,
    players: [Player; 2],
    active: usize,
    cache: EvalCache,
    last_ply: Option<PlyInfo>,
}

impl GameState {
    /// Black (`+1`) always moves first, per spec §4.8.
    pub fn new(player1: Player, player2: Player) -> Self {
        let active = if player1.color() == Color::Black { 0 } else { 1 };
        Self {
            board: Board::empty(),
            players: [player1, player2],
            active,
            cache: EvalCache::new(),
            last_ply: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_color(&self) -> Color {
        self.players[self.active].color()
    }

    pub fn last_ply(&self) -> Option<PlyInfo> {
        self.last_ply
    }

    /// The move-ordering `count` heuristic, exposed for per-ply display
    /// (spec §6: "print ... per-color scores").
    pub fn count_score(&mut self, color: Color) -> f64 {
        self.cache.count_total(color, &self.board)
    }

    /// Ask the active player for a move and try to apply it.
    ///
    /// - `Ok(None)`: the move was legal and the game continues.
    /// - `Ok(Some(color))`: the move was legal and ended the game.
    /// - `Err(_)`: the move was rejected (bad input or illegal move); the
    ///   active player does not change, so the caller should re-prompt it
    ///   without advancing `move_idx` (spec §4.8).
    pub fn try_ply(&mut self) -> Result<Option<Color>, GomokuError> {
        let color = self.active_color();
        let start = Instant::now();
        let pos = self.players[self.active].get_move(&self.board)?;
        let think_time = start.elapsed();

        let next = moves::apply(&mut self.cache, &self.board, pos, color)?;
        self.board = next;
        self.last_ply = Some(PlyInfo { pos, color, think_time });
        self.active = 1 - self.active;

        Ok(check_winner(&self.board))
    }
}
