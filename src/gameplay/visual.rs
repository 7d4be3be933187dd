//! Visual gameplay stub (spec §5/§9, SPEC_FULL §4.8 "[SUPPLEMENT]"):
//! satisfies `--gameplay=visual` with the same suspendable step-function
//! contract as the terminal driver, without implementing rendering — a
//! GUI event pump driving this is an external collaborator per spec §1,
//! out of scope for the core.
//!
//! Grounded on the teacher's `ui` module for where GUI-adjacent code
//! lives in this crate, without carrying over its board-painting logic
//! or its `eframe`/`egui` dependency — spec §9 calls the GUI event pump
//! an external collaborator, so there is nothing here for it to be
//! grounded on beyond the module boundary itself.

use crate::board::Color;
use crate::gameplay::GameState;

/// Wraps a [`GameState`] behind the same `step()` contract spec §5
/// describes for the GUI: "each `step` either returns `⊥` (here, `None`)
/// to continue, or a winning color to terminate". Unlike the terminal
/// driver, a rejected move does not retry in a loop — the caller (the
/// event pump) is expected to call `step()` again once new input is
/// available, per the "single-element mailbox" design note in spec §9.
pub struct Visual {
    game: GameState,
}

impl Visual {
    pub fn new(game: GameState) -> Self {
        Self { game }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Advance exactly one ply attempt. Returns `Some(color)` once the
    /// game has a winner; `None` otherwise, whether the attempt succeeded
    /// or was rejected (the active player is unchanged on rejection, so
    /// the next `step()` re-prompts it).
    pub fn step(&mut self) -> Option<Color> {
        match self.game.try_ply() {
            Ok(winner) => winner,
            Err(e) => {
                log::debug!("visual gameplay: move rejected: {e}");
                None
            }
        }
    }
}
