//! Player driver (spec §4.7 "C7"): a tagged `Player` enum over the
//! {Human, AI} capability set (`start_game`/`get_move`/`end_game`), per
//! spec §9's "a tagged variant over {Human, AI} composes more clearly than
//! inheritance" design note.
//!
//! Grounded on `examples/original_source/player/base.py` (the
//! `start_game`/`get_move`/`end_game` shape) and `human.py`/`ai.py` for the
//! two variants' behavior; `AIPlayer` here delegates straight to
//! [`crate::search::Searcher`] rather than the original's free functions.

use std::io;

use crate::board::{Board, Color, Pos};
use crate::error::GomokuError;
use crate::search::Searcher;

/// Exact prompt text from spec §6.
pub const PROMPT: &str = "Type X and Y coordinates of the move (must be from 0 to 18) :: ";

/// A source of one line of human input, abstracted so the terminal driver
/// can use stdin and tests can feed canned input.
pub trait InputSource {
    fn read_move(&mut self) -> io::Result<String>;
}

/// Reads a move from stdin, printing [`PROMPT`] first.
pub struct StdinInput;

impl InputSource for StdinInput {
    fn read_move(&mut self) -> io::Result<String> {
        use io::Write;
        print!("{PROMPT}");
        io::stdout().flush()?;
        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line)
    }
}

/// A human or AI player, per spec §4.7/§9.
pub enum Player {
    Human {
        color: Color,
        input: Box<dyn InputSource>,
    },
    Ai {
        color: Color,
        depth: u32,
    },
}

impl Player {
    pub fn human(color: Color, input: Box<dyn InputSource>) -> Self {
        Player::Human { color, input }
    }

    pub fn ai(color: Color, depth: u32) -> Self {
        Player::Ai { color, depth }
    }

    pub fn color(&self) -> Color {
        match self {
            Player::Human { color, .. } => *color,
            Player::Ai { color, .. } => *color,
        }
    }

    /// No-op hook for both variants today; kept as part of the capability
    /// set so the game loop never special-cases a player kind.
    pub fn start_game(&mut self) {}

    pub fn end_game(&mut self) {}

    /// Ask this player for its next move. The human variant reads and
    /// parses one line of text (spec §4.7); the AI variant runs a
    /// fixed-depth search (spec §4.6) with a fresh [`Searcher`] per call,
    /// scoped to a single turn per spec §9.
    pub fn get_move(&mut self, board: &Board) -> Result<Pos, GomokuError> {
        match self {
            Player::Human { input, .. } => {
                let line = input
                    .read_move()
                    .map_err(|e| GomokuError::InvalidInput(e.to_string()))?;
                parse_move(&line)
            }
            Player::Ai { color, depth } => {
                let mut searcher = Searcher::new();
                let result = searcher.search(board, *color, *depth);
                result
                    .best_move
                    .ok_or_else(|| GomokuError::InternalAssert("search returned no move".into()))
            }
        }
    }
}

/// Parse `"x y"` into a `Pos`, per spec §4.7/§6.
fn parse_move(line: &str) -> Result<Pos, GomokuError> {
    let mut parts = line.split_whitespace();
    let x_str = parts
        .next()
        .ok_or_else(|| GomokuError::InvalidInput("expected two coordinates".into()))?;
    let y_str = parts
        .next()
        .ok_or_else(|| GomokuError::InvalidInput("expected two coordinates".into()))?;
    if parts.next().is_some() {
        return Err(GomokuError::InvalidInput("expected exactly two coordinates".into()));
    }

    let x: i32 = x_str
        .trim()
        .parse()
        .map_err(|_| GomokuError::InvalidInput(format!("'{x_str}' is not an integer")))?;
    let y: i32 = y_str
        .trim()
        .parse()
        .map_err(|_| GomokuError::InvalidInput(format!("'{y_str}' is not an integer")))?;

    if !(0..19).contains(&x) {
        return Err(GomokuError::OutOfRange { value: x });
    }
    if !(0..19).contains(&y) {
        return Err(GomokuError::OutOfRange { value: y });
    }

    Ok(Pos::new(x as u8, y as u8))
}
