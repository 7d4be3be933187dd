//! Line scanner (spec §4.3): the fixed set of length-5 and length-6 windows
//! over rows, columns, and both diagonals.
//!
//! Window *positions* never change — only their contents do, board to
//! board — so the coordinate tuples are computed once into a process-wide
//! table (spec §9 "Global state... initialize lazily once, never mutate")
//! and every evaluator call just reads colors through them.

use lazy_static::lazy_static;

use crate::board::{Board, Color, Pos, BOARD_SIZE};

/// Unit step vectors for the four window axes: horizontal, vertical, and
/// the two diagonals. Only one direction per axis is needed — scanning the
/// reverse direction would just enumerate the same windows with their
/// contents reversed, and every scorer in `patterns` is symmetric under
/// reversal.
const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

fn windows_of_len<const L: usize>() -> Vec<[Pos; L]> {
    let mut out = Vec::new();
    for &(dx, dy) in &AXES {
        for x0 in 0..BOARD_SIZE as i32 {
            for y0 in 0..BOARD_SIZE as i32 {
                let x_end = x0 + dx * (L as i32 - 1);
                let y_end = y0 + dy * (L as i32 - 1);
                if !Pos::is_valid(x_end, y_end) {
                    continue;
                }
                let mut window = [Pos::new(0, 0); L];
                for (i, slot) in window.iter_mut().enumerate() {
                    *slot = Pos::new((x0 + dx * i as i32) as u8, (y0 + dy * i as i32) as u8);
                }
                out.push(window);
            }
        }
    }
    out
}

lazy_static! {
    static ref WINDOWS5: Vec<[Pos; 5]> = windows_of_len::<5>();
    static ref WINDOWS6: Vec<[Pos; 6]> = windows_of_len::<6>();
}

/// All length-5 windows (rows, columns, both diagonals).
pub fn windows5() -> &'static [[Pos; 5]] {
    &WINDOWS5
}

/// All length-6 windows, used only by the free-three scorer.
pub fn windows6() -> &'static [[Pos; 6]] {
    &WINDOWS6
}

#[inline]
pub fn colors_of<const L: usize>(board: &Board, window: &[Pos; L]) -> [Color; L] {
    let mut colors = [Color::Empty; L];
    for i in 0..L {
        colors[i] = board.get(window[i]);
    }
    colors
}
