//! Terminal driver (spec §6/§4.8 "C8" presentation): runs a [`GameState`]
//! to completion, printing the board, per-ply timing stats, and
//! best-effort snapshot persistence.
//!
//! Grounded on `examples/original_source/gameplay/terminal.py`'s
//! `print_info_before_move`/`print_info_after_move` and the board's
//! `tabulate`-based `__str__`; reimplemented here with a plain
//! fixed-width formatter since `tabulate` has no direct equivalent in the
//! pack.

use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use crate::board::{Board, Color, BOARD_SIZE};
use crate::gameplay::GameState;

const SNAPSHOT_DIR: &str = "./logs";

/// Run `game` to completion, printing the board and per-ply stats after
/// every move, until a color wins.
pub fn run(mut game: GameState) -> Color {
    clear_previous_snapshots();

    let mut timers: HashMap<Color, Vec<Duration>> = HashMap::new();
    let mut move_idx: u32 = 0;

    loop {
        print_board_header(&game, move_idx);
        println!("{}", render(game.board()));
        write_snapshot(game.board(), move_idx);

        match game.try_ply() {
            Ok(maybe_winner) => {
                let ply = game.last_ply().expect("try_ply just succeeded");
                timers.entry(ply.color).or_default().push(ply.think_time);
                print_post_move(&mut game, &timers, ply.pos, ply.color, ply.think_time);
                move_idx += 1;

                if let Some(winner) = maybe_winner {
                    println!("Game finished, player \"{}\" won!", player_char(winner));
                    println!("{}", render(game.board()));
                    return winner;
                }
            }
            Err(e) => {
                println!("Failed to get move: {e}, try again");
            }
        }
    }
}

fn print_board_header(game: &GameState, move_idx: u32) {
    println!(
        "Move #{} / {}. Current board is:",
        move_idx / 2,
        player_char(game.active_color())
    );
}

fn print_post_move(
    game: &mut GameState,
    timers: &HashMap<Color, Vec<Duration>>,
    pos: crate::board::Pos,
    color: Color,
    think_time: Duration,
) {
    let times = &timers[&color];
    let mean = times.iter().sum::<Duration>() / times.len() as u32;

    println!(
        "\nPlayer \"{}\" is playing [{}, {}] after {:?}",
        player_char(color),
        pos.x,
        pos.y,
        think_time
    );
    println!(
        "Mean time for move for player {} = {:?}",
        player_char(color),
        mean
    );

    let black_score = game.count_score(Color::Black);
    let white_score = game.count_score(Color::White);
    println!(
        "Scores are: X={black_score}, O={white_score}\nCaptures are: {{X: {}, O: {}}}\n",
        game.board().captures(Color::Black) * 2,
        game.board().captures(Color::White) * 2,
    );
}

fn player_char(color: Color) -> char {
    match color {
        Color::Black => 'X',
        Color::White => 'O',
        Color::Empty => '.',
    }
}

/// Render the board as a fixed-width table with row/column headers,
/// `.`/`X`/`O` cells, per spec §6.
fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{col:>2} "));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{row:>2} "));
        for col in 0..BOARD_SIZE {
            let pos = crate::board::Pos::new(row as u8, col as u8);
            let cell = match board.get(pos) {
                Color::Empty => '.',
                Color::Black => 'X',
                Color::White => 'O',
            };
            out.push_str(&format!(" {cell} "));
        }
        out.push('\n');
    }
    out
}

/// Best-effort per-ply snapshot, mirroring the original's
/// `joblib.dump(board, ...)` debugging aid (spec §6 "Persistence": "not
/// part of the contract and may be omitted"). Failures are logged at
/// `warn!` and never abort the game.
fn write_snapshot(board: &Board, move_idx: u32) {
    let path = format!("{SNAPSHOT_DIR}/board_at_move_{move_idx}.json");
    match serde_json::to_string(board) {
        Ok(json) => {
            if let Err(e) = fs::write(&path, json) {
                log::warn!("failed to write board snapshot to {path}: {e}");
            }
        }
        Err(e) => log::warn!("failed to serialize board snapshot: {e}"),
    }
}

fn clear_previous_snapshots() {
    if fs::create_dir_all(SNAPSHOT_DIR).is_err() {
        return;
    }
    let Ok(entries) = fs::read_dir(SNAPSHOT_DIR) else {
        return;
    };
    for entry in entries.flatten() {
        if entry.path().extension().and_then(|e| e.to_str()) == Some("json") {
            let _ = fs::remove_file(entry.path());
        }
    }
}
