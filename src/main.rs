//! Gomoku CLI driver: parses `--player1`/`--player2`/`--gameplay`, wires up
//! the chosen players, and runs the game loop to completion.

use std::process::ExitCode;

use clap::Parser;

use gomoku::cli::{self, Cli, GameplayKind, PlayerKind};
use gomoku::gameplay::{terminal, GameState};
use gomoku::player::{Player, StdinInput};
use gomoku::Color;

fn build_player(kind: PlayerKind, color: Color, depth: u32) -> Player {
    match kind {
        PlayerKind::Human => Player::human(color, Box::new(StdinInput)),
        PlayerKind::Ai => Player::ai(color, depth),
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let depth = cli::search_depth();

    let player1 = build_player(cli.player1, Color::Black, depth);
    let player2 = build_player(cli.player2, Color::White, depth);
    let game = GameState::new(player1, player2);

    match cli.gameplay {
        GameplayKind::Terminal => {
            let winner = terminal::run(game);
            log::info!("game finished, {winner:?} won");
            ExitCode::SUCCESS
        }
        GameplayKind::Visual => run_visual(game),
    }
}

fn run_visual(game: GameState) -> ExitCode {
    use gomoku::gameplay::visual::Visual;

    let mut visual = Visual::new(game);
    loop {
        if let Some(winner) = visual.step() {
            log::info!("game finished, {winner:?} won");
            return ExitCode::SUCCESS;
        }
    }
}
