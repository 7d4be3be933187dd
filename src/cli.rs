//! CLI/config (spec §6 "[AMBIENT]"): `clap` derive parser for
//! `--player1`/`--player2`/`--gameplay`, and the `DEPTH` environment
//! variable.
//!
//! Grounded on `examples/gyk-michi-rust/src/main.rs`'s `clap::Parser`
//! derive style.

use clap::{Parser, ValueEnum};

const DEFAULT_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    Human,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GameplayKind {
    Terminal,
    Visual,
}

/// Gomoku with capture and double-free-three rules.
#[derive(Debug, Parser)]
#[command(name = "gomoku", about = "Gomoku with capture and double-free-three rules")]
pub struct Cli {
    #[arg(long, value_enum)]
    pub player1: PlayerKind,

    #[arg(long, value_enum)]
    pub player2: PlayerKind,

    #[arg(long, value_enum, default_value = "terminal")]
    pub gameplay: GameplayKind,
}

/// AI search depth from the `DEPTH` env var, default 3 (spec §6).
pub fn search_depth() -> u32 {
    std::env::var("DEPTH")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_DEPTH)
}
