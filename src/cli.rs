//! Command-line interface

use crate::session::SessionOptions;
use chess_ai::{AiConfig, AiDifficulty, Side, START_FEN};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Which sides the engine plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineSide {
    White,
    Black,
    /// Self-play
    Both,
    /// Two humans; the engine only gives hints
    None,
}

impl EngineSide {
    pub fn plays(self, side: Side) -> bool {
        match self {
            EngineSide::White => side == Side::White,
            EngineSide::Black => side == Side::Black,
            EngineSide::Both => true,
            EngineSide::None => false,
        }
    }
}

/// Preset strengths accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
}

impl From<DifficultyArg> for AiDifficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => AiDifficulty::Easy,
            DifficultyArg::Medium => AiDifficulty::Medium,
            DifficultyArg::Hard => AiDifficulty::Hard,
        }
    }
}

/// Play chess against a fixed-depth alpha-beta engine in the terminal
#[derive(Debug, Parser)]
#[command(name = "chessbot", version)]
pub struct Cli {
    /// Starting position as FEN
    #[arg(long, default_value = START_FEN)]
    pub fen: String,

    /// Side(s) played by the engine
    #[arg(long, value_enum, default_value_t = EngineSide::Black)]
    pub engine: EngineSide,

    /// Preset strength; overrides the settings file
    #[arg(long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Search depth in plies; overrides --difficulty
    #[arg(long)]
    pub depth: Option<u8>,

    /// Seed for opening-book choices
    #[arg(long)]
    pub seed: Option<u64>,

    /// Never play from the opening book
    #[arg(long)]
    pub no_book: bool,

    /// Show the engine's top candidate moves
    #[arg(long)]
    pub hints: bool,

    /// Stop after this many plies
    #[arg(long)]
    pub max_plies: Option<usize>,

    /// Settings file (JSON); defaults to the platform config directory
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long)]
    pub save_config: bool,

    /// Foreground tick interval in milliseconds
    #[arg(long, default_value_t = 16)]
    pub frame_ms: u64,
}

impl Cli {
    /// Layer command-line overrides on top of loaded settings
    pub fn apply_overrides(&self, mut config: AiConfig) -> AiConfig {
        if let Some(difficulty) = self.difficulty {
            config.depth = AiDifficulty::from(difficulty).depth();
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.no_book {
            config.use_opening_book = false;
        }
        config
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            engine_white: self.engine.plays(Side::White),
            engine_black: self.engine.plays(Side::Black),
            show_hints: self.hints,
            max_plies: self.max_plies,
        }
    }
}
