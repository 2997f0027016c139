//! Engine configuration
//!
//! [`AiConfig`] controls how strong the automated player is and how the hint
//! scan behaves. It is plain serde data so the driver can keep it in a JSON
//! settings file; missing fields fall back to their defaults.
//!
//! # Difficulty Levels
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 2     |
//! | Medium     | 3     |
//! | Hard       | 4     |
//!
//! Depth is the only strength knob: there is no time control.

use crate::constants::{
    DEFAULT_HINT_COUNT, DEFAULT_HINT_POOL, MAX_SEARCH_DEPTH, MIN_SEARCH_DEPTH,
};
use crate::error::{ChessAiError, ChessAiResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Preset search strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiDifficulty {
    Easy,
    Medium,
    Hard,
}

impl AiDifficulty {
    /// Search depth in plies for this level
    pub fn depth(self) -> u8 {
        match self {
            AiDifficulty::Easy => 2,
            AiDifficulty::Medium => 3,
            AiDifficulty::Hard => 4,
        }
    }
}

/// Search and hint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// Fixed search depth in plies
    pub depth: u8,

    /// Consult the opening book before searching
    pub use_opening_book: bool,

    /// Ordered moves examined by the hint scan
    pub hint_pool: usize,

    /// Hints delivered per request
    pub hint_count: usize,

    /// Seed for the opening-book RNG; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            depth: AiDifficulty::Medium.depth(),
            use_opening_book: true,
            hint_pool: DEFAULT_HINT_POOL,
            hint_count: DEFAULT_HINT_COUNT,
            seed: None,
        }
    }
}

impl AiConfig {
    /// Default settings at a preset strength
    pub fn from_difficulty(difficulty: AiDifficulty) -> Self {
        Self {
            depth: difficulty.depth(),
            ..Self::default()
        }
    }

    /// Parse and validate settings from JSON text
    pub fn load_from_json(json: &str) -> ChessAiResult<Self> {
        let config: AiConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a settings file
    pub fn load_from_path(path: impl AsRef<Path>) -> ChessAiResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::load_from_json(&contents)
    }

    /// Write settings as pretty JSON, creating parent directories as needed
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> ChessAiResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Check that the depth is searchable
    ///
    /// # Errors
    ///
    /// [`crate::ChessAiError::InvalidDepth`] when `depth` is outside
    /// `MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH`.
    pub fn validate(&self) -> ChessAiResult<()> {
        if (MIN_SEARCH_DEPTH..=MAX_SEARCH_DEPTH).contains(&self.depth) {
            Ok(())
        } else {
            Err(ChessAiError::InvalidDepth {
                depth: self.depth,
                min: MIN_SEARCH_DEPTH,
                max: MAX_SEARCH_DEPTH,
            })
        }
    }
}
