//! Terminal front end for the `chess_ai` engine
//!
//! - `cli` - Command-line flags and how they override settings
//! - `session` - Non-blocking game loop state (moves, hints, undo, game end)
//! - `settings` - JSON settings file resolution and persistence

pub mod cli;
pub mod session;
pub mod settings;

pub use cli::{Cli, EngineSide};
pub use session::{
    detect_outcome, format_score, GameOutcome, GameSession, SessionEvent, SessionOptions,
};
