//! Error types for the move search
//!
//! Every fault the search core can hit is recoverable. Internal functions
//! return [`ChessAiResult`]; the public entry points (`find_best_move`, the
//! opening book lookup, the hint scan) log the error and hand the caller
//! "no move" instead.

use crate::types::TaskKind;
use thiserror::Error;

/// Errors that can occur in the search core
#[derive(Error, Debug)]
pub enum ChessAiError {
    /// Requested search depth outside the supported range
    #[error("Invalid search depth {depth} (must be {min}-{max})")]
    InvalidDepth { depth: u8, min: u8, max: u8 },

    /// Deriving a child position failed mid-search
    #[error("Move application failed during search: {message}")]
    MoveApplication { message: String },

    /// A request of the same kind has not delivered its result yet
    #[error("A {kind} request is already in flight")]
    RequestInFlight { kind: TaskKind },

    /// The background worker thread could not be started
    #[error("Failed to spawn {kind} worker: {source}")]
    WorkerSpawn {
        kind: TaskKind,
        #[source]
        source: std::io::Error,
    },

    /// Position text could not be turned into a playable position
    #[error("Invalid FEN '{fen}': {message}")]
    InvalidFen { fen: String, message: String },

    /// Config file I/O error
    #[error("Config I/O error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Config serialization/deserialization error
    #[error("Config serialization error: {0}")]
    ConfigSerialization(#[from] serde_json::Error),
}

/// Result type alias for search core operations
pub type ChessAiResult<T> = Result<T, ChessAiError>;
