//! Bounded-depth chess move search
//!
//! An automated opponent for standard chess built from five parts:
//!
//! - [`evaluate`] - material plus piece-square score, White's point of view
//! - [`order_moves`] - MVV-LVA, checks and promotions first
//! - [`OpeningBook`] - exact-FEN book for the first few plies
//! - [`find_best_move`] / [`top_candidates`] - fixed-depth alpha-beta
//! - [`SearchCoordinator`] - runs searches and hint scans on worker threads
//!
//! The rules of chess are not implemented here. Everything the search needs
//! goes through the [`RulesEngine`] trait, implemented for `shakmaty::Chess`.
//!
//! # Example
//!
//! ```rust,no_run
//! use chess_ai::{find_best_move, position_from_fen, ChessMove};
//!
//! let position = position_from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1")?;
//! if let Some(mv) = find_best_move(&position, 2) {
//!     println!("best: {}", mv.uci());
//! }
//! # Ok::<(), chess_ai::ChessAiError>(())
//! ```

pub mod book;
pub mod config;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod evaluation;
pub mod rules;
pub mod search;
pub mod types;

pub use book::OpeningBook;
pub use config::{AiConfig, AiDifficulty};
pub use coordinator::{SearchCoordinator, TaskPoll};
pub use error::{ChessAiError, ChessAiResult};
pub use evaluation::{evaluate, is_mate_score};
pub use rules::{position_from_fen, ChessMove, RulesEngine, START_FEN};
pub use search::{analyse, find_best_move, order_moves, top_candidates, SearchOutcome, Searcher};
pub use types::{Hint, PieceKind, Score, SearchStats, Side, Square, TaskKind};
