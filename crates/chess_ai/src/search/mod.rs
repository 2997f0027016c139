//! Alpha-beta minimax search
//!
//! This module implements the move search used by the automated player:
//! - Minimax with alpha-beta pruning, fixed depth (no iterative deepening)
//! - Move ordering at every ply for better pruning
//! - A root driver with first-seen tie-breaking
//! - A shallow hint scan that scores the most promising candidates
//!
//! Positions are never mutated in place; each child is derived with
//! [`crate::rules::RulesEngine::apply`], so siblings and callers always see
//! the unchanged parent.
//!
//! ## Module Organization
//!
//! - `alphabeta` - `Searcher` and the recursive `minimax`
//! - `ordering` - Move ordering heuristics
//! - `root` - Top-level `find_best_move`
//! - `hints` - Top-N candidate scan

mod alphabeta;
mod hints;
mod ordering;
mod root;

pub use alphabeta::Searcher;
pub use hints::top_candidates;
pub use ordering::{move_order_score, order_moves};
pub use root::{analyse, find_best_move, SearchOutcome};
