//! Position evaluation with piece-square tables
//!
//! Evaluates chess positions using:
//! - Terminal states (checkmate, stalemate, insufficient material)
//! - Material count (piece values)
//! - Positional bonuses (piece-square tables, mirrored for Black)
//!
//! Scores are always from White's point of view.
//!
//! ## Module Organization
//!
//! - `pst` - Piece-square tables for positional evaluation
//! - `position` - Full position evaluation (terminal + material + positional)

mod position;
mod pst;

pub use position::{evaluate, is_mate_score};
pub use pst::pst_value;
