//! # Evaluation Values & Search Parameters
//!
//! Piece values are in centipawns (1/100th of a pawn) and are shared by the
//! evaluator and the move orderer:
//!
//! - **Pawn**: 100
//! - **Knight**: 320
//! - **Bishop**: 330
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 20,000 (never traded; keeps king captures out of any real line)
//!
//! ## Score Sentinels
//!
//! [`MATE_SCORE`] marks a checkmate found at a node and [`MATE_THRESHOLD`] is
//! the level consumers treat as "mate found". [`SEARCH_INFINITY`] is the
//! initial alpha-beta window and is never produced by a real position.
//!
//! Mate scores are not adjusted by distance to mate: a mate in one and a mate
//! in three at the horizon score the same.

use crate::types::{PieceKind, Score};

pub const PAWN_VALUE: Score = 100;
pub const KNIGHT_VALUE: Score = 320;
pub const BISHOP_VALUE: Score = 330;
pub const ROOK_VALUE: Score = 500;
pub const QUEEN_VALUE: Score = 900;
pub const KING_VALUE: Score = 20_000;

/// Material value indexed by [`PieceKind::index`]
pub const PIECE_VALUES: [Score; 6] = [
    PAWN_VALUE,
    KNIGHT_VALUE,
    BISHOP_VALUE,
    ROOK_VALUE,
    QUEEN_VALUE,
    KING_VALUE,
];

/// Score of a position where the side to move is checkmated
pub const MATE_SCORE: Score = 99_999;

/// Consumers treat any |score| at or above this as a forced mate
pub const MATE_THRESHOLD: Score = 90_000;

/// Stalemate and dead-draw score
pub const DRAW_SCORE: Score = 0;

/// Initial alpha-beta bound
pub const SEARCH_INFINITY: Score = 999_999;

/// Ordering bonus for a quiet move that gives check
pub const CHECK_ORDER_BONUS: i32 = 500;

/// Ordering bonus for a quiet, non-checking promotion
pub const PROMOTION_ORDER_BONUS: i32 = 800;

/// MVV-LVA victim multiplier
pub const VICTIM_WEIGHT: i32 = 10;

/// Shallowest search the engine accepts
pub const MIN_SEARCH_DEPTH: u8 = 1;

/// Deepest search the interactive settings allow
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Legal moves examined by the hint scan
pub const DEFAULT_HINT_POOL: usize = 6;

/// Hints delivered to the caller
pub const DEFAULT_HINT_COUNT: usize = 3;

/// Material value of a piece kind
#[inline]
pub fn piece_value(kind: PieceKind) -> Score {
    PIECE_VALUES[kind.index()]
}
