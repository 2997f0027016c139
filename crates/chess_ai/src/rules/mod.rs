//! Capability interface to the chess rules collaborator
//!
//! The search never looks inside a position. Everything it needs (legal moves,
//! piece lookup, terminal-state detection, successor positions, the FEN used
//! as the opening-book key) goes through [`RulesEngine`].
//!
//! Successor positions are produced copy-on-apply: [`RulesEngine::apply`]
//! returns a new position and leaves `self` untouched, so a caller's position
//! can never be observed half-way through a search.
//!
//! ## Module Organization
//!
//! - `standard` - [`RulesEngine`] for `shakmaty::Chess`, plus FEN helpers

mod standard;

pub use standard::{position_from_fen, START_FEN};

use crate::error::ChessAiResult;
use crate::types::{PieceKind, Side, Square};
use std::fmt::Debug;

/// A move as seen by the search: from, to and an optional promotion
pub trait ChessMove: Clone + PartialEq + Debug + Send + 'static {
    fn from_square(&self) -> Square;

    fn to_square(&self) -> Square;

    fn promotion(&self) -> Option<PieceKind>;

    /// Coordinate notation, e.g. `e2e4`, `a7a8q`
    fn uci(&self) -> String;
}

/// Rules queries and move application the search relies on
///
/// Implementations must be cheap to clone: the coordinator hands each worker
/// its own copy of the position.
pub trait RulesEngine: Clone + Send + 'static {
    type Move: ChessMove;

    /// All legal moves, in no particular order
    fn legal_moves(&self) -> Vec<Self::Move>;

    fn is_capture(&self, mv: &Self::Move) -> bool;

    fn gives_check(&self, mv: &Self::Move) -> bool;

    /// Position after `mv`; `self` is left unchanged
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChessAiError::MoveApplication`] when the successor
    /// cannot be derived.
    fn apply(&self, mv: &Self::Move) -> ChessAiResult<Self>;

    fn piece_at(&self, square: Square) -> Option<(PieceKind, Side)>;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_insufficient_material(&self) -> bool;

    /// Checkmate, stalemate or any draw the rules engine recognises
    fn is_game_over(&self) -> bool;

    fn side_to_move(&self) -> Side;

    /// Exact position key (FEN with legal en-passant target)
    fn canonical_serialization(&self) -> String;

    /// Parse coordinate notation, returning the move only when it is legal here
    fn parse_move(&self, uci: &str) -> Option<Self::Move>;
}
