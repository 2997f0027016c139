//! Shared helpers for the integration tests

#![allow(dead_code)]

use chess_ai::{ChessAiError, ChessAiResult, PieceKind, RulesEngine, Side, Square};
use shakmaty::{Chess, Move};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Rules engine double wrapping `shakmaty::Chess`
///
/// Counts every derived position and can be told to fail once a number of
/// children have been derived.
#[derive(Debug, Clone)]
pub struct CountingEngine {
    inner: Chess,
    applies: Arc<AtomicUsize>,
    fail_after: Option<usize>,
}

impl CountingEngine {
    pub fn new(fen: &str) -> Self {
        Self {
            inner: chess_ai::position_from_fen(fen).expect("test FEN must parse"),
            applies: Arc::new(AtomicUsize::new(0)),
            fail_after: None,
        }
    }

    /// Make `apply` fail once `limit` children have been derived
    pub fn failing_after(mut self, limit: usize) -> Self {
        self.fail_after = Some(limit);
        self
    }

    pub fn applies(&self) -> usize {
        self.applies.load(Ordering::SeqCst)
    }
}

impl RulesEngine for CountingEngine {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        RulesEngine::legal_moves(&self.inner)
    }

    fn is_capture(&self, mv: &Move) -> bool {
        self.inner.is_capture(mv)
    }

    fn gives_check(&self, mv: &Move) -> bool {
        self.inner.gives_check(mv)
    }

    fn apply(&self, mv: &Move) -> ChessAiResult<Self> {
        let derived = self.applies.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(limit) = self.fail_after {
            if derived > limit {
                return Err(ChessAiError::MoveApplication {
                    message: format!("injected fault after {limit} positions"),
                });
            }
        }
        Ok(Self {
            inner: self.inner.apply(mv)?,
            applies: Arc::clone(&self.applies),
            fail_after: self.fail_after,
        })
    }

    fn piece_at(&self, square: Square) -> Option<(PieceKind, Side)> {
        self.inner.piece_at(square)
    }

    fn is_checkmate(&self) -> bool {
        RulesEngine::is_checkmate(&self.inner)
    }

    fn is_stalemate(&self) -> bool {
        RulesEngine::is_stalemate(&self.inner)
    }

    fn is_insufficient_material(&self) -> bool {
        RulesEngine::is_insufficient_material(&self.inner)
    }

    fn is_game_over(&self) -> bool {
        RulesEngine::is_game_over(&self.inner)
    }

    fn side_to_move(&self) -> Side {
        self.inner.side_to_move()
    }

    fn canonical_serialization(&self) -> String {
        self.inner.canonical_serialization()
    }

    fn parse_move(&self, uci: &str) -> Option<Move> {
        self.inner.parse_move(uci)
    }
}

pub const MATE_IN_ONE: &str = "6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1";
pub const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";
pub const STALEMATE: &str = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1";
pub const ONLY_MOVE: &str = "k7/8/8/8/8/8/5PPr/6RK w - - 0 1";
pub const ITALIAN_MIDDLEGAME: &str =
    "r1bq1rk1/ppp2ppp/2np1n2/2b1p3/2B1P3/2NP1N2/PPP2PPP/R1BQ1RK1 w - - 0 8";
