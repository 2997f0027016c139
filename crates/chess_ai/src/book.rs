//! Opening book
//!
//! A tiny exact-match book keyed by full FEN (placement, side to move,
//! castling rights, legal en-passant target and both move counters). A
//! position reached by a different move order with different counters is a
//! miss.
//!
//! The table is built once and never modified afterwards, so one instance can
//! be shared between worker threads behind an `Arc`.

use crate::rules::RulesEngine;
use rand::seq::IndexedRandom;
use rand::Rng;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Built-in book lines: position key and candidate replies in UCI
const STANDARD_LINES: [(&str, &[&str]); 4] = [
    (
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        &["e2e4", "d2d4", "g1f3", "c2c4"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        &["e7e5", "c7c5", "e7e6", "c7c6"],
    ),
    (
        "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2",
        &["g1f3", "f1c4", "b1c3"],
    ),
    (
        "rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1",
        &["d7d5", "g8f6", "e7e6", "c7c5"],
    ),
];

/// Immutable map from position key to candidate moves
#[derive(Debug, Clone, Default)]
pub struct OpeningBook {
    lines: HashMap<String, Vec<String>>,
}

impl OpeningBook {
    /// The built-in four-position book
    pub fn standard() -> Self {
        Self::from_lines(
            STANDARD_LINES
                .iter()
                .map(|(fen, moves)| (*fen, moves.iter().copied())),
        )
    }

    /// Build a book from `(fen, candidates)` pairs
    pub fn from_lines<K, I, S>(lines: impl IntoIterator<Item = (K, I)>) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines = lines
            .into_iter()
            .map(|(fen, moves)| (fen.into(), moves.into_iter().map(Into::into).collect()))
            .collect();
        Self { lines }
    }

    /// Number of positions in the book
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Candidate moves stored for a position key, if any
    pub fn candidates(&self, fen: &str) -> Option<&[String]> {
        self.lines.get(fen).map(Vec::as_slice)
    }

    /// Pick a book move for `position`
    ///
    /// On a hit one candidate is chosen uniformly with `rng` and checked
    /// against the position's legal moves. A miss, an empty entry or an
    /// illegal candidate all return `None` so the caller can fall back to
    /// search.
    pub fn lookup<P, R>(&self, position: &P, rng: &mut R) -> Option<P::Move>
    where
        P: RulesEngine,
        R: Rng + ?Sized,
    {
        let key = position.canonical_serialization();
        let candidates = self.lines.get(&key)?;
        let choice = candidates.choose(rng)?;

        match position.parse_move(choice) {
            Some(mv) => {
                debug!("[BOOK] Hit: {}", choice);
                Some(mv)
            }
            None => {
                warn!("[BOOK] Ignoring illegal book move {} for {}", choice, key);
                None
            }
        }
    }
}
