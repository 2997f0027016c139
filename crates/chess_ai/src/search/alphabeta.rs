//! Alpha-beta minimax
//!
//! Plain fixed-depth minimax with alpha-beta pruning. White maximises, Black
//! minimises, and every score is from White's point of view, so the leaf
//! evaluator never needs to know whose turn it is.
//!
//! Recursion depth equals the requested depth. Interactive settings cap it
//! at [`crate::constants::MAX_SEARCH_DEPTH`] through [`crate::AiConfig`].

use super::ordering::order_moves;
use crate::constants::SEARCH_INFINITY;
use crate::error::ChessAiResult;
use crate::evaluation::evaluate;
use crate::rules::RulesEngine;
use crate::types::{Score, SearchStats};

/// State of a single search invocation
///
/// A `Searcher` owns nothing but its counters; positions are borrowed and
/// children are derived copy-on-apply. Create one per request.
#[derive(Debug, Default)]
pub struct Searcher {
    pub(super) stats: SearchStats,
}

impl Searcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Minimax value of `position` searched `depth` plies deep
    ///
    /// Returns `evaluate(position)` at depth 0 or when the game is over.
    /// Otherwise moves are ordered, each child is scored recursively with the
    /// opposite `maximizing` flag, and the scan stops once `beta <= alpha`.
    ///
    /// # Errors
    ///
    /// Propagates the first failure to derive a child position.
    pub fn minimax<P: RulesEngine>(
        &mut self,
        position: &P,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> ChessAiResult<Score> {
        self.stats.nodes += 1;

        if depth == 0 || position.is_game_over() {
            self.stats.evaluations += 1;
            return Ok(evaluate(position));
        }

        let moves = order_moves(position, position.legal_moves());

        if maximizing {
            let mut max_eval = -SEARCH_INFINITY;
            for mv in &moves {
                let child = position.apply(mv)?;
                let eval = self.minimax(&child, depth - 1, alpha, beta, false)?;
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(max_eval)
        } else {
            let mut min_eval = SEARCH_INFINITY;
            for mv in &moves {
                let child = position.apply(mv)?;
                let eval = self.minimax(&child, depth - 1, alpha, beta, true)?;
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            Ok(min_eval)
        }
    }
}
