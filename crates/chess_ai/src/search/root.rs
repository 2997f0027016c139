//! Top-level move selection
//!
//! [`analyse`] runs the root alpha-beta scan and reports the chosen move with
//! its score and counters. [`find_best_move`] is the public boundary: it logs
//! and swallows faults so callers only ever see "a move" or "no move".

use super::alphabeta::Searcher;
use super::ordering::order_moves;
use crate::constants::{MIN_SEARCH_DEPTH, SEARCH_INFINITY};
use crate::error::{ChessAiError, ChessAiResult};
use crate::rules::{ChessMove, RulesEngine};
use crate::types::{Score, SearchStats, Side};
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

/// Result of one root search
#[derive(Debug, Clone)]
pub struct SearchOutcome<M> {
    /// `None` only when the side to move has no legal moves
    pub best_move: Option<M>,
    /// Minimax score of `best_move`; `None` when no search was needed
    pub score: Option<Score>,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

/// A search needs at least one ply; any deeper limit is a settings concern
pub(crate) fn check_search_depth(depth: u8) -> ChessAiResult<()> {
    if depth >= MIN_SEARCH_DEPTH {
        Ok(())
    } else {
        Err(ChessAiError::InvalidDepth {
            depth,
            min: MIN_SEARCH_DEPTH,
            max: u8::MAX,
        })
    }
}

impl Searcher {
    /// Root alpha-beta scan
    ///
    /// White keeps the first move with a strictly greater score, Black the
    /// first with a strictly lower one. The window narrows after every root
    /// move and the scan stops once `beta <= alpha`.
    ///
    /// # Errors
    ///
    /// [`ChessAiError::InvalidDepth`] for depth 0, or the first fault raised
    /// while deriving a child position.
    pub fn search_root<P: RulesEngine>(
        &mut self,
        position: &P,
        depth: u8,
    ) -> ChessAiResult<Option<(P::Move, Score)>> {
        check_search_depth(depth)?;
        let moves = order_moves(position, position.legal_moves());
        let maximizing = position.side_to_move() == Side::White;

        let mut alpha = -SEARCH_INFINITY;
        let mut beta = SEARCH_INFINITY;
        let mut best: Option<(P::Move, Score)> = None;

        for mv in moves {
            let child = position.apply(&mv)?;
            let eval = self.minimax(&child, depth - 1, alpha, beta, !maximizing)?;

            let improves = match &best {
                None => true,
                Some((_, best_eval)) if maximizing => eval > *best_eval,
                Some((_, best_eval)) => eval < *best_eval,
            };
            if improves {
                best = Some((mv, eval));
            }

            if maximizing {
                alpha = alpha.max(eval);
            } else {
                beta = beta.min(eval);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        Ok(best)
    }
}

/// Choose a move for the side to move, reporting score and counters
///
/// - no legal moves: `best_move` is `None`
/// - exactly one legal move: returned as-is, nothing is searched or applied
///
/// # Errors
///
/// [`ChessAiError::InvalidDepth`] for depth 0, or the first fault raised while
/// deriving a child position.
pub fn analyse<P: RulesEngine>(position: &P, depth: u8) -> ChessAiResult<SearchOutcome<P::Move>> {
    check_search_depth(depth)?;
    let start = Instant::now();

    let mut legal = position.legal_moves();
    if legal.len() <= 1 {
        return Ok(SearchOutcome {
            best_move: legal.pop(),
            score: None,
            stats: SearchStats::default(),
            elapsed: start.elapsed(),
        });
    }

    let mut searcher = Searcher::new();
    let best = searcher.search_root(position, depth)?;
    let (best_move, score) = match best {
        Some((mv, score)) => (Some(mv), Some(score)),
        None => (None, None),
    };

    Ok(SearchOutcome {
        best_move,
        score,
        stats: searcher.stats(),
        elapsed: start.elapsed(),
    })
}

/// Best move for the side to move at a fixed depth
///
/// Returns `None` when there are no legal moves, and also when the search
/// fails; the failure is logged and the caller's position is untouched.
pub fn find_best_move<P: RulesEngine>(position: &P, depth: u8) -> Option<P::Move> {
    debug!("[SEARCH] Starting depth {} search", depth);

    match analyse(position, depth) {
        Ok(outcome) => {
            match (&outcome.best_move, outcome.score) {
                (Some(mv), Some(score)) => info!(
                    "[SEARCH] Best Move: {} | Score={} | Depth={} | Nodes={} | Cutoffs={} | Time={:.2}s",
                    mv.uci(),
                    score,
                    depth,
                    outcome.stats.nodes,
                    outcome.stats.cutoffs,
                    outcome.elapsed.as_secs_f32()
                ),
                (Some(mv), None) => info!("[SEARCH] Only move: {}", mv.uci()),
                (None, _) => debug!("[SEARCH] No legal moves"),
            }
            outcome.best_move
        }
        Err(err) => {
            error!("[SEARCH] Search aborted: {}", err);
            None
        }
    }
}
