//! Hint scan
//!
//! Scores the first few ordered moves one ply shallower than a full search
//! and keeps the best of them for the side to move.

use super::alphabeta::Searcher;
use super::ordering::order_moves;
use super::root::check_search_depth;
use crate::constants::SEARCH_INFINITY;
use crate::error::ChessAiResult;
use crate::rules::{ChessMove, RulesEngine};
use crate::types::{Hint, Side};
use tracing::{debug, error};

impl Searcher {
    /// Score the first `pool` ordered moves and return the best `count`
    ///
    /// Each child is searched at `depth - 1` with a full window. The result is
    /// sorted best-first for the side to move: descending for White,
    /// ascending for Black. Ties keep move-ordering order.
    ///
    /// `maximizing` for each child follows the child's own side to move, so
    /// a score is the value after the opponent's best reply rather than a
    /// scan in which the mover also picks the reply.
    pub fn scan_candidates<P: RulesEngine>(
        &mut self,
        position: &P,
        depth: u8,
        pool: usize,
        count: usize,
    ) -> ChessAiResult<Vec<Hint<P::Move>>> {
        check_search_depth(depth)?;

        let moves = order_moves(position, position.legal_moves());
        let mut scored = Vec::with_capacity(pool.min(moves.len()));

        for mv in moves.into_iter().take(pool) {
            let child = position.apply(&mv)?;
            // The replying side drives the child search, not the mover
            let maximizing = child.side_to_move() == Side::White;
            let score = self.minimax(
                &child,
                depth - 1,
                -SEARCH_INFINITY,
                SEARCH_INFINITY,
                maximizing,
            )?;
            scored.push(Hint { mv, score });
        }

        match position.side_to_move() {
            Side::White => scored.sort_by(|a, b| b.score.cmp(&a.score)),
            Side::Black => scored.sort_by(|a, b| a.score.cmp(&b.score)),
        }
        scored.truncate(count);
        Ok(scored)
    }
}

/// Best `count` of the first `pool` ordered moves, best first
///
/// Faults are logged and reported as an empty list.
pub fn top_candidates<P: RulesEngine>(
    position: &P,
    depth: u8,
    pool: usize,
    count: usize,
) -> Vec<Hint<P::Move>> {
    let mut searcher = Searcher::new();
    match searcher.scan_candidates(position, depth, pool, count) {
        Ok(hints) => {
            debug!(
                "[HINTS] {} candidates: {} | Nodes={}",
                hints.len(),
                hints
                    .iter()
                    .map(|hint| format!("{}={}", hint.mv.uci(), hint.score))
                    .collect::<Vec<_>>()
                    .join(", "),
                searcher.stats().nodes
            );
            hints
        }
        Err(err) => {
            error!("[HINTS] Hint scan aborted: {}", err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_HINT_COUNT, DEFAULT_HINT_POOL, MATE_SCORE};
    use crate::rules::position_from_fen;
    use shakmaty::Chess;

    #[test]
    fn test_hint_count_is_capped() {
        //! At most `count` hints, drawn from legal moves
        let pos = Chess::default();
        let hints = top_candidates(&pos, 2, DEFAULT_HINT_POOL, DEFAULT_HINT_COUNT);
        assert_eq!(hints.len(), DEFAULT_HINT_COUNT);
        let legal = RulesEngine::legal_moves(&pos);
        assert!(hints.iter().all(|hint| legal.contains(&hint.mv)));
    }

    #[test]
    fn test_white_hints_sorted_descending() {
        let pos = position_from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let hints = top_candidates(&pos, 2, DEFAULT_HINT_POOL, DEFAULT_HINT_COUNT);
        assert!(hints.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(hints[0].mv.uci(), "e4d5");
    }

    #[test]
    fn test_black_hints_sorted_ascending() {
        //! Black's best hint is the one with the lowest White-relative score
        let pos = position_from_fen("8/8/8/8/8/1k6/7q/K7 b - - 0 1").unwrap();
        let hints = top_candidates(&pos, 2, 40, DEFAULT_HINT_COUNT);
        assert!(hints.windows(2).all(|w| w[0].score <= w[1].score));
        assert_eq!(hints[0].score, -MATE_SCORE);
    }

    #[test]
    fn test_hint_scores_assume_best_reply() {
        //! Each hint is scored with the replying side choosing its own best
        //! answer, so a pawn push next to the queen is not scored as a gift
        let pos = position_from_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let hints = top_candidates(&pos, 2, 40, 40);
        assert!(!hints.is_empty());

        for hint in &hints {
            let child = pos.apply(&hint.mv).unwrap();
            let expected = Searcher::new()
                .minimax(&child, 1, -SEARCH_INFINITY, SEARCH_INFINITY, false)
                .unwrap();
            assert_eq!(hint.score, expected, "{}", hint.mv.uci());
        }
    }

    #[test]
    fn test_fewer_moves_than_requested() {
        //! A lone legal move yields a single hint
        let pos = position_from_fen("k7/8/8/8/8/8/5PPr/6RK w - - 0 1").unwrap();
        let hints = top_candidates(&pos, 2, DEFAULT_HINT_POOL, DEFAULT_HINT_COUNT);
        assert_eq!(hints.len(), 1);
    }

    #[test]
    fn test_game_over_yields_no_hints() {
        let mated =
            position_from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(top_candidates(&mated, 2, DEFAULT_HINT_POOL, DEFAULT_HINT_COUNT).is_empty());
    }

    #[test]
    fn test_invalid_depth_yields_no_hints() {
        assert!(top_candidates(&Chess::default(), 0, 6, 3).is_empty());
    }
}
