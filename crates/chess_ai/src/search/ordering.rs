//! Move ordering for alpha-beta pruning
//!
//! Orders moves to maximize alpha-beta pruning efficiency by trying the most
//! forcing moves first. Ordering never drops a move.

use crate::constants::{piece_value, CHECK_ORDER_BONUS, PROMOTION_ORDER_BONUS, VICTIM_WEIGHT};
use crate::rules::{ChessMove, RulesEngine};

/// Heuristic ordering score of a single move (higher is tried first)
///
/// - capture: MVV-LVA, `10 * victim - attacker`
/// - check: [`CHECK_ORDER_BONUS`]
/// - promotion: [`PROMOTION_ORDER_BONUS`]
/// - anything else: 0
///
/// An en-passant capture has no piece on its target square and is scored by
/// the remaining rules.
pub fn move_order_score<P: RulesEngine>(position: &P, mv: &P::Move) -> i32 {
    if position.is_capture(mv) {
        let attacker = position.piece_at(mv.from_square());
        let victim = position.piece_at(mv.to_square());
        if let (Some((attacker, _)), Some((victim, _))) = (attacker, victim) {
            return piece_value(victim) * VICTIM_WEIGHT - piece_value(attacker);
        }
    }
    if position.gives_check(mv) {
        return CHECK_ORDER_BONUS;
    }
    if mv.promotion().is_some() {
        return PROMOTION_ORDER_BONUS;
    }
    0
}

/// Order moves for better alpha-beta pruning
///
/// Sort is descending and stable: equal scores keep their enumeration order.
pub fn order_moves<P: RulesEngine>(position: &P, moves: Vec<P::Move>) -> Vec<P::Move> {
    let mut scored: Vec<(i32, P::Move)> = moves
        .into_iter()
        .map(|mv| (move_order_score(position, &mv), mv))
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}
