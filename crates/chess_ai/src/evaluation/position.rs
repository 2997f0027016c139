//! Full position evaluation
//!
//! Terminal states first, then material plus piece-square bonuses in a single
//! pass over the 64 squares.

use super::pst::pst_value;
use crate::constants::{piece_value, DRAW_SCORE, MATE_SCORE, MATE_THRESHOLD};
use crate::rules::RulesEngine;
use crate::types::{Score, Side, Square};

/// Evaluate a position from White's point of view
///
/// - side to move checkmated: `-MATE_SCORE` for White, `+MATE_SCORE` for Black
/// - stalemate or insufficient material: `DRAW_SCORE`
/// - otherwise the material + positional balance
pub fn evaluate<P: RulesEngine>(position: &P) -> Score {
    if position.is_checkmate() {
        return match position.side_to_move() {
            Side::White => -MATE_SCORE,
            Side::Black => MATE_SCORE,
        };
    }
    if position.is_stalemate() || position.is_insufficient_material() {
        return DRAW_SCORE;
    }

    Square::all()
        .filter_map(|square| {
            position.piece_at(square).map(|(kind, side)| {
                let value = piece_value(kind) + pst_value(kind, side, square);
                match side {
                    Side::White => value,
                    Side::Black => -value,
                }
            })
        })
        .sum()
}

/// True when a score reports a forced mate for either side
#[inline]
pub fn is_mate_score(score: Score) -> bool {
    score.abs() >= MATE_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::position_from_fen;
    use shakmaty::Chess;

    fn eval_fen(fen: &str) -> Score {
        evaluate(&position_from_fen(fen).unwrap())
    }

    #[test]
    fn test_starting_position_is_balanced() {
        //! The symmetric start position scores exactly zero
        let score = evaluate(&Chess::default());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_white_piece_advantage() {
        //! Black missing the g8 knight favours White by more than 250
        let score = eval_fen("rnbqkb1r/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(score > 250, "expected White advantage, got {score}");
    }

    #[test]
    fn test_black_piece_advantage() {
        //! White missing the g1 knight favours Black by more than 250
        let score = eval_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKB1R w KQkq - 0 1");
        assert!(score < -250, "expected Black advantage, got {score}");
    }

    #[test]
    fn test_missing_bishop_is_mirror_image() {
        //! Removing the same piece from either side gives opposite scores
        let white_up = eval_fen("rn1qkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        let black_up = eval_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RN1QKBNR w KQkq - 0 1");
        assert_eq!(white_up, -black_up);
        assert!(white_up > 250);
    }

    #[test]
    fn test_checkmate_black_wins() {
        //! Fool's mate: White to move and mated
        let score = eval_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert_eq!(score, -MATE_SCORE);
        assert!(is_mate_score(score));
    }

    #[test]
    fn test_checkmate_white_wins() {
        //! Scholar's mate: Black to move and mated
        let score =
            eval_fen("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 4");
        assert_eq!(score, MATE_SCORE);
    }

    #[test]
    fn test_stalemate_is_zero() {
        //! Queen ahead but stalemated scores as a draw
        let score = eval_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert_eq!(score, DRAW_SCORE);
    }

    #[test]
    fn test_insufficient_material_is_zero() {
        //! King and knight against king is a dead draw despite the extra piece
        let score = eval_fen("k7/8/8/8/8/8/8/K6N w - - 0 1");
        assert_eq!(score, DRAW_SCORE);
    }

    #[test]
    fn test_only_kings_left() {
        //! Bare kings are insufficient material
        assert_eq!(eval_fen("k7/8/8/8/8/8/8/K7 w - - 0 1"), DRAW_SCORE);
    }

    #[test]
    fn test_side_to_move_does_not_flip_sign() {
        //! The same placement scores identically whoever is to move
        let white = eval_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
        let black = eval_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
        assert_eq!(white, black);
        assert!(white > 0);
    }

    #[test]
    fn test_mate_score_threshold() {
        assert!(is_mate_score(MATE_SCORE));
        assert!(is_mate_score(-MATE_SCORE));
        assert!(is_mate_score(MATE_THRESHOLD));
        assert!(!is_mate_score(MATE_THRESHOLD - 1));
        assert!(!is_mate_score(0));
    }
}
