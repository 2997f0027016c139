//! Standard chess rules backed by `shakmaty`
//!
//! `shakmaty::Chess` is small and `Clone`, so copy-on-apply is the natural fit:
//! every successor is a fresh value and the parent is never touched.

use super::{ChessMove, RulesEngine};
use crate::error::{ChessAiError, ChessAiResult};
use crate::types::{PieceKind, Side, Square};
use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{CastlingMode, Chess, Color, EnPassantMode, Move, Position, Role};

/// FEN of the standard starting position
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmove clock at which the 75-move rule ends the game
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Parse a FEN string into a playable position
///
/// # Errors
///
/// Returns [`ChessAiError::InvalidFen`] when the text is malformed or
/// describes an impossible position.
pub fn position_from_fen(fen: &str) -> ChessAiResult<Chess> {
    let parsed: Fen = fen.trim().parse().map_err(|err| ChessAiError::InvalidFen {
        fen: fen.to_string(),
        message: format!("{err}"),
    })?;

    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|err| ChessAiError::InvalidFen {
            fen: fen.to_string(),
            message: format!("{err}"),
        })
}

#[inline]
fn to_core_square(square: shakmaty::Square) -> Square {
    Square::from_index_masked(u8::from(square))
}

#[inline]
fn to_shakmaty_square(square: Square) -> shakmaty::Square {
    shakmaty::Square::new(square.index() as u32)
}

fn kind_from_role(role: Role) -> PieceKind {
    match role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    }
}

fn side_from_color(color: Color) -> Side {
    match color {
        Color::White => Side::White,
        Color::Black => Side::Black,
    }
}

impl ChessMove for Move {
    fn from_square(&self) -> Square {
        to_core_square(self.from().unwrap_or_else(|| self.to()))
    }

    fn to_square(&self) -> Square {
        match self {
            // shakmaty encodes castling as king-takes-rook; report the king's
            // destination instead
            Move::Castle { king, rook } => {
                let king = to_core_square(*king);
                let file = if to_core_square(*rook).file() > king.file() { 6 } else { 2 };
                Square::from_coords(file, king.rank()).unwrap_or(king)
            }
            _ => to_core_square(self.to()),
        }
    }

    fn promotion(&self) -> Option<PieceKind> {
        Move::promotion(self).map(kind_from_role)
    }

    fn uci(&self) -> String {
        self.to_uci(CastlingMode::Standard).to_string()
    }
}

impl RulesEngine for Chess {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        Position::legal_moves(self).to_vec()
    }

    fn is_capture(&self, mv: &Move) -> bool {
        mv.is_capture()
    }

    fn gives_check(&self, mv: &Move) -> bool {
        let mut after = self.clone();
        after.play_unchecked(mv);
        after.is_check()
    }

    fn apply(&self, mv: &Move) -> ChessAiResult<Self> {
        let mut after = self.clone();
        after.play_unchecked(mv);
        Ok(after)
    }

    fn piece_at(&self, square: Square) -> Option<(PieceKind, Side)> {
        self.board()
            .piece_at(to_shakmaty_square(square))
            .map(|piece| (kind_from_role(piece.role), side_from_color(piece.color)))
    }

    fn is_checkmate(&self) -> bool {
        Position::is_checkmate(self)
    }

    fn is_stalemate(&self) -> bool {
        Position::is_stalemate(self)
    }

    fn is_insufficient_material(&self) -> bool {
        Position::is_insufficient_material(self)
    }

    fn is_game_over(&self) -> bool {
        Position::is_game_over(self) || self.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES
    }

    fn side_to_move(&self) -> Side {
        side_from_color(self.turn())
    }

    fn canonical_serialization(&self) -> String {
        Fen::from_setup(self.clone().into_setup(EnPassantMode::Legal)).to_string()
    }

    fn parse_move(&self, uci: &str) -> Option<Move> {
        let parsed: UciMove = uci.trim().parse().ok()?;
        parsed.to_move(self).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess(fen: &str) -> Chess {
        position_from_fen(fen).unwrap()
    }

    #[test]
    fn test_start_position_round_trips_fen() {
        //! The canonical key of the start position is the standard FEN
        let pos = Chess::default();
        assert_eq!(pos.canonical_serialization(), START_FEN);
        assert_eq!(RulesEngine::legal_moves(&pos).len(), 20);
    }

    #[test]
    fn test_invalid_fen_is_reported() {
        //! Garbage and impossible positions both surface as InvalidFen
        assert!(matches!(
            position_from_fen("not a fen"),
            Err(ChessAiError::InvalidFen { .. })
        ));
        // No kings at all
        assert!(matches!(
            position_from_fen("8/8/8/8/8/8/8/8 w - - 0 1"),
            Err(ChessAiError::InvalidFen { .. })
        ));
    }

    #[test]
    fn test_apply_leaves_parent_untouched() {
        //! Copy-on-apply never mutates the parent position
        let pos = Chess::default();
        let before = pos.canonical_serialization();
        let mv = pos.parse_move("e2e4").unwrap();

        let after = pos.apply(&mv).unwrap();

        assert_eq!(pos.canonical_serialization(), before);
        assert_eq!(
            after.canonical_serialization(),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"
        );
    }

    #[test]
    fn test_parse_move_rejects_illegal() {
        //! Well-formed but illegal coordinates yield None
        let pos = Chess::default();
        assert!(pos.parse_move("e2e5").is_none());
        assert!(pos.parse_move("zz99").is_none());
        assert!(pos.parse_move("g1f3").is_some());
    }

    #[test]
    fn test_piece_at_maps_kind_and_side() {
        let pos = Chess::default();
        assert_eq!(
            pos.piece_at(Square::new(4).unwrap()),
            Some((PieceKind::King, Side::White))
        );
        assert_eq!(
            pos.piece_at(Square::new(59).unwrap()),
            Some((PieceKind::Queen, Side::Black))
        );
        assert_eq!(pos.piece_at(Square::new(28).unwrap()), None);
    }

    #[test]
    fn test_castling_reports_king_destination() {
        //! Castling moves expose the king's target square and standard UCI
        let pos = chess("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let short = pos.parse_move("e1g1").unwrap();
        let long = pos.parse_move("e1c1").unwrap();

        assert_eq!(short.from_square().to_string(), "e1");
        assert_eq!(short.to_square().to_string(), "g1");
        assert_eq!(long.to_square().to_string(), "c1");
        assert_eq!(short.uci(), "e1g1");
        assert!(!pos.is_capture(&short));
    }

    #[test]
    fn test_promotion_and_check_detection() {
        //! a7a8q both promotes and checks the king on e8
        let pos = chess("4k3/P7/8/8/8/8/7p/4K3 w - - 0 1");
        let queen = pos.parse_move("a7a8q").unwrap();
        let knight = pos.parse_move("a7a8n").unwrap();

        assert_eq!(ChessMove::promotion(&queen), Some(PieceKind::Queen));
        assert!(pos.gives_check(&queen));
        assert!(!pos.gives_check(&knight));
        assert_eq!(queen.uci(), "a7a8q");
    }

    #[test]
    fn test_terminal_state_queries() {
        //! Checkmate, stalemate and dead draws are all game over
        let mated = chess("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
        assert!(RulesEngine::is_checkmate(&mated));
        assert!(RulesEngine::is_game_over(&mated));

        let stalemate = chess("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        assert!(RulesEngine::is_stalemate(&stalemate));
        assert!(RulesEngine::is_game_over(&stalemate));

        let bare = chess("k7/8/8/8/8/8/8/K6N w - - 0 1");
        assert!(RulesEngine::is_insufficient_material(&bare));
        assert!(RulesEngine::is_game_over(&bare));

        assert!(!RulesEngine::is_game_over(&Chess::default()));
    }

    #[test]
    fn test_seventy_five_move_rule_ends_game() {
        //! A halfmove clock of 150 is terminal even with moves available
        let pos = chess("4k3/8/8/8/8/8/3R4/4K3 w - - 150 120");
        assert!(!RulesEngine::legal_moves(&pos).is_empty());
        assert!(RulesEngine::is_game_over(&pos));
    }

    #[test]
    fn test_en_passant_key_only_when_legal() {
        //! 1.e4 leaves no capturable pawn, so the key carries no ep square
        let pos = Chess::default();
        let after = pos.apply(&pos.parse_move("e2e4").unwrap()).unwrap();
        assert!(after.canonical_serialization().contains(" b KQkq - 0 1"));
    }
}
