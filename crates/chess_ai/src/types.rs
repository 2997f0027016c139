//! Core value types shared by the evaluator, the search and the coordinator

use serde::{Deserialize, Serialize};
use std::fmt;

/// Centipawn score, always from White's point of view
pub type Score = i32;

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// The other side
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// True for the side whose scores are maximised
    pub fn is_white(self) -> bool {
        self == Side::White
    }
}

/// Piece kinds, independent of colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// All kinds in table order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Row of this kind in the per-kind lookup tables
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// Board square
///
/// Linear index 0-63 with a1 = 0, h1 = 7, a8 = 56, h8 = 63. Construction is
/// checked, so every `Square` in circulation is on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square(u8);

impl Square {
    /// Create a square from its linear index, `None` when off the board
    pub fn new(index: u8) -> Option<Square> {
        (index < 64).then_some(Square(index))
    }

    /// Square for an index already known to be on the board; wraps otherwise
    #[inline]
    pub(crate) fn from_index_masked(index: u8) -> Square {
        Square(index & 63)
    }

    /// Create a square from file (0 = a) and rank (0 = rank 1)
    pub fn from_coords(file: u8, rank: u8) -> Option<Square> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    pub fn file(self) -> u8 {
        self.0 % 8
    }

    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Reflect across the horizontal centre line (a1 <-> a8)
    #[inline]
    pub fn flip_vertical(self) -> Square {
        Square(self.0 ^ 56)
    }

    /// Iterate a1, b1, ... h8
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.file());
        let rank = char::from(b'1' + self.rank());
        write!(f, "{file}{rank}")
    }
}

/// One scored candidate produced by the hint scan
#[derive(Debug, Clone, PartialEq)]
pub struct Hint<M> {
    pub mv: M,
    pub score: Score,
}

/// Counters collected during a single search invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited by `minimax`, root children included
    pub nodes: u64,
    /// Sibling scans abandoned because `beta <= alpha`
    pub cutoffs: u64,
    /// Leaf evaluations
    pub evaluations: u64,
}

/// The two kinds of background request the coordinator runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKind {
    Search,
    Hints,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Search => f.write_str("search"),
            TaskKind::Hints => f.write_str("hints"),
        }
    }
}
