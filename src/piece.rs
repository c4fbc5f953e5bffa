use crate::color::Color;
use crate::position::Position;
use std::fmt;

/// The six kinds of chess piece.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// How many piece kinds are there?
pub const NUM_PIECE_KINDS: usize = 6;

/// An array representing each piece kind, in order of ascending value.
pub const ALL_PIECE_KINDS: [PieceKind; NUM_PIECE_KINDS] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
    PieceKind::King,
];

impl PieceKind {
    /// Convert the `PieceKind` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The weight this kind contributes to a side's material.
    ///
    /// The king is worth 4.  Both kings are always on the board, so they cancel out of any
    /// material balance.
    #[inline]
    pub fn material_value(&self) -> i32 {
        match *self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 4,
        }
    }

    /// How many of this kind each side starts with.
    #[inline]
    pub fn starting_count(&self) -> usize {
        match *self {
            PieceKind::Pawn => 8,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook => 2,
            PieceKind::Queen | PieceKind::King => 1,
        }
    }

    /// Convert a piece with a color to a FEN letter.  Uppercase for white, lowercase for black.
    #[inline]
    pub fn to_string(&self, color: Color) -> String {
        let piece = format!("{}", self);
        if color == Color::White {
            piece.to_uppercase()
        } else {
            piece
        }
    }

    /// Parse a FEN letter into a kind and a color.
    pub fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };
        Some((kind, color))
    }

    /// The Unicode chess glyph for this kind in the given color.
    pub fn glyph(&self, color: Color) -> char {
        match (color, *self) {
            (Color::White, PieceKind::Pawn) => '♙',
            (Color::White, PieceKind::Knight) => '♘',
            (Color::White, PieceKind::Bishop) => '♗',
            (Color::White, PieceKind::Rook) => '♖',
            (Color::White, PieceKind::Queen) => '♕',
            (Color::White, PieceKind::King) => '♔',
            (Color::Black, PieceKind::Pawn) => '♟',
            (Color::Black, PieceKind::Knight) => '♞',
            (Color::Black, PieceKind::Bishop) => '♝',
            (Color::Black, PieceKind::Rook) => '♜',
            (Color::Black, PieceKind::Queen) => '♛',
            (Color::Black, PieceKind::King) => '♚',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match *self {
                PieceKind::Pawn => "p",
                PieceKind::Knight => "n",
                PieceKind::Bishop => "b",
                PieceKind::Rook => "r",
                PieceKind::Queen => "q",
                PieceKind::King => "k",
            }
        )
    }
}

/// One member of a board's roster: a kind, a color, and where it currently stands.
///
/// A piece keeps its identity for the whole game.  Capturing it does not remove it from the
/// roster, it just moves it to `Position::OFF_BOARD`.
#[derive(PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    position: Position,
}

impl Piece {
    /// Create a new piece.
    #[inline]
    pub fn new(kind: PieceKind, color: Color, position: Position) -> Piece {
        Piece {
            kind,
            color,
            position,
        }
    }

    /// What kind of piece is this?
    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Who owns this piece?
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Where is this piece?  `Position::OFF_BOARD` once captured.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Has this piece been captured?
    #[inline]
    pub fn is_captured(&self) -> bool {
        !self.position.in_board()
    }

    /// See `PieceKind::material_value`.
    #[inline]
    pub fn material_value(&self) -> i32 {
        self.kind.material_value()
    }

    #[inline]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind.glyph(self.color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fen_letters() {
        for kind in ALL_PIECE_KINDS.iter() {
            for color in [Color::White, Color::Black].iter() {
                let letter = kind.to_string(*color).chars().next().unwrap();
                assert_eq!(PieceKind::from_char(letter), Some((*kind, *color)));
            }
        }
        assert_eq!(PieceKind::from_char('x'), None);
    }

    #[test]
    fn full_set_is_sixteen() {
        let count: usize = ALL_PIECE_KINDS.iter().map(|k| k.starting_count()).sum();
        assert_eq!(count, 16);
    }

    #[test]
    fn captured_pieces() {
        let mut p = Piece::new(PieceKind::Rook, Color::Black, Position::new(0, 7));
        assert!(!p.is_captured());
        p.set_position(Position::OFF_BOARD);
        assert!(p.is_captured());
        assert_eq!(p.material_value(), 5);
        assert_eq!(p.to_string(), "♜");
    }
}
