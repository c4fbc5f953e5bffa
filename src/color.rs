use std::fmt;
use std::ops::Not;

/// Represent a color.
#[derive(PartialOrd, Ord, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;
/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::White, Color::Black];

impl Color {
    /// Convert the `Color` to a `usize` for table lookups.
    #[inline]
    pub fn to_index(&self) -> usize {
        *self as usize
    }

    /// The rank this color's pieces start on.
    #[inline]
    pub fn to_my_backrank(&self) -> i8 {
        match *self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The rank this color's pawns start on.  Pawns may advance two squares from here.
    #[inline]
    pub fn to_second_rank(&self) -> i8 {
        match *self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Which way is "forward" for my pawns, as a rank delta.
    #[inline]
    pub fn pawn_direction(&self) -> i8 {
        match *self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// +1 for white, -1 for black.  Turns a white-relative score into a score for this color.
    #[inline]
    pub fn sign(&self) -> i32 {
        match *self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::White => write!(f, "WHITE"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

#[test]
fn colors_are_opposites() {
    assert_eq!(!Color::White, Color::Black);
    assert_eq!(!Color::Black, Color::White);
    assert_eq!(Color::White.pawn_direction(), -Color::Black.pawn_direction());
    assert_eq!(
        Color::White.to_my_backrank(),
        7 - Color::Black.to_my_backrank()
    );
}
