use crate::color::Color;
use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Represent a coordinate on (or just off) the chess board.
///
/// Files and ranks count from zero, so `a1` is `(0, 0)` and `h8` is `(7, 7)`.  Any pair with a
/// component outside of `0..8` is off the board; `Position::OFF_BOARD` is the canonical such
/// value and marks a captured piece.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    file: i8,
    rank: i8,
}

/// How many files are there?
pub const NUM_FILES: usize = 8;

/// How many ranks are there?
pub const NUM_RANKS: usize = 8;

/// How many squares are there?
pub const NUM_SQUARES: usize = NUM_FILES * NUM_RANKS;

macro_rules! all_positions {
    ($($i:expr),*) => {
        [$(Position { file: ($i % 8) as i8, rank: ($i / 8) as i8 }),*]
    };
}

/// A list of every square on the chessboard, a1, b1, ..., h1, a2, ..., h8.
pub const ALL_POSITIONS: [Position; NUM_SQUARES] = all_positions!(
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37, 38, 39, 40, 41, 42, 43, 44, 45, 46, 47, 48,
    49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61, 62, 63
);

impl Position {
    /// Where captured pieces live.
    pub const OFF_BOARD: Position = Position { file: -1, rank: -1 };

    /// Make a position given a file and a rank.
    ///
    /// Nothing stops you from building an off-board position this way; check `in_board` before
    /// using it to look anything up.
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Position {
        Position { file, rank }
    }

    /// Return the file of this position.
    #[inline]
    pub fn file(&self) -> i8 {
        self.file
    }

    /// Return the rank of this position.
    #[inline]
    pub fn rank(&self) -> i8 {
        self.rank
    }

    /// Is this a real square?
    ///
    /// ```
    /// use mailbox_chess::Position;
    ///
    /// assert!(Position::new(0, 7).in_board());
    /// assert!(!Position::new(8, 0).in_board());
    /// assert!(!Position::OFF_BOARD.in_board());
    /// ```
    #[inline]
    pub fn in_board(&self) -> bool {
        0 <= self.file && self.file < 8 && 0 <= self.rank && self.rank < 8
    }

    /// Add an offset to this position.  The result may well be off the board.
    #[inline]
    pub fn offset(&self, file_delta: i8, rank_delta: i8) -> Position {
        Position::new(self.file + file_delta, self.rank + rank_delta)
    }

    /// Step by an offset, but only if the result is still on the board.
    #[inline]
    pub fn step(&self, file_delta: i8, rank_delta: i8) -> Option<Position> {
        let next = self.offset(file_delta, rank_delta);
        if next.in_board() {
            Some(next)
        } else {
            None
        }
    }

    /// If there is a square "forward", given my `Color`, go in that direction.  Otherwise, None.
    #[inline]
    pub fn forward(&self, color: Color) -> Option<Position> {
        self.step(0, color.pawn_direction())
    }

    /// Mirror this position across the middle of the board (rank -> 7 - rank).
    ///
    /// ```
    /// use mailbox_chess::Position;
    ///
    /// assert_eq!(Position::new(3, 0).reflect(), Position::new(3, 7));
    /// ```
    #[inline]
    pub fn reflect(&self) -> Position {
        Position::new(self.file, 7 - self.rank)
    }

    /// Convert this position to a `usize` for table lookup purposes, if it is on the board.
    #[inline]
    pub fn to_index(&self) -> Option<usize> {
        if self.in_board() {
            Some((self.rank as usize) * NUM_FILES + self.file as usize)
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.in_board() {
            write!(
                f,
                "{}{}",
                (b'a' + self.file as u8) as char,
                (b'1' + self.rank as u8) as char
            )
        } else {
            write!(f, "-")
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidSquare {
                text: s.to_string(),
            });
        }
        match (bytes[0], bytes[1]) {
            (f @ b'a'..=b'h', r @ b'1'..=b'8') => {
                Ok(Position::new((f - b'a') as i8, (r - b'1') as i8))
            }
            _ => Err(Error::InvalidSquare {
                text: s.to_string(),
            }),
        }
    }
}
