use crate::error::Error;
use crate::position::Position;
use std::fmt;
use std::str::FromStr;

/// Represent a ChessMove in memory: where a piece comes from and where it goes.
#[derive(Clone, Copy, Eq, PartialOrd, Ord, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct ChessMove {
    source: Position,
    dest: Position,
}

impl ChessMove {
    /// Create a new chess move, given a source `Position` and a destination `Position`.
    #[inline]
    pub fn new(source: Position, dest: Position) -> ChessMove {
        ChessMove { source, dest }
    }

    /// Get the source square (square the piece is currently on).
    #[inline]
    pub fn get_source(&self) -> Position {
        self.source
    }

    /// Get the destination square (square the piece is going to).
    #[inline]
    pub fn get_dest(&self) -> Position {
        self.dest
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl FromStr for ChessMove {
    type Err = Error;

    /// Convert a coordinate string such as `e2e4` to a move.
    ///
    /// ```
    /// use mailbox_chess::{ChessMove, Position};
    ///
    /// let mv: ChessMove = "g1f3".parse().expect("Valid Move");
    /// assert_eq!(mv, ChessMove::new(Position::new(6, 0), Position::new(5, 2)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidMove {
            text: s.to_string(),
        };
        if s.len() != 4 {
            return Err(invalid());
        }
        let source = s
            .get(0..2)
            .ok_or_else(invalid)?
            .parse::<Position>()
            .map_err(|_| invalid())?;
        let dest = s
            .get(2..4)
            .ok_or_else(invalid)?
            .parse::<Position>()
            .map_err(|_| invalid())?;
        Ok(ChessMove::new(source, dest))
    }
}
