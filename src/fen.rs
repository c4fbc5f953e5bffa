use crate::board::Board;
use crate::board_builder::BoardBuilder;
use crate::color::Color;
use crate::error::Error;
use crate::piece::PieceKind;
use crate::position::Position;

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Write the position as FEN.  Castling and en passant do not exist here, so those fields are
/// always `-`.
impl fmt::Display for BoardBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8).rev() {
            let mut count = 0;
            for file in 0..8 {
                match self.get(Position::new(file, rank)) {
                    Some((kind, color)) => {
                        if count != 0 {
                            write!(f, "{}", count)?;
                            count = 0;
                        }
                        write!(f, "{}", kind.to_string(color))?;
                    }
                    None => count += 1,
                }
            }
            if count != 0 {
                write!(f, "{}", count)?;
            }
            if rank != 0 {
                write!(f, "/")?;
            }
        }

        if self.get_side_to_move() == Color::White {
            write!(f, " w")?;
        } else {
            write!(f, " b")?;
        }

        write!(f, " - - 0 1")
    }
}

impl FromStr for BoardBuilder {
    type Err = Error;

    /// Read the piece placement and side to move of a FEN string.  Any later fields are
    /// accepted and ignored.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFen {
            fen: value.to_string(),
        };

        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(invalid());
        }

        let mut fen = BoardBuilder::new();
        let mut rank: i8 = 7;
        let mut file: i8 = 0;

        for x in tokens[0].chars() {
            match x {
                '/' => {
                    if file != 8 || rank == 0 {
                        return Err(invalid());
                    }
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += (x as u8 - b'0') as i8;
                    if file > 8 {
                        return Err(invalid());
                    }
                }
                _ => {
                    let (kind, color) = PieceKind::from_char(x).ok_or_else(invalid)?;
                    if file >= 8 {
                        return Err(invalid());
                    }
                    fen.piece(Position::new(file, rank), kind, color);
                    file += 1;
                }
            }
        }
        if rank != 0 || file != 8 {
            return Err(invalid());
        }

        match tokens[1] {
            "w" | "W" => fen.side_to_move(Color::White),
            "b" | "B" => fen.side_to_move(Color::Black),
            _ => return Err(invalid()),
        };

        Ok(fen)
    }
}

impl FromStr for Board {
    type Err = Error;

    /// ```
    /// use mailbox_chess::Board;
    ///
    /// let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
    ///     .parse()
    ///     .expect("Valid FEN");
    /// assert_eq!(board, Board::new_game());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Board::try_from(&BoardBuilder::from_str(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INITIAL_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn check_initial_position() {
        let fen: BoardBuilder = Board::default().into();
        assert_eq!(format!("{}", fen), INITIAL_FEN);
        assert_eq!(format!("{}", BoardBuilder::default()), INITIAL_FEN);
    }

    #[test]
    fn castling_fields_are_ignored() {
        let with: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e3 0 1"
            .parse()
            .unwrap();
        let without: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w".parse().unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn round_trip_after_moves() {
        let mut board = Board::new_game();
        board
            .apply("e2".parse().unwrap(), "e4".parse().unwrap())
            .unwrap();
        let text = BoardBuilder::from(&board).to_string();
        assert_eq!(
            text,
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b - - 0 1"
        );
        let reparsed: Board = text.parse().unwrap();
        assert_eq!(BoardBuilder::from(&reparsed), BoardBuilder::from(&board));
    }

    #[test]
    fn invalid_fens() {
        assert!("".parse::<BoardBuilder>().is_err());
        assert!("8/8/8/8/8/8/8/8".parse::<BoardBuilder>().is_err());
        assert!("8/8/8/8/8/8/8/8 x".parse::<BoardBuilder>().is_err());
        assert!("9/8/8/8/8/8/8/8 w".parse::<BoardBuilder>().is_err());
        assert!("8/8/8/8/8/8/8 w".parse::<BoardBuilder>().is_err());
        assert!("8/8/8/8/8/8/8/8/8 w".parse::<BoardBuilder>().is_err());
        assert!("ppppppppp/8/8/8/8/8/8/8 w".parse::<BoardBuilder>().is_err());
        assert!("xxxxxxxx/8/8/8/8/8/8/8 w".parse::<BoardBuilder>().is_err());
        // well formed, but nobody has a king
        assert_eq!(
            "8/8/8/8/8/8/8/8 w".parse::<Board>(),
            Err(Error::InvalidBoard)
        );
    }
}
