use crate::chess_move::ChessMove;
use crate::position::Position;
use failure::Fail;

/// Sometimes, bad stuff happens.
///
/// The first three variants are ordinary, recoverable move rejections.  The board is never
/// modified when any of them is returned.
#[derive(Clone, Debug, PartialEq, Eq, Fail)]
pub enum Error {
    /// There is no piece on the source square.
    #[fail(display = "No piece on {} to move", square)]
    EmptySource { square: Position },

    /// The piece on the source square belongs to the side that is not on move.
    #[fail(display = "The piece on {} does not belong to the side to move", square)]
    WrongSideToMove { square: Position },

    /// The destination holds a piece of the mover's own color.
    #[fail(display = "Cannot capture your own piece on {}", square)]
    FriendlyCapture { square: Position },

    /// A coordinate outside of the board was handed to `Board::apply`.
    ///
    /// Callers are expected to only pass moves drawn from `Board::legal_moves`, so this is a
    /// contract violation rather than a normal rejection.
    #[fail(display = "Position ({}, {}) is off the board", file, rank)]
    OffBoard { file: i8, rank: i8 },

    /// The move is not in the legal move set, or the game is already over.
    #[fail(display = "Illegal move: {}", chess_move)]
    IllegalMove { chess_move: ChessMove },

    /// The string is not an algebraic square such as `e4`.
    #[fail(display = "Invalid square: {}", text)]
    InvalidSquare { text: String },

    /// The string is not a coordinate move such as `e2e4`.
    #[fail(display = "Invalid move: {}", text)]
    InvalidMove { text: String },

    /// The FEN string is invalid
    #[fail(display = "Invalid FEN string: {}", fen)]
    InvalidFen { fen: String },

    /// The board created from BoardBuilder was found to be invalid
    #[fail(
        display = "The board specified did not pass sanity checks.  Does each side have exactly one king, no more pieces than a full set, and is the side not to move safe from capture?"
    )]
    InvalidBoard,
}

impl Error {
    /// Is this one of the ordinary move rejections (as opposed to a contract violation or a
    /// parse failure)?
    pub fn is_rejection(&self) -> bool {
        match *self {
            Error::EmptySource { .. }
            | Error::WrongSideToMove { .. }
            | Error::FriendlyCapture { .. } => true,
            _ => false,
        }
    }
}

#[test]
fn rejection_kinds() {
    let sq = Position::new(4, 1);
    assert!(Error::EmptySource { square: sq }.is_rejection());
    assert!(Error::WrongSideToMove { square: sq }.is_rejection());
    assert!(Error::FriendlyCapture { square: sq }.is_rejection());
    assert!(!Error::OffBoard { file: 8, rank: 0 }.is_rejection());
    assert!(!Error::InvalidBoard.is_rejection());
}

#[test]
fn error_messages() {
    let sq = Position::new(4, 1);
    assert_eq!(
        format!("{}", Error::EmptySource { square: sq }),
        "No piece on e2 to move"
    );
    assert_eq!(
        format!("{}", Error::OffBoard { file: 9, rank: -3 }),
        "Position (9, -3) is off the board"
    );
}
