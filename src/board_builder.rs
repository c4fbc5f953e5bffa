use crate::board::{roster_slot, Board, ROSTER_SIZE};
use crate::color::{Color, ALL_COLORS};
use crate::error::Error;
use crate::piece::{Piece, PieceKind};
use crate::position::{Position, ALL_POSITIONS, NUM_SQUARES};

use std::convert::TryFrom;

/// Represents a chess position that has *not* been validated.
///
/// This structure is useful in the following cases:
/// * You are trying to build a chess board manually in code.
/// * You want to convert between formats like FEN.
///
/// ```
/// use mailbox_chess::{BoardBuilder, Board, Position, Color, PieceKind};
/// use std::convert::TryFrom;
///
/// let e1 = Position::new(4, 0);
/// let mut position = BoardBuilder::new();
/// position.piece(e1, PieceKind::King, Color::White);
/// position.piece(Position::new(4, 7), PieceKind::Rook, Color::Black);
/// position.piece(Position::new(0, 7), PieceKind::King, Color::Black);
///
/// assert_eq!(position.get(e1), Some((PieceKind::King, Color::White)));
///
/// // White is in check, but that's ok, it's white's turn to move.
/// assert!(Board::try_from(&position).is_ok());
///
/// // Now White is in check, but Black is ready to move.  This position is invalid.
/// position.side_to_move(Color::Black);
/// assert!(Board::try_from(&position).is_err());
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoardBuilder {
    pieces: [Option<(PieceKind, Color)>; NUM_SQUARES],
    side_to_move: Color,
}

impl BoardBuilder {
    /// Construct a new, empty, BoardBuilder with white to move.
    pub fn new() -> BoardBuilder {
        BoardBuilder {
            pieces: [None; NUM_SQUARES],
            side_to_move: Color::White,
        }
    }

    /// Set up a builder with everything pre-loaded.
    pub fn setup<'a>(
        pieces: impl IntoIterator<Item = &'a (Position, PieceKind, Color)>,
        side_to_move: Color,
    ) -> BoardBuilder {
        let mut result = BoardBuilder::new();
        result.side_to_move(side_to_move);
        for &(square, kind, color) in pieces.into_iter() {
            result.piece(square, kind, color);
        }
        result
    }

    /// Get the current player
    pub fn get_side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// What is on this square?
    pub fn get(&self, square: Position) -> Option<(PieceKind, Color)> {
        square.to_index().and_then(|i| self.pieces[i])
    }

    /// Set the side to move on the position
    ///
    /// This function can be used on self directly or in a builder pattern.
    pub fn side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    /// Set a piece on a square, overwriting whatever was there.  Off-board squares are ignored.
    pub fn piece(&mut self, square: Position, kind: PieceKind, color: Color) -> &mut Self {
        if let Some(i) = square.to_index() {
            self.pieces[i] = Some((kind, color));
        }
        self
    }

    /// Clear a square on the board.
    pub fn clear_square(&mut self, square: Position) -> &mut Self {
        if let Some(i) = square.to_index() {
            self.pieces[i] = None;
        }
        self
    }
}

impl Default for BoardBuilder {
    fn default() -> BoardBuilder {
        BoardBuilder::from(&Board::new_game())
    }
}

impl From<&Board> for BoardBuilder {
    fn from(board: &Board) -> Self {
        let mut result = BoardBuilder::new();
        result.side_to_move(board.side_to_move());
        for piece in board.roster().iter().filter(|p| !p.is_captured()) {
            result.piece(piece.position(), piece.kind(), piece.color());
        }
        result
    }
}

impl From<Board> for BoardBuilder {
    fn from(board: Board) -> Self {
        (&board).into()
    }
}

impl TryFrom<&BoardBuilder> for Board {
    type Error = Error;

    /// Assign every placed piece to a free roster slot of its kind and color.  Slots left over
    /// start the game captured.
    fn try_from(builder: &BoardBuilder) -> Result<Self, Self::Error> {
        let mut roster =
            [Piece::new(PieceKind::Pawn, Color::White, Position::OFF_BOARD); ROSTER_SIZE];
        for (i, slot) in roster.iter_mut().enumerate() {
            let (kind, color) = roster_slot(i);
            *slot = Piece::new(kind, color, Position::OFF_BOARD);
        }

        for square in ALL_POSITIONS.iter() {
            if let Some((kind, color)) = builder.get(*square) {
                let slot = roster
                    .iter_mut()
                    .find(|p| p.is_captured() && p.kind() == kind && p.color() == color)
                    .ok_or(Error::InvalidBoard)?;
                slot.set_position(*square);
            }
        }

        let board = Board::from_roster(roster, builder.side_to_move);

        for color in ALL_COLORS.iter() {
            let kings = board
                .pieces(*color)
                .filter(|p| p.kind() == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(Error::InvalidBoard);
            }
        }

        // My opponent cannot be in check when it's my move.
        if board.is_in_check(!board.side_to_move()) {
            return Err(Error::InvalidBoard);
        }

        Ok(board)
    }
}

impl TryFrom<&mut BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: &mut BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&*builder)
    }
}

impl TryFrom<BoardBuilder> for Board {
    type Error = Error;

    fn try_from(builder: BoardBuilder) -> Result<Self, Self::Error> {
        Board::try_from(&builder)
    }
}
