use crate::board::Board;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use arrayvec::ArrayVec;

/// The most destinations any single piece can have.  A queen in the middle of an empty board
/// reaches 27 squares.
pub const MAX_CANDIDATES: usize = 27;

/// Storage for the pseudo-legal destinations of one piece.  Lives on the stack.
pub type CandidateList = ArrayVec<Position, MAX_CANDIDATES>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

impl Piece {
    /// Generate the pseudo-legal destinations (moves that *may* leave you in check) for this
    /// piece.
    ///
    /// This only reads the board.  A captured piece has no destinations.
    ///
    /// ```
    /// use mailbox_chess::{Board, Position};
    ///
    /// let board = Board::new_game();
    /// let knight = board.piece_on(Position::new(1, 0)).expect("knight on b1");
    /// assert_eq!(knight.generate_candidates(&board).len(), 2);
    /// ```
    pub fn generate_candidates(&self, board: &Board) -> CandidateList {
        let mut moves = CandidateList::new();
        if self.is_captured() {
            return moves;
        }
        match self.kind() {
            PieceKind::Pawn => pawn_moves(self, board, &mut moves),
            PieceKind::Knight => leaper_moves(self, board, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::Bishop => slider_moves(self, board, &BISHOP_DIRECTIONS, &mut moves),
            PieceKind::Rook => slider_moves(self, board, &ROOK_DIRECTIONS, &mut moves),
            PieceKind::Queen => {
                slider_moves(self, board, &ROOK_DIRECTIONS, &mut moves);
                slider_moves(self, board, &BISHOP_DIRECTIONS, &mut moves);
            }
            PieceKind::King => leaper_moves(self, board, &KING_OFFSETS, &mut moves),
        }
        moves
    }
}

/// Can a piece of `color` land on `dest`?  Empty squares and enemy pieces are fine.
#[inline]
fn can_land(board: &Board, color: Color, dest: Position) -> bool {
    board.color_on(dest) != Some(color)
}

fn pawn_moves(piece: &Piece, board: &Board, moves: &mut CandidateList) {
    let color = piece.color();
    let src = piece.position();

    if let Some(one) = src.forward(color) {
        if board.piece_on(one).is_none() {
            moves.push(one);
            if src.rank() == color.to_second_rank() {
                if let Some(two) = one.forward(color) {
                    if board.piece_on(two).is_none() {
                        moves.push(two);
                    }
                }
            }
        }
    }

    // captures only, no en passant
    for file_delta in [-1, 1].iter() {
        if let Some(dest) = src.step(*file_delta, color.pawn_direction()) {
            if board.color_on(dest) == Some(!color) {
                moves.push(dest);
            }
        }
    }
}

fn leaper_moves(piece: &Piece, board: &Board, offsets: &[(i8, i8)], moves: &mut CandidateList) {
    let src = piece.position();
    for &(df, dr) in offsets {
        if let Some(dest) = src.step(df, dr) {
            if can_land(board, piece.color(), dest) {
                moves.push(dest);
            }
        }
    }
}

fn slider_moves(
    piece: &Piece,
    board: &Board,
    directions: &[(i8, i8)],
    moves: &mut CandidateList,
) {
    let src = piece.position();
    for &(df, dr) in directions {
        let mut cur = src;
        while let Some(dest) = cur.step(df, dr) {
            match board.color_on(dest) {
                None => moves.push(dest),
                Some(other) => {
                    if other != piece.color() {
                        moves.push(dest);
                    }
                    break;
                }
            }
            cur = dest;
        }
    }
}
