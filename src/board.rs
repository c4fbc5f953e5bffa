use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use crate::piece::{Piece, PieceKind};
use crate::position::{Position, ALL_POSITIONS, NUM_SQUARES};
use std::fmt;

/// How many pieces does every board own?  Captured pieces stay in the roster.
pub const ROSTER_SIZE: usize = 32;

/// White's half of the starting roster.  Black's half is the same list reflected onto the far
/// side of the board, and the two are interleaved white, black, white, black, ...
const STARTING_SQUARES: [(PieceKind, Position); ROSTER_SIZE / 2] = [
    (PieceKind::Pawn, Position::new(0, 1)),
    (PieceKind::Pawn, Position::new(1, 1)),
    (PieceKind::Pawn, Position::new(2, 1)),
    (PieceKind::Pawn, Position::new(3, 1)),
    (PieceKind::Pawn, Position::new(4, 1)),
    (PieceKind::Pawn, Position::new(5, 1)),
    (PieceKind::Pawn, Position::new(6, 1)),
    (PieceKind::Pawn, Position::new(7, 1)),
    (PieceKind::Rook, Position::new(0, 0)),
    (PieceKind::Rook, Position::new(7, 0)),
    (PieceKind::Knight, Position::new(1, 0)),
    (PieceKind::Knight, Position::new(6, 0)),
    (PieceKind::Bishop, Position::new(2, 0)),
    (PieceKind::Bishop, Position::new(5, 0)),
    (PieceKind::Queen, Position::new(3, 0)),
    (PieceKind::King, Position::new(4, 0)),
];

/// The kind and color that roster slot `index` always holds.
#[inline]
pub(crate) fn roster_slot(index: usize) -> (PieceKind, Color) {
    let color = if index % 2 == 0 {
        Color::White
    } else {
        Color::Black
    };
    (STARTING_SQUARES[index / 2].0, color)
}

/// A representation of a chess board.
///
/// The board owns a fixed roster of 32 pieces and a mailbox that maps every square to the
/// roster index of the piece standing on it.  Because the mailbox stores indices rather than
/// references, `clone` gives a fully independent board.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    roster: [Piece; ROSTER_SIZE],
    occupancy: [Option<u8>; NUM_SQUARES],
    side_to_move: Color,
}

/// What is the status of this game?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum BoardStatus {
    Ongoing,
    Stalemate,
    Checkmate,
}

impl fmt::Display for BoardStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            BoardStatus::Ongoing => write!(f, "ongoing"),
            BoardStatus::Stalemate => write!(f, "stalemate"),
            BoardStatus::Checkmate => write!(f, "checkmate"),
        }
    }
}

impl Board {
    /// Construct the standard starting position, white to move.
    ///
    /// ```
    /// use mailbox_chess::{Board, Color};
    ///
    /// let board = Board::new_game();
    /// assert_eq!(board.side_to_move(), Color::White);
    /// assert_eq!(board.all_legal_moves().len(), 20);
    /// ```
    pub fn new_game() -> Board {
        let mut roster =
            [Piece::new(PieceKind::Pawn, Color::White, Position::OFF_BOARD); ROSTER_SIZE];
        for (i, slot) in roster.iter_mut().enumerate() {
            let (kind, color) = roster_slot(i);
            let white_square = STARTING_SQUARES[i / 2].1;
            let square = if color == Color::White {
                white_square
            } else {
                white_square.reflect()
            };
            *slot = Piece::new(kind, color, square);
        }
        Board::from_roster(roster, Color::White)
    }

    /// Build a board around a roster, rebuilding the mailbox from the pieces' positions.
    ///
    /// The caller guarantees that no two on-board pieces share a square.
    pub(crate) fn from_roster(roster: [Piece; ROSTER_SIZE], side_to_move: Color) -> Board {
        let mut occupancy = [None; NUM_SQUARES];
        for (i, piece) in roster.iter().enumerate() {
            if let Some(index) = piece.position().to_index() {
                occupancy[index] = Some(i as u8);
            }
        }
        Board {
            roster,
            occupancy,
            side_to_move,
        }
    }

    /// Who's turn is it?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Every piece this board owns, captured or not.  Always `ROSTER_SIZE` long.
    #[inline]
    pub fn roster(&self) -> &[Piece] {
        &self.roster
    }

    /// What piece is on a particular `Position`?  Is there even one?
    ///
    /// Off-board positions (including `Position::OFF_BOARD`) never hold a piece.
    #[inline]
    pub fn piece_on(&self, position: Position) -> Option<&Piece> {
        let index = position.to_index()?;
        self.occupancy[index].map(|i| &self.roster[i as usize])
    }

    /// What color is the piece on a particular `Position`, if any?
    #[inline]
    pub fn color_on(&self, position: Position) -> Option<Color> {
        self.piece_on(position).map(|p| p.color())
    }

    /// Every piece of `color` that is still on the board, in roster order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.roster
            .iter()
            .filter(move |p| p.color() == color && !p.is_captured())
    }

    /// How many pieces have been captured so far?
    pub fn captured_count(&self) -> usize {
        self.roster.iter().filter(|p| p.is_captured()).count()
    }

    /// Where is `color`'s king?
    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces(color)
            .find(|p| p.kind() == PieceKind::King)
            .map(|p| p.position())
    }

    /// Move the piece on `from` to `to`, capturing whatever enemy piece stands there, and pass
    /// the turn to the other side.
    ///
    /// No legality filtering happens here: the move may leave the mover's own king attacked.
    /// On error the board is left exactly as it was.
    ///
    /// ```
    /// use mailbox_chess::{Board, Error, Position};
    ///
    /// let mut board = Board::new_game();
    /// let e2 = Position::new(4, 1);
    /// let e4 = Position::new(4, 3);
    /// assert_eq!(board.apply(e4, e2), Err(Error::EmptySource { square: e4 }));
    /// assert!(board.apply(e2, e4).is_ok());
    /// ```
    pub fn apply(&mut self, from: Position, to: Position) -> Result<(), Error> {
        if from != Position::OFF_BOARD && !from.in_board() {
            return Err(Error::OffBoard {
                file: from.file(),
                rank: from.rank(),
            });
        }
        let dest_index = to.to_index().ok_or(Error::OffBoard {
            file: to.file(),
            rank: to.rank(),
        })?;

        let source_index = match from.to_index() {
            Some(index) => index,
            None => return Err(Error::EmptySource { square: from }),
        };
        let mover = self.occupancy[source_index].ok_or(Error::EmptySource { square: from })?;
        if self.roster[mover as usize].color() != self.side_to_move {
            return Err(Error::WrongSideToMove { square: from });
        }

        if let Some(victim) = self.occupancy[dest_index] {
            if self.roster[victim as usize].color() == self.side_to_move {
                return Err(Error::FriendlyCapture { square: to });
            }
            self.roster[victim as usize].set_position(Position::OFF_BOARD);
        }

        self.occupancy[source_index] = None;
        self.occupancy[dest_index] = Some(mover);
        self.roster[mover as usize].set_position(to);
        self.side_to_move = !self.side_to_move;
        Ok(())
    }

    /// Make a move on a copy of this board, leaving `self` untouched.
    #[inline]
    pub fn make_move_new(&self, m: ChessMove) -> Result<Board, Error> {
        let mut result = self.clone();
        result.apply(m.get_source(), m.get_dest())?;
        Ok(result)
    }

    /// Every pseudo-legal move for `color`, in roster order.
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<ChessMove> {
        let mut moves = Vec::new();
        for piece in self.pieces(color) {
            let source = piece.position();
            moves.extend(
                piece
                    .generate_candidates(self)
                    .into_iter()
                    .map(|dest| ChessMove::new(source, dest)),
            );
        }
        moves
    }

    /// Is `color`'s king attacked by any pseudo-legal move of the other side?
    ///
    /// A side with no king on the board is never in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = match self.king_position(color) {
            Some(king) => king,
            None => return false,
        };
        self.pieces(!color)
            .any(|p| p.generate_candidates(self).contains(&king))
    }

    /// Does playing `m` as `color` leave `color`'s king safe?
    ///
    /// The move is tried on a private copy of the board with `color` to move.
    fn survives(&self, color: Color, m: ChessMove) -> bool {
        let mut probe = self.clone();
        probe.side_to_move = color;
        match probe.apply(m.get_source(), m.get_dest()) {
            Ok(()) => !probe.is_in_check(color),
            Err(_) => false,
        }
    }

    /// Every legal move for `color`: the pseudo-legal moves that do not leave `color`'s own
    /// king attacked.  Works whether or not it is `color`'s turn.
    pub fn legal_moves(&self, color: Color) -> Vec<ChessMove> {
        self.pseudo_legal_moves(color)
            .into_iter()
            .filter(|m| self.survives(color, *m))
            .collect()
    }

    /// Every legal move for the side to move.
    #[inline]
    pub fn all_legal_moves(&self) -> Vec<ChessMove> {
        self.legal_moves(self.side_to_move)
    }

    /// Is this move legal for the side to move?
    pub fn legal(&self, m: ChessMove) -> bool {
        match self.piece_on(m.get_source()) {
            Some(piece) if piece.color() == self.side_to_move => {
                piece.generate_candidates(self).contains(&m.get_dest())
                    && self.survives(self.side_to_move, m)
            }
            _ => false,
        }
    }

    /// Is the game over, and if so, how?
    ///
    /// ```
    /// use mailbox_chess::{Board, BoardStatus};
    ///
    /// let board: Board = "7k/5Q2/6K1/8/8/8/8/8 b".parse().expect("valid position");
    /// assert_eq!(board.status(), BoardStatus::Stalemate);
    /// ```
    pub fn status(&self) -> BoardStatus {
        if !self.all_legal_moves().is_empty() {
            BoardStatus::Ongoing
        } else if self.is_in_check(self.side_to_move) {
            BoardStatus::Checkmate
        } else {
            BoardStatus::Stalemate
        }
    }

    /// Sum of the material values of `color`'s pieces still on the board.
    pub fn material(&self, color: Color) -> i32 {
        self.pieces(color).map(|p| p.material_value()).sum()
    }

    /// White's material minus black's material.
    #[inline]
    pub fn material_balance(&self) -> i32 {
        self.material(Color::White) - self.material(Color::Black)
    }

    /// Count the leaves of the legal move tree `depth` plies deep.
    pub fn perft(&self, depth: u64) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.all_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        moves
            .into_iter()
            .filter_map(|m| self.make_move_new(m).ok())
            .map(|next| next.perft(depth - 1))
            .sum()
    }

    /// Does this board "make sense"?
    ///
    /// Every on-board piece must be indexed by the mailbox at its own square, every mailbox
    /// entry must point back at a piece standing on that square, and each roster slot must hold
    /// the kind and color it was created with.
    pub fn is_sane(&self) -> bool {
        for (i, piece) in self.roster.iter().enumerate() {
            if roster_slot(i) != (piece.kind(), piece.color()) {
                return false;
            }
            match piece.position().to_index() {
                Some(index) => {
                    if self.occupancy[index] != Some(i as u8) {
                        return false;
                    }
                }
                None => {
                    if piece.position() != Position::OFF_BOARD {
                        return false;
                    }
                }
            }
        }

        self.occupancy
            .iter()
            .zip(ALL_POSITIONS.iter())
            .all(|(entry, sq)| match *entry {
                Some(i) => self
                    .roster
                    .get(i as usize)
                    .map_or(false, |p| p.position() == *sq),
                None => true,
            })
    }

    /// Draw the board as 8 lines of 8 characters, rank 8 at the top and the a-file on the left.
    /// Each square is a piece glyph or a blank.
    ///
    /// ```
    /// use mailbox_chess::Board;
    ///
    /// let text = Board::new_game().render();
    /// assert_eq!(text.lines().next(), Some("♜♞♝♛♚♝♞♜"));
    /// assert_eq!(text.lines().nth(4), Some("        "));
    /// ```
    pub fn render(&self) -> String {
        let mut s = String::new();
        for rank in (0..8).rev() {
            for file in 0..8 {
                match self.piece_on(Position::new(file, rank)) {
                    Some(piece) => s.push(piece.kind().glyph(piece.color())),
                    None => s.push(' '),
                }
            }
            s.push('\n');
        }
        s
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::new_game()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let sq = Position::new(file, rank);
                match self.piece_on(sq) {
                    None => write!(f, " . ")?,
                    Some(piece) => {
                        let marker = if piece.kind() == PieceKind::King
                            && self.is_in_check(piece.color())
                        {
                            "c"
                        } else {
                            " "
                        };
                        write!(f, "{}{} ", marker, piece.kind().to_string(piece.color()))?;
                    }
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   A  B  C  D  E  F  G  H")?;
        write!(
            f,
            "{}",
            if self.side_to_move() == Color::White {
                "Whites Turn"
            } else {
                "Blacks Turn"
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ALL_COLORS;

    fn sq(s: &str) -> Position {
        s.parse().expect("valid square")
    }

    #[test]
    fn starting_layout() {
        let board = Board::new_game();
        assert!(board.is_sane());
        assert_eq!(board.roster().len(), ROSTER_SIZE);
        assert_eq!(board.captured_count(), 0);
        assert_eq!(board.king_position(Color::White), Some(sq("e1")));
        assert_eq!(board.king_position(Color::Black), Some(sq("e8")));
        assert_eq!(
            board.piece_on(sq("d8")).map(|p| (p.kind(), p.color())),
            Some((PieceKind::Queen, Color::Black))
        );
        for color in ALL_COLORS.iter() {
            assert_eq!(board.pieces(*color).count(), 16);
            assert_eq!(board.material(*color), 8 + 6 + 6 + 10 + 9 + 4);
        }
        assert_eq!(board.material_balance(), 0);
    }

    #[test]
    fn twenty_opening_moves() {
        let board = Board::new_game();
        let moves = board.all_legal_moves();
        assert_eq!(moves.len(), 20);
        let knight_moves = moves
            .iter()
            .filter(|m| board.piece_on(m.get_source()).map(|p| p.kind()) == Some(PieceKind::Knight))
            .count();
        assert_eq!(knight_moves, 4);
        assert!(!board.is_in_check(Color::White));
        assert_eq!(board.legal_moves(Color::Black).len(), 20);
    }

    #[test]
    fn apply_rejections() {
        let mut board = Board::new_game();
        let before = board.clone();

        assert_eq!(
            board.apply(sq("e4"), sq("e5")),
            Err(Error::EmptySource { square: sq("e4") })
        );
        assert_eq!(
            board.apply(sq("e7"), sq("e5")),
            Err(Error::WrongSideToMove { square: sq("e7") })
        );
        assert_eq!(
            board.apply(sq("a1"), sq("a2")),
            Err(Error::FriendlyCapture { square: sq("a2") })
        );
        assert_eq!(
            board.apply(sq("e2"), Position::new(4, 8)),
            Err(Error::OffBoard { file: 4, rank: 8 })
        );
        assert_eq!(
            board.apply(Position::new(-3, 2), sq("e4")),
            Err(Error::OffBoard { file: -3, rank: 2 })
        );
        assert_eq!(
            board.apply(Position::OFF_BOARD, sq("e4")),
            Err(Error::EmptySource {
                square: Position::OFF_BOARD
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn apply_captures() {
        let mut board = Board::new_game();
        for (from, to) in [("e2", "e4"), ("d7", "d5"), ("e4", "d5")].iter() {
            board.apply(sq(from), sq(to)).expect("valid move");
        }
        assert_eq!(board.captured_count(), 1);
        assert_eq!(board.side_to_move(), Color::Black);
        assert_eq!(board.material_balance(), 1);
        assert!(board.is_sane());
        let captured = board
            .roster()
            .iter()
            .find(|p| p.is_captured())
            .expect("one captured pawn");
        assert_eq!(captured.kind(), PieceKind::Pawn);
        assert_eq!(captured.color(), Color::Black);
        assert_eq!(captured.position(), Position::OFF_BOARD);
    }

    #[test]
    fn apply_does_not_check_legality() {
        // the knight is pinned, but apply does not care
        let mut board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w".parse().unwrap();
        assert!(!board.legal(ChessMove::new(sq("e2"), sq("c3"))));
        assert!(board.apply(sq("e2"), sq("c3")).is_ok());
        assert!(board.is_in_check(Color::White));
        assert_eq!(board.side_to_move(), Color::Black);
    }

    #[test]
    fn clones_are_independent() {
        let board = Board::new_game();
        let mut copy = board.clone();
        copy.apply(sq("g1"), sq("f3")).unwrap();
        assert_eq!(board.piece_on(sq("f3")), None);
        assert!(board.piece_on(sq("g1")).is_some());
        assert_eq!(board.side_to_move(), Color::White);
        assert_ne!(board, copy);
    }

    #[test]
    fn rook_gives_check() {
        let mut board: Board = "k7/8/8/8/8/8/7r/4K3 b".parse().unwrap();
        assert!(!board.is_in_check(Color::White));
        board.apply(sq("h2"), sq("e2")).unwrap();
        assert!(board.is_in_check(Color::White));
        assert!(!board.is_in_check(Color::Black));

        let shielded: Board = "k3r3/8/8/8/8/8/4P3/4K3 b".parse().unwrap();
        assert!(!shielded.is_in_check(Color::White));
    }

    #[test]
    fn pinned_pieces_stay_put() {
        let board: Board = "4r2k/8/8/8/8/8/4N3/4K3 w".parse().unwrap();
        let moves = board.all_legal_moves();
        assert!(!moves.is_empty());
        assert!(moves.iter().all(|m| m.get_source() == sq("e1")));
    }

    #[test]
    fn must_answer_check() {
        let board: Board = "4r2k/8/8/8/8/8/8/3RK3 w".parse().unwrap();
        assert!(board.is_in_check(Color::White));
        let mut moves = board.all_legal_moves();
        moves.sort();
        let mut expected: Vec<ChessMove> = vec!["e1d2", "e1f1", "e1f2"]
            .into_iter()
            .map(|m| m.parse().unwrap())
            .collect();
        expected.sort();
        assert_eq!(moves, expected);
    }

    #[test]
    fn terminal_states() {
        let mate: Board = "R5k1/5ppp/8/8/8/8/8/6K1 b".parse().unwrap();
        assert_eq!(mate.status(), BoardStatus::Checkmate);
        assert!(mate.all_legal_moves().is_empty());

        let stalemate: Board = "7k/5Q2/6K1/8/8/8/8/8 b".parse().unwrap();
        assert_eq!(stalemate.status(), BoardStatus::Stalemate);
        assert!(!stalemate.is_in_check(Color::Black));

        assert_eq!(Board::new_game().status(), BoardStatus::Ongoing);
    }

    #[test]
    fn perft_from_start() {
        let board = Board::new_game();
        assert_eq!(board.perft(1), 20);
        assert_eq!(board.perft(2), 400);
        assert_eq!(board.perft(3), 8902);
    }

    #[test]
    fn render_grid() {
        let text = Board::new_game().render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "♜♞♝♛♚♝♞♜");
        assert_eq!(lines[1], "♟♟♟♟♟♟♟♟");
        assert_eq!(lines[6], "♙♙♙♙♙♙♙♙");
        assert_eq!(lines[7], "♖♘♗♕♔♗♘♖");
    }

    #[test]
    fn display_marks_checked_king() {
        let board: Board = "k3r3/8/8/8/8/8/8/4K3 w".parse().unwrap();
        let text = format!("{}", board);
        assert!(text.contains("cK"));
        assert!(text.ends_with("Whites Turn"));
    }
}
