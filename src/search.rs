//! Depth-bounded minimax (in negamax form) scored by material balance.
//!
//! Every position the search looks at is a private clone of the board it was handed, so the
//! caller's board is never touched.

use crate::board::Board;
use crate::chess_move::ChessMove;

/// Base score for being checkmated.  The remaining search depth is added on top, so a quicker
/// mate scores further from zero.
pub const MATE_SCORE: i32 = 100_000;

/// Material balance from white's point of view.
///
/// ```
/// use mailbox_chess::{search::evaluate, Board};
///
/// assert_eq!(evaluate(&Board::new_game()), 0);
/// ```
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    board.material_balance()
}

/// Pick a move for the side to move, or `None` if it has no legal moves.
///
/// `depth` counts the plies searched *after* each candidate move, so depth 0 still scores
/// every legal move by the position it leads to.  Ties go to the move enumerated first.
pub fn select_move(board: &Board, depth: u8) -> Option<ChessMove> {
    Search::new().select_move(board, depth)
}

/// A minimax searcher.  Keeps a count of the positions it has visited.
#[derive(Clone, Debug, Default)]
pub struct Search {
    nodes: u64,
}

impl Search {
    /// Create a new `Search` with a zeroed node counter.
    pub fn new() -> Search {
        Search { nodes: 0 }
    }

    /// How many positions have been scored since this `Search` was created?
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// See the free function `select_move`.
    ///
    /// ```
    /// use mailbox_chess::{Board, ChessMove, Search};
    ///
    /// // The rook on a1 can take the undefended queen on a8.
    /// let board: Board = "q3k3/8/8/8/8/8/8/R3K3 w".parse().expect("valid position");
    /// let mut search = Search::new();
    /// assert_eq!(search.select_move(&board, 0), "a1a8".parse::<ChessMove>().ok());
    /// ```
    pub fn select_move(&mut self, board: &Board, depth: u8) -> Option<ChessMove> {
        self.best_moves(board, depth)
            .and_then(|(_, moves)| moves.first().copied())
    }

    /// Score every legal root move and return the best score (from the side to move's point of
    /// view) together with every move that reaches it, in enumeration order.
    pub fn best_moves(&mut self, board: &Board, depth: u8) -> Option<(i32, Vec<ChessMove>)> {
        let mut best_score = i32::MIN;
        let mut best = Vec::new();

        for m in board.all_legal_moves() {
            let child = match board.make_move_new(m) {
                Ok(child) => child,
                Err(_) => continue,
            };
            let score = -self.negamax(&child, depth);
            if score > best_score {
                best_score = score;
                best.clear();
                best.push(m);
            } else if score == best_score {
                best.push(m);
            }
        }

        if best.is_empty() {
            None
        } else {
            Some((best_score, best))
        }
    }

    /// Score `board` for the side to move.
    fn negamax(&mut self, board: &Board, depth: u8) -> i32 {
        self.nodes += 1;

        let color = board.side_to_move();
        let moves = board.all_legal_moves();
        if moves.is_empty() {
            return if board.is_in_check(color) {
                -(MATE_SCORE + depth as i32)
            } else {
                0
            };
        }

        if depth == 0 {
            return evaluate(board) * color.sign();
        }

        let mut best_score = -(MATE_SCORE * 2);
        for m in moves {
            if let Ok(child) = board.make_move_new(m) {
                let score = -self.negamax(&child, depth - 1);
                if score > best_score {
                    best_score = score;
                }
            }
        }
        best_score
    }
}
