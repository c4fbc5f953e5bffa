//! A small chess rules engine built around a fixed roster of 32 pieces.
//!
//! Each `Board` owns all 32 pieces for the whole game (captured pieces are parked at
//! `Position::OFF_BOARD`) and a mailbox mapping squares to roster indices.  Legal moves are
//! found the simple way: each pseudo-legal move is played on a clone of the board and thrown
//! away if it leaves the mover's king attacked.
//!
//! Castling, en passant, promotion and draw rules are not part of this engine.
//!
//! ```
//! use mailbox_chess::{Board, BoardStatus, ChessMove, Search};
//!
//! let mut board = Board::new_game();
//! assert_eq!(board.all_legal_moves().len(), 20);
//!
//! let e2e4: ChessMove = "e2e4".parse().expect("valid move");
//! board.apply(e2e4.get_source(), e2e4.get_dest()).expect("accepted");
//!
//! let reply = Search::new().select_move(&board, 1).expect("black can move");
//! assert!(board.legal(reply));
//! assert_eq!(board.status(), BoardStatus::Ongoing);
//! ```

mod board;
pub use crate::board::*;

mod board_builder;
pub use crate::board_builder::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod error;
pub use crate::error::*;

mod fen;

mod game;
pub use crate::game::*;

mod movegen;
pub use crate::movegen::*;

mod piece;
pub use crate::piece::*;

mod position;
pub use crate::position::*;

pub mod search;
pub use crate::search::Search;
