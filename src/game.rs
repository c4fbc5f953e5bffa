use crate::board::{Board, BoardStatus};
use crate::chess_move::ChessMove;
use crate::color::Color;
use crate::error::Error;
use std::str::FromStr;

/// What was the result of this game?
#[derive(Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum GameResult {
    WhiteCheckmates,
    BlackCheckmates,
    Stalemate,
}

/// For drivers and UIs, store a game object which holds the one authoritative `Board` and the
/// list of moves played on it.
///
/// Unlike `Board::apply`, `Game::make_move` only accepts legal moves.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    moves: Vec<ChessMove>,
}

impl Game {
    /// Create a new `Game` with the initial position.
    ///
    /// ```
    /// use mailbox_chess::{Game, Board};
    ///
    /// let game = Game::new();
    /// assert_eq!(game.current_position(), &Board::new_game());
    /// ```
    pub fn new() -> Game {
        Game::new_with_board(Board::new_game())
    }

    /// Create a new `Game` with a specific starting position.
    pub fn new_with_board(board: Board) -> Game {
        Game {
            board,
            moves: vec![],
        }
    }

    /// Get the current position on the board from the `Game` object.
    pub fn current_position(&self) -> &Board {
        &self.board
    }

    /// Every move played so far.
    pub fn moves(&self) -> &[ChessMove] {
        &self.moves
    }

    /// Who's turn is it to move?
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// What is the status of this game?
    ///
    /// ```
    /// use mailbox_chess::Game;
    ///
    /// let game = Game::new();
    /// assert!(game.result().is_none());
    /// ```
    pub fn result(&self) -> Option<GameResult> {
        match self.board.status() {
            BoardStatus::Checkmate => {
                if self.side_to_move() == Color::White {
                    Some(GameResult::BlackCheckmates)
                } else {
                    Some(GameResult::WhiteCheckmates)
                }
            }
            BoardStatus::Stalemate => Some(GameResult::Stalemate),
            BoardStatus::Ongoing => None,
        }
    }

    /// Make a chess move on the board.
    ///
    /// ```
    /// use mailbox_chess::Game;
    ///
    /// let mut game = Game::new();
    /// let first = game.current_position().all_legal_moves()[0];
    /// assert!(game.make_move(first).is_ok());
    /// assert_eq!(game.moves().len(), 1);
    /// ```
    pub fn make_move(&mut self, chess_move: ChessMove) -> Result<(), Error> {
        if self.result().is_some() || !self.board.legal(chess_move) {
            return Err(Error::IllegalMove { chess_move });
        }
        self.board
            .apply(chess_move.get_source(), chess_move.get_dest())?;
        self.moves.push(chess_move);
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Game {
        Game::new()
    }
}

impl FromStr for Game {
    type Err = Error;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        Ok(Game::new_with_board(Board::from_str(fen)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(game: &mut Game, moves: &str) {
        for m in moves.split_whitespace() {
            game.make_move(m.parse().expect("valid move"))
                .expect("legal move");
        }
    }

    #[test]
    fn fools_mate() {
        let mut game = Game::new();
        play(&mut game, "f2f3 e7e5 g2g4 d8h4");
        assert_eq!(game.result(), Some(GameResult::BlackCheckmates));
        assert_eq!(game.moves().len(), 4);

        let late: ChessMove = "a2a3".parse().unwrap();
        assert_eq!(
            game.make_move(late),
            Err(Error::IllegalMove { chess_move: late })
        );
    }

    #[test]
    fn illegal_moves_are_refused() {
        let mut game = Game::new();
        let before = game.current_position().clone();
        for m in ["e2e5", "e7e5", "a1a2", "e1e2", "b1d2"].iter() {
            let chess_move: ChessMove = m.parse().unwrap();
            assert_eq!(
                game.make_move(chess_move),
                Err(Error::IllegalMove { chess_move })
            );
        }
        assert_eq!(game.current_position(), &before);
        assert!(game.moves().is_empty());
    }

    #[test]
    fn stalemate_result() {
        let game: Game = "7k/5Q2/6K1/8/8/8/8/8 b".parse().unwrap();
        assert_eq!(game.result(), Some(GameResult::Stalemate));
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn white_mates() {
        let mut game: Game = "6k1/5ppp/8/8/8/8/8/R5K1 w".parse().unwrap();
        play(&mut game, "a1a8");
        assert_eq!(game.result(), Some(GameResult::WhiteCheckmates));
    }
}
