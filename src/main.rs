use mailbox_chess::{Game, GameResult, Search};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plies searched after each candidate move.
const SEARCH_DEPTH: u8 = 1;

/// Give up after this many plies; nothing else ends a game without mate or stalemate.
const MAX_PLIES: usize = 1000;

fn main() {
    let mut game = Game::new();
    let mut search = Search::new();
    let mut rng = SmallRng::from_entropy();

    println!("{}", game.current_position().render());
    for _ in 0..=MAX_PLIES {
        match game.result() {
            Some(GameResult::Stalemate) => {
                println!("STALEMATE!!!");
                break;
            }
            Some(_) => {
                println!("CHECKMATE!!!");
                break;
            }
            None => {}
        }

        // equally scored moves are picked at random for some variety between games
        let choice = search
            .best_moves(game.current_position(), SEARCH_DEPTH)
            .and_then(|(_, moves)| moves.choose(&mut rng).copied());
        let chess_move = match choice {
            Some(m) => m,
            None => break,
        };

        println!(
            "{} PLAY:{}->{}",
            game.side_to_move(),
            chess_move.get_source(),
            chess_move.get_dest()
        );
        if let Err(e) = game.make_move(chess_move) {
            eprintln!("{}", e);
            break;
        }
        println!("{}", game.current_position().render());
    }
    println!("{} positions searched", search.nodes());
}
