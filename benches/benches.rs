#[macro_use]
extern crate bencher;
extern crate mailbox_chess;

use bencher::Bencher;
use mailbox_chess::{Board, ChessMove, Color, Search};

const MIDDLEGAME_FEN: &str = "rn1qkb1r/pbp2ppp/1p2p3/3n4/8/2N2NP1/PP1PPPBP/R1BQ1RK1 b - - 1 7";

// This is a helper function to remove boilerplate code from all the perft_* benchmarks
fn board_perft(bench: &mut Bencher, fen: &str, depth: u64, count: u64) {
    let pos: Board = fen.parse().expect("Valid FEN");

    bench.iter(|| assert_eq!(pos.perft(depth), count));
}

fn board_legal_moves(bench: &mut Bencher) {
    let pos: Board = MIDDLEGAME_FEN.parse().expect("valid fen");
    let expected = pos.all_legal_moves().len();
    bench.iter(|| {
        assert_eq!(pos.all_legal_moves().len(), expected);
    });
}

fn board_pseudo_legal_moves(bench: &mut Bencher) {
    let pos: Board = MIDDLEGAME_FEN.parse().expect("valid fen");
    bench.iter(|| pos.pseudo_legal_moves(Color::Black));
}

fn board_is_in_check(bench: &mut Bencher) {
    let pos: Board = MIDDLEGAME_FEN.parse().expect("valid fen");
    bench.iter(|| {
        assert!(!pos.is_in_check(Color::Black));
    });
}

fn board_make_move_new(bench: &mut Bencher) {
    let pos: Board = MIDDLEGAME_FEN.parse().expect("valid fen");
    let m: ChessMove = "f8e7".parse().expect("valid move");
    bench.iter(|| {
        let after = pos.make_move_new(m).expect("accepted");
        assert_eq!(after.side_to_move(), Color::White);
    });
}

fn perft_start_3(bench: &mut Bencher) {
    board_perft(
        bench,
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
        3,
        8902,
    );
}

fn search_depth_1(bench: &mut Bencher) {
    let pos: Board = MIDDLEGAME_FEN.parse().expect("valid fen");
    bench.iter(|| Search::new().select_move(&pos, 1));
}

benchmark_group!(
    benches,
    board_legal_moves,
    board_pseudo_legal_moves,
    board_is_in_check,
    board_make_move_new,
    perft_start_3,
    search_depth_1
);
benchmark_main!(benches);
