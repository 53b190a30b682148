//! Benchmarks for the sowing rules and the reduced-depth search.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kalah_engine::{Board, Game, MoveEvaluator, MoveSelector, SearchConfig, Side};

fn bench_sow(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("board_sow", |b| {
        b.iter(|| {
            let mut board = board.clone();
            black_box(board.sow(black_box(0), Side::Player))
        })
    });
}

fn bench_board_clone(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("board_clone", |b| b.iter(|| black_box(board.clone())));
}

fn bench_evaluate(c: &mut Criterion) {
    let board = Board::new();
    let evaluator = MoveEvaluator::new(Side::Opponent, 5);
    c.bench_function("evaluate_ply_5", |b| {
        b.iter(|| black_box(evaluator.evaluate(&board, Side::Opponent, 0, 0)))
    });
}

fn bench_select_move(c: &mut Criterion) {
    let mut game = Game::new();
    game.select_house(1).unwrap();
    let selector = MoveSelector::new(SearchConfig::default().with_ply_limit(5));
    c.bench_function("select_move_ply_5", |b| {
        b.iter(|| black_box(selector.select_move(&game)))
    });
}

criterion_group!(
    benches,
    bench_sow,
    bench_board_clone,
    bench_evaluate,
    bench_select_move
);
criterion_main!(benches);
