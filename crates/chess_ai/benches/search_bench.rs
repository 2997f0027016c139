//! Search Benchmarks
//!
//! Performance benchmarks for the evaluator, move ordering and a fixed-depth
//! search using Criterion.

use chess_ai::{
    evaluate, find_best_move, order_moves, position_from_fen, top_candidates, RulesEngine,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shakmaty::Chess;

const MIDDLEGAME: &str = "r1bq1rk1/ppp2ppp/2np1n2/2b1p3/2B1P3/2NP1N2/PPP2PPP/R1BQ1RK1 w - - 0 8";

fn middlegame() -> Chess {
    position_from_fen(MIDDLEGAME).unwrap_or_default()
}

fn bench_evaluate_starting(c: &mut Criterion) {
    let pos = Chess::default();

    c.bench_function("evaluate_starting_position", |b| {
        b.iter(|| black_box(evaluate(&pos)))
    });
}

fn bench_evaluate_middlegame(c: &mut Criterion) {
    let pos = middlegame();

    c.bench_function("evaluate_middlegame", |b| b.iter(|| black_box(evaluate(&pos))));
}

fn bench_order_moves_middlegame(c: &mut Criterion) {
    let pos = middlegame();

    c.bench_function("order_moves_middlegame", |b| {
        b.iter(|| black_box(order_moves(&pos, RulesEngine::legal_moves(&pos))))
    });
}

fn bench_search_depth_three(c: &mut Criterion) {
    let pos = middlegame();
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    group.bench_function("find_best_move_depth_3", |b| {
        b.iter(|| black_box(find_best_move(&pos, 3)))
    });
    group.bench_function("top_candidates_depth_3", |b| {
        b.iter(|| black_box(top_candidates(&pos, 3, 6, 3)))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_evaluate_starting,
    bench_evaluate_middlegame,
    bench_order_moves_middlegame,
    bench_search_depth_three,
);
criterion_main!(benches);
