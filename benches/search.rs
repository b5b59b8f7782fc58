//! Timing of move generation and of the computer's search

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use connect4_minimax::evaluation::evaluate;
use connect4_minimax::position::Position;
use connect4_minimax::search::Searcher;
use connect4_minimax::DEFAULT_DEPTH;

fn midgame() -> Position {
    Position::from_moves("3243342").unwrap_or_default()
}

fn bench_children(c: &mut Criterion) {
    c.bench_function("position/children_midgame", |b| {
        b.iter(|| black_box(midgame().children()))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let position = midgame();
    c.bench_function("evaluation/midgame", |b| {
        b.iter(|| black_box(evaluate(black_box(&position))))
    });
}

fn bench_search(c: &mut Criterion) {
    let position = Position::from_moves("3").unwrap_or_default();

    let mut group = c.benchmark_group("search");
    group.sample_size(10);
    group.bench_function("sequential_default_depth", |b| {
        b.iter_batched(
            || Searcher::new(DEFAULT_DEPTH),
            |mut searcher| black_box(searcher.search(&position)),
            BatchSize::SmallInput,
        )
    });
    group.bench_function("parallel_default_depth", |b| {
        b.iter_batched(
            || Searcher::new(DEFAULT_DEPTH),
            |mut searcher| black_box(searcher.search_parallel(&position)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_children, bench_evaluate, bench_search);
criterion_main!(benches);
