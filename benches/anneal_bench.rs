//! Criterion benchmarks for the board primitives and the annealing loop.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use queens_anneal::anneal::{Acceptance, AnnealConfig, Annealer};
use queens_anneal::board::BoardState;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("board");
    let mut rng = StdRng::seed_from_u64(42);
    let board = BoardState::generate_random(&mut rng);

    group.bench_function("generate_random", |b| {
        b.iter(|| black_box(BoardState::generate_random(&mut rng)))
    });
    group.bench_function("cost", |b| b.iter(|| black_box(black_box(&board).cost())));
    group.bench_function("make_random_move", |b| {
        b.iter(|| black_box(board.make_random_move(&mut rng)))
    });
    group.finish();
}

fn bench_anneal(c: &mut Criterion) {
    let mut group = c.benchmark_group("anneal");
    group.sample_size(10);

    for (t0, decay) in [(100.0, 0.99), (1_000.0, 0.999), (10_000.0, 0.999)] {
        for acceptance in [Acceptance::Metropolis, Acceptance::NonWorsening] {
            let config = AnnealConfig::new(t0, decay).with_acceptance(acceptance);
            group.bench_with_input(
                BenchmarkId::new(format!("{acceptance:?}"), format!("t{t0}_d{decay}")),
                &config,
                |b, config| {
                    let mut rng = StdRng::seed_from_u64(42);
                    b.iter(|| {
                        let result = Annealer::solve(black_box(config), &mut rng);
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_board, bench_anneal);
criterion_main!(benches);
