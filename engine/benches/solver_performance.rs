//! Criterion benchmarks for game solving throughput

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use zerosum_engine::{PayoffMatrix, SolveOptions, ZeroSumGame};

fn random_payoff(rng: &mut StdRng, m: usize, n: usize) -> PayoffMatrix {
    let rows: Vec<Vec<f64>> = (0..m)
        .map(|_| (0..n).map(|_| rng.gen_range(-10.0..10.0)).collect())
        .collect();
    PayoffMatrix::from_rows(rows).unwrap()
}

fn benchmark_solve_10x10(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("solve_10x10", |b| {
        b.iter_batched(
            || random_payoff(&mut rng, 10, 10),
            |payoff| {
                let game = ZeroSumGame::new(payoff).unwrap();
                black_box(game.value());
            },
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_solve_10x10_uncertified(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    c.bench_function("solve_10x10_uncertified", |b| {
        b.iter_batched(
            || random_payoff(&mut rng, 10, 10),
            |payoff| {
                let game = ZeroSumGame::with_options(payoff, SolveOptions::unchecked()).unwrap();
                black_box(game.value());
            },
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_certify_20x20(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let payoff = random_payoff(&mut rng, 20, 20);
    let game = ZeroSumGame::with_options(payoff, SolveOptions::unchecked()).unwrap();
    c.bench_function("certify_20x20", |b| {
        b.iter(|| {
            let certificate = game.certify();
            black_box(certificate.is_valid());
        })
    });
}

criterion_group!(
    benches,
    benchmark_solve_10x10,
    benchmark_solve_10x10_uncertified,
    benchmark_certify_20x20
);
criterion_main!(benches);
