use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linsys::prelude::*;
use pprof::criterion::{Output, PProfProfiler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_test_code::*;

/// the number of unknowns of the benchmarked systems
const SIZES: [usize; 4] = [4, 8, 16, 32];
/// larger systems overflow the `i64` numerators and denominators, which is
/// reported as an unsupported operation
const MAX_RATIONAL_SIZE: usize = 16;

fn bench_gauss_uniquely_solvable(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gauss Elimination (unique solution)");
    let mut rng = StdRng::seed_from_u64(2314093240213841123);

    for size in SIZES {
        // small entries keep the rational numbers from overflowing
        let known = random_system_with_known_solution(&mut rng, size, 1);

        let float_system = known.float_system();
        group.bench_with_input(BenchmarkId::new("f64", size), &float_system, |bencher, system| {
            bencher.iter_batched(
                || GaussSolver::new(system.clone()),
                |mut solver| solver.solve().expect("float solving must not fail"),
                criterion::BatchSize::SmallInput,
            )
        });

        if size > MAX_RATIONAL_SIZE {
            continue;
        }
        let rational_system = known.rational_system();
        group.bench_with_input(
            BenchmarkId::new("Ratio<i64>", size),
            &rational_system,
            |bencher, system| {
                bencher.iter_batched(
                    || GaussSolver::new(system.clone()),
                    |mut solver| solver.solve().expect("rational solving must not fail"),
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }
    group.finish();
}

fn bench_gauss_degenerate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Gauss Elimination (degenerate)");
    let mut rng = StdRng::seed_from_u64(8472910573);

    for size in SIZES.into_iter().filter(|size| *size <= MAX_RATIONAL_SIZE) {
        let known = random_system_with_known_solution(&mut rng, size, 1);
        let mut rows = known.rows.clone();
        rows[size - 1] = rows[0].clone();
        let system = rational_system(&rows);

        group.bench_with_input(BenchmarkId::new("infinite", size), &system, |bencher, system| {
            bencher.iter_batched(
                || GaussSolver::new(system.clone()),
                |mut solver| solver.solve().expect("rational solving must not fail"),
                criterion::BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = bench_gauss_uniquely_solvable, bench_gauss_degenerate);
criterion_main!(benches);
