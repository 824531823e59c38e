use change_maker::{min_coins_for_change, ChangeSolver};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const EURO_CENTS: [i64; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

fn bench_minimal_change(c: &mut Criterion) {
    let solver = ChangeSolver::new(&EURO_CENTS).unwrap();
    let mut group = c.benchmark_group("compute_minimal_change");

    for total in [999_i64, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| solver.compute_minimal_change(black_box(total)))
        });
    }
    group.finish();
}

fn bench_unrepresentable(c: &mut Criterion) {
    // Odd slots never fill, so the whole table is swept for nothing.
    let solver = ChangeSolver::new(&[2, 4, 8, 16]).unwrap();

    c.bench_function("unrepresentable_odd_total", |b| {
        b.iter(|| solver.compute_minimal_change(black_box(10_001)))
    });
}

fn bench_coin_count(c: &mut Criterion) {
    c.bench_function("min_coins_for_change", |b| {
        b.iter(|| min_coins_for_change(black_box(&EURO_CENTS), black_box(100_000)))
    });
}

criterion_group!(
    benches,
    bench_minimal_change,
    bench_unrepresentable,
    bench_coin_count,
);
criterion_main!(benches);
