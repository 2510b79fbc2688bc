//! Criterion benchmarks for every sorting algorithm.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use intsort::permutation::init_array;
use intsort::Algorithm;

/// Generate a shuffled permutation of `0..size`
fn generate_permutation(size: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(size as u64);
    init_array(size, &mut rng).expect("benchmark input allocation")
}

fn bench_algorithms(c: &mut Criterion) {
    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(algorithm.name());

        // Keep the O(n²) sorts to sizes that finish in reasonable time
        let max_exp = if algorithm.is_quadratic() { 12 } else { 18 };

        for size_exp in (8..=max_exp).step_by(2) {
            let size = 1usize << size_exp;
            group.throughput(Throughput::Elements(size as u64));

            group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
                b.iter_batched(
                    || generate_permutation(size),
                    |mut data| {
                        algorithm.sort(black_box(&mut data));
                        data
                    },
                    BatchSize::LargeInput,
                )
            });
        }

        group.finish();
    }
}

/// Presorted input: quicksort's worst case and insertion sort's best
fn bench_presorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("presorted");
    let size = 1usize << 12;

    for algorithm in [Algorithm::Insertion, Algorithm::Merge, Algorithm::Quick] {
        group.bench_with_input(BenchmarkId::new(algorithm.name(), size), &size, |b, &size| {
            b.iter_batched(
                || (0..size as i32).collect::<Vec<i32>>(),
                |mut data| {
                    algorithm.sort(black_box(&mut data));
                    data
                },
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_algorithms, bench_presorted);
criterion_main!(benches);
