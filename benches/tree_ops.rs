//! Benchmarks for the red-black tree.
//!
//! ## What Is Measured
//!
//! | Group        | Operation                                   |
//! |--------------|---------------------------------------------|
//! | insert       | single insert into populated trees          |
//! | search       | hit and miss lookups                        |
//! | delete       | delete through a handle, delete by key      |
//! | throughput   | mixed insert/delete batches                 |
//! | export       | breadth-first export and state root         |
//!
//! ## Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//!
//! # Run specific group
//! cargo bench -- search
//! ```
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use redblack::RedBlackTree;

// ============================================================================
// HELPER FUNCTIONS - Deterministic key generation
// ============================================================================

/// Shuffled `0..count`, the same for a given seed
fn shuffled_keys(count: usize, seed: u64) -> Vec<i64> {
    let mut keys: Vec<i64> = (0..count as i64).collect();
    keys.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    keys
}

/// Tree with `count` distinct keys inserted in random order
fn populated(count: usize) -> RedBlackTree {
    RedBlackTree::from_keys(&shuffled_keys(count, 42))
}

// ============================================================================
// BENCHMARK: Insert
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    group.measurement_time(Duration::from_secs(5));

    for size in [1_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::new("into", size), &size, |b, &size| {
            b.iter_batched(
                || populated(size),
                |mut tree| black_box(tree.insert_key(size as i64 / 2)),
                BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("ascending_1k_from_empty", |b| {
        let keys: Vec<i64> = (0..1_000).collect();
        b.iter(|| black_box(RedBlackTree::from_keys(&keys)).len());
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Search
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let tree = populated(100_000);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    group.bench_function("hit_in_100k", |b| {
        b.iter(|| {
            let key = rng.gen_range(0..100_000i64);
            black_box(tree.search(key))
        });
    });

    group.bench_function("miss_in_100k", |b| {
        b.iter(|| {
            let key = rng.gen_range(100_000..200_000i64);
            black_box(tree.search(key))
        });
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Delete
// ============================================================================

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("handle_in_10k", |b| {
        b.iter_batched(
            || {
                let tree = populated(10_000);
                let handle = tree.search(5_000).expect("key present");
                (tree, handle)
            },
            |(mut tree, handle)| black_box(tree.delete(handle)),
            BatchSize::LargeInput,
        );
    });

    group.bench_function("remove_key_in_10k", |b| {
        b.iter_batched(
            || populated(10_000),
            |mut tree| black_box(tree.remove_key(5_000)),
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

// ============================================================================
// BENCHMARK: Throughput
// ============================================================================

fn bench_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(50);

    for batch_size in [1_000usize, 10_000, 50_000] {
        group.throughput(Throughput::Elements(batch_size as u64 * 2));

        group.bench_with_input(
            BenchmarkId::new("insert_then_delete", batch_size),
            &batch_size,
            |b, &size| {
                let inserts = shuffled_keys(size, 1);
                let deletes = shuffled_keys(size, 2);

                b.iter(|| {
                    let mut tree: RedBlackTree = RedBlackTree::with_capacity(size);
                    for &key in &inserts {
                        tree.insert_key(key);
                    }
                    for &key in &deletes {
                        black_box(tree.remove_key(key));
                    }
                    tree.len()
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// BENCHMARK: Export
// ============================================================================

fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    let tree = populated(10_000);
    group.throughput(Throughput::Elements(tree.len() as u64));

    group.bench_function("bfs_10k", |b| {
        b.iter(|| black_box(tree.export().count()));
    });

    group.bench_function("state_root_10k", |b| {
        b.iter(|| black_box(tree.state_root()));
    });

    group.finish();
}

// ============================================================================
// CRITERION ENTRY POINT
// ============================================================================

criterion_group!(
    benches,
    bench_insert,
    bench_search,
    bench_delete,
    bench_throughput,
    bench_export
);

criterion_main!(benches);
