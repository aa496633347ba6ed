//! Criterion benchmark suite for StripedList
//!
//! # Benchmark Categories
//!
//! 1. **Core Operations** - append, buffered append, random access, insert
//! 2. **Concurrent Workloads** - appends and mixed read/write across threads
//! 3. **Sorting** - random, sorted and reversed inputs
//! 4. **Partition Impact** - stripe size vs. insert and read cost
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench striped_list
//!
//! # Run specific category
//! cargo bench --bench striped_list -- "sort"
//!
//! # Save baseline for regression detection
//! cargo bench --bench striped_list -- --save-baseline master
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use stripelist::{Partition, StripedList};

// ============================================================================
// Configuration Constants
// ============================================================================

/// Measurement time for stable results
const MEASUREMENT_TIME: Duration = Duration::from_secs(5);

/// Warm-up time
const WARMUP_TIME: Duration = Duration::from_secs(2);

// ============================================================================
// Test Data Generation
// ============================================================================

/// Generate deterministic test data
fn generate_test_data(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen()).collect()
}

/// Generate deterministic indices in `[0, bound)`
fn generate_indices(count: usize, bound: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..bound)).collect()
}

fn populated(data: &[u64], partition: Partition) -> StripedList<u64> {
    let list = StripedList::with_partition(data.len().max(1), partition).unwrap();
    list.extend_from_slice(data).unwrap();
    list
}

// ============================================================================
// 1. Core Operations
// ============================================================================

fn bench_core_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/add");

    for size in [1_000, 10_000, 100_000] {
        let data = generate_test_data(size, 0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("add", size), &data, |b, data| {
            b.iter_batched(
                StripedList::<u64>::new,
                |list| {
                    for &item in data {
                        list.add(black_box(item)).unwrap();
                    }
                    list
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("offer", size), &data, |b, data| {
            b.iter_batched(
                StripedList::<u64>::new,
                |list| {
                    for &item in data {
                        list.offer(black_box(item)).unwrap();
                    }
                    list.flush().unwrap();
                    list
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("extend", size), &data, |b, data| {
            b.iter_batched(
                StripedList::<u64>::new,
                |list| {
                    list.extend_from_slice(black_box(data)).unwrap();
                    list
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_core_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/get");

    for size in [1_000, 100_000] {
        let list = populated(&generate_test_data(size, 0), Partition::Medium);
        let indices = generate_indices(10_000, size, 1);

        group.throughput(Throughput::Elements(indices.len() as u64));
        group.bench_with_input(BenchmarkId::new("random", size), &indices, |b, indices| {
            b.iter(|| {
                for &i in indices {
                    black_box(list.get(black_box(i)).unwrap());
                }
            });
        });
    }

    group.finish();
}

fn bench_core_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("core/insert");

    for size in [10_000, 100_000] {
        let data = generate_test_data(size, 0);
        group.throughput(Throughput::Elements(100));

        for (label, at) in [("head", 0), ("middle", size / 2), ("tail", size)] {
            group.bench_with_input(BenchmarkId::new(label, size), &data, |b, data| {
                b.iter_batched(
                    || populated(data, Partition::Medium),
                    |list| {
                        for i in 0..100 {
                            list.insert(black_box(at), i).unwrap();
                        }
                        list
                    },
                    BatchSize::LargeInput,
                );
            });
        }
    }

    group.finish();
}

// ============================================================================
// 2. Concurrent Workloads
// ============================================================================

fn bench_concurrent_appends(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent/append");
    let per_thread = 10_000;

    for threads in [1, 2, 4, 8] {
        group.throughput(Throughput::Elements((threads * per_thread) as u64));
        group.bench_with_input(BenchmarkId::new("add", threads), &threads, |b, &threads| {
            b.iter(|| {
                let list = Arc::new(StripedList::<u64>::new());
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let list = Arc::clone(&list);
                        thread::spawn(move || {
                            for i in 0..per_thread {
                                list.add((t * per_thread + i) as u64).unwrap();
                            }
                        })
                    })
                    .collect();
                for h in handles {
                    h.join().unwrap();
                }
                list
            });
        });

        group.bench_with_input(BenchmarkId::new("offer", threads), &threads, |b, &threads| {
            b.iter(|| {
                let list = Arc::new(StripedList::<u64>::new());
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let list = Arc::clone(&list);
                        thread::spawn(move || {
                            for i in 0..per_thread {
                                list.offer((t * per_thread + i) as u64).unwrap();
                            }
                        })
                    })
                    .collect();
                for h in handles {
                    h.join().unwrap();
                }
                list.flush().unwrap();
                list
            });
        });
    }

    group.finish();
}

fn bench_concurrent_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent/mixed");
    let size = 100_000;
    let ops = 5_000;

    for threads in [2, 4, 8] {
        group.throughput(Throughput::Elements((threads * ops) as u64));
        group.bench_with_input(
            BenchmarkId::new("90-10_read-write", threads),
            &threads,
            |b, &threads| {
                let list = Arc::new(populated(&generate_test_data(size, 0), Partition::Medium));
                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let list = Arc::clone(&list);
                            thread::spawn(move || {
                                let indices = generate_indices(ops, size, t as u64);
                                for (n, &i) in indices.iter().enumerate() {
                                    if n % 10 == 0 {
                                        list.set(i, n as u64).unwrap();
                                    } else {
                                        black_box(list.get(i).unwrap());
                                    }
                                }
                            })
                        })
                        .collect();
                    for h in handles {
                        h.join().unwrap();
                    }
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// 3. Sorting
// ============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [10_000, 100_000] {
        let random = generate_test_data(size, 7);
        let mut ascending = random.clone();
        ascending.sort_unstable();
        let descending: Vec<u64> = ascending.iter().rev().copied().collect();

        group.throughput(Throughput::Elements(size as u64));
        for (label, data) in [("random", &random), ("sorted", &ascending), ("reversed", &descending)] {
            group.bench_with_input(BenchmarkId::new(label, size), data, |b, data| {
                b.iter_batched(
                    || populated(data, Partition::Medium),
                    |list| {
                        list.sort();
                        list
                    },
                    BatchSize::LargeInput,
                );
            });
        }

        group.bench_with_input(BenchmarkId::new("stripes_only", size), &random, |b, data| {
            b.iter_batched(
                || populated(data, Partition::Medium),
                |list| {
                    list.sort_stripes_by(u64::cmp);
                    list
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

// ============================================================================
// 4. Partition Impact
// ============================================================================

fn bench_partition_impact(c: &mut Criterion) {
    let mut group = c.benchmark_group("partition");
    let size = 50_000;
    let data = generate_test_data(size, 0);
    let indices = generate_indices(1_000, size, 3);

    for partition in [Partition::Custom(64), Partition::Small, Partition::Medium, Partition::Large] {
        let id = partition.size();

        group.bench_with_input(BenchmarkId::new("insert_middle", id), &data, |b, data| {
            b.iter_batched(
                || populated(data, partition),
                |list| {
                    for i in 0..50 {
                        list.insert(size / 2, i).unwrap();
                    }
                    list
                },
                BatchSize::LargeInput,
            );
        });

        let list = populated(&data, partition);
        group.bench_with_input(BenchmarkId::new("get", id), &indices, |b, indices| {
            b.iter(|| {
                for &i in indices {
                    black_box(list.get(i).unwrap());
                }
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = core_ops;
    config = Criterion::default()
        .measurement_time(MEASUREMENT_TIME)
        .warm_up_time(WARMUP_TIME);
    targets =
        bench_core_add,
        bench_core_get,
        bench_core_insert,
}

criterion_group! {
    name = concurrent;
    config = Criterion::default()
        .measurement_time(MEASUREMENT_TIME)
        .warm_up_time(WARMUP_TIME)
        .sample_size(30);
    targets =
        bench_concurrent_appends,
        bench_concurrent_mixed,
}

criterion_group! {
    name = sorting;
    config = Criterion::default()
        .measurement_time(MEASUREMENT_TIME)
        .warm_up_time(WARMUP_TIME)
        .sample_size(30);
    targets = bench_sort,
}

criterion_group! {
    name = partitions;
    config = Criterion::default()
        .measurement_time(MEASUREMENT_TIME)
        .warm_up_time(WARMUP_TIME);
    targets = bench_partition_impact,
}

criterion_main!(core_ops, concurrent, sorting, partitions);
