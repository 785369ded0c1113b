use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{Rng, distr::Alphanumeric};
use simple_bloom_rs::BloomFilter;
use std::hint::black_box;

// Helper function to generate random string data
fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

// Helper to create test data
fn generate_test_data(count: usize) -> Vec<String> {
    (0..count).map(|_| generate_random_string(32)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_operations");

    for capacity in [1_000, 10_000, 100_000] {
        let test_data = generate_test_data(capacity);

        group.bench_with_input(
            BenchmarkId::new("insert", capacity),
            &(capacity, &test_data),
            |b, (cap, data)| {
                b.iter_batched(
                    || {
                        BloomFilter::new(*cap, 0.01)
                            .expect("Failed to create Bloom filter")
                    },
                    |mut filter| {
                        for item in data.iter() {
                            filter.insert(item).expect("Insert failed");
                        }
                        filter
                    },
                    criterion::BatchSize::LargeInput,
                )
            },
        );
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_operations");

    for capacity in [1_000, 10_000, 100_000] {
        let test_data = generate_test_data(capacity);
        let unknown = generate_test_data(1_000);
        let mut filter =
            BloomFilter::new(capacity, 0.01).expect("Failed to create filter");
        for item in &test_data {
            filter.insert(item).expect("Insert failed");
        }

        group.bench_with_input(
            BenchmarkId::new("known", capacity),
            &test_data,
            |b, data| {
                b.iter(|| {
                    for item in data.iter().take(1_000) {
                        black_box(filter.contains(item).expect("Query failed"));
                    }
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("unknown", capacity),
            &unknown,
            |b, data| {
                b.iter(|| {
                    for item in data {
                        black_box(filter.contains(item).expect("Query failed"));
                    }
                })
            },
        );
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for fpr in [0.1, 0.01, 0.001] {
        group.bench_with_input(
            BenchmarkId::new("new_100k", fpr),
            &fpr,
            |b, &fpr| {
                b.iter(|| {
                    black_box(
                        BloomFilter::new(100_000, fpr)
                            .expect("Failed to create filter"),
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_contains, bench_construction);
criterion_main!(benches);
