//! Exact Trie Benchmarks
//!
//! Benchmarks for insertion, exact lookup, and checkpoint lookup, implemented
//! with the Criterion framework for statistical analysis and regression
//! detection.
//!
//! To run the benchmarks:
//! ```bash
//! cargo bench
//! ```

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput,
};
use std::time::Duration;

use exact_trie::ExactTrie;

/// Deterministic key set with shared prefixes and delimiters.
fn make_keys(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("segment{}.part{}.key{}", i % 7, i % 23, i))
        .collect()
}

fn bench_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_trie_put");
    group.sampling_mode(SamplingMode::Flat);
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    for size in [100, 1000, 10_000].iter() {
        let keys = make_keys(*size);
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("sequential_put", size), &keys, |b, keys| {
            b.iter(|| {
                let mut trie = ExactTrie::new();
                for (i, key) in keys.iter().enumerate() {
                    trie.put(black_box(key), i, false);
                }
                trie
            });
        });
    }

    group.finish();
}

fn bench_exact_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_trie_get");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let keys = make_keys(10_000);
    let mut trie = ExactTrie::new();
    for (i, key) in keys.iter().enumerate() {
        trie.put(key, i, false);
    }

    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("hit", |b| {
        b.iter(|| {
            for key in &keys {
                black_box(trie.get(black_box(key), false));
            }
        });
    });

    group.bench_function("miss", |b| {
        b.iter(|| {
            for key in &keys {
                // Strict prefix of a stored key, so traversal succeeds but
                // no terminal value exists.
                black_box(trie.get(black_box(&key[..key.len() - 1]), false));
            }
        });
    });

    group.finish();
}

fn bench_checkpoint_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_trie_checkpoints");
    group.measurement_time(Duration::from_secs(2));
    group.warm_up_time(Duration::from_secs(1));

    let extensions = ["gz", "tar.gz", "zip", "tar", "json", "tar.xz", "xz", "txt"];
    let mut trie = ExactTrie::new();
    for (i, ext) in extensions.iter().enumerate() {
        trie.put(ext, i, true);
    }

    let names: Vec<String> = (0..1000)
        .map(|i| format!("archive-{}.tar.gz", i))
        .collect();

    group.throughput(Throughput::Elements(names.len() as u64));
    group.bench_function("suffix_match", |b| {
        b.iter(|| {
            for name in &names {
                black_box(trie.get_with_checkpoints(black_box(name), Some('.'), true));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_insertion,
    bench_exact_lookup,
    bench_checkpoint_lookup
);
criterion_main!(benches);
