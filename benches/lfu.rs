//! LFU cache benchmarks.
//!
//! Run with: `cargo bench --bench lfu`

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use freqcache::policy::lfu::LfuCache;
use freqcache::traits::{CoreCache, LfuCacheTrait};

/// Benchmark hit-path gets: every lookup promotes a resident key.
fn bench_get_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu");
    group.throughput(Throughput::Elements(1024));

    group.bench_function("get_hit", |b| {
        b.iter_batched(
            || {
                let mut cache = LfuCache::new(1024);
                for i in 0..1024u64 {
                    cache.put(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..1024u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark put churn at capacity: every insert evicts.
fn bench_put_evicting(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu");
    group.throughput(Throughput::Elements(1024));

    group.bench_function("put_evicting", |b| {
        b.iter_batched(
            || {
                let mut cache = LfuCache::new(1024);
                for i in 0..1024u64 {
                    cache.put(i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(std::hint::black_box(i + 10_000), i);
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark pop_lfu draining a full cache.
fn bench_pop_lfu(c: &mut Criterion) {
    let mut group = c.benchmark_group("lfu");
    group.throughput(Throughput::Elements(1024));

    group.bench_function("pop_lfu", |b| {
        b.iter_batched(
            || {
                let mut cache = LfuCache::new(1024);
                for i in 0..1024u64 {
                    cache.put(i, i);
                }
                cache
            },
            |mut cache| {
                for _ in 0..1024u64 {
                    let _ = std::hint::black_box(cache.pop_lfu());
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_get_hit, bench_put_evicting, bench_pop_lfu);
criterion_main!(benches);
