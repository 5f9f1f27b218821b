//! Size Estimation Benchmarks
//!
//! **Purpose:** Measure the per-asset cost of a reporting round
//!
//! **Regression Threshold:** >20% slower than baseline
//!
//! **How to Run:**
//! ```bash
//! cargo bench --bench size_estimation
//! ```
//!
//! **What's Being Measured:**
//! 1. `estimate gzip size` - Compression into a counting sink, per input size
//! 2. `normalize names` - Default trailing-hash rule over a batch of names
//! 3. `full round` - Measure, compare, render and persist 50 assets
//!
//! **Performance Notes:**
//! - Estimation never buffers compressed output
//! - Assets are measured in parallel with rayon

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use size_report::asset::AssetMap;
use size_report::estimate::SizeEstimator;
use size_report::normalize::AssetNormalizer;
use size_report::report::ReportFormatter;
use size_report::reporter::SizeReporter;
use size_report::snapshot::SnapshotStore;
use std::hint::black_box;
use tempfile::TempDir;

fn sample_script(bytes: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes);
    let mut i = 0usize;
    while out.len() < bytes {
        out.extend_from_slice(format!("export const v{} = f({});\n", i, i * 31).as_bytes());
        i += 1;
    }
    out.truncate(bytes);
    out
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate gzip size");
    let estimator = SizeEstimator::default();

    for size in [1_024usize, 64 * 1024, 1024 * 1024] {
        let data = sample_script(size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(estimator.estimate(black_box(data))).unwrap());
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let normalizer = AssetNormalizer::new();
    let names: Vec<String> = (0..200)
        .map(|i| format!("static/js/chunk-{}.{:08x}.js", i, i * 2_654_435_761u64))
        .collect();

    c.bench_function("normalize names", |b| {
        b.iter(|| {
            for name in &names {
                black_box(normalizer.normalize(black_box(name)));
            }
        });
    });
}

fn bench_full_round(c: &mut Criterion) {
    let temp_dir = TempDir::new().unwrap();
    let store = SnapshotStore::new(temp_dir.path().join("sizes.json")).unwrap();
    let reporter = SizeReporter::new(r"\.js$", AssetNormalizer::new(), store)
        .unwrap()
        .with_formatter(ReportFormatter::plain());

    let mut assets = AssetMap::new();
    for i in 0..50 {
        assets.insert(format!("chunk{}.{:07x}.js", i, i * 7_919), sample_script(16 * 1024));
    }

    c.bench_function("full round (50 assets)", |b| {
        b.iter(|| black_box(reporter.run(&assets)).unwrap());
    });
}

criterion_group!(benches, bench_estimate, bench_normalize, bench_full_round);
criterion_main!(benches);
