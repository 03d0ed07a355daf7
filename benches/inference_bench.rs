//! Criterion benchmarks for the corsa inference pipeline.
//!
//! Covers the stages a prediction request passes through:
//! - Interest normalization
//! - Feature extraction
//! - Full engine predictions

use corsa::analysis::InterestNormalizer;
use corsa::artifact::demo_bundle;
use corsa::features::FeatureExtractor;
use corsa::inference::InferenceEngine;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark interest normalization.
fn bench_normalization(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalization");

    let normalizer = InterestNormalizer::new();
    let short_input = "python, ml, statistics";
    let long_input = "python, ml, nlp, transformers, deep learning, data, pipelines, \
                      spark, sql, statistics, pytorch, python, ml, nlp";

    group.bench_function("normalize_short_list", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(short_input))))
    });

    group.bench_function("normalize_long_list", |b| {
        b.iter(|| black_box(normalizer.normalize(black_box(long_input))))
    });

    group.finish();
}

/// Benchmark feature extraction against the demo vectorizer.
fn bench_feature_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("feature_extraction");

    let bundle = demo_bundle().unwrap();
    let normalizer = InterestNormalizer::new();
    let extractor = FeatureExtractor::new();
    let interests = normalizer.normalize("python, ml, statistics, deep learning");

    group.bench_function("extract_document_mode", |b| {
        b.iter(|| {
            let result = extractor.extract(black_box(&bundle.vectorizer), black_box(&interests));
            black_box(result)
        })
    });

    group.finish();
}

/// Benchmark full predictions through the engine.
fn bench_prediction(c: &mut Criterion) {
    let mut group = c.benchmark_group("prediction");

    let engine = InferenceEngine::with_bundle(demo_bundle().unwrap());

    group.bench_function("predict_single", |b| {
        b.iter(|| {
            let result = engine.predict(black_box("nlp, transformers, pytorch"));
            black_box(result)
        })
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("predict_batch", |b| {
        b.iter(|| {
            for _ in 0..100 {
                let result = engine.predict(black_box("python, ml"));
                let _ = black_box(result);
            }
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_normalization,
    bench_feature_extraction,
    bench_prediction
);
criterion_main!(benches);
