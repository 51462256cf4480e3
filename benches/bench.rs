//! Criterion benchmarks for the Spendcat classifier.
//!
//! Covers text analysis, training on the built-in corpus, and single and
//! batch classification.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use spendcat::analysis::{Analyzer, TransactionAnalyzer, tokenize};
use spendcat::classifier::{NaiveBayesClassifier, NaiveBayesConfig, default_training_examples};
use std::hint::black_box;

/// Generate transaction descriptions for benchmarking.
fn generate_descriptions(count: usize) -> Vec<String> {
    let words = [
        "grocery",
        "store",
        "purchase",
        "uber",
        "ride",
        "monthly",
        "salary",
        "payment",
        "electricity",
        "bill",
        "movie",
        "tickets",
        "doctor",
        "visit",
        "hotel",
        "booking",
        "online",
        "course",
        "Coffee-Shop!",
        "unknownword",
    ];

    (0..count)
        .map(|i| {
            let length = 2 + (i % 5);
            (0..length)
                .map(|j| words[(i * 7 + j * 13) % words.len()]) // Pseudo-random distribution
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Benchmark the analysis pipeline.
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");

    let analyzer = TransactionAnalyzer::new().unwrap();
    let texts = generate_descriptions(1000);

    group.bench_function("tokenize_single", |b| {
        b.iter(|| black_box(tokenize(black_box("Grocery-Store: PURCHASE!! at 7pm"))))
    });

    group.throughput(Throughput::Elements(100));
    group.bench_function("analyze_batch", |b| {
        b.iter(|| {
            for text in texts.iter().take(100) {
                let terms = analyzer.terms(black_box(text));
                let _ = black_box(terms);
            }
        })
    });

    group.finish();
}

/// Benchmark training.
fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");

    let examples = default_training_examples();
    group.throughput(Throughput::Elements(examples.len() as u64));
    group.bench_function("train_default_corpus", |b| {
        b.iter(|| {
            let classifier =
                NaiveBayesClassifier::train(black_box(&examples), NaiveBayesConfig::default());
            black_box(classifier)
        })
    });

    group.finish();
}

/// Benchmark classification.
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let classifier = NaiveBayesClassifier::train_default().unwrap();
    let texts = generate_descriptions(10_000);

    group.bench_function("classify_single", |b| {
        b.iter(|| black_box(classifier.classify(black_box("monthly salary payment"))))
    });

    group.throughput(Throughput::Elements(1000));
    group.bench_function("classify_sequential_1000", |b| {
        b.iter(|| {
            for text in texts.iter().take(1000) {
                let _ = black_box(classifier.classify(black_box(text)));
            }
        })
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("classify_batch_10000", |b| {
        b.iter(|| black_box(classifier.classify_batch(black_box(&texts))))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_training,
    bench_classification
);
criterion_main!(benches);
