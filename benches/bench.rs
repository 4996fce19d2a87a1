//! Criterion benchmarks for topic-bayes.
//!
//! Covers corpus parsing, probability estimation and prediction on a
//! generated corpus.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use topic_bayes::classifier::{
    PredictorConfig, ProbabilityEstimator, ScoringStrategy, SmoothingConfig, TopicClassifier,
};
use topic_bayes::document::parser::CorpusLoader;

const TOPICS: [&str; 6] = ["finance", "grocery", "sports", "weather", "politics", "science"];

/// Generate a corpus in the header/body format.
fn generate_corpus(count: usize) -> String {
    let words = [
        "market", "stock", "price", "bread", "milk", "goal", "match", "rain", "storm", "vote",
        "election", "atom", "energy", "buy", "sell", "team", "cloud", "policy", "theory", "data",
    ];

    let mut corpus = String::new();
    for i in 0..count {
        let primary = TOPICS[i % TOPICS.len()];
        let secondary = TOPICS[(i / 7) % TOPICS.len()];
        if i % 5 == 0 && primary != secondary {
            corpus.push_str(&format!("doc\t{i}\t{primary}\t{secondary}.\n"));
        } else {
            corpus.push_str(&format!("doc\t{i}\t{primary}.\n"));
        }

        let length = 8 + (i % 24);
        let body: Vec<&str> = (0..length)
            .map(|j| words[(i * 31 + j * 17) % words.len()])
            .collect();
        corpus.push_str(&body.join(" "));
        corpus.push_str("\n\n");
    }
    corpus
}

fn bench_loading(c: &mut Criterion) {
    let text = generate_corpus(5000);
    let loader = CorpusLoader::new();

    let mut group = c.benchmark_group("loading");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("parse_5000_sentences", |b| {
        b.iter(|| loader.parse_str(black_box(&text)).unwrap())
    });
    group.finish();
}

fn bench_estimation(c: &mut Criterion) {
    let corpus = CorpusLoader::new().parse_str(&generate_corpus(5000)).unwrap();
    let estimator = ProbabilityEstimator::new(SmoothingConfig::default());

    let mut group = c.benchmark_group("estimation");
    group.throughput(Throughput::Elements(corpus.len() as u64));
    group.bench_function("estimate_5000_sentences", |b| {
        b.iter(|| {
            estimator
                .estimate(black_box(&corpus.documents), &corpus.topic_counts)
                .unwrap()
        })
    });
    group.finish();
}

fn bench_prediction(c: &mut Criterion) {
    let corpus = CorpusLoader::new().parse_str(&generate_corpus(5000)).unwrap();
    let estimator = ProbabilityEstimator::new(SmoothingConfig::default());

    let mut group = c.benchmark_group("prediction");
    group.throughput(Throughput::Elements(corpus.len() as u64));
    for (name, scoring) in [
        ("product", ScoringStrategy::Product),
        ("log_space", ScoringStrategy::LogSpace),
    ] {
        let config = PredictorConfig {
            scoring,
            ..PredictorConfig::default()
        };
        let model = estimator
            .fit(&corpus.documents, &corpus.topic_counts, config)
            .unwrap();

        group.bench_function(name, |b| {
            b.iter(|| model.predict_all(black_box(&corpus.documents)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_loading, bench_estimation, bench_prediction);
criterion_main!(benches);
