//! Criterion benchmarks for Wordsmith review.

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use wordsmith::review::{BuiltinTable, SuggestionEngine};

/// Generate test texts mixing known and unknown words.
fn generate_test_texts(count: usize) -> Vec<String> {
    let words = [
        "please", "access", "the", "system", "and", "use", "it", "to", "help", "users",
        "start", "their", "work", "obtain", "enough", "data", "improve", "results", "quickly",
        "before", "the", "end,", "of", "day.",
    ];

    (0..count)
        .map(|i| {
            let length = 20 + (i % 80);
            (0..length)
                .map(|j| words[(i * 7 + j * 3) % words.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn bench_review(c: &mut Criterion) {
    let engine = SuggestionEngine::new(BuiltinTable::english());
    let texts = generate_test_texts(1000);
    let total_bytes: usize = texts.iter().map(String::len).sum();

    let mut group = c.benchmark_group("review");
    group.throughput(Throughput::Bytes(total_bytes as u64));

    group.bench_function("review_text", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(engine.review_text(black_box(text)));
            }
        })
    });

    group.bench_function("review_batch", |b| {
        b.iter(|| black_box(engine.review_batch(black_box(&texts))))
    });

    group.finish();
}

fn bench_add_replacement(c: &mut Criterion) {
    c.bench_function("add_replacement", |b| {
        b.iter_batched(
            || SuggestionEngine::new(BuiltinTable::english()),
            |mut engine| {
                engine.add_replacement("fetch", vec!["grab".to_string(), "pull".to_string()]);
                engine
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_review, bench_add_replacement);
criterion_main!(benches);
