use std::{fmt::Write, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};
use file_stats::{NumericSummary, TextSummary, parse_numbers};

fn numeric_content(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        if i % 17 == 0 {
            content.push_str("n/a\n");
        } else {
            writeln!(content, "{}.{}", i % 1000, i % 7).unwrap();
        }
    }
    content
}

fn text_content(words: usize) -> String {
    let vocabulary = ["alpha", "beta,", "gamma", "delta!", "epsilon", "zeta", "eta", "theta"];
    let mut content = String::new();
    for i in 0..words {
        content.push_str(vocabulary[i % vocabulary.len()]);
        content.push(if i % 12 == 11 { '\n' } else { ' ' });
    }
    content
}

fn benchmark_numeric(c: &mut Criterion) {
    let content = numeric_content(10_000);
    c.bench_function("parse_numbers_10k", |b| b.iter(|| parse_numbers(black_box(&content))));
    c.bench_function("numeric_summary_10k", |b| {
        b.iter(|| NumericSummary::from_content(black_box(&content)))
    });
}

fn benchmark_text(c: &mut Criterion) {
    let content = text_content(50_000);
    c.bench_function("text_summary_50k_words", |b| {
        b.iter(|| TextSummary::from_text(black_box(&content)))
    });
}

criterion_group!(benches, benchmark_numeric, benchmark_text);
criterion_main!(benches);
