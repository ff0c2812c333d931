//! Benchmarks for the hot assertion paths.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pure_asserts::prelude::*;

fn passing_checks(c: &mut Criterion) {
    c.bench_function("string_chain_ok", |b| {
        b.iter(|| {
            field("name", black_box("Alice"))
                .not_blank()
                .and_then(|a| a.min_length(2))
                .and_then(|a| a.max_length(50))
                .is_ok()
        });
    });

    c.bench_function("number_bounds_ok", |b| {
        b.iter(|| field("age", black_box(42)).positive().and_then(|a| a.max(150)).is_ok());
    });
}

fn failing_checks(c: &mut Criterion) {
    c.bench_function("number_too_high", |b| {
        b.iter(|| field("score", black_box(15)).max(10).is_err());
    });

    let items = vec![Some(1), None, Some(3)];
    c.bench_function("null_element", |b| {
        b.iter(|| field("items", black_box(&items)).no_null_element().is_err());
    });
}

criterion_group!(benches, passing_checks, failing_checks);
criterion_main!(benches);
