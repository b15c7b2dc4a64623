//! Benchmarks for EDTF parsing and relation evaluation

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use edtf_core::{before, during, parse, to_member};

fn bench_parse_level0_date(c: &mut Criterion) {
    c.bench_function("parse_level0_date", |b| {
        b.iter(|| parse(black_box("1985-04-12")))
    });
}

fn bench_parse_level0_datetime(c: &mut Criterion) {
    c.bench_function("parse_level0_datetime", |b| {
        b.iter(|| parse(black_box("2004-06-11T10:38:29+05:30")))
    });
}

fn bench_parse_level1_unspecified(c: &mut Criterion) {
    c.bench_function("parse_level1_unspecified", |b| {
        b.iter(|| parse(black_box("201X")))
    });
}

fn bench_parse_level2_partial_qualifiers(c: &mut Criterion) {
    c.bench_function("parse_level2_partial_qualifiers", |b| {
        b.iter(|| parse(black_box("?2004-06-~11")))
    });
}

fn bench_parse_level2_set_with_range(c: &mut Criterion) {
    c.bench_function("parse_level2_set_with_range", |b| {
        b.iter(|| parse(black_box("[1667,1668,1670..1672]")))
    });
}

fn bench_relation_eval(c: &mut Criterion) {
    let a = to_member(&parse("1964/2008").unwrap());
    let b_ = to_member(&parse("1985-04-12").unwrap());

    c.bench_function("relation_eval", |b| {
        b.iter(|| {
            (
                before(black_box(&a), black_box(&b_)),
                during(black_box(&b_), black_box(&a)),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_parse_level0_date,
    bench_parse_level0_datetime,
    bench_parse_level1_unspecified,
    bench_parse_level2_partial_qualifiers,
    bench_parse_level2_set_with_range,
    bench_relation_eval,
);
criterion_main!(benches);
