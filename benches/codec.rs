use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_datauri::{DataUri, ScalarValue};

fn benchmark_parse_minimal(c: &mut Criterion) {
    let text = "data:text/plain;base64,SGVsbG8sIHdvcmxkIQ==";

    c.bench_function("parse_minimal", |b| {
        b.iter(|| DataUri::parse(black_box(text)))
    });
}

fn benchmark_parse_fields(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_fields");

    let canonical = "data:text/plain;charset=utf-8;filename=a.txt;base64,QUI=";
    let reversed = "data:text/plain;filename=a.txt;charset=utf-8;base64,QUI=";

    group.bench_function("canonical_order", |b| {
        b.iter(|| DataUri::parse(black_box(canonical)))
    });
    group.bench_function("reversed_order", |b| {
        b.iter(|| DataUri::parse(black_box(reversed)))
    });
    group.bench_function("try_parse_malformed", |b| {
        b.iter(|| DataUri::try_parse(black_box("not-a-uri")))
    });

    group.finish();
}

fn benchmark_payload_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_size");

    for size in [64usize, 1024, 16 * 1024, 256 * 1024].iter() {
        let uri = DataUri::new(vec![0xa5; *size], "application/octet-stream")
            .with_filename("blob.bin");
        let text = uri.to_string();

        group.bench_with_input(BenchmarkId::new("format", size), &uri, |b, uri| {
            b.iter(|| black_box(uri).to_string())
        });
        group.bench_with_input(BenchmarkId::new("parse", size), &text, |b, text| {
            b.iter(|| DataUri::parse(black_box(text)))
        });
    }

    group.finish();
}

fn benchmark_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");

    let timestamp = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
    let stored = ScalarValue::from(timestamp);

    group.bench_function("construct_bool", |b| {
        b.iter(|| ScalarValue::from(black_box(true)))
    });
    group.bench_function("construct_f64", |b| {
        b.iter(|| ScalarValue::from(black_box(1234.5678f64)))
    });
    group.bench_function("construct_timestamp", |b| {
        b.iter(|| ScalarValue::from(black_box(timestamp)))
    });
    group.bench_function("equals_timestamp", |b| {
        b.iter(|| stored.equals(black_box(timestamp)))
    });
    group.bench_function("equals_ignore_case", |b| {
        let value = ScalarValue::from("Mixed Case Value");
        b.iter(|| value.equals(black_box("mixed case value")))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_minimal,
    benchmark_parse_fields,
    benchmark_payload_sizes,
    benchmark_scalars
);
criterion_main!(benches);
