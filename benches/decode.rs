//! Decode timing for both domain schemas
//!
//! Criterion counterpart of the built-in benchmark strategy: times
//! `DomainSchema::decode` over the bundled fixtures and synthetic corpus
//! documents of growing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use domxml_membench::corpus;
use domxml_membench::domain::{DomainSchema, Primary, Secondary};

const FIXTURES: [(&str, &str); 2] = [
    ("fedora-q35", include_str!("../fixtures/domains/fedora-q35.xml")),
    ("minimal", include_str!("../fixtures/domains/minimal.xml")),
];

fn bench_fixtures(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_fixtures");

    for (name, xml) in FIXTURES {
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::new(Primary::NAME, name), xml.as_bytes(), |b, xml| {
            b.iter(|| Primary::decode(black_box(xml)))
        });
        group.bench_with_input(BenchmarkId::new(Secondary::NAME, name), xml.as_bytes(), |b, xml| {
            b.iter(|| Secondary::decode(black_box(xml)))
        });
    }

    group.finish();
}

/// Synthetic documents; the index picks a different device mix per seed.
fn bench_corpus(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_corpus");

    for index in [0u64, 7, 21] {
        let xml = corpus::generate_domain(42, index);
        let label = corpus::file_name(index);
        group.throughput(Throughput::Bytes(xml.len() as u64));
        group.bench_with_input(BenchmarkId::new(Primary::NAME, &label), xml.as_bytes(), |b, xml| {
            b.iter(|| Primary::decode(black_box(xml)))
        });
        group.bench_with_input(BenchmarkId::new(Secondary::NAME, &label), xml.as_bytes(), |b, xml| {
            b.iter(|| Secondary::decode(black_box(xml)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fixtures, bench_corpus);
criterion_main!(benches);
