use baht_core::{normalize, spell, Reader};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const AMOUNTS: &[&str] = &[
    "5",
    "21.25",
    "1,234,567.89",
    "-999999.995",
    "1000000000000.01",
    "123456789012345678901234567890.50",
];

fn bench_spell(c: &mut Criterion) {
    let mut group = c.benchmark_group("spell");
    for digits in ["21", "1234567", "1000000000000", "123456789012345678901234567890"] {
        group.bench_with_input(BenchmarkId::from_parameter(digits.len()), &digits, |b, d| {
            b.iter(|| spell(black_box(*d)))
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    c.bench_function("normalize", |b| {
        b.iter(|| {
            for raw in AMOUNTS {
                let _ = normalize(black_box(raw), ".");
            }
        })
    });
}

fn bench_read(c: &mut Criterion) {
    let reader = Reader::new();
    c.bench_function("read", |b| {
        b.iter(|| {
            for raw in AMOUNTS {
                let _ = reader.read(black_box(raw));
            }
        })
    });
}

criterion_group!(benches, bench_spell, bench_normalize, bench_read);
criterion_main!(benches);
