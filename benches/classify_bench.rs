use criterion::{criterion_group, criterion_main, Criterion};
use ftn_classify::{classify, Classifier};
use std::hint::black_box;

fn benchmark_classify_range(c: &mut Criterion) {
    c.bench_function("classify_0_to_1000", |b| {
        b.iter(|| {
            for n in 0..1000 {
                black_box(classify(black_box(n)));
            }
        })
    });
}

fn benchmark_classify_extremes(c: &mut Criterion) {
    let classifier = Classifier::default();
    let values = [i64::MIN, -1, 55, 100_000, 1_000_000, i64::MAX];
    c.bench_function("classify_extremes", |b| {
        b.iter(|| {
            for &n in &values {
                black_box(classifier.classify_detailed(black_box(n)));
            }
        })
    });
}

criterion_group!(benches, benchmark_classify_range, benchmark_classify_extremes);
criterion_main!(benches);
