use criterion::{criterion_group, criterion_main, Criterion};

use randomex::StringGen;

fn criterion_benchmark_random_16_chars(c: &mut Criterion) {
    let mut generator = StringGen::new();

    c.bench_function("random 16 chars", |b| b.iter(|| generator.random(16)));
}

fn criterion_benchmark_digits_16_chars(c: &mut Criterion) {
    let mut generator = StringGen::new();

    c.bench_function("digits 16 chars", |b| b.iter(|| generator.digits(16)));
}

criterion_group!(
    benches,
    criterion_benchmark_random_16_chars,
    criterion_benchmark_digits_16_chars
);
criterion_main!(benches);
