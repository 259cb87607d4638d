use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use subway::FarePolicy;

fn fare_benchmark(c: &mut Criterion) {
    let policy = FarePolicy::default();
    c.bench_function("Fare", |b| {
        b.iter(|| (1..200).map(|distance| policy.fare_for_age(black_box(distance), 900, 15).amount()).sum::<u32>())
    });
}

criterion_group!(benches, fare_benchmark);
criterion_main!(benches);
