use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sidera_compat::{compatibility, compatibility_for_all};

fn bench_resolve(c: &mut Criterion) {
    c.bench_function("compatibility_authored", |b| {
        b.iter(|| compatibility(black_box("aries"), black_box("libra")))
    });

    c.bench_function("compatibility_fallback", |b| {
        b.iter(|| compatibility(black_box("ophiuchus"), black_box("libra")))
    });

    c.bench_function("compatibility_for_all", |b| {
        b.iter(|| compatibility_for_all(black_box("leo")))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
