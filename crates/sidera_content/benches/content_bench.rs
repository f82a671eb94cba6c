use criterion::{Criterion, black_box, criterion_group, criterion_main};
use sidera_content::{content_for_placement, placement_content, placement_content_by_key};
use sidera_signs::{Placement, Sign};

fn bench_lookup(c: &mut Criterion) {
    c.bench_function("placement_content_typed", |b| {
        b.iter(|| placement_content(black_box(Sign::Aries), black_box(Placement::Sun)))
    });

    c.bench_function("placement_content_by_key", |b| {
        b.iter(|| placement_content_by_key(black_box("aries"), black_box("sun")))
    });

    c.bench_function("content_for_placement", |b| {
        b.iter(|| content_for_placement(black_box(Placement::Moon)))
    });
}

criterion_group!(benches, bench_lookup);
criterion_main!(benches);
