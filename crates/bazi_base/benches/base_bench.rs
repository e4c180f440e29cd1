use bazi_base::{Nayin, Pillar, nayin_for_ganzhi};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    group.bench_function("from_cycle_index", |b| {
        b.iter(|| Pillar::from_cycle_index(black_box(-1234)))
    });
    group.bench_function("nayin_of", |b| {
        let p = Pillar::from_cycle_index(37);
        b.iter(|| Nayin::of(black_box(p)))
    });
    group.bench_function("nayin_for_ganzhi", |b| {
        b.iter(|| nayin_for_ganzhi(black_box("庚辰")))
    });
    group.finish();
}

criterion_group!(benches, cycle_bench);
criterion_main!(benches);
