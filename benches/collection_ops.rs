//! Benchmarks for the collection operations behind the checklist UI.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use oxshelf::collection::{filter::filter_volumes, set::VolumeSet};

fn bench_filter_volumes(c: &mut Criterion) {
    c.bench_function("filter_volumes_two_digit_query", |b| {
        b.iter(|| filter_volumes(black_box("10")))
    });
}

fn bench_invert(c: &mut Criterion) {
    let base = VolumeSet::from_numbers((1i64..=111).filter(|n| n % 2 == 0));

    c.bench_function("invert_half_owned_set", |b| {
        b.iter(|| {
            let mut set = base.clone();
            set.invert();
            set
        })
    });
}

criterion_group!(benches, bench_filter_volumes, bench_invert);
criterion_main!(benches);
