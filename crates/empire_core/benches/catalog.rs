//! Catalog benchmarks for empire_core.
//!
//! Run with: `cargo bench -p empire_core`

// Benchmark binaries don't need docs on macro-generated functions
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use empire_core::prelude::*;

/// Loading, listing and building from the standard catalog.
pub fn catalog_benchmark(c: &mut Criterion) {
    c.bench_function("load_standard_catalog", |b| {
        b.iter(|| black_box(Catalog::standard()))
    });

    let Ok(catalog) = Catalog::standard() else {
        return;
    };
    let known: KnownAdvances = advances::ALL.iter().cloned().collect();

    c.bench_function("list_buildable_all_units", |b| {
        b.iter(|| black_box(catalog.list_buildable(black_box(&known), BuildCategory::Unit(None))))
    });

    let context = BuildContext::City(CityId(1));
    c.bench_function("build_unit", |b| {
        b.iter(|| {
            black_box(catalog.build(
                BuildableId::Unit(UnitKind::Battleship),
                black_box(context),
                &known,
            ))
        })
    });
}

criterion_group!(benches, catalog_benchmark);
criterion_main!(benches);
