//! Benchmarks for grid construction and artifact serialization.
//!
//! Run with: cargo bench --package grid-builder --bench build_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use grid_builder::map::render_html;
use grid_builder::{
    BoundingBox, CoordinateTable, GridBuilder, GridFeatureCollection, GridSpec, MapOptions,
};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for size in [5usize, 50, 250] {
        let spec = GridSpec::new(size, size);
        let builder = GridBuilder::new(BoundingBox::SRI_LANKA, spec);
        group.throughput(Throughput::Elements(spec.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &builder, |b, builder| {
            b.iter(|| black_box(builder.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_serialize(c: &mut Criterion) {
    let grid = GridBuilder::new(BoundingBox::SRI_LANKA, GridSpec::new(100, 100))
        .build()
        .unwrap();

    c.bench_function("geojson_100x100", |b| {
        b.iter(|| {
            let fc = GridFeatureCollection::from_grid(black_box(&grid));
            black_box(serde_json::to_vec(&fc).unwrap())
        });
    });

    c.bench_function("csv_100x100", |b| {
        b.iter(|| {
            let table = CoordinateTable::from_grid(black_box(&grid));
            black_box(table.to_csv_bytes().unwrap())
        });
    });

    c.bench_function("html_100x100", |b| {
        let options = MapOptions::default();
        b.iter(|| black_box(render_html(black_box(&grid), &options)));
    });
}

criterion_group!(benches, bench_build, bench_serialize);
criterion_main!(benches);
