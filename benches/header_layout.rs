//! Benchmarks for column header layout and rendering.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheetgrid::header::{ColHeader, HeaderSpec};
use sheetgrid::layout::{ColumnSpec, HeaderTree};
use sheetgrid::render::SceneGraph;

/// Two-level header: `regions` groups of `cities` leaves each
fn columns(regions: usize, cities: usize) -> Vec<ColumnSpec> {
    (0..regions)
        .map(|r| {
            ColumnSpec::group(
                "region",
                &format!("Region {r}"),
                (0..cities)
                    .map(|c| ColumnSpec::leaf("city", &format!("City {r}-{c}"), 96.0))
                    .collect(),
            )
        })
        .collect()
}

/// Benchmark building header trees of increasing size
fn bench_build_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_tree");
    for regions in [10usize, 100, 1000] {
        let cols = columns(regions, 10);
        group.throughput(Throughput::Elements((regions * 11) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(regions), &cols, |b, cols| {
            b.iter(|| HeaderTree::build(black_box(cols), 30.0));
        });
    }
    group.finish();
}

/// Benchmark a full render of the visible window while scrolling
fn bench_render_scrolled(c: &mut Criterion) {
    let spec = HeaderSpec {
        columns: columns(1000, 10),
        ..HeaderSpec::default()
    };
    let mut header = ColHeader::new(spec);
    let mut scene = SceneGraph::new();
    let max_scroll = header.tree().total_width() - header.config().width;

    let mut step = 0usize;
    c.bench_function("render_scrolled", |b| {
        b.iter(|| {
            step = (step + 1) % 1000;
            header.set_scroll(max_scroll * step as f32 / 1000.0, 0.0);
            scene.clear();
            black_box(header.render(&mut scene))
        });
    });
}

/// Benchmark hit testing against the registered resize zones
fn bench_hit_test(c: &mut Criterion) {
    let spec = HeaderSpec {
        columns: columns(10, 10),
        ..HeaderSpec::default()
    };
    let mut header = ColHeader::new(spec);
    header.render(&mut SceneGraph::new());

    c.bench_function("resize_hit_test", |b| {
        b.iter(|| header.resize_area_at(black_box(480.0), black_box(40.0)))
    });
}

criterion_group!(
    benches,
    bench_build_tree,
    bench_render_scrolled,
    bench_hit_test
);
criterion_main!(benches);
