//! Benchmarks for zone grid editing.
//!
//! Run with: cargo bench -p zonegrid-layout

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zonegrid_layout::{GridConfig, GridData, Orientation, derive_resizers};

fn uniform_grid(side: usize) -> GridData {
    GridData::with_rows_columns(side, side, GridConfig::default()).expect("uniform grid")
}

fn bench_derive_resizers(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/derive_resizers");

    for side in [2, 4, 8, 16] {
        let grid = uniform_grid(side);
        group.bench_with_input(
            BenchmarkId::new("uniform", side * side),
            grid.zones(),
            |b, zones| b.iter(|| black_box(derive_resizers(zones, 10_000))),
        );
    }

    group.finish();
}

/// One pointer-move tick: drag back and forth so the grid stays bounded.
fn bench_drag_ticks(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/drag_tick");

    for side in [2, 4, 8, 16] {
        let base = uniform_grid(side);
        group.bench_with_input(BenchmarkId::new("uniform", side * side), &base, |b, base| {
            b.iter_batched(
                || base.clone(),
                |mut grid| {
                    for delta in [40, -80, 40] {
                        black_box(grid.drag(0, delta).expect("resizer exists"));
                    }
                    grid
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_can_drag(c: &mut Criterion) {
    let grid = uniform_grid(8);
    c.bench_function("grid/can_drag/64", |b| {
        b.iter(|| black_box(grid.can_drag(black_box(3), black_box(120))))
    });
}

fn bench_merge_closure(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid/merge_closure");

    for side in [2, 4, 8, 16] {
        let grid = uniform_grid(side);
        let last = side * side - 1;
        // Diagonal corners close to the whole grid: worst case.
        group.bench_with_input(BenchmarkId::new("corners", side * side), &grid, |b, grid| {
            b.iter(|| black_box(grid.merge_closure_indices([0, last]).expect("closure")))
        });
    }

    group.finish();
}

fn bench_split_merge(c: &mut Criterion) {
    let base = uniform_grid(4);
    c.bench_function("grid/split_then_merge/16", |b| {
        b.iter_batched(
            || base.clone(),
            |mut grid| {
                let new_index = grid
                    .split(5, 3_000, Orientation::Vertical)
                    .expect("interior split");
                black_box(grid.do_merge([5, new_index]).expect("merge"))
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_derive_resizers,
    bench_drag_ticks,
    bench_can_drag,
    bench_merge_closure,
    bench_split_merge,
);
criterion_main!(benches);
