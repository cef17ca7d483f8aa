// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tissue_index::{Aabb2D, Point2D, QuadTree, QuadTreeConfig};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point2D::new(x as f64 * cell, y as f64 * cell));
        }
    }
    out
}

fn bench_rtree_external_compare_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("rtree_external_compare_f64");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 10.0);
        let side = n as f64 * 10.0;
        let band = Aabb2D::<f64>::new(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || points.iter().copied().enumerate().map(|(i, p)| (p, i as u32)).collect::<Vec<_>>(),
                |entries| {
                    let tree = QuadTree::build(
                        Aabb2D::new(0.0, 0.0, side, side),
                        QuadTreeConfig::default(),
                        entries,
                    )
                    .unwrap();
                    let mut hits = 0_usize;
                    let _ = tree.visit_rect(band, |_| hits += 1);
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |corners| {
                    let tree = RTree::bulk_load(corners);
                    let aabb = AABB::from_corners([band.x, band.y], [band.max_x(), band.max_y()]);
                    let hits: usize = tree.locate_in_envelope(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_rtree_external_compare_f64);
criterion_main!(benches);
