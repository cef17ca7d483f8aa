// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tissue_index::{Aabb2D, FlatPoints, Point2D, PointIndex, QuadTree, QuadTreeConfig};

const ROOT: Aabb2D<f64> = Aabb2D::new(0.0, 0.0, 2000.0, 2000.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Spots on a regular array, like a capture grid.
fn gen_grid_points(n: usize, cell: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Point2D::new(x as f64 * cell + 0.5 * cell, y as f64 * cell + 0.5 * cell));
        }
    }
    out
}

fn gen_random_points(count: usize) -> Vec<Point2D<f64>> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point2D::new(rng.next_f64() * 2000.0, rng.next_f64() * 2000.0))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point2D<f64>> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
            spread + rng.next_f64() * (2000.0 - 2.0 * spread),
        ));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point2D::new(cx + dx, cy + dy));
        }
    }
    out
}

fn fill<I: PointIndex<f64, u32>>(idx: &mut I, points: &[Point2D<f64>]) {
    for (i, p) in points.iter().copied().enumerate() {
        let _ = idx.insert(p, i as u32);
    }
}

fn count_rect<I: PointIndex<f64, u32>>(idx: &I, rect: Aabb2D<f64>) -> usize {
    let mut hits = 0;
    let _ = idx.visit_rect(rect, |_| hits += 1);
    hits
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[64usize, 128, 256] {
        let points = gen_grid_points(n, 2000.0 / n as f64);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("quadtree_insert_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::<f64, u32>::with_bounds(ROOT, QuadTreeConfig::default()).unwrap(),
                |mut idx| {
                    fill(&mut idx, &points);
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("flat_insert_n{}", n), |b| {
            b.iter_batched(
                FlatPoints::<f64, u32>::new,
                |mut idx| {
                    fill(&mut idx, &points);
                    black_box(idx.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let datasets = [
        ("grid", gen_grid_points(128, 2000.0 / 128.0)),
        ("random", gen_random_points(16_384)),
        ("clustered", gen_clustered_points(32, 512, 80.0)),
    ];
    let bands = [
        ("small_band", Aabb2D::new(500.0, 500.0, 50.0, 50.0)),
        ("large_band", Aabb2D::new(100.0, 100.0, 800.0, 800.0)),
    ];
    for (name, points) in &datasets {
        let mut group = c.benchmark_group(format!("query_{}", name));
        for capacity in [4usize, 8, 32] {
            let config = QuadTreeConfig::default()
                .with_max_depth(10)
                .with_leaf_capacity(capacity);
            let mut tree = QuadTree::<f64, u32>::with_bounds(ROOT, config).unwrap();
            fill(&mut tree, points);
            for (band_name, band) in bands {
                group.bench_function(format!("quadtree_cap{}_{}", capacity, band_name), |b| {
                    b.iter(|| black_box(count_rect(&tree, black_box(band))));
                });
            }
            let probe = points[points.len() / 2];
            group.bench_function(format!("quadtree_cap{}_point", capacity), |b| {
                b.iter(|| black_box(tree.query_point(black_box(probe)).map(|v| v.len())));
            });
        }
        let flat: FlatPoints<f64, u32> = points
            .iter()
            .copied()
            .enumerate()
            .map(|(i, p)| (p, i as u32))
            .collect();
        for (band_name, band) in bands {
            group.bench_function(format!("flat_{}", band_name), |b| {
                b.iter(|| black_box(count_rect(&flat, black_box(band))));
            });
        }
        group.finish();
    }
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    let points = gen_random_points(8192);
    group.throughput(Throughput::Elements(points.len() as u64));
    group.bench_function("quadtree_remove_all", |b| {
        b.iter_batched(
            || {
                let mut tree =
                    QuadTree::<f64, u32>::with_bounds(ROOT, QuadTreeConfig::default()).unwrap();
                fill(&mut tree, &points);
                tree
            },
            |mut tree| {
                for (i, p) in points.iter().copied().enumerate() {
                    let _ = tree.remove(p, i as u32);
                }
                black_box(tree.stats());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_queries, bench_churn);
criterion_main!(benches);
