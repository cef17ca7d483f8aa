// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Affine, Point, Rect};
use tissue_picking::{
    FeatureId, FeatureLayer, LayerStyle, PointShape, QueryFilter, SelectionMode,
};

fn array_layer(n: u32) -> FeatureLayer {
    let mut layer = FeatureLayer::new(LayerStyle {
        shape: PointShape::Circle,
        size: 0.8,
    });
    let spots = (0..n * n).map(|i| {
        let (col, row) = (f64::from(i % n), f64::from(i / n));
        (FeatureId(i), Point::new(col + 1.0, row + 1.0))
    });
    let side = f64::from(n) + 1.0;
    layer.load(Rect::new(0.0, 0.0, side, side), spots).unwrap();
    layer
}

fn bench_pick(c: &mut Criterion) {
    let mut group = c.benchmark_group("pick");
    for &n in &[100u32, 200] {
        let layer = array_layer(n);
        let filter = QueryFilter { visible_only: true };
        group.bench_function(format!("hit_n{}", n), |b| {
            b.iter(|| black_box(layer.pick(black_box(Point::new(50.1, 49.9)), filter)));
        });
        group.bench_function(format!("miss_n{}", n), |b| {
            b.iter(|| black_box(layer.pick(black_box(Point::new(50.5, 49.5)), filter)));
        });
    }
    group.finish();
}

fn bench_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("select");
    let mut layer = array_layer(200);
    let view = Affine::translate((20.0, 20.0)) * Affine::scale(4.0);
    group.throughput(Throughput::Elements(40_000));
    group.bench_function("screen_band_new_n200", |b| {
        b.iter(|| {
            black_box(layer.select_screen_band(
                Point::new(100.0, 100.0),
                Point::new(500.0, 420.0),
                view,
                SelectionMode::New,
            ))
        });
    });
    group.bench_function("rect_include_exclude_n200", |b| {
        b.iter(|| {
            let band = Rect::new(10.0, 10.0, 60.0, 60.0);
            let _ = layer.select_rect(band, SelectionMode::Include);
            black_box(layer.select_rect(band, SelectionMode::Exclude))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_pick, bench_select);
criterion_main!(benches);
