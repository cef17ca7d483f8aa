// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking basics.
//!
//! Load a small spot array, click on spots, hide one, and pick again.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p tissue_demos --example picking_basics`

use kurbo::{Point, Rect};
use tissue_picking::{FeatureId, FeatureLayer, LayerStyle, PointShape, QueryFilter};

fn main() {
    env_logger::init();

    let mut layer = FeatureLayer::new(LayerStyle {
        shape: PointShape::Cross,
        size: 0.9,
    });

    // 33 x 35 array, one unit apart, like a capture chip.
    let spots = (0..33_u32 * 35).map(|i| {
        let (col, row) = (f64::from(i % 33), f64::from(i / 33));
        (FeatureId(i), Point::new(col + 1.0, row + 1.0))
    });
    let loaded = layer
        .load(Rect::new(0.0, 0.0, 34.0, 36.0), spots)
        .expect("every spot lies inside the border");
    println!("loaded {loaded} spots, border {:?}", layer.border());

    let visible = QueryFilter { visible_only: true };
    for click in [
        Point::new(1.0, 1.0),
        Point::new(5.3, 7.0),
        Point::new(5.3, 7.3),
        Point::new(40.0, 40.0),
    ] {
        match layer.pick(click, visible) {
            Ok(Some(id)) => println!("click {click:?}: {id} at {:?}", layer.position(id)),
            Ok(None) => println!("click {click:?}: nothing"),
            Err(err) => println!("click {click:?}: {err}"),
        }
    }

    // Hidden spots are skipped unless the filter asks for everything.
    let hidden = FeatureId(0);
    layer.set_visible(hidden, false).expect("spot 0 exists");
    println!(
        "after hiding {hidden}: visible pick {:?}, unfiltered pick {:?}",
        layer.pick(Point::new(1.0, 1.0), visible),
        layer.pick(Point::new(1.0, 1.0), QueryFilter::default()),
    );

    println!("index: {:?}", layer.index().stats());
}
