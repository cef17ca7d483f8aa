// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rubber-band selection.
//!
//! Drag bands in screen space under a zoomed and panned view, combining them
//! with the selection as new, include, and exclude.
//!
//! Run:
//! - `RUST_LOG=trace cargo run -p tissue_demos --example rubber_band`

use kurbo::{Affine, Point, Rect};
use tissue_picking::{FeatureId, FeatureLayer, LayerStyle, SelectionMode};

fn main() {
    env_logger::init();

    let mut layer = FeatureLayer::new(LayerStyle::default());
    let spots = (0..100_u32).map(|i| {
        let (col, row) = (f64::from(i % 10), f64::from(i / 10));
        (FeatureId(i), Point::new(col * 10.0 + 5.0, row * 10.0 + 5.0))
    });
    layer
        .load(Rect::new(0.0, 0.0, 100.0, 100.0), spots)
        .expect("every spot lies inside the border");

    // Scene to screen: zoom 4x, then pan by (50, 30).
    let view = Affine::translate((50.0, 30.0)) * Affine::scale(4.0);

    let drags = [
        (Point::new(60.0, 40.0), Point::new(250.0, 120.0), SelectionMode::New),
        (Point::new(60.0, 40.0), Point::new(100.0, 300.0), SelectionMode::Include),
        (Point::new(90.0, 50.0), Point::new(140.0, 90.0), SelectionMode::Exclude),
    ];
    for (origin, destiny, mode) in drags {
        match layer.select_screen_band(origin, destiny, view, mode) {
            Ok(changed) => {
                let selected = layer.selected();
                log::info!("{mode:?}: {changed} changed");
                println!("{mode:?} band {origin:?}..{destiny:?}: {changed} changed, selected {selected:?}");
            }
            Err(err) => println!("{mode:?} band failed: {err}"),
        }
    }

    // A flattened view cannot be inverted.
    let flat = Affine::scale_non_uniform(1.0, 0.0);
    if let Err(err) = layer.select_screen_band(Point::ZERO, Point::new(10.0, 10.0), flat, SelectionMode::New) {
        println!("rejected: {err}");
    }

    println!("cleared {} spots", layer.clear_selection());
}
