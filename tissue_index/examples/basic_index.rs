// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Tissue Index: reset, insert, query, remove.

use tissue_index::{Aabb2D, Point2D, QuadTree, QuadTreeConfig};

fn main() {
    let mut tree: QuadTree<f64, u32> =
        QuadTree::new(QuadTreeConfig::default()).expect("default config is valid");
    tree.reset(Aabb2D::new(0.0, 0.0, 100.0, 100.0))
        .expect("bounds are positive");

    for id in 0..16_u32 {
        let v = f64::from(id) * 6.25;
        tree.insert(Point2D::new(v, 100.0 - v), id)
            .expect("points lie inside the root");
    }

    // Rubber band over the lower-left corner
    let band = Aabb2D::from_points(Point2D::new(0.0, 60.0), Point2D::new(40.0, 100.0));
    println!("band {:?} selects {:?}", band, tree.query_rect(band));

    // Out-of-bounds inserts are reported
    if let Err(err) = tree.insert(Point2D::new(120.0, 10.0), 99) {
        println!("rejected: {err}");
    }

    tree.remove(Point2D::new(0.0, 100.0), 0);
    println!("after removal: {} entries, {:?}", tree.len(), tree.stats());
}
