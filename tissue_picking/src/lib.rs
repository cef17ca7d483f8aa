// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tissue Picking: Kurbo-native feature layer over a quad-tree.
//!
//! A [`FeatureLayer`] holds the spots of one dataset in scene coordinates.
//! It pairs a lookup map (id to position and [`FeatureFlags`]) with a
//! [`tissue_index::QuadTree`] over the same ids, and answers the two
//! interactive questions of a tissue viewer:
//!
//! - which spot is under the cursor ([`FeatureLayer::pick`]), hit-tested
//!   against the drawn [`PointShape`];
//! - which spots fall inside a rubber band ([`FeatureLayer::select_rect`] in
//!   scene space, [`FeatureLayer::select_screen_band`] from screen-space drag
//!   corners and the view transform), combined with the existing selection
//!   per [`SelectionMode`].
//!
//! Expression values, gene names, and colors stay with the caller; the layer
//! only knows ids, positions, visibility, and selection.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Affine, Point, Rect};
//! use tissue_picking::{FeatureId, FeatureLayer, LayerStyle, QueryFilter, SelectionMode};
//!
//! let mut layer = FeatureLayer::new(LayerStyle::default());
//! let spots = [
//!     (FeatureId(1), Point::new(10.0, 10.0)),
//!     (FeatureId(2), Point::new(20.0, 10.0)),
//!     (FeatureId(3), Point::new(30.0, 30.0)),
//! ];
//! layer.load(Rect::new(0.0, 0.0, 40.0, 40.0), spots).unwrap();
//!
//! // Click on a spot.
//! let hit = layer.pick(Point::new(10.2, 9.9), QueryFilter::default()).unwrap();
//! assert_eq!(hit, Some(FeatureId(1)));
//!
//! // Drag a band on screen; the view doubles scene coordinates.
//! let view = Affine::scale(2.0);
//! layer
//!     .select_screen_band(Point::new(0.0, 0.0), Point::new(50.0, 30.0), view, SelectionMode::New)
//!     .unwrap();
//! assert_eq!(layer.selected(), [FeatureId(1), FeatureId(2)]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Enable the `libm` feature when
//! building without `std`.

#![no_std]

extern crate alloc;

mod error;
mod layer;
mod types;
mod util;

pub use error::PickError;
pub use layer::FeatureLayer;
pub use types::{FeatureFlags, FeatureId, LayerStyle, PointShape, QueryFilter, SelectionMode};
