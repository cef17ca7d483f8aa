// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tissue Index: a bounded quad-tree over 2D points, with AABB geometry.
//!
//! Tissue Index maps scene coordinates to feature identifiers for a tissue
//! image viewer: single-click picks and rubber-band selections over tens of
//! thousands of spots.
//!
//! - [`Aabb2D`]: axis-aligned boxes in origin/size form with containment,
//!   intersection, [`cut`](Aabb2D::cut), [`join`](Aabb2D::join), half and
//!   quadrant splits, and exact plus [fuzzy](Aabb2D::fuzzy_eq) equality.
//! - [`QuadTree`]: a point index over a fixed root region. Insert and remove
//!   `(point, id)` pairs, query by exact point or by rectangle.
//! - [`FlatPoints`]: the same contract with linear scans, useful as a baseline.
//!
//! Payloads are opaque ids. The index never owns feature records; keep those
//! in your own lookup maps keyed by the same ids.
//!
//! It is generic over the scalar type `T` (`f32` or `f64`) and does not depend
//! on any geometry crate.
//!
//! # Example
//!
//! ```rust
//! use tissue_index::{Aabb2D, Point2D, QuadTree, QuadTreeConfig};
//!
//! let mut tree: QuadTree<f64, u32> = QuadTree::new(QuadTreeConfig::default()).unwrap();
//! tree.reset(Aabb2D::new(0.0, 0.0, 100.0, 100.0)).unwrap();
//!
//! tree.insert(Point2D::new(50.0, 50.0), 7).unwrap();
//! tree.insert(Point2D::new(10.0, 90.0), 8).unwrap();
//!
//! // Exact point lookup.
//! assert_eq!(tree.query_point(Point2D::new(50.0, 50.0)).unwrap(), [7]);
//!
//! // Rubber band, edges included.
//! let hits = tree.query_rect(Aabb2D::new(0.0, 50.0, 50.0, 50.0)).unwrap();
//! assert_eq!(hits, [7, 8]);
//!
//! // Points outside the root are reported, never dropped silently.
//! assert!(tree.insert(Point2D::new(150.0, 0.0), 9).is_err());
//! ```
//!
//! ## Edge semantics
//!
//! Point containment is edge-inclusive everywhere. [`Aabb2D::intersects`] only
//! reports shared area, while [`Aabb2D::touches`] also accepts shared edges:
//!
//! ```rust
//! use tissue_index::Aabb2D;
//!
//! let a = Aabb2D::new(0.0, 0.0, 1.0, 1.0);
//! let b = Aabb2D::new(1.0, 0.0, 1.0, 1.0);
//! assert!(!a.intersects(&b));
//! assert!(a.touches(&b));
//! assert!(a.cut(&b).is_empty());
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are assumed to be finite. Root bounds with NaN or infinite
//! fields are rejected; a NaN query point or rectangle matches nothing.

#![no_std]

extern crate alloc;

pub mod aabb;
pub mod backend;
pub mod error;
pub mod flat;
pub mod quadtree;
pub mod types;

#[cfg(test)]
mod testing;

pub use aabb::{Aabb2D, Half, Quadrant};
pub use backend::PointIndex;
pub use error::IndexError;
pub use flat::FlatPoints;
pub use quadtree::{MAX_DEPTH_LIMIT, QuadTree, QuadTreeConfig, QuadTreeStats};
pub use types::{Point2D, Scalar};
