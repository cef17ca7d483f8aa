// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the point indexes.

use core::fmt::Debug;

use crate::aabb::Aabb2D;
use crate::types::Point2D;

/// Error returned by [`QuadTree`](crate::QuadTree) and other [`PointIndex`](crate::PointIndex)
/// implementations.
///
/// All variants are recoverable. Removing an entry that is not stored is not an
/// error at all.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum IndexError<T: Debug> {
    /// The root region has a non-positive or non-finite dimension.
    #[error("invalid root bounds {bounds:?}: width and height must be finite and positive")]
    InvalidBounds {
        /// The rejected bounds.
        bounds: Aabb2D<T>,
    },
    /// The configuration cannot hold any entry.
    #[error("invalid configuration: leaf capacity {leaf_capacity} must be at least 1")]
    InvalidConfig {
        /// The rejected leaf capacity.
        leaf_capacity: usize,
    },
    /// A point was inserted outside the root region.
    #[error("point {point:?} lies outside the root bounds {bounds:?}")]
    OutOfBounds {
        /// The rejected point.
        point: Point2D<T>,
        /// The current root bounds.
        bounds: Aabb2D<T>,
    },
    /// The index was used before a root region was set with `reset`.
    #[error("index has no root bounds; call `reset` first")]
    Unbounded,
}
