// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point index trait shared by the quad-tree and the linear-scan baseline.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::aabb::Aabb2D;
use crate::error::IndexError;
use crate::types::{Point2D, Scalar};

/// A set of `(point, payload)` entries answering point and rectangle queries.
///
/// Payloads are opaque identifiers (typically `u32` feature ids) that refer to
/// records owned elsewhere. The same `(point, payload)` pair may be stored more
/// than once; each copy counts towards [`len`](PointIndex::len).
pub trait PointIndex<T: Scalar, P: Copy + PartialEq + Debug> {
    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Whether no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a payload at a point.
    fn insert(&mut self, point: Point2D<T>, payload: P) -> Result<(), IndexError<T>>;

    /// Remove one entry matching both point and payload exactly.
    ///
    /// Returns `false` if nothing matched. That is not an error.
    fn remove(&mut self, point: Point2D<T>, payload: P) -> bool;

    /// Remove all entries.
    fn clear(&mut self);

    /// Visit payloads stored at exactly `point`.
    fn visit_point<F: FnMut(P)>(&self, point: Point2D<T>, f: F) -> Result<(), IndexError<T>>;

    /// Visit payloads whose point lies in `rect`, edges included.
    fn visit_rect<F: FnMut(P)>(&self, rect: Aabb2D<T>, f: F) -> Result<(), IndexError<T>>;

    /// Collect payloads stored at exactly `point`.
    ///
    /// The default implementation collects [`visit_point`](PointIndex::visit_point).
    fn query_point(&self, point: Point2D<T>) -> Result<Vec<P>, IndexError<T>> {
        let mut out = Vec::new();
        self.visit_point(point, |p| out.push(p))?;
        Ok(out)
    }

    /// Collect payloads whose point lies in `rect`, edges included.
    ///
    /// The default implementation collects [`visit_rect`](PointIndex::visit_rect).
    fn query_rect(&self, rect: Aabb2D<T>) -> Result<Vec<P>, IndexError<T>> {
        let mut out = Vec::new();
        self.visit_rect(rect, |p| out.push(p))?;
        Ok(out)
    }
}
