// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector of points with linear scans. Small and simple; the reference
//! answer every other index must agree with.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::aabb::Aabb2D;
use crate::backend::PointIndex;
use crate::error::IndexError;
use crate::types::{Point2D, Scalar};

/// Unbounded point list with linear-scan queries.
///
/// Accepts any point, so inserts never fail.
#[derive(Clone)]
pub struct FlatPoints<T: Scalar, P: Copy + PartialEq + Debug> {
    entries: Vec<(Point2D<T>, P)>,
}

impl<T: Scalar, P: Copy + PartialEq + Debug> Default for FlatPoints<T, P> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Scalar, P: Copy + PartialEq + Debug> FlatPoints<T, P> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over all stored entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Point2D<T>, P)> + '_ {
        self.entries.iter().copied()
    }
}

impl<T: Scalar, P: Copy + PartialEq + Debug> Debug for FlatPoints<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatPoints")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, P: Copy + PartialEq + Debug> FromIterator<(Point2D<T>, P)> for FlatPoints<T, P> {
    fn from_iter<I: IntoIterator<Item = (Point2D<T>, P)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<T: Scalar, P: Copy + PartialEq + Debug> PointIndex<T, P> for FlatPoints<T, P> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn insert(&mut self, point: Point2D<T>, payload: P) -> Result<(), IndexError<T>> {
        self.entries.push((point, payload));
        Ok(())
    }

    fn remove(&mut self, point: Point2D<T>, payload: P) -> bool {
        match self
            .entries
            .iter()
            .position(|&(p, id)| p == point && id == payload)
        {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn visit_point<F: FnMut(P)>(&self, point: Point2D<T>, mut f: F) -> Result<(), IndexError<T>> {
        for &(p, id) in &self.entries {
            if p == point {
                f(id);
            }
        }
        Ok(())
    }

    fn visit_rect<F: FnMut(P)>(&self, rect: Aabb2D<T>, mut f: F) -> Result<(), IndexError<T>> {
        for &(p, id) in &self.entries {
            if rect.contains_point(p) {
                f(id);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_query_remove() {
        let mut flat: FlatPoints<f64, u32> = FlatPoints::new();
        flat.insert(Point2D::new(1.0, 1.0), 1).unwrap();
        flat.insert(Point2D::new(5.0, 5.0), 2).unwrap();
        flat.insert(Point2D::new(5.0, 5.0), 3).unwrap();

        assert_eq!(flat.query_point(Point2D::new(5.0, 5.0)).unwrap(), [2, 3]);
        assert_eq!(
            flat.query_rect(Aabb2D::new(0.0, 0.0, 1.0, 1.0)).unwrap(),
            [1]
        );

        assert!(flat.remove(Point2D::new(5.0, 5.0), 2));
        assert!(!flat.remove(Point2D::new(5.0, 5.0), 2));
        assert_eq!(flat.len(), 2);

        flat.clear();
        assert!(flat.is_empty());
    }
}
