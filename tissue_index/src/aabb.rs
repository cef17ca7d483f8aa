// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned bounding boxes in origin/size form.
//!
//! [`Aabb2D`] describes both the regions of the quad-tree and ad-hoc query
//! rectangles such as a rubber band. Boxes are stored as a top-left corner plus
//! a size, matching screen-space conventions where `y` grows downward.
//!
//! ## Edge conventions
//!
//! - [`Aabb2D::contains_point`] and [`Aabb2D::contains`] are edge-inclusive.
//!   A point on the border of a tile counts as inside it.
//! - [`Aabb2D::intersects`] requires shared *area*. Two boxes that only share
//!   an edge or a corner do not intersect, and their [`cut`](Aabb2D::cut) is
//!   [`Aabb2D::zero`].
//! - [`Aabb2D::touches`] is the boundary-inclusive variant. Region queries prune
//!   with it so that points sitting on a subdivision line are never skipped.

use crate::types::{Point2D, Scalar, le, lt, max_t, min_t};

/// Axis-aligned bounding box in 2D, stored as origin and size.
///
/// `PartialEq` is exact, field-by-field equality. Use [`Aabb2D::fuzzy_eq`] for
/// geometry that went through floating-point transforms.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb2D<T> {
    /// Left edge.
    pub x: T,
    /// Top edge.
    pub y: T,
    /// Horizontal extent, non-negative for a well-formed box.
    pub width: T,
    /// Vertical extent, non-negative for a well-formed box.
    pub height: T,
}

/// Selects one half of a box, see [`Aabb2D::split_half`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Half {
    /// Upper half (horizontal cut).
    Top,
    /// Lower half (horizontal cut).
    Bottom,
    /// Left half (vertical cut).
    Left,
    /// Right half (vertical cut).
    Right,
}

/// Selects one of four equal quadrants, see [`Aabb2D::split`].
///
/// The discriminant encodes the position: bit 0 set means right, bit 1 set
/// means bottom.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Quadrant {
    /// Top-left quadrant.
    TopLeft = 0,
    /// Top-right quadrant.
    TopRight = 1,
    /// Bottom-left quadrant.
    BottomLeft = 2,
    /// Bottom-right quadrant.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in enumeration order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this quadrant lies on the right half.
    pub const fn is_right(self) -> bool {
        (self as u8) & 0b01 != 0
    }

    /// Whether this quadrant lies on the bottom half.
    pub const fn is_bottom(self) -> bool {
        (self as u8) & 0b10 != 0
    }

    const fn from_sides(right: bool, bottom: bool) -> Self {
        match (right, bottom) {
            (false, false) => Self::TopLeft,
            (true, false) => Self::TopRight,
            (false, true) => Self::BottomLeft,
            (true, true) => Self::BottomRight,
        }
    }
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from its top-left corner and size.
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Scalar> Aabb2D<T> {
    /// The canonical empty box at the origin.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::zero())
    }

    /// Create the AABB spanned by two corner points, in either order.
    pub fn from_points(p0: Point2D<T>, p1: Point2D<T>) -> Self {
        let x = min_t(p0.x, p1.x);
        let y = min_t(p0.y, p1.y);
        Self {
            x,
            y,
            width: T::sub(max_t(p0.x, p1.x), x),
            height: T::sub(max_t(p0.y, p1.y), y),
        }
    }

    /// Create an AABB from a position and a size given as a point.
    pub fn from_origin_size(origin: Point2D<T>, size: Point2D<T>) -> Self {
        Self::new(origin.x, origin.y, size.x, size.y)
    }

    /// Top-left corner.
    pub fn position(&self) -> Point2D<T> {
        Point2D::new(self.x, self.y)
    }

    /// Bottom-right corner.
    pub fn end(&self) -> Point2D<T> {
        Point2D::new(self.max_x(), self.max_y())
    }

    /// Center point.
    pub fn middle(&self) -> Point2D<T> {
        Point2D::new(
            T::add(self.x, T::half(self.width)),
            T::add(self.y, T::half(self.height)),
        )
    }

    /// Width and height as a point.
    pub fn size(&self) -> Point2D<T> {
        Point2D::new(self.width, self.height)
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> T {
        T::add(self.x, self.width)
    }

    /// Bottom edge.
    #[inline]
    pub fn max_y(&self) -> T {
        T::add(self.y, self.height)
    }

    /// Whether this box has no area. Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        le(self.width, T::zero()) || le(self.height, T::zero())
    }

    /// Whether all fields are finite and both dimensions are strictly positive.
    ///
    /// This is what a quad-tree root must satisfy.
    pub fn is_valid(&self) -> bool {
        T::is_finite(self.x)
            && T::is_finite(self.y)
            && T::is_finite(self.width)
            && T::is_finite(self.height)
            && lt(T::zero(), self.width)
            && lt(T::zero(), self.height)
    }

    /// Whether the point lies inside the box, edges included.
    pub fn contains_point(&self, p: Point2D<T>) -> bool {
        le(self.x, p.x) && le(p.x, self.max_x()) && le(self.y, p.y) && le(p.y, self.max_y())
    }

    /// Whether `other` is fully enclosed by this box, edges included.
    pub fn contains(&self, other: &Self) -> bool {
        le(self.x, other.x)
            && le(self.y, other.y)
            && le(other.max_x(), self.max_x())
            && le(other.max_y(), self.max_y())
    }

    /// Whether the two boxes share area. Touching edges do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        lt(self.x, other.max_x())
            && lt(other.x, self.max_x())
            && lt(self.y, other.max_y())
            && lt(other.y, self.max_y())
    }

    /// Whether the two boxes share area or boundary.
    pub fn touches(&self, other: &Self) -> bool {
        le(self.x, other.max_x())
            && le(other.x, self.max_x())
            && le(self.y, other.max_y())
            && le(other.y, self.max_y())
    }

    /// The shared area of both boxes, or [`Aabb2D::zero`] if they do not
    /// [intersect](Aabb2D::intersects).
    pub fn cut(&self, other: &Self) -> Self {
        if !self.intersects(other) {
            return Self::zero();
        }
        let x = max_t(self.x, other.x);
        let y = max_t(self.y, other.y);
        Self {
            x,
            y,
            width: T::sub(min_t(self.max_x(), other.max_x()), x),
            height: T::sub(min_t(self.max_y(), other.max_y()), y),
        }
    }

    /// The smallest box enclosing both boxes, which may be disjoint.
    pub fn join(&self, other: &Self) -> Self {
        let x = min_t(self.x, other.x);
        let y = min_t(self.y, other.y);
        Self {
            x,
            y,
            width: T::sub(max_t(self.max_x(), other.max_x()), x),
            height: T::sub(max_t(self.max_y(), other.max_y()), y),
        }
    }

    /// One half of the box.
    pub fn split_half(&self, half: Half) -> Self {
        let hw = T::half(self.width);
        let hh = T::half(self.height);
        match half {
            Half::Top => Self::new(self.x, self.y, self.width, hh),
            Half::Bottom => Self::new(self.x, T::add(self.y, hh), self.width, hh),
            Half::Left => Self::new(self.x, self.y, hw, self.height),
            Half::Right => Self::new(T::add(self.x, hw), self.y, hw, self.height),
        }
    }

    /// One of four equally sized quadrants.
    pub fn split(&self, quadrant: Quadrant) -> Self {
        let hw = T::half(self.width);
        let hh = T::half(self.height);
        let x = if quadrant.is_right() {
            T::add(self.x, hw)
        } else {
            self.x
        };
        let y = if quadrant.is_bottom() {
            T::add(self.y, hh)
        } else {
            self.y
        };
        Self::new(x, y, hw, hh)
    }

    /// The quadrant a point falls into.
    ///
    /// Points on the vertical or horizontal midline resolve to the lower-indexed
    /// quadrant (left before right, top before bottom). The point is not
    /// required to lie inside the box.
    pub fn quadrant_of(&self, p: Point2D<T>) -> Quadrant {
        let mid = self.middle();
        Quadrant::from_sides(lt(mid.x, p.x), lt(mid.y, p.y))
    }

    /// Whether all four fields match within [`Scalar::FUZZY_EPSILON`].
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        let eps = T::FUZZY_EPSILON;
        le(T::abs_diff(self.x, other.x), eps)
            && le(T::abs_diff(self.y, other.y), eps)
            && le(T::abs_diff(self.width, other.width), eps)
            && le(T::abs_diff(self.height, other.height), eps)
    }
}
