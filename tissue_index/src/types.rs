// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar abstraction, points, and comparison helpers.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Point in 2D scene space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Point2D<T> {
    /// X coordinate.
    pub x: T,
    /// Y coordinate (grows downward in screen space).
    pub y: T,
}

impl<T> Point2D<T> {
    /// Create a new point.
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// Floating-point scalar used for AABB and quad-tree coordinates.
///
/// Only `f32` and `f64` implement this. Integer coordinates do not split into
/// four equal quadrants and have no use for fuzzy comparison.
pub trait Scalar: Copy + PartialOrd + Debug {
    /// Absolute tolerance used by [`Aabb2D::fuzzy_eq`](crate::Aabb2D::fuzzy_eq).
    ///
    /// Geometry reaching the index has usually gone through a chain of
    /// pan/zoom/rotate transforms, so exact comparison is too strict.
    const FUZZY_EPSILON: Self;

    /// Zero value for the scalar type.
    fn zero() -> Self;

    /// Add two scalar values.
    fn add(a: Self, b: Self) -> Self;

    /// Subtract two scalar values: a - b.
    fn sub(a: Self, b: Self) -> Self;

    /// Half of the value (used for midpoints and quadrant sizes).
    fn half(v: Self) -> Self;

    /// Absolute difference `|a - b|`.
    fn abs_diff(a: Self, b: Self) -> Self;

    /// Whether the value is neither infinite nor NaN.
    fn is_finite(v: Self) -> bool;
}

impl Scalar for f32 {
    const FUZZY_EPSILON: Self = 1.0e-5;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn half(v: Self) -> Self {
        0.5 * v
    }

    #[inline]
    fn abs_diff(a: Self, b: Self) -> Self {
        if a >= b { a - b } else { b - a }
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }
}

impl Scalar for f64 {
    const FUZZY_EPSILON: Self = 1.0e-9;

    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn add(a: Self, b: Self) -> Self {
        a + b
    }

    #[inline]
    fn sub(a: Self, b: Self) -> Self {
        a - b
    }

    #[inline]
    fn half(v: Self) -> Self {
        0.5 * v
    }

    #[inline]
    fn abs_diff(a: Self, b: Self) -> Self {
        if a >= b { a - b } else { b - a }
    }

    #[inline]
    fn is_finite(v: Self) -> bool {
        v.is_finite()
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
