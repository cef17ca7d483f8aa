// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between Kurbo geometry and the index types.

use kurbo::{Affine, Point, Rect};
use tissue_index::{Aabb2D, Point2D};

pub(crate) fn point_to_index(p: Point) -> Point2D<f64> {
    Point2D::new(p.x, p.y)
}

/// Normalized `Rect` to origin/size box.
pub(crate) fn rect_to_aabb(r: Rect) -> Aabb2D<f64> {
    let r = r.abs();
    Aabb2D::new(r.x0, r.y0, r.width(), r.height())
}

pub(crate) fn aabb_to_rect(a: Aabb2D<f64>) -> Rect {
    Rect::new(a.x, a.y, a.max_x(), a.max_y())
}

/// Screen-space rubber band between two drag corners.
///
/// One pixel is added to the far edges so a click without movement still
/// covers the pixel under the cursor.
pub(crate) fn band_rect(origin: Point, destiny: Point) -> Rect {
    let r = Rect::from_points(origin, destiny);
    Rect::new(r.x0, r.y0, r.x1 + 1.0, r.y1 + 1.0)
}

/// Conservative axis-aligned bounds of `rect` mapped through `affine`.
pub(crate) fn transform_rect_bbox(affine: Affine, rect: Rect) -> Rect {
    let p0 = affine * Point::new(rect.x0, rect.y0);
    let p1 = affine * Point::new(rect.x1, rect.y0);
    let p2 = affine * Point::new(rect.x0, rect.y1);
    let p3 = affine * Point::new(rect.x1, rect.y1);
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}

pub(crate) fn rect_is_finite(r: Rect) -> bool {
    r.x0.is_finite() && r.y0.is_finite() && r.x1.is_finite() && r.y1.is_finite()
}
