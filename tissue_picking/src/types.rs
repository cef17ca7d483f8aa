// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the feature layer: ids, flags, styles, and selection modes.

use core::fmt;

use kurbo::Point;

/// Identifier of a feature (a spot on the tissue array).
///
/// The layer only stores this id and the spot position. Expression values,
/// gene names, and everything else about a feature live with the caller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeatureId(pub u32);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "feature#{}", self.0)
    }
}

bitflags::bitflags! {
    /// Per-feature state flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct FeatureFlags: u8 {
        /// Feature is drawn and takes part in picking and rubber-band selection.
        const VISIBLE  = 0b0000_0001;
        /// Feature is part of the current selection.
        const SELECTED = 0b0000_0010;
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Visual shape of a spot, used for precise hit testing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointShape {
    /// Disc with diameter `size`.
    #[default]
    Circle,
    /// Plus sign spanning `size` with arms one third of `size` thick.
    Cross,
    /// Axis-aligned square with side `size`.
    Square,
}

impl PointShape {
    /// Whether `p` hits a spot of this shape drawn at `center` with extent `size`.
    ///
    /// Edges count as hits.
    pub fn contains(self, center: Point, size: f64, p: Point) -> bool {
        let d = p - center;
        let half = 0.5 * size;
        let (dx2, dy2, half2) = (d.x * d.x, d.y * d.y, half * half);
        match self {
            Self::Circle => dx2 + dy2 <= half2,
            Self::Square => dx2 <= half2 && dy2 <= half2,
            Self::Cross => {
                let arm = size / 6.0;
                let arm2 = arm * arm;
                (dx2 <= half2 && dy2 <= arm2) || (dy2 <= half2 && dx2 <= arm2)
            }
        }
    }
}

/// Visual attributes the layer needs for picking.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LayerStyle {
    /// Spot shape.
    pub shape: PointShape,
    /// Spot extent in scene units (diameter for circles, side for squares).
    pub size: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            shape: PointShape::Circle,
            size: 1.0,
        }
    }
}

/// How a rubber band combines with the existing selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// Replace the selection with the features in the band.
    #[default]
    New,
    /// Add the features in the band to the selection.
    Include,
    /// Remove the features in the band from the selection.
    Exclude,
}

/// Filters applied during picking and rectangle queries.
///
/// Used by [`FeatureLayer::pick`](crate::FeatureLayer::pick) and
/// [`FeatureLayer::features_in_rect`](crate::FeatureLayer::features_in_rect).
#[derive(Clone, Copy, Debug, Default)]
pub struct QueryFilter {
    /// If true, only consider features marked [`FeatureFlags::VISIBLE`].
    pub visible_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn circle_hit_is_edge_inclusive() {
        let c = Point::new(10.0, 10.0);
        assert!(PointShape::Circle.contains(c, 4.0, Point::new(12.0, 10.0)));
        assert!(!PointShape::Circle.contains(c, 4.0, Point::new(11.5, 11.5)));
        assert!(PointShape::Circle.contains(c, 4.0, Point::new(11.4, 11.4)));
    }

    #[test]
    fn square_covers_corners_circle_does_not() {
        let c = Point::ZERO;
        let corner = Point::new(1.0, 1.0);
        assert!(PointShape::Square.contains(c, 2.0, corner));
        assert!(!PointShape::Circle.contains(c, 2.0, corner));
        assert!(!PointShape::Square.contains(c, 2.0, Point::new(1.1, 0.0)));
    }

    #[test]
    fn cross_hits_arms_only() {
        let c = Point::ZERO;
        // Arms are 1.0 thick for size 6.0.
        assert!(PointShape::Cross.contains(c, 6.0, Point::new(3.0, 0.0)));
        assert!(PointShape::Cross.contains(c, 6.0, Point::new(0.0, -3.0)));
        assert!(PointShape::Cross.contains(c, 6.0, Point::new(2.0, 0.5)));
        assert!(!PointShape::Cross.contains(c, 6.0, Point::new(2.0, 2.0)));
        assert!(!PointShape::Cross.contains(c, 6.0, Point::new(3.5, 0.0)));
    }

    #[test]
    fn defaults() {
        assert_eq!(FeatureFlags::default(), FeatureFlags::VISIBLE);
        assert_eq!(SelectionMode::default(), SelectionMode::New);
        assert_eq!(LayerStyle::default().shape, PointShape::Circle);
        assert_eq!(FeatureId(3).to_string(), "feature#3");
    }
}
