// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feature layer: spot positions, flags, picking, and rubber-band selection.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use kurbo::{Affine, Point, Rect};
use tissue_index::{QuadTree, QuadTreeConfig};

use crate::error::PickError;
use crate::types::{FeatureFlags, FeatureId, LayerStyle, QueryFilter, SelectionMode};
use crate::util::{
    aabb_to_rect, band_rect, point_to_index, rect_is_finite, rect_to_aabb, transform_rect_bbox,
};

#[derive(Clone, Copy, Debug)]
struct FeatureState {
    position: Point,
    flags: FeatureFlags,
}

/// Spots of one dataset, indexed for picking and selection.
///
/// The layer keeps a lookup map from [`FeatureId`] to position and flags next
/// to a [`QuadTree`] over the same ids. Both are replaced together on
/// [`reset`](Self::reset) and [`load`](Self::load).
///
/// All geometry is in scene coordinates except for
/// [`select_screen_band`](Self::select_screen_band), which takes screen points
/// and the current view transform.
pub struct FeatureLayer {
    style: LayerStyle,
    features: HashMap<FeatureId, FeatureState>,
    index: QuadTree<f64, FeatureId>,
}

impl fmt::Debug for FeatureLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selected = self
            .features
            .values()
            .filter(|s| s.flags.contains(FeatureFlags::SELECTED))
            .count();
        f.debug_struct("FeatureLayer")
            .field("style", &self.style)
            .field("border", &self.border())
            .field("features", &self.features.len())
            .field("selected", &selected)
            .finish_non_exhaustive()
    }
}

impl Default for FeatureLayer {
    fn default() -> Self {
        Self::new(LayerStyle::default())
    }
}

impl FeatureLayer {
    /// Create an empty layer with the default index configuration.
    ///
    /// The layer has no border until [`reset`](Self::reset) or
    /// [`load`](Self::load) is called.
    pub fn new(style: LayerStyle) -> Self {
        Self {
            style,
            features: HashMap::new(),
            index: QuadTree::default(),
        }
    }

    /// Create an empty layer with a custom index configuration.
    pub fn with_config(style: LayerStyle, config: QuadTreeConfig) -> Result<Self, PickError> {
        Ok(Self {
            style,
            features: HashMap::new(),
            index: QuadTree::new(config)?,
        })
    }

    /// Current style.
    pub fn style(&self) -> LayerStyle {
        self.style
    }

    /// Change shape or size used for picking. Positions are unaffected.
    pub fn set_style(&mut self, style: LayerStyle) {
        self.style = style;
    }

    /// Scene border of the dataset, or `None` before the first reset.
    pub fn border(&self) -> Option<Rect> {
        self.index.bounds().map(aabb_to_rect)
    }

    /// Read-only access to the underlying index.
    pub fn index(&self) -> &QuadTree<f64, FeatureId> {
        &self.index
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the layer holds no features.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Drop all features and re-root the index over `border`.
    ///
    /// `border` is normalized first. A border without area leaves the layer
    /// untouched.
    pub fn reset(&mut self, border: Rect) -> Result<(), PickError> {
        self.index.reset(rect_to_aabb(border))?;
        self.features.clear();
        log::debug!("feature layer reset to {:?}", border);
        Ok(())
    }

    /// Reset to `border` and insert every feature.
    ///
    /// Stops at the first feature that cannot be stored; features inserted
    /// before it stay in the layer. Returns the number of features loaded.
    pub fn load<I>(&mut self, border: Rect, features: I) -> Result<usize, PickError>
    where
        I: IntoIterator<Item = (FeatureId, Point)>,
    {
        self.reset(border)?;
        for (id, position) in features {
            self.insert(id, position)?;
        }
        log::debug!("loaded {} features into {:?}", self.len(), border);
        Ok(self.len())
    }

    /// Add a visible, unselected feature at `position`.
    pub fn insert(&mut self, id: FeatureId, position: Point) -> Result<(), PickError> {
        if self.features.contains_key(&id) {
            return Err(PickError::DuplicateFeature(id));
        }
        if !position.is_finite() {
            return Err(PickError::NonFinitePosition(id));
        }
        self.index.insert(point_to_index(position), id)?;
        self.features.insert(
            id,
            FeatureState {
                position,
                flags: FeatureFlags::default(),
            },
        );
        Ok(())
    }

    /// Remove a feature. Returns `false` if it was not present.
    pub fn remove(&mut self, id: FeatureId) -> bool {
        let Some(state) = self.features.remove(&id) else {
            return false;
        };
        let removed = self.index.remove(point_to_index(state.position), id);
        debug_assert!(removed, "lookup map and index disagree about {id}");
        true
    }

    /// Remove all features, keeping the border.
    pub fn clear(&mut self) {
        self.features.clear();
        self.index.clear();
    }

    /// Scene position of a feature.
    pub fn position(&self, id: FeatureId) -> Option<Point> {
        self.features.get(&id).map(|s| s.position)
    }

    /// Flags of a feature.
    pub fn flags(&self, id: FeatureId) -> Option<FeatureFlags> {
        self.features.get(&id).map(|s| s.flags)
    }

    /// Whether a feature is currently selected.
    pub fn is_selected(&self, id: FeatureId) -> bool {
        self.flags(id)
            .is_some_and(|f| f.contains(FeatureFlags::SELECTED))
    }

    /// Show or hide a feature. Hidden features keep their selection state.
    pub fn set_visible(&mut self, id: FeatureId, visible: bool) -> Result<(), PickError> {
        let state = self
            .features
            .get_mut(&id)
            .ok_or(PickError::UnknownFeature(id))?;
        state.flags.set(FeatureFlags::VISIBLE, visible);
        Ok(())
    }

    /// All features in unspecified order.
    pub fn features(&self) -> impl Iterator<Item = (FeatureId, Point, FeatureFlags)> + '_ {
        self.features
            .iter()
            .map(|(&id, s)| (id, s.position, s.flags))
    }

    /// The feature drawn under `point`, if any.
    ///
    /// Candidates come from the index within half the spot size of `point`
    /// and are then hit-tested against the spot shape. When spots overlap the
    /// one whose center is closest wins, ties going to the lower id.
    pub fn pick(&self, point: Point, filter: QueryFilter) -> Result<Option<FeatureId>, PickError> {
        let size = self.style.size.max(0.0);
        let half = 0.5 * size;
        let window = Rect::new(point.x - half, point.y - half, point.x + half, point.y + half);

        let mut best: Option<(f64, FeatureId)> = None;
        self.index.visit_rect(rect_to_aabb(window), |id| {
            let Some(state) = self.features.get(&id) else {
                return;
            };
            if filter.visible_only && !state.flags.contains(FeatureFlags::VISIBLE) {
                return;
            }
            if !self.style.shape.contains(state.position, size, point) {
                return;
            }
            let d2 = (state.position - point).hypot2();
            let closer = match best {
                None => true,
                Some((bd2, bid)) => d2 < bd2 || (d2 == bd2 && id < bid),
            };
            if closer {
                best = Some((d2, id));
            }
        })?;
        Ok(best.map(|(_, id)| id))
    }

    /// Ids of features whose centers lie in `rect` (edges included), sorted.
    pub fn features_in_rect(&self, rect: Rect, filter: QueryFilter) -> Result<Vec<FeatureId>, PickError> {
        let mut out = Vec::new();
        self.index.visit_rect(rect_to_aabb(rect), |id| {
            let visible = self
                .features
                .get(&id)
                .is_some_and(|s| s.flags.contains(FeatureFlags::VISIBLE));
            if visible || !filter.visible_only {
                out.push(id);
            }
        })?;
        out.sort_unstable();
        Ok(out)
    }

    /// Rubber-band selection over a scene rectangle.
    ///
    /// Only visible features are picked up by the band. With
    /// [`SelectionMode::New`] every feature outside the band, hidden ones
    /// included, is deselected. Returns the number of features whose
    /// selection state changed.
    pub fn select_rect(&mut self, rect: Rect, mode: SelectionMode) -> Result<usize, PickError> {
        let hits = self.features_in_rect(rect, QueryFilter { visible_only: true })?;
        let changed = self.apply_selection(&hits, mode);
        log::trace!(
            "{:?} band {:?}: {} hits, {} changed",
            mode,
            rect,
            hits.len(),
            changed
        );
        Ok(changed)
    }

    /// Rubber-band selection from two screen-space drag corners.
    ///
    /// The corners are normalized, grown by one pixel, and mapped into the
    /// scene through the inverse of `view` (scene to screen). Under rotation
    /// the scene rectangle is the bounding box of the mapped band.
    pub fn select_screen_band(
        &mut self,
        origin: Point,
        destiny: Point,
        view: Affine,
        mode: SelectionMode,
    ) -> Result<usize, PickError> {
        if view.determinant() == 0.0 {
            return Err(PickError::SingularTransform);
        }
        let scene = transform_rect_bbox(view.inverse(), band_rect(origin, destiny));
        if !rect_is_finite(scene) {
            return Err(PickError::SingularTransform);
        }
        self.select_rect(scene, mode)
    }

    /// Select features by id, combining with the current selection per `mode`.
    ///
    /// Unknown ids are skipped. Visibility is not consulted. Returns the
    /// number of features whose selection state changed.
    pub fn select_ids<I>(&mut self, ids: I, mode: SelectionMode) -> usize
    where
        I: IntoIterator<Item = FeatureId>,
    {
        let ids: Vec<FeatureId> = ids
            .into_iter()
            .filter(|id| self.features.contains_key(id))
            .collect();
        self.apply_selection(&ids, mode)
    }

    /// Deselect everything. Returns the number of features deselected.
    pub fn clear_selection(&mut self) -> usize {
        self.apply_selection(&[], SelectionMode::New)
    }

    /// Selected ids, sorted.
    pub fn selected(&self) -> Vec<FeatureId> {
        let mut out: Vec<FeatureId> = self
            .features
            .iter()
            .filter(|(_, s)| s.flags.contains(FeatureFlags::SELECTED))
            .map(|(&id, _)| id)
            .collect();
        out.sort_unstable();
        out
    }

    fn apply_selection(&mut self, hits: &[FeatureId], mode: SelectionMode) -> usize {
        let mut changed = 0;
        let mut flip = |state: &mut FeatureState, want: bool| {
            if state.flags.contains(FeatureFlags::SELECTED) != want {
                state.flags.set(FeatureFlags::SELECTED, want);
                changed += 1;
            }
        };
        match mode {
            SelectionMode::New => {
                let hit_set: HashSet<FeatureId> = hits.iter().copied().collect();
                for (id, state) in &mut self.features {
                    flip(state, hit_set.contains(id));
                }
            }
            SelectionMode::Include | SelectionMode::Exclude => {
                let want = mode == SelectionMode::Include;
                for id in hits {
                    if let Some(state) = self.features.get_mut(id) {
                        flip(state, want);
                    }
                }
            }
        }
        changed
    }
}
