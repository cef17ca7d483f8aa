// Copyright 2025 the Tissue Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded quad-tree over points.
//!
//! The tree covers a fixed root region chosen with [`QuadTree::reset`]. Leaves
//! split into four equal quadrants once they hold more than
//! [`QuadTreeConfig::leaf_capacity`] entries, down to
//! [`QuadTreeConfig::max_depth`]. Leaves at the maximum depth keep every entry
//! they receive. Removing entries merges sparse quadrants back into their
//! parent.
//!
//! Both insertion and queries descend by comparing against each node's split
//! lines. A point on a vertical split line belongs to the left quadrants, a
//! point on a horizontal split line belongs to the top quadrants. Because
//! queries make the same comparisons, region queries agree exactly with a
//! linear scan even when quadrant sizes accumulate rounding error.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::aabb::{Aabb2D, Quadrant};
use crate::backend::PointIndex;
use crate::error::IndexError;
use crate::types::{Point2D, Scalar, le, lt};

/// Deepest subdivision level accepted by [`QuadTreeConfig`].
///
/// Even `f64` quadrants stop shrinking meaningfully past this point.
pub const MAX_DEPTH_LIMIT: u8 = 32;

/// Subdivision policy of a [`QuadTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadTreeConfig {
    /// Deepest level a leaf may sit at. The root is level 0.
    pub max_depth: u8,
    /// Entries a leaf holds before it splits, unless it is at `max_depth`.
    pub leaf_capacity: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            leaf_capacity: 8,
        }
    }
}

impl QuadTreeConfig {
    /// Replace the maximum depth, clamped to [`MAX_DEPTH_LIMIT`].
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = if max_depth > MAX_DEPTH_LIMIT {
            MAX_DEPTH_LIMIT
        } else {
            max_depth
        };
        self
    }

    /// Replace the leaf capacity.
    #[must_use]
    pub const fn with_leaf_capacity(mut self, leaf_capacity: usize) -> Self {
        self.leaf_capacity = leaf_capacity;
        self
    }

    fn validate<T: Debug>(self) -> Result<Self, IndexError<T>> {
        if self.leaf_capacity == 0 {
            return Err(IndexError::InvalidConfig {
                leaf_capacity: self.leaf_capacity,
            });
        }
        Ok(self.with_max_depth(self.max_depth))
    }
}

/// Shape of the node structure, for diagnostics and tests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QuadTreeStats {
    /// Reachable nodes, including the root.
    pub node_count: usize,
    /// Reachable leaves.
    pub leaf_count: usize,
    /// Depth of the deepest leaf.
    pub max_depth: u8,
    /// Stored entries.
    pub entry_count: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const ROOT: Self = Self(0);

    const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
struct QNode<T, P> {
    region: Aabb2D<T>,
    depth: u8,
    parent: Option<NodeIdx>,
    entries: Vec<(Point2D<T>, P)>,
    children: Option<[NodeIdx; 4]>,
}

impl<T, P> QNode<T, P> {
    fn leaf(region: Aabb2D<T>, depth: u8, parent: Option<NodeIdx>) -> Self {
        Self {
            region,
            depth,
            parent,
            entries: Vec::new(),
            children: None,
        }
    }
}

/// Quad-tree over `(point, payload)` entries inside a fixed root region.
///
/// A fresh tree from [`QuadTree::new`] is *unbounded*: inserts and queries
/// report [`IndexError::Unbounded`] until [`QuadTree::reset`] sets the root
/// region. Points outside the root are rejected with
/// [`IndexError::OutOfBounds`] rather than growing the tree.
///
/// The tree is meant to be rebuilt when the dataset changes. It performs no
/// locking; build it on any thread, then move it to the thread that queries it.
pub struct QuadTree<T: Scalar, P: Copy + PartialEq + Debug> {
    config: QuadTreeConfig,
    bounds: Option<Aabb2D<T>>,
    // Slot 0 is the root whenever `bounds` is set. Freed slots are reset to
    // empty leaves and listed in `free_list`.
    arena: Vec<QNode<T, P>>,
    free_list: Vec<usize>,
    len: usize,
}

impl<T: Scalar, P: Copy + PartialEq + Debug> Default for QuadTree<T, P> {
    fn default() -> Self {
        Self {
            config: QuadTreeConfig::default(),
            bounds: None,
            arena: Vec::new(),
            free_list: Vec::new(),
            len: 0,
        }
    }
}

impl<T: Scalar, P: Copy + PartialEq + Debug> Debug for QuadTree<T, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("config", &self.config)
            .field("bounds", &self.bounds)
            .field("len", &self.len)
            .field("arena_slots", &self.arena.len())
            .field("free_slots", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl<T: Scalar, P: Copy + PartialEq + Debug> QuadTree<T, P> {
    /// Create an unbounded tree with the given subdivision policy.
    pub fn new(config: QuadTreeConfig) -> Result<Self, IndexError<T>> {
        Ok(Self {
            config: config.validate()?,
            ..Self::default()
        })
    }

    /// Create a tree rooted at `bounds`.
    pub fn with_bounds(bounds: Aabb2D<T>, config: QuadTreeConfig) -> Result<Self, IndexError<T>> {
        let mut tree = Self::new(config)?;
        tree.reset(bounds)?;
        Ok(tree)
    }

    /// Create a tree rooted at `bounds` and insert every entry.
    ///
    /// Stops at the first entry that cannot be stored and returns its error.
    pub fn build<I>(bounds: Aabb2D<T>, config: QuadTreeConfig, entries: I) -> Result<Self, IndexError<T>>
    where
        I: IntoIterator<Item = (Point2D<T>, P)>,
    {
        let mut tree = Self::with_bounds(bounds, config)?;
        for (point, payload) in entries {
            tree.insert(point, payload)?;
        }
        log::debug!(
            "built quad-tree over {:?} with {} entries",
            bounds,
            tree.len
        );
        Ok(tree)
    }

    /// Subdivision policy.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Root region, or `None` while unbounded.
    pub fn bounds(&self) -> Option<Aabb2D<T>> {
        self.bounds
    }

    /// Whether a root region has been set.
    pub fn is_bounded(&self) -> bool {
        self.bounds.is_some()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Discard all entries and re-root the tree over `bounds`.
    ///
    /// Invalid bounds leave the tree untouched, including its entries.
    pub fn reset(&mut self, bounds: Aabb2D<T>) -> Result<(), IndexError<T>> {
        if !bounds.is_valid() {
            log::warn!("rejected quad-tree root bounds {:?}", bounds);
            return Err(IndexError::InvalidBounds { bounds });
        }
        self.reroot(bounds);
        log::debug!("quad-tree reset to {:?}", bounds);
        Ok(())
    }

    /// Remove all entries, keeping the current root region.
    pub fn clear(&mut self) {
        if let Some(bounds) = self.bounds {
            self.reroot(bounds);
        }
    }

    fn reroot(&mut self, bounds: Aabb2D<T>) {
        self.bounds = Some(bounds);
        self.arena.clear();
        self.arena.push(QNode::leaf(bounds, 0, None));
        self.free_list.clear();
        self.len = 0;
    }

    fn require_bounds(&self) -> Result<Aabb2D<T>, IndexError<T>> {
        self.bounds.ok_or_else(|| {
            log::warn!("quad-tree used before `reset`");
            IndexError::Unbounded
        })
    }

    /// Store `payload` at `point`.
    ///
    /// Points on the root border are accepted. Points outside it are rejected
    /// and not stored.
    pub fn insert(&mut self, point: Point2D<T>, payload: P) -> Result<(), IndexError<T>> {
        let bounds = self.require_bounds()?;
        if !bounds.contains_point(point) {
            log::warn!("rejected {:?} at {:?}: outside {:?}", payload, point, bounds);
            return Err(IndexError::OutOfBounds { point, bounds });
        }
        let leaf = self.descend(point);
        self.arena[leaf.get()].entries.push((point, payload));
        self.len += 1;
        self.split_overfull(leaf);
        Ok(())
    }

    /// Remove one entry matching `point` and `payload` exactly.
    ///
    /// Returns `false` when nothing matched, including on an unbounded tree.
    pub fn remove(&mut self, point: Point2D<T>, payload: P) -> bool {
        let Some(bounds) = self.bounds else {
            return false;
        };
        if !bounds.contains_point(point) {
            return false;
        }
        let leaf = self.descend(point);
        let entries = &mut self.arena[leaf.get()].entries;
        let Some(pos) = entries
            .iter()
            .position(|&(p, id)| p == point && id == payload)
        else {
            return false;
        };
        entries.remove(pos);
        self.len -= 1;
        self.merge_sparse(leaf);
        true
    }

    /// Visit payloads stored at exactly `point`.
    pub fn visit_point<F: FnMut(P)>(&self, point: Point2D<T>, mut f: F) -> Result<(), IndexError<T>> {
        let bounds = self.require_bounds()?;
        if !bounds.contains_point(point) {
            return Ok(());
        }
        let leaf = self.descend(point);
        for &(p, id) in &self.arena[leaf.get()].entries {
            if p == point {
                f(id);
            }
        }
        Ok(())
    }

    /// Visit payloads whose point lies in `rect`, edges included.
    ///
    /// Quadrants lying wholly on the far side of a split line are skipped.
    pub fn visit_rect<F: FnMut(P)>(&self, rect: Aabb2D<T>, mut f: F) -> Result<(), IndexError<T>> {
        let bounds = self.require_bounds()?;
        if !rect.touches(&bounds) {
            return Ok(());
        }
        let (max_x, max_y) = (rect.max_x(), rect.max_y());
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx.get()];
            let Some(children) = node.children else {
                for &(p, id) in &node.entries {
                    if rect.contains_point(p) {
                        f(id);
                    }
                }
                continue;
            };
            let mid = node.region.middle();
            let left = le(rect.x, mid.x);
            let right = lt(mid.x, max_x);
            let top = le(rect.y, mid.y);
            let bottom = lt(mid.y, max_y);
            // Push in reverse so quadrants pop in enumeration order.
            for q in Quadrant::ALL.into_iter().rev() {
                let horizontal = if q.is_right() { right } else { left };
                let vertical = if q.is_bottom() { bottom } else { top };
                if horizontal && vertical {
                    stack.push(children[q.index()]);
                }
            }
        }
        Ok(())
    }

    /// Collect payloads stored at exactly `point`.
    pub fn query_point(&self, point: Point2D<T>) -> Result<Vec<P>, IndexError<T>> {
        let mut out = Vec::new();
        self.visit_point(point, |id| out.push(id))?;
        Ok(out)
    }

    /// Collect payloads whose point lies in `rect`, edges included.
    pub fn query_rect(&self, rect: Aabb2D<T>) -> Result<Vec<P>, IndexError<T>> {
        let mut out = Vec::new();
        self.visit_rect(rect, |id| out.push(id))?;
        Ok(out)
    }

    /// Iterate over every stored entry.
    pub fn iter(&self) -> impl Iterator<Item = (Point2D<T>, P)> + '_ {
        // Internal and freed nodes hold no entries.
        self.arena.iter().flat_map(|n| n.entries.iter().copied())
    }

    /// Summarize the reachable node structure.
    pub fn stats(&self) -> QuadTreeStats {
        let mut stats = QuadTreeStats::default();
        if self.bounds.is_none() {
            return stats;
        }
        let mut stack = vec![NodeIdx::ROOT];
        while let Some(idx) = stack.pop() {
            let node = &self.arena[idx.get()];
            stats.node_count += 1;
            match node.children {
                Some(children) => stack.extend(children),
                None => {
                    stats.leaf_count += 1;
                    stats.max_depth = stats.max_depth.max(node.depth);
                    stats.entry_count += node.entries.len();
                }
            }
        }
        stats
    }

    fn descend(&self, point: Point2D<T>) -> NodeIdx {
        let mut idx = NodeIdx::ROOT;
        loop {
            let node = &self.arena[idx.get()];
            match node.children {
                Some(children) => idx = children[node.region.quadrant_of(point).index()],
                None => return idx,
            }
        }
    }

    fn alloc(&mut self, node: QNode<T, P>) -> NodeIdx {
        if let Some(slot) = self.free_list.pop() {
            self.arena[slot] = node;
            NodeIdx(slot)
        } else {
            self.arena.push(node);
            NodeIdx(self.arena.len() - 1)
        }
    }

    fn release(&mut self, idx: NodeIdx) -> Vec<(Point2D<T>, P)> {
        let node = &mut self.arena[idx.get()];
        node.children = None;
        node.parent = None;
        self.free_list.push(idx.get());
        core::mem::take(&mut node.entries)
    }

    fn split_overfull(&mut self, leaf: NodeIdx) {
        let mut pending = vec![leaf];
        while let Some(idx) = pending.pop() {
            let node = &mut self.arena[idx.get()];
            if node.children.is_some()
                || node.entries.len() <= self.config.leaf_capacity
                || node.depth >= self.config.max_depth
            {
                continue;
            }
            let region = node.region;
            let depth = node.depth + 1;
            let entries = core::mem::take(&mut node.entries);
            let children =
                Quadrant::ALL.map(|q| self.alloc(QNode::leaf(region.split(q), depth, Some(idx))));
            for (p, id) in entries {
                let q = region.quadrant_of(p);
                self.arena[children[q.index()].get()].entries.push((p, id));
            }
            self.arena[idx.get()].children = Some(children);
            log::trace!("split quad-tree node {:?} at depth {}", region, depth - 1);
            pending.extend(children);
        }
    }

    fn merge_sparse(&mut self, leaf: NodeIdx) {
        let mut current = self.arena[leaf.get()].parent;
        while let Some(parent) = current {
            let Some(children) = self.arena[parent.get()].children else {
                break;
            };
            let mut total = 0;
            for child in children {
                let node = &self.arena[child.get()];
                if node.children.is_some() {
                    return;
                }
                total += node.entries.len();
            }
            if total > self.config.leaf_capacity {
                return;
            }
            let mut merged = Vec::with_capacity(total);
            for child in children {
                merged.extend(self.release(child));
            }
            let node = &mut self.arena[parent.get()];
            node.children = None;
            node.entries = merged;
            log::trace!("merged quad-tree node {:?}", node.region);
            current = node.parent;
        }
    }
}

impl<T: Scalar, P: Copy + PartialEq + Debug> PointIndex<T, P> for QuadTree<T, P> {
    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, point: Point2D<T>, payload: P) -> Result<(), IndexError<T>> {
        Self::insert(self, point, payload)
    }

    fn remove(&mut self, point: Point2D<T>, payload: P) -> bool {
        Self::remove(self, point, payload)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn visit_point<F: FnMut(P)>(&self, point: Point2D<T>, f: F) -> Result<(), IndexError<T>> {
        Self::visit_point(self, point, f)
    }

    fn visit_rect<F: FnMut(P)>(&self, rect: Aabb2D<T>, f: F) -> Result<(), IndexError<T>> {
        Self::visit_rect(self, rect, f)
    }
}
