// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-time resolution of inherited extents and absolute positions.
//!
//! Nothing here is cached: every call walks the parent chain again, so results
//! always reflect the current state of the tree.

use kurbo::{Point, Rect, Size, Vec2};
use tracing::trace;

use crate::error::{BedError, Result};
use crate::tree::BedTree;
use crate::types::{Dimension, Extent, NodeId};

impl BedTree {
    /// Resolve an extent by walking up to the nearest bed that sets it.
    ///
    /// Returns `Ok(None)` when no bed on the path to the root sets it.
    pub fn resolve_extent(&self, id: NodeId, dimension: Dimension) -> Result<Option<f64>> {
        let mut at = id;
        loop {
            let node = self.node(at)?;
            match node.bed.extent(dimension) {
                Extent::Explicit(value) => {
                    trace!(?id, from = ?at, %dimension, value, "resolved extent");
                    return Ok(Some(value));
                }
                Extent::Inherited => match node.parent {
                    Some(p) => at = p,
                    None => return Ok(None),
                },
            }
        }
    }

    /// Width, or `None` if it is unset all the way to the root.
    pub fn resolve_width(&self, id: NodeId) -> Result<Option<f64>> {
        self.resolve_extent(id, Dimension::Width)
    }

    /// Height, or `None` if it is unset all the way to the root.
    pub fn resolve_height(&self, id: NodeId) -> Result<Option<f64>> {
        self.resolve_extent(id, Dimension::Height)
    }

    /// Resolved extent; fails with [`BedError::UnresolvedDimension`] if unset.
    pub fn effective_extent(&self, id: NodeId, dimension: Dimension) -> Result<f64> {
        self.resolve_extent(id, dimension)?
            .ok_or(BedError::UnresolvedDimension {
                node: id,
                dimension,
            })
    }

    /// Resolved width.
    pub fn effective_width(&self, id: NodeId) -> Result<f64> {
        self.effective_extent(id, Dimension::Width)
    }

    /// Resolved height.
    pub fn effective_height(&self, id: NodeId) -> Result<f64> {
        self.effective_extent(id, Dimension::Height)
    }

    /// Resolved width and height.
    pub fn effective_size(&self, id: NodeId) -> Result<Size> {
        Ok(Size::new(
            self.effective_width(id)?,
            self.effective_height(id)?,
        ))
    }

    /// Position of the bed's origin corner in its root's frame.
    ///
    /// This is the sum of the offsets along the path to the root.
    pub fn absolute_position(&self, id: NodeId) -> Result<Point> {
        let mut sum = Vec2::ZERO;
        let mut at = Some(id);
        while let Some(cur) = at {
            let node = self.node(cur)?;
            sum += node.bed.offset;
            at = node.parent;
        }
        Ok(sum.to_point())
    }

    /// Absolute x of the origin corner.
    pub fn absolute_x(&self, id: NodeId) -> Result<f64> {
        self.absolute_position(id).map(|p| p.x)
    }

    /// Absolute y of the origin corner.
    pub fn absolute_y(&self, id: NodeId) -> Result<f64> {
        self.absolute_position(id).map(|p| p.y)
    }

    /// Absolute bounding box; both extents must resolve.
    pub fn absolute_bounds(&self, id: NodeId) -> Result<Rect> {
        let origin = self.absolute_position(id)?;
        Ok(Rect::from_origin_size(origin, self.effective_size(id)?))
    }

    /// Center of the absolute bounding box.
    pub fn absolute_center(&self, id: NodeId) -> Result<Point> {
        self.absolute_bounds(id).map(|r| r.center())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bed;

    #[test]
    fn extents_inherit_from_nearest_ancestor() {
        let mut tree = BedTree::new();
        let root = tree.insert(None, Bed::sized(10.0, 8.0)).unwrap();
        let mid = tree.add_child(root, Bed::new().with_width(4.0)).unwrap();
        let leaf = tree.add_child(mid, Bed::new()).unwrap();

        assert_eq!(tree.effective_width(leaf).unwrap(), 4.0);
        assert_eq!(tree.effective_height(leaf).unwrap(), 8.0);
        assert_eq!(tree.effective_size(mid).unwrap(), Size::new(4.0, 8.0));

        // Inheritance is looked up on read, not copied at insert.
        tree.set_height(root, 6.0).unwrap();
        assert_eq!(tree.effective_height(leaf).unwrap(), 6.0);
        tree.set_width(mid, Extent::Inherited).unwrap();
        assert_eq!(tree.effective_width(leaf).unwrap(), 10.0);
    }

    #[test]
    fn unset_root_extent_is_unresolved() {
        let mut tree = BedTree::new();
        let root = tree.insert(None, Bed::new().with_width(3.0)).unwrap();
        let leaf = tree.add_child(root, Bed::new()).unwrap();
        assert_eq!(tree.resolve_height(leaf).unwrap(), None);
        assert_eq!(tree.resolve_width(leaf).unwrap(), Some(3.0));
        assert_eq!(
            tree.effective_height(leaf),
            Err(BedError::UnresolvedDimension {
                node: leaf,
                dimension: Dimension::Height
            })
        );
        assert!(tree.absolute_bounds(leaf).is_err());
    }

    #[test]
    fn absolute_position_sums_offsets() {
        let mut tree = BedTree::new();
        let root = tree.insert(None, Bed::sized(10.0, 10.0)).unwrap();
        let child = tree.add_child(root, Bed::new().at(1.0, 1.0)).unwrap();
        let grandchild = tree.add_child(child, Bed::new().at(2.0, 2.0)).unwrap();

        assert_eq!(
            tree.absolute_position(grandchild).unwrap(),
            Point::new(3.0, 3.0)
        );
        assert_eq!(tree.absolute_x(child).unwrap(), 1.0);

        // Moving an ancestor moves the whole subtree on the next read.
        tree.set_offset(child, Vec2::new(5.0, 0.0)).unwrap();
        assert_eq!(tree.absolute_x(grandchild).unwrap(), 7.0);
        assert_eq!(tree.absolute_y(grandchild).unwrap(), 2.0);
    }

    #[test]
    fn bounds_and_center() {
        let mut tree = BedTree::new();
        let root = tree.insert(None, Bed::sized(20.0, 10.0)).unwrap();
        let child = tree
            .add_child(root, Bed::sized(5.0, 5.0).at(2.0, 2.0))
            .unwrap();
        assert_eq!(
            tree.absolute_bounds(child).unwrap(),
            Rect::new(2.0, 2.0, 7.0, 7.0)
        );
        assert_eq!(tree.absolute_center(child).unwrap(), Point::new(4.5, 4.5));
    }
}
