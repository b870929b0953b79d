// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-place geometric transforms over a subtree: mirroring and quarter-turn rotation.
//!
//! Transforms only rewrite offsets (and, for rotation, swap extents). Each one
//! first computes every new value from the current tree and only then writes,
//! so a failing transform leaves the tree untouched.

use alloc::vec::Vec;

use kurbo::Vec2;
use tracing::{debug, warn};

use crate::error::{BedError, Result};
use crate::tree::BedTree;
use crate::types::{Axes, Extent, NodeId, TransformScope};

/// Counter-clockwise rotation by a whole number of quarter turns (y axis up).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Rotation {
    /// No rotation.
    #[default]
    Identity,
    /// 90 degrees.
    Quarter,
    /// 180 degrees.
    Half,
    /// 270 degrees.
    ThreeQuarter,
}

impl Rotation {
    /// Convert an angle in degrees.
    ///
    /// Any finite multiple of 90 is accepted and normalized modulo 360, so
    /// `-90.0` is [`Rotation::ThreeQuarter`]. Other angles fail with
    /// [`BedError::UnsupportedAngle`].
    pub fn from_degrees(degrees: f64) -> Result<Self> {
        if !degrees.is_finite() {
            return Err(BedError::UnsupportedAngle { degrees });
        }
        let mut normalized = degrees % 360.0;
        if normalized < 0.0 {
            normalized += 360.0;
        }
        if normalized == 0.0 {
            Ok(Self::Identity)
        } else if normalized == 90.0 {
            Ok(Self::Quarter)
        } else if normalized == 180.0 {
            Ok(Self::Half)
        } else if normalized == 270.0 {
            Ok(Self::ThreeQuarter)
        } else {
            Err(BedError::UnsupportedAngle { degrees })
        }
    }

    /// The angle in degrees, in `[0, 360)`.
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Identity => 0,
            Self::Quarter => 90,
            Self::Half => 180,
            Self::ThreeQuarter => 270,
        }
    }

    /// True if width and height trade places.
    pub const fn swaps_axes(self) -> bool {
        matches!(self, Self::Quarter | Self::ThreeQuarter)
    }
}

impl BedTree {
    /// Reflect offsets in the subtree at `id` along `axes`.
    ///
    /// Each moved bed is reflected inside its own parent:
    /// `x' = parent_width - width - x` and `y' = parent_height - height - y`,
    /// using resolved extents. `scope` decides whether `id` itself moves; a
    /// bed without a parent never moves. Mirroring twice restores the layout.
    ///
    /// Returns `id` for chaining.
    pub fn mirror(&mut self, id: NodeId, axes: Axes, scope: TransformScope) -> Result<NodeId> {
        let mut plan = Vec::new();
        for node in self.descendants(id)? {
            if node == id && scope == TransformScope::Descendants {
                continue;
            }
            let Some(parent) = self.node(node)?.parent else {
                warn!(?node, "no parent frame, bed stays in place");
                continue;
            };
            let mut offset = self.node(node)?.bed.offset;
            if axes.contains(Axes::HORIZONTAL) {
                offset.x = self.effective_width(parent)? - self.effective_width(node)? - offset.x;
            }
            if axes.contains(Axes::VERTICAL) {
                offset.y =
                    self.effective_height(parent)? - self.effective_height(node)? - offset.y;
            }
            plan.push((node, offset));
        }
        debug!(?id, ?axes, ?scope, moved = plan.len(), "mirrored subtree");
        for (node, offset) in plan {
            self.node_mut(node)?.bed.offset = offset;
        }
        Ok(id)
    }

    /// Reflect `y` offsets of `id` and its descendants, each within its parent.
    pub fn mirror_vertically(&mut self, id: NodeId) -> Result<NodeId> {
        self.mirror(id, Axes::VERTICAL, TransformScope::Subtree)
    }

    /// Reflect `x` offsets of `id` and its descendants, each within its parent.
    pub fn mirror_horizontally(&mut self, id: NodeId) -> Result<NodeId> {
        self.mirror(id, Axes::HORIZONTAL, TransformScope::Subtree)
    }

    /// Rotate the subtree at `id` about its origin corner.
    ///
    /// `id` keeps its offset. For odd quarter turns every bed in the subtree
    /// swaps its width and height extents, inherited ones included, so a bed
    /// that spanned its parent's height now spans its parent's width. Extents
    /// that `id` inherits from outside the subtree are resolved and stored
    /// explicitly first.
    /// Each descendant's offset is re-derived inside its rotated parent, where
    /// `W x H` is the parent's size and `w x h` the bed's size before rotating:
    ///
    /// | rotation | new offset |
    /// | --- | --- |
    /// | quarter | `(H - y - h, x)` |
    /// | half | `(W - x - w, H - y - h)` |
    /// | three quarter | `(y, W - x - w)` |
    ///
    /// Returns `id` for chaining.
    pub fn rotate(&mut self, id: NodeId, rotation: Rotation) -> Result<NodeId> {
        if rotation == Rotation::Identity {
            self.node(id)?;
            return Ok(id);
        }
        let mut plan = Vec::new();
        for node in self.descendants(id)? {
            let n = self.node(node)?;
            let (width, height) = if !rotation.swaps_axes() {
                (n.bed.width, n.bed.height)
            } else if node == id {
                // The target's frame is outside the subtree, so inherited
                // extents are pinned before they trade places.
                (
                    Extent::from(self.resolve_height(id)?),
                    Extent::from(self.resolve_width(id)?),
                )
            } else {
                (n.bed.height, n.bed.width)
            };
            let offset = match n.parent {
                Some(parent) if node != id => {
                    let outer = self.effective_size(parent)?;
                    let inner = self.effective_size(node)?;
                    let Vec2 { x, y } = n.bed.offset;
                    match rotation {
                        Rotation::Quarter => Vec2::new(outer.height - y - inner.height, x),
                        Rotation::Half => Vec2::new(
                            outer.width - x - inner.width,
                            outer.height - y - inner.height,
                        ),
                        Rotation::ThreeQuarter => Vec2::new(y, outer.width - x - inner.width),
                        Rotation::Identity => n.bed.offset,
                    }
                }
                _ => n.bed.offset,
            };
            plan.push((node, offset, width, height));
        }
        debug!(?id, degrees = rotation.degrees(), beds = plan.len(), "rotated subtree");
        for (node, offset, width, height) in plan {
            let bed = &mut self.node_mut(node)?.bed;
            bed.offset = offset;
            bed.width = width;
            bed.height = height;
        }
        Ok(id)
    }

    /// Rotate by an angle in degrees; see [`Rotation::from_degrees`].
    pub fn rotate_degrees(&mut self, id: NodeId, degrees: f64) -> Result<NodeId> {
        let rotation = Rotation::from_degrees(degrees)?;
        self.rotate(id, rotation)
    }
}
