// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core tree implementation: structure, mutation, copies, and traversal.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Vec2;
use tracing::{debug, trace};

use crate::error::{BedError, Result};
use crate::types::{Bed, Dimension, Extent, NodeId, Paint, next_tree_tag};

impl Default for BedTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Arena holding one or more trees of beds.
///
/// Children are owned through their parent's ordered child list; the parent link
/// is a plain [`NodeId`] back-reference. Beds are never removed, so the arena only grows.
pub struct BedTree {
    tag: u32,
    nodes: Vec<Node>,
}

impl core::fmt::Debug for BedTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let roots = self.nodes.iter().filter(|n| n.parent.is_none()).count();
        f.debug_struct("BedTree")
            .field("tag", &self.tag)
            .field("nodes_total", &total)
            .field("roots", &roots)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) bed: Bed,
}

impl Node {
    fn new(bed: Bed) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            bed,
        }
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "NodeId uses 32-bit indices by design."
)]
fn node_id(idx: usize, tag: u32) -> NodeId {
    NodeId::new(idx as u32, tag)
}

fn check_extent(dimension: Dimension, extent: Extent) -> Result<()> {
    match extent {
        Extent::Explicit(value) if !(value.is_finite() && value > 0.0) => {
            Err(BedError::InvalidExtent { dimension, value })
        }
        _ => Ok(()),
    }
}

fn check_offset(offset: Vec2) -> Result<()> {
    if offset.x.is_finite() && offset.y.is_finite() {
        Ok(())
    } else {
        Err(BedError::InvalidOffset {
            x: offset.x,
            y: offset.y,
        })
    }
}

fn check_bed(bed: &Bed) -> Result<()> {
    check_extent(Dimension::Width, bed.width)?;
    check_extent(Dimension::Height, bed.height)?;
    check_offset(bed.offset)
}

impl BedTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            tag: next_tree_tag(),
            nodes: Vec::new(),
        }
    }

    /// Number of beds in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the arena holds no beds.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns true if `id` was issued by this tree.
    pub fn is_alive(&self, id: NodeId) -> bool {
        id.tree() == self.tag && id.idx() < self.nodes.len()
    }

    /// Insert a new bed as the last child of `parent` (or as a root if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, bed: Bed) -> Result<NodeId> {
        check_bed(&bed)?;
        if let Some(p) = parent {
            self.node(p)?;
        }
        let id = self.push(bed);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        debug!(?id, ?parent, "inserted bed");
        Ok(id)
    }

    /// Append `bed` to `parent`'s children.
    pub fn add_child(&mut self, parent: NodeId, bed: Bed) -> Result<NodeId> {
        self.insert(Some(parent), bed)
    }

    /// Append several beds to `parent`'s children, in iteration order.
    ///
    /// Either every bed is inserted or, on error, none is.
    pub fn add_children<I>(&mut self, parent: NodeId, beds: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = Bed>,
    {
        self.node(parent)?;
        let beds: Vec<Bed> = beds.into_iter().collect();
        for bed in &beds {
            check_bed(bed)?;
        }
        let ids: Vec<NodeId> = beds
            .into_iter()
            .map(|bed| {
                let id = self.push(bed);
                self.link_parent(id, parent);
                id
            })
            .collect();
        debug!(?parent, count = ids.len(), "added children");
        Ok(ids)
    }

    /// Move an existing bed (with its subtree) to the end of `parent`'s children.
    ///
    /// The bed is unlinked from its previous parent first. Attaching a bed under
    /// itself or one of its descendants fails with [`BedError::Cycle`].
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        self.node(child)?;
        if self.path_to_root(parent)?.contains(&child) {
            return Err(BedError::Cycle { parent, child });
        }
        if let Some(old) = self.node(child)?.parent {
            self.unlink_parent(child, old);
        }
        self.link_parent(child, parent);
        debug!(?parent, ?child, "attached bed");
        Ok(())
    }

    /// Copy `id` and its subtree into a new, fully independent tree.
    ///
    /// The copy of `id` is the new tree's only root, so it has no parent even
    /// when `id` does. Inherited extents therefore resolve against the copy's
    /// own ancestors only.
    pub fn deep_copy(&self, id: NodeId) -> Result<Self> {
        self.node(id)?;
        let mut out = Self::new();
        self.copy_into(id, &mut out, None);
        debug!(source = ?id, nodes = out.len(), "deep copied subtree");
        Ok(out)
    }

    /// Move every root of `other` under `parent`, in `other`'s root order.
    ///
    /// Returns the new identifiers of the moved roots. Identifiers issued by
    /// `other` are not valid in `self`.
    pub fn graft(&mut self, parent: NodeId, other: Self) -> Result<Vec<NodeId>> {
        self.node(parent)?;
        let base = self.nodes.len();
        let tag = self.tag;
        let remap = move |id: NodeId| node_id(base + id.idx(), tag);
        let mut roots = Vec::new();
        for (i, node) in other.nodes.into_iter().enumerate() {
            let children = node.children.into_iter().map(remap).collect();
            let parent_link = match node.parent {
                Some(p) => remap(p),
                None => {
                    roots.push(node_id(base + i, tag));
                    parent
                }
            };
            self.nodes.push(Node {
                parent: Some(parent_link),
                children,
                bed: node.bed,
            });
        }
        self.node_mut(parent)?.children.extend(roots.iter().copied());
        debug!(?parent, grafted = roots.len(), "grafted tree");
        Ok(roots)
    }

    /// Local data of a bed, or `None` for a foreign identifier.
    pub fn get(&self, id: NodeId) -> Option<&Bed> {
        self.node(id).ok().map(|n| &n.bed)
    }

    /// Local data of a bed.
    pub fn bed(&self, id: NodeId) -> Result<&Bed> {
        self.node(id).map(|n| &n.bed)
    }

    /// Parent of a bed; `None` for a root.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>> {
        self.node(id).map(|n| n.parent)
    }

    /// Children of a bed in insertion order.
    pub fn children(&self, id: NodeId) -> Result<&[NodeId]> {
        self.node(id).map(|n| n.children.as_slice())
    }

    /// Iterate over all roots in insertion order.
    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| self.id_at(i))
    }

    /// The root of the tree containing `id`.
    pub fn root_of(&self, mut id: NodeId) -> Result<NodeId> {
        while let Some(p) = self.node(id)?.parent {
            id = p;
        }
        Ok(id)
    }

    /// Number of ancestors of `id`; `0` for a root.
    pub fn depth(&self, id: NodeId) -> Result<usize> {
        Ok(self.path_to_root(id)?.len() - 1)
    }

    /// Path from the root to `id` (inclusive).
    pub fn path_to_root(&self, mut id: NodeId) -> Result<Vec<NodeId>> {
        let mut out = Vec::new();
        loop {
            out.push(id);
            match self.node(id)?.parent {
                Some(p) => id = p,
                None => break,
            }
        }
        out.reverse();
        Ok(out)
    }

    /// Iterate `id` and its descendants in pre-order: a bed first, then each
    /// child subtree in insertion order.
    pub fn descendants(&self, id: NodeId) -> Result<Descendants<'_>> {
        self.node(id)?;
        let mut stack = Vec::new();
        stack.push(id);
        Ok(Descendants { tree: self, stack })
    }

    /// Update the offset relative to the parent.
    pub fn set_offset(&mut self, id: NodeId, offset: Vec2) -> Result<()> {
        check_offset(offset)?;
        self.node_mut(id)?.bed.offset = offset;
        trace!(?id, ?offset, "set offset");
        Ok(())
    }

    /// Update the width.
    pub fn set_width(&mut self, id: NodeId, width: impl Into<Extent>) -> Result<()> {
        let width = width.into();
        check_extent(Dimension::Width, width)?;
        self.node_mut(id)?.bed.width = width;
        trace!(?id, ?width, "set width");
        Ok(())
    }

    /// Update the height.
    pub fn set_height(&mut self, id: NodeId, height: impl Into<Extent>) -> Result<()> {
        let height = height.into();
        check_extent(Dimension::Height, height)?;
        self.node_mut(id)?.bed.height = height;
        trace!(?id, ?height, "set height");
        Ok(())
    }

    /// Update the fill.
    pub fn set_color(&mut self, id: NodeId, color: Option<Paint>) -> Result<()> {
        self.node_mut(id)?.bed.color = color;
        Ok(())
    }

    /// Update the label.
    pub fn set_label(&mut self, id: NodeId, label: Option<String>) -> Result<()> {
        self.node_mut(id)?.bed.label = label;
        Ok(())
    }

    // --- internals ---

    pub(crate) fn node(&self, id: NodeId) -> Result<&Node> {
        if id.tree() != self.tag {
            return Err(BedError::UnknownNode(id));
        }
        self.nodes.get(id.idx()).ok_or(BedError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut Node> {
        if id.tree() != self.tag {
            return Err(BedError::UnknownNode(id));
        }
        self.nodes.get_mut(id.idx()).ok_or(BedError::UnknownNode(id))
    }

    fn id_at(&self, idx: usize) -> NodeId {
        node_id(idx, self.tag)
    }

    fn push(&mut self, bed: Bed) -> NodeId {
        self.nodes.push(Node::new(bed));
        self.id_at(self.nodes.len() - 1)
    }

    // Both ids must already be checked.
    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        self.nodes[parent.idx()].children.push(id);
        self.nodes[id.idx()].parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        self.nodes[parent.idx()].children.retain(|c| *c != id);
        self.nodes[id.idx()].parent = None;
    }

    fn copy_into(&self, id: NodeId, out: &mut Self, parent: Option<NodeId>) -> NodeId {
        let node = &self.nodes[id.idx()];
        let copy = out.push(node.bed.clone());
        if let Some(p) = parent {
            out.link_parent(copy, p);
        }
        for &child in &node.children {
            self.copy_into(child, out, Some(copy));
        }
        copy
    }
}

/// Pre-order iterator returned by [`BedTree::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a BedTree,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        let children = &self.tree.nodes[id.idx()].children;
        self.stack.extend(children.iter().rev().copied());
        Some(id)
    }
}
