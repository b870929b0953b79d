// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emit descriptors from a [`BedTree`].
//!
//! ## Notes
//!
//! Emission reads the tree through its resolvers, so every bed's extents must
//! resolve. Colors are looked up in the palette but never inherited: a bed
//! without a color gets `fill: None` even if its parent is colored.

use alloc::vec::Vec;

use garden_bed_tree::{BedTree, NodeId};
use tracing::trace;

use crate::error::Result;
use crate::palette::Palette;
use crate::types::{DisplayList, DrawItem, RectShape, TextAlign, TextLabel};

/// Build the rectangle for `id` and, if it has a label, the centered text.
pub fn emit_node(
    tree: &BedTree,
    id: NodeId,
    palette: &Palette,
) -> Result<(RectShape, Option<TextLabel>)> {
    let bed = tree.bed(id)?;
    let bounds = tree.absolute_bounds(id)?;
    let rect = RectShape {
        node: id,
        origin: bounds.origin(),
        size: bounds.size(),
        fill: bed.color.as_ref().map(|c| palette.resolve(c)),
        edge: palette.edge_color(),
    };
    let label = bed.label.as_ref().map(|text| TextLabel {
        node: id,
        position: bounds.center(),
        text: text.clone(),
        align: TextAlign::CENTER,
        color: palette.text_color(),
    });
    trace!(?id, ?bounds, labeled = label.is_some(), "emitted bed");
    Ok((rect, label))
}

/// Emit `id` and its descendants in pre-order.
///
/// Each bed contributes its rectangle, then its label, then its children, so
/// children paint over their parent.
pub fn emit_subtree(tree: &BedTree, id: NodeId, palette: &Palette) -> Result<DisplayList> {
    let mut items = Vec::new();
    for node in tree.descendants(id)? {
        let (rect, label) = emit_node(tree, node, palette)?;
        items.push(DrawItem::Rect(rect));
        if let Some(label) = label {
            items.push(DrawItem::Text(label));
        }
    }
    Ok(DisplayList { items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaintError;
    use garden_bed_tree::{Bed, BedError, Color, Dimension, Paint};
    use kurbo::{Point, Size};

    #[test]
    fn root_and_labeled_child() {
        let mut tree = BedTree::new();
        let root = tree.insert(None, Bed::sized(20.0, 10.0)).unwrap();
        let child = tree
            .add_child(
                root,
                Bed::sized(5.0, 5.0)
                    .at(2.0, 2.0)
                    .with_color("tomatoes")
                    .with_label("A"),
            )
            .unwrap();
        let palette = Palette::default();
        let list = emit_subtree(&tree, root, &palette).unwrap();
        assert_eq!(list.len(), 3);

        let rects: Vec<_> = list.rects().collect();
        assert_eq!(rects[0].node, root);
        assert_eq!(rects[0].origin, Point::ZERO);
        assert_eq!(rects[0].size, Size::new(20.0, 10.0));
        assert_eq!(rects[0].fill, None);
        assert_eq!(rects[0].edge, palette.edge_color());

        assert_eq!(rects[1].node, child);
        assert_eq!(rects[1].origin, Point::new(2.0, 2.0));
        assert_eq!(rects[1].size, Size::new(5.0, 5.0));
        assert_eq!(
            rects[1].fill,
            Some(Paint::Rgba(palette.lookup("tomatoes").unwrap()))
        );

        let labels: Vec<_> = list.labels().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].text, "A");
        assert_eq!(labels[0].position, Point::new(4.5, 4.5));
        assert_eq!(labels[0].align, TextAlign::CENTER);
        assert_eq!(labels[0].color, palette.text_color());
    }

    #[test]
    fn label_follows_its_rect_before_children() {
        let mut tree = BedTree::new();
        let root = tree
            .insert(None, Bed::sized(10.0, 10.0).with_label("plot"))
            .unwrap();
        let a = tree.add_child(root, Bed::sized(1.0, 1.0)).unwrap();
        let order: Vec<_> = emit_subtree(&tree, root, &Palette::default())
            .unwrap()
            .items
            .into_iter()
            .map(|item| match item {
                DrawItem::Rect(r) => (r.node, 'r'),
                DrawItem::Text(t) => (t.node, 't'),
            })
            .collect();
        assert_eq!(order, [(root, 'r'), (root, 't'), (a, 'r')]);
    }

    #[test]
    fn color_is_not_inherited() {
        let mut tree = BedTree::new();
        let root = tree
            .insert(None, Bed::sized(10.0, 10.0).with_color(Color::WHITE))
            .unwrap();
        let child = tree.add_child(root, Bed::new()).unwrap();
        let (rect, label) = emit_node(&tree, child, &Palette::default()).unwrap();
        assert_eq!(rect.fill, None);
        assert!(label.is_none());
        assert_eq!(rect.size, Size::new(10.0, 10.0));
    }

    #[test]
    fn unresolved_extent_fails() {
        let mut tree = BedTree::new();
        let root = tree.insert(None, Bed::new().with_height(4.0)).unwrap();
        let err = emit_subtree(&tree, root, &Palette::default()).unwrap_err();
        assert_eq!(
            err,
            PaintError::Tree(BedError::UnresolvedDimension {
                node: root,
                dimension: Dimension::Width
            })
        );
    }
}
