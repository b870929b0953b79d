// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Whole-tree figures and the [`Canvas`] seam to a plotting backend.
//!
//! ## Workflow
//!
//! 1) Build and transform a [`BedTree`].
//! 2) Call [`Figure::render`] with any bed of the tree. The figure always covers
//!    the whole tree, starting at its root.
//! 3) Hand the figure to a backend with [`Figure::replay`], or read
//!    [`Figure::display_list`] directly.

use garden_bed_tree::{BedTree, NodeId};
use kurbo::{Rect, Size};
use tracing::debug;

use crate::emit::emit_subtree;
use crate::error::{PaintError, Result};
use crate::palette::Palette;
use crate::types::{DisplayList, DrawItem, RectShape, TextLabel};

/// Output settings for [`Figure::render`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureConfig {
    /// Canvas width in inches; the height follows the root's aspect ratio.
    pub width_inches: f64,
    /// Ask the backend to hide axis ticks.
    pub hide_ticks: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width_inches: 6.0,
            hide_ticks: true,
        }
    }
}

/// A drawing backend.
///
/// [`Figure::replay`] calls [`begin`](Canvas::begin) once, then one method per
/// display-list item in paint order, then [`finish`](Canvas::finish).
pub trait Canvas {
    /// Backend failure type.
    type Error;

    /// Prepare a surface showing `viewport` (in bed units) at `size_inches`.
    fn begin(
        &mut self,
        viewport: Rect,
        size_inches: Size,
        hide_ticks: bool,
    ) -> Result<(), Self::Error>;

    /// Fill and stroke a rectangle.
    fn fill_rect(&mut self, rect: &RectShape) -> Result<(), Self::Error>;

    /// Draw a label.
    fn draw_text(&mut self, label: &TextLabel) -> Result<(), Self::Error>;

    /// Called after the last item.
    fn finish(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Everything needed to draw one tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    /// Root of the rendered tree.
    pub root: NodeId,
    /// Visible region: `[0, width] x [0, height]` of the root.
    pub viewport: Rect,
    /// Canvas size in inches.
    pub size_inches: Size,
    /// Whether axis ticks should be hidden.
    pub hide_ticks: bool,
    /// Items in paint order.
    pub display_list: DisplayList,
}

impl Figure {
    /// Render the tree that contains `id`, from its root.
    ///
    /// The root must have a resolvable width and height, as must every bed
    /// below it.
    pub fn render(
        tree: &BedTree,
        id: NodeId,
        palette: &Palette,
        config: &FigureConfig,
    ) -> Result<Self> {
        if !(config.width_inches.is_finite() && config.width_inches > 0.0) {
            return Err(PaintError::InvalidFigureWidth(config.width_inches));
        }
        let root = tree.root_of(id)?;
        let size = tree.effective_size(root)?;
        let display_list = emit_subtree(tree, root, palette)?;
        let size_inches = Size::new(
            config.width_inches,
            config.width_inches * (size.height / size.width),
        );
        debug!(
            ?root,
            from = ?id,
            items = display_list.len(),
            ?size_inches,
            "rendered figure"
        );
        Ok(Self {
            root,
            viewport: Rect::from_origin_size((0.0, 0.0), size),
            size_inches,
            hide_ticks: config.hide_ticks,
            display_list,
        })
    }

    /// Drive `canvas` through the whole figure.
    pub fn replay<C: Canvas + ?Sized>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.begin(self.viewport, self.size_inches, self.hide_ticks)?;
        for item in &self.display_list.items {
            match item {
                DrawItem::Rect(rect) => canvas.fill_rect(rect)?,
                DrawItem::Text(label) => canvas.draw_text(label)?,
            }
        }
        canvas.finish()
    }
}
