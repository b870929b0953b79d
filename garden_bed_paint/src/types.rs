// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Descriptors handed to the rendering backend: rectangles, text labels, and display lists.
//!
//! ## Overview
//!
//! All coordinates are absolute, in the root bed's frame, with the origin at the
//! root's origin corner. A backend only has to map that frame to its viewport;
//! see [`Figure`](crate::Figure).

use alloc::string::String;
use alloc::vec::Vec;

use garden_bed_tree::{Color, NodeId, Paint};
use kurbo::{Point, Rect, Size};

/// A filled, bordered rectangle for one bed.
#[derive(Clone, Debug, PartialEq)]
pub struct RectShape {
    /// Bed the rectangle was emitted for.
    pub node: NodeId,
    /// Absolute origin corner.
    pub origin: Point,
    /// Resolved width and height.
    pub size: Size,
    /// Fill after palette lookup; `None` lets the backend choose.
    pub fill: Option<Paint>,
    /// Border color.
    pub edge: Color,
}

impl RectShape {
    /// The rectangle as a [`Rect`].
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Horizontal text anchor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum HAlign {
    /// Text starts at the position.
    Left,
    /// Text is centered on the position.
    #[default]
    Center,
    /// Text ends at the position.
    Right,
}

/// Vertical text anchor.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum VAlign {
    /// Text hangs below the position.
    Top,
    /// Text is centered on the position.
    #[default]
    Center,
    /// Text sits on the position.
    Bottom,
}

/// Text alignment relative to a label's position.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct TextAlign {
    /// Horizontal anchor.
    pub horizontal: HAlign,
    /// Vertical anchor.
    pub vertical: VAlign,
}

impl TextAlign {
    /// Centered on both axes.
    pub const CENTER: Self = Self {
        horizontal: HAlign::Center,
        vertical: VAlign::Center,
    };
}

/// A label drawn at the center of a bed.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabel {
    /// Bed the label belongs to.
    pub node: NodeId,
    /// Absolute anchor position.
    pub position: Point,
    /// Label text.
    pub text: String,
    /// Alignment around `position`.
    pub align: TextAlign,
    /// Text color.
    pub color: Color,
}

/// One drawing instruction.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawItem {
    /// Fill and stroke a rectangle.
    Rect(RectShape),
    /// Draw a label.
    Text(TextLabel),
}

/// Drawing instructions in paint order: later items draw on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    /// Items in paint order.
    pub items: Vec<DrawItem>,
}

impl DisplayList {
    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rectangles in paint order.
    pub fn rects(&self) -> impl Iterator<Item = &RectShape> + '_ {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Rect(r) => Some(r),
            DrawItem::Text(_) => None,
        })
    }

    /// Labels in paint order.
    pub fn labels(&self) -> impl Iterator<Item = &TextLabel> + '_ {
        self.items.iter().filter_map(|item| match item {
            DrawItem::Text(t) => Some(t),
            DrawItem::Rect(_) => None,
        })
    }

    /// Returns the union of all rectangles, or `None` if there are none.
    pub fn union_rect(&self) -> Option<Rect> {
        let mut it = self.rects().map(RectShape::rect);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}
