// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the bed tree: node identifiers, extents, paints, and per-bed local data.

use alloc::string::String;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use kurbo::Vec2;

/// Identifier for a bed in a [`BedTree`](crate::BedTree).
///
/// This is a small, copyable handle made of a slot index and the tag of the
/// tree that issued it.
///
/// ## Semantics
///
/// - Every [`BedTree`](crate::BedTree) draws a fresh tag on construction, so a
///   `NodeId` issued by one tree is never accepted by another. Trees built by
///   [`BedTree::deep_copy`](crate::BedTree::deep_copy) get their own tag too.
/// - Beds are never removed from a tree, so a `NodeId` stays valid for the
///   lifetime of the tree that issued it.
///
/// Use [`BedTree::is_alive`](crate::BedTree::is_alive) to check whether a `NodeId`
/// belongs to a given tree.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, tree: u32) -> Self {
        Self(idx, tree)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    pub(crate) const fn tree(self) -> u32 {
        self.1
    }
}

static NEXT_TREE_TAG: AtomicU32 = AtomicU32::new(1);

pub(crate) fn next_tree_tag() -> u32 {
    NEXT_TREE_TAG.fetch_add(1, Ordering::Relaxed)
}

/// A bed's size along one axis.
///
/// An [`Extent::Inherited`] value is not copied from the parent; it is looked up
/// again every time the bed's size is resolved, so later changes to an ancestor
/// are always reflected.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Extent {
    /// Take the value from the nearest ancestor that sets it.
    #[default]
    Inherited,
    /// A value set on this bed.
    Explicit(f64),
}

impl Extent {
    /// The explicit value, if any.
    pub const fn explicit(self) -> Option<f64> {
        match self {
            Self::Explicit(v) => Some(v),
            Self::Inherited => None,
        }
    }

    /// True for [`Extent::Inherited`].
    pub const fn is_inherited(self) -> bool {
        matches!(self, Self::Inherited)
    }
}

impl From<f64> for Extent {
    fn from(value: f64) -> Self {
        Self::Explicit(value)
    }
}

impl From<Option<f64>> for Extent {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Inherited, Self::Explicit)
    }
}

/// Which of a bed's two extents is meant.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Dimension {
    /// Size along x.
    Width,
    /// Size along y.
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

bitflags::bitflags! {
    /// Axes along which [`BedTree::mirror`](crate::BedTree::mirror) reflects offsets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Axes: u8 {
        /// Reflect `x` across the parent's vertical midline (uses the parent's width).
        const HORIZONTAL = 0b0000_0001;
        /// Reflect `y` across the parent's horizontal midline (uses the parent's height).
        const VERTICAL   = 0b0000_0010;
    }
}

/// Which nodes of a subtree a mirror moves.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum TransformScope {
    /// The target and all of its descendants.
    ///
    /// A target without a parent has no frame to be reflected in and stays put;
    /// its descendants still move.
    #[default]
    Subtree,
    /// Only the descendants; the target keeps its offset.
    Descendants,
}

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, `255` is opaque.
    pub a: u8,
}

impl Color {
    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a new color with explicit RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color (alpha = 255).
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Unpack an opaque `0xRRGGBB` value.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "each channel is masked to 8 bits first."
    )]
    pub const fn from_rgb_u32(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }
}

/// Fill requested for a bed.
///
/// Names are kept as written; a palette in the paint layer turns known names
/// into colors and passes unknown ones through to the renderer untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Paint {
    /// A concrete color.
    Rgba(Color),
    /// A color name or any other renderer-specific string.
    Named(String),
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Rgba(color)
    }
}

impl From<&str> for Paint {
    fn from(name: &str) -> Self {
        Self::Named(name.into())
    }
}

impl From<String> for Paint {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// Local data for one bed.
///
/// All geometry is relative to the parent bed: `offset` is the position of this
/// bed's origin corner inside the parent, and unset extents are taken from the
/// parent when resolved.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bed {
    /// Size along x.
    pub width: Extent,
    /// Size along y.
    pub height: Extent,
    /// Offset of the origin corner from the parent's origin corner.
    pub offset: Vec2,
    /// Fill; `None` leaves the choice to the renderer. Never inherited.
    pub color: Option<Paint>,
    /// Text drawn at the bed's center.
    pub label: Option<String>,
}

impl Bed {
    /// A bed at the parent's origin that inherits both extents.
    pub fn new() -> Self {
        Self::default()
    }

    /// A bed with both extents set.
    pub fn sized(width: f64, height: f64) -> Self {
        Self::new().with_size(width, height)
    }

    /// Set both extents.
    #[must_use]
    pub fn with_size(self, width: f64, height: f64) -> Self {
        self.with_width(width).with_height(height)
    }

    /// Set the width.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Extent::Explicit(width);
        self
    }

    /// Set the height.
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = Extent::Explicit(height);
        self
    }

    /// Place the bed at `(x, y)` relative to its parent.
    #[must_use]
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.offset = Vec2::new(x, y);
        self
    }

    /// Set the fill.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<Paint>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// The extent along `dimension`.
    pub const fn extent(&self, dimension: Dimension) -> Extent {
        match dimension {
            Dimension::Width => self.width,
            Dimension::Height => self.height,
        }
    }
}
