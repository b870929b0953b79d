// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=garden_bed_tree --heading-base-level=0

//! Garden Bed Tree: a Kurbo-native tree of rectangular beds for plot layout diagrams.
//!
//! A garden plan is a hierarchy of rectangles: a plot holds rows, a row holds
//! beds, a bed holds plantings. Each bed is placed relative to its parent and
//! may leave its width or height unset to take it from the parent.
//!
//! - Represents the hierarchy as an arena of [`Bed`]s addressed by [`NodeId`].
//! - Resolves inherited extents and absolute positions on every read, so the
//!   tree stays consistent under mutation without any invalidation step.
//! - Mirrors and rotates whole subtrees in place.
//!
//! ## Not a renderer
//!
//! This crate does not draw anything. A paint layer (see `garden_bed_paint`)
//! walks the tree and turns beds into rectangle and text descriptors for
//! whatever plotting backend you use.
//!
//! ## API overview
//!
//! - [`BedTree`]: the arena; owns every bed and the parent/child links.
//! - [`Bed`]: per-bed local data (extents, offset, color, label).
//! - [`Extent`]: `Explicit(value)` or `Inherited` width/height.
//! - [`Axes`] and [`TransformScope`]: controls for [`BedTree::mirror`].
//! - [`Rotation`]: quarter turns for [`BedTree::rotate`].
//! - [`BedError`]: every failure mode; a failed call never changes the tree.
//!
//! Key operations:
//! - [`BedTree::insert`], [`BedTree::add_child`], [`BedTree::add_children`], [`BedTree::attach`]
//! - [`BedTree::effective_width`] / [`BedTree::effective_height`] / [`BedTree::absolute_position`]
//! - [`BedTree::deep_copy`] and [`BedTree::graft`]
//! - [`BedTree::mirror_vertically`] / [`BedTree::mirror_horizontally`] / [`BedTree::rotate`]
//!
//! ## Example
//!
//! ```rust
//! use garden_bed_tree::{Bed, BedTree};
//! use kurbo::Point;
//!
//! let mut tree = BedTree::new();
//! let plot = tree.insert(None, Bed::sized(10.0, 10.0)).unwrap();
//! let row = tree.add_child(plot, Bed::new().with_height(3.0).at(1.0, 1.0)).unwrap();
//! let bed = tree.add_child(row, Bed::new().with_width(2.0).at(2.0, 2.0)).unwrap();
//!
//! // Height comes from the row, the row's width from the plot.
//! assert_eq!(tree.effective_height(bed).unwrap(), 3.0);
//! assert_eq!(tree.effective_width(row).unwrap(), 10.0);
//! assert_eq!(tree.absolute_position(bed).unwrap(), Point::new(3.0, 3.0));
//!
//! // Flip the row to the top of the plot; its children follow.
//! tree.mirror_vertically(row).unwrap();
//! assert_eq!(tree.absolute_position(row).unwrap(), Point::new(1.0, 6.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod resolve;
mod transform;
mod tree;
mod types;

pub use error::{BedError, Result};
pub use transform::Rotation;
pub use tree::{BedTree, Descendants};
pub use types::{Axes, Bed, Color, Dimension, Extent, NodeId, Paint, TransformScope};
