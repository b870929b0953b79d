// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=garden_bed_paint --heading-base-level=0

//! Garden Bed Paint: turn a bed tree into drawing instructions.
//!
//! ## Overview
//!
//! This crate sits between [`garden_bed_tree`] and a plotting backend. It never
//! touches pixels. Instead it produces:
//!
//! - a [`RectShape`] per bed: absolute origin, resolved size, fill, and border;
//! - a [`TextLabel`] per labeled bed, centered in the bed;
//! - a [`Figure`] for a whole tree: the items in paint order plus the viewport
//!   and canvas size a backend needs.
//!
//! Backends implement [`Canvas`] and receive the figure through [`Figure::replay`].
//!
//! ## Colors
//!
//! Bed colors are looked up by name in a [`Palette`], ignoring case. Unknown
//! names are passed to the backend as written. The palette also fixes the
//! border color of every rectangle and the color of every label.
//!
//! ## Paint order
//!
//! Beds are emitted in pre-order: a bed's rectangle, then its label, then each
//! child subtree in insertion order. Children therefore paint over parents.
//!
//! ## Example
//!
//! ```rust
//! use garden_bed_paint::{Figure, FigureConfig, Palette};
//! use garden_bed_tree::{Bed, BedTree};
//! use kurbo::{Point, Rect};
//!
//! let mut tree = BedTree::new();
//! let plot = tree.insert(None, Bed::sized(20.0, 10.0)).unwrap();
//! let bed = tree
//!     .add_child(plot, Bed::sized(5.0, 5.0).at(2.0, 2.0).with_color("tomatoes").with_label("A"))
//!     .unwrap();
//!
//! // Rendering from any bed draws the whole tree.
//! let figure = Figure::render(&tree, bed, &Palette::default(), &FigureConfig::default()).unwrap();
//! assert_eq!(figure.viewport, Rect::new(0.0, 0.0, 20.0, 10.0));
//! assert_eq!(figure.display_list.rects().count(), 2);
//! assert_eq!(figure.display_list.labels().next().unwrap().position, Point::new(4.5, 4.5));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod emit;
mod error;
mod figure;
mod palette;
mod types;

pub use emit::{emit_node, emit_subtree};
pub use error::{PaintError, Result};
pub use figure::{Canvas, Figure, FigureConfig};
pub use palette::{EDGE_KEY, Palette, TEXT_KEY};
pub use types::{DisplayList, DrawItem, HAlign, RectShape, TextAlign, TextLabel, VAlign};
