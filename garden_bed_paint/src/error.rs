// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported while emitting descriptors or building a figure.

use garden_bed_tree::BedError;
use thiserror::Error;

/// Result alias for paint operations.
pub type Result<T, E = PaintError> = core::result::Result<T, E>;

/// Errors reported by the paint layer.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum PaintError {
    /// The tree could not resolve something a descriptor needs, usually an extent.
    #[error(transparent)]
    Tree(#[from] BedError),

    /// [`FigureConfig::width_inches`](crate::FigureConfig::width_inches) is not finite and positive.
    #[error("figure width must be finite and positive, got {0}")]
    InvalidFigureWidth(f64),
}
