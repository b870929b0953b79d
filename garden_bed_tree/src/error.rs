// Copyright 2025 the Garden Beds Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by tree construction, resolution, and transforms.

use thiserror::Error;

use crate::types::{Dimension, NodeId};

/// Result alias for bed tree operations.
pub type Result<T, E = BedError> = core::result::Result<T, E>;

/// Errors reported by [`BedTree`](crate::BedTree).
///
/// Every fallible operation checks its inputs before touching the tree, so an
/// `Err` always leaves the tree unchanged.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum BedError {
    /// The identifier was issued by a different tree.
    #[error("node {0:?} does not belong to this tree")]
    UnknownNode(NodeId),

    /// Neither the node nor any of its ancestors sets this extent.
    #[error("{dimension} of node {node:?} is not set on it or on any ancestor")]
    UnresolvedDimension {
        /// Node whose extent was requested.
        node: NodeId,
        /// Requested extent.
        dimension: Dimension,
    },

    /// An explicit extent that is not a finite, strictly positive number.
    #[error("{dimension} must be finite and positive, got {value}")]
    InvalidExtent {
        /// Offending extent.
        dimension: Dimension,
        /// Rejected value.
        value: f64,
    },

    /// An offset with a non-finite component.
    #[error("offset must be finite, got ({x}, {y})")]
    InvalidOffset {
        /// Rejected x.
        x: f64,
        /// Rejected y.
        y: f64,
    },

    /// Attaching `child` under `parent` would make `child` its own ancestor.
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle {
        /// Requested parent.
        parent: NodeId,
        /// Requested child.
        child: NodeId,
    },

    /// Rotation angle that is not a whole number of quarter turns.
    #[error("cannot rotate by {degrees} degrees, only multiples of 90 are supported")]
    UnsupportedAngle {
        /// Rejected angle.
        degrees: f64,
    },
}
