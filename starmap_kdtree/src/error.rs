// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for tree construction and queries.

use thiserror::Error;

/// Errors that can occur while building or querying a [`KdTree`](crate::KdTree).
///
/// Both kinds are recoverable by the caller: skip picking when the tree is
/// empty, and never build from points of mixed dimensionality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum KdTreeError {
    /// A point (or query) does not have the tree's number of coordinates.
    ///
    /// For queries `index` is `0`.
    #[error("point {index} has {found} coordinates, expected {expected}")]
    InvalidDimension {
        /// Position of the offending point in the input.
        index: usize,
        /// Dimensionality of the tree.
        expected: usize,
        /// Dimensionality of the offending point.
        found: usize,
    },

    /// A tree was requested with zero dimensions.
    #[error("a k-d tree needs at least one dimension")]
    ZeroDimensions,

    /// A nearest-neighbour query was made on a tree built from zero points.
    #[error("nearest-neighbour query on an empty tree")]
    EmptyIndex,
}
