// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Starmap k-d tree: nearest-point lookup over plotted points.
//!
//! - Build a tree in one call from any list of points with `k` coordinates.
//! - Ask for the point closest to a query by Euclidean distance.
//! - Walk every stored point (unordered).
//!
//! Points are opaque payloads: anything implementing [`Coords`] can be stored,
//! so a point can carry a back-reference to whatever it was plotted from.
//! The tree is generic over the coordinate scalar (`f32`, `f64`, `i32`, `i64`)
//! and compares squared distances in a widened accumulator type.
//!
//! The tree is never updated in place. When the point set changes, build a new
//! one; construction is `O(n log n)` and blocks the caller.
//!
//! # Example
//!
//! ```rust
//! use starmap_kdtree::{KdTree, KdTreeError};
//!
//! let tree = KdTree::build(vec![[0.0, 0.0], [10.0, 2.0], [3.0, 7.0]], 2)?;
//! assert_eq!(tree.nearest(&[9.0, 1.0])?, &[10.0, 2.0]);
//! assert_eq!(tree.iter().count(), 3);
//!
//! // Mixed dimensionality is rejected up front.
//! let err = KdTree::from_points(vec![vec![1.0, 2.0], vec![1.0, 2.0, 3.0]]).unwrap_err();
//! assert!(matches!(err, KdTreeError::InvalidDimension { index: 1, .. }));
//!
//! // An empty tree has nothing to offer.
//! let empty: KdTree<[f64; 2]> = KdTree::build(Vec::new(), 2)?;
//! assert_eq!(empty.nearest(&[0.0, 0.0]), Err(KdTreeError::EmptyIndex));
//! # Ok::<(), KdTreeError>(())
//! ```
//!
//! ## Complexity
//!
//! Queries descend `O(log n)` levels and backtrack only into subtrees whose
//! splitting plane lies within the current best distance. Highly skewed or
//! collinear inputs degrade toward `O(n)`.
//!
//! ### Float semantics
//!
//! This crate assumes no NaNs in coordinates. Integer coordinates are widened
//! to `i128` for distances; keep `i64` inputs within about ±2^62.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod error;
pub mod tree;
pub mod types;

pub use error::KdTreeError;
pub use tree::{Iter, KdTree};
pub use types::{Coords, Scalar, ScalarAcc, axis_dist_sq, dist_sq};
