// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Starmap Viewport: a Kurbo-native world/view coordinate transformer.
//!
//! A map view shows a window of world (data) space inside a rectangle of view
//! (pixel) space. [`CoordinateTransformer`] owns both rectangles and derives
//! an affine mapping between them:
//!
//! - uniform, aspect-preserving "contain" fit of the world rectangle in the view,
//! - y axis flipped (world up is screen down),
//! - midpoints aligned.
//!
//! Points map with [`to_view`](CoordinateTransformer::to_view) and
//! [`to_world`](CoordinateTransformer::to_world) (the exact inverse); lengths such
//! as a pick radius map with [`to_view_length`](CoordinateTransformer::to_view_length)
//! and [`to_world_length`](CoordinateTransformer::to_world_length).
//! [`zoom`](CoordinateTransformer::zoom) keeps the pixel under the cursor fixed and
//! [`pan`](CoordinateTransformer::pan) drags the content along with the pointer.
//!
//! Bounds changes do not recompute the matrices by themselves; call
//! [`recompute`](CoordinateTransformer::recompute) afterwards. Zero-area
//! rectangles are reported as [`ViewportError::DegenerateBounds`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::Point;
//! use starmap_viewport::CoordinateTransformer;
//!
//! let mut t = CoordinateTransformer::new(
//!     (Point::new(0.0, 100.0), Point::new(100.0, 0.0)),
//!     (Point::new(0.0, 0.0), Point::new(200.0, 200.0)),
//! )?;
//! assert_eq!(t.to_view(Point::new(50.0, 50.0)), Point::new(100.0, 100.0));
//! assert_eq!(t.to_view_length(10.0), 20.0);
//!
//! // Resize the view, then recompute before mapping again.
//! t.set_view_bounds(Point::new(0.0, 0.0), Point::new(400.0, 400.0));
//! assert!(t.is_stale());
//! t.recompute()?;
//! assert_eq!(t.to_world_length(40.0), 10.0);
//!
//! // Zoom in around the cursor; the world point under it stays put.
//! let cursor = Point::new(120.0, 80.0);
//! let under = t.to_world(cursor);
//! t.zoom(0.1, cursor)?;
//! assert!((t.to_view(under) - cursor).hypot() < 1e-9);
//! # Ok::<(), starmap_viewport::ViewportError>(())
//! ```
//!
//! This crate is `no_std`; enable the `std` (default) or `libm` feature for Kurbo.

#![no_std]

pub mod coords;
pub mod error;
pub mod transform;

pub use coords::CoordinateSystem;
pub use error::ViewportError;
pub use transform::CoordinateTransformer;
