// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Starmap Picker: pointer picking and navigation for a map of plotted points.
//!
//! [`MapPicker`] combines a [`starmap_kdtree::KdTree`] over the plotted points
//! with a [`starmap_viewport::CoordinateTransformer`] for the widget:
//!
//! - the world window is fitted to the first non-empty point set,
//! - the view rectangle is the widget inset by a margin,
//! - a cursor picks the nearest point if it lies within a pixel radius,
//! - pointer moves yield hover [`Enter`](HoverEvent::Enter)/[`Leave`](HoverEvent::Leave) transitions,
//! - the wheel zooms around the cursor and drags pan the view.
//!
//! Points carry an opaque item plus their index in the caller's list; picks
//! and hover events report that index.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use starmap_picker::{HoverEvent, MapPicker, PickerConfig, PlotPoint};
//!
//! let mut picker = MapPicker::new(PickerConfig::default());
//! picker.set_points([
//!     PlotPoint::new(Point::new(0.0, 0.0), "Sol", 0),
//!     PlotPoint::new(Point::new(100.0, 100.0), "Achernar", 1),
//! ])?;
//! picker.resize(Size::new(500.0, 500.0))?;
//!
//! // "Achernar" is drawn at the view's top-right corner.
//! let at = picker.transformer().to_view(Point::new(100.0, 100.0));
//! assert_eq!(at, Point::new(450.0, 50.0));
//! assert_eq!(picker.pointer_moved(at), vec![HoverEvent::Enter(1)]);
//! assert_eq!(picker.double_clicked(Point::new(447.0, 52.0)), Some(1));
//!
//! // Nothing within 10 px of the middle.
//! assert!(picker.pick(Point::new(250.0, 250.0)).is_none());
//! # Ok::<(), starmap_picker::PickerError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`; enable `std` (default) or `libm` for Kurbo.

#![no_std]

extern crate alloc;

pub mod error;
pub mod hover;
pub mod picker;
pub mod types;

pub use error::PickerError;
pub use hover::{HoverEvent, HoverState};
pub use picker::MapPicker;
pub use types::{Pick, PickerConfig, PlotPoint};
