// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plotted points, pick results, and picker configuration.

use kurbo::Point;
use starmap_kdtree::Coords;

/// A point plotted on the map.
///
/// `index` is the point's position in the caller's full, ordered list. It is
/// what [`MapPicker::double_clicked`](crate::MapPicker::double_clicked) and the
/// hover events report, so callers can look the item up again even after
/// points were filtered out before plotting.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotPoint<T> {
    /// Position in world space.
    pub position: Point,
    /// Caller payload.
    pub item: T,
    /// Position in the caller's full list.
    pub index: usize,
}

impl<T> PlotPoint<T> {
    /// Create a plotted point.
    pub fn new(position: Point, item: T, index: usize) -> Self {
        Self {
            position,
            item,
            index,
        }
    }
}

impl<T> Coords for PlotPoint<T> {
    type Scalar = f64;

    fn dims(&self) -> usize {
        2
    }

    fn coord(&self, axis: usize) -> f64 {
        match axis {
            0 => self.position.x,
            _ => self.position.y,
        }
    }
}

/// A point under the cursor, with its distance from the cursor in pixels.
#[derive(Debug)]
pub struct Pick<'a, T> {
    /// The nearest plotted point.
    pub point: &'a PlotPoint<T>,
    /// Cursor-to-point distance in view space.
    pub view_distance: f64,
}

/// Tuning knobs for [`MapPicker`](crate::MapPicker).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickerConfig {
    /// Maximum cursor-to-point distance, in pixels, that still counts as a hit.
    pub pick_radius: f64,
    /// Zoom factor applied per wheel notch; positive deltas zoom in.
    pub zoom_step: f64,
    /// Fraction of the widget size left empty on each side of the view rectangle.
    pub view_margin: f64,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            pick_radius: 10.0,
            zoom_step: 0.1,
            view_margin: 0.1,
        }
    }
}
