// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned rectangles given by two opposite corners.

use kurbo::{Point, Rect};

/// One coordinate system of a [`CoordinateTransformer`](crate::CoordinateTransformer):
/// an axis-aligned rectangle described by two opposite corners.
///
/// The corners keep the orientation they were given in. For world space this
/// is conventionally (left, top) and (right, bottom) with y growing upward,
/// for view space (left, top) and (right, bottom) in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinateSystem {
    corner_a: Point,
    corner_b: Point,
    middle: Point,
}

impl Default for CoordinateSystem {
    fn default() -> Self {
        Self::new(Point::ORIGIN, Point::ORIGIN)
    }
}

impl CoordinateSystem {
    /// Create a coordinate system from two opposite corners.
    pub fn new(corner_a: Point, corner_b: Point) -> Self {
        Self {
            corner_a,
            corner_b,
            middle: corner_a.midpoint(corner_b),
        }
    }

    /// Replace both corners and recompute the midpoint.
    pub fn set_bounds(&mut self, corner_a: Point, corner_b: Point) {
        *self = Self::new(corner_a, corner_b);
    }

    /// The two corners, in the order they were set.
    pub fn bounds(&self) -> (Point, Point) {
        (self.corner_a, self.corner_b)
    }

    /// Componentwise average of the two corners.
    pub fn middle(&self) -> Point {
        self.middle
    }

    /// The normalized rectangle spanned by the corners.
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.corner_a, self.corner_b)
    }

    /// Whether the rectangle has zero width or zero height.
    pub fn is_degenerate(&self) -> bool {
        let r = self.rect();
        !(r.width() > 0.0 && r.height() > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_follows_bounds() {
        let mut cs = CoordinateSystem::new(Point::new(0.0, 100.0), Point::new(100.0, 0.0));
        assert_eq!(cs.middle(), Point::new(50.0, 50.0));
        cs.set_bounds(Point::new(-10.0, 4.0), Point::new(30.0, -4.0));
        assert_eq!(cs.middle(), Point::new(10.0, 0.0));
        assert_eq!(cs.bounds().0, Point::new(-10.0, 4.0));
    }

    #[test]
    fn rect_is_normalized_whatever_the_corner_order() {
        let cs = CoordinateSystem::new(Point::new(0.0, 100.0), Point::new(100.0, 0.0));
        assert_eq!(cs.rect(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(!cs.is_degenerate());
    }

    #[test]
    fn zero_extent_is_degenerate() {
        assert!(CoordinateSystem::default().is_degenerate());
        let line = CoordinateSystem::new(Point::new(5.0, 0.0), Point::new(5.0, 10.0));
        assert!(line.is_degenerate());
    }
}
