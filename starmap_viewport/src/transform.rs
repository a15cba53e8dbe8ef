// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forward/inverse mapping between world space and view space.

use kurbo::{Affine, Point, Vec2};
use tracing::{debug, warn};

use crate::coords::CoordinateSystem;
use crate::error::ViewportError;

/// Maps points and lengths between a world rectangle and a view rectangle.
///
/// The mapping scales uniformly so the whole world rectangle fits inside the
/// view ("contain" fit), flips the y axis (world up is view down), and lines
/// up the two midpoints:
///
/// `view = s · flip_y(world − world_middle) + view_middle`
///
/// Changing either rectangle does not touch the cached matrices. Call
/// [`recompute`](Self::recompute) before mapping again; until then
/// [`is_stale`](Self::is_stale) is `true` and mappings use the old matrices.
#[derive(Clone, Debug)]
pub struct CoordinateTransformer {
    world: CoordinateSystem,
    view: CoordinateSystem,
    forward: Affine,
    inverse: Affine,
    scale: f64,
    stale: bool,
}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        Self {
            world: CoordinateSystem::default(),
            view: CoordinateSystem::default(),
            forward: Affine::IDENTITY,
            inverse: Affine::IDENTITY,
            scale: 1.0,
            stale: true,
        }
    }
}

impl CoordinateTransformer {
    /// Create a transformer from world and view corner pairs and compute its matrices.
    pub fn new(world: (Point, Point), view: (Point, Point)) -> Result<Self, ViewportError> {
        let mut t = Self::default();
        t.set_world_bounds(world.0, world.1);
        t.set_view_bounds(view.0, view.1);
        t.recompute()?;
        Ok(t)
    }

    /// World (data space) rectangle.
    pub fn world(&self) -> &CoordinateSystem {
        &self.world
    }

    /// View (pixel space) rectangle.
    pub fn view(&self) -> &CoordinateSystem {
        &self.view
    }

    /// Replace the world rectangle. Marks the matrices stale.
    pub fn set_world_bounds(&mut self, corner_a: Point, corner_b: Point) {
        self.world.set_bounds(corner_a, corner_b);
        self.stale = true;
        debug!(?corner_a, ?corner_b, "world bounds changed");
    }

    /// Replace the view rectangle. Marks the matrices stale.
    pub fn set_view_bounds(&mut self, corner_a: Point, corner_b: Point) {
        self.view.set_bounds(corner_a, corner_b);
        self.stale = true;
        debug!(?corner_a, ?corner_b, "view bounds changed");
    }

    /// Whether bounds changed since the last successful [`recompute`](Self::recompute).
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Uniform scale from world units to pixels for the current bounds:
    /// `min(|view_w / world_w|, |view_h / world_h|)`.
    ///
    /// Zero-area rectangles, and extents so tiny or huge that the scale is not
    /// a finite positive number, are [`ViewportError::DegenerateBounds`].
    pub fn scale_factor(&self) -> Result<f64, ViewportError> {
        let world = self.world.rect();
        let view = self.view.rect();
        let degenerate = ViewportError::DegenerateBounds { world, view };
        if self.world.is_degenerate() || self.view.is_degenerate() {
            return Err(degenerate);
        }
        let s = (view.width() / world.width()).min(view.height() / world.height());
        if !(s.is_finite() && s > 0.0) {
            return Err(degenerate);
        }
        Ok(s)
    }

    /// Derive the forward and inverse matrices from the current bounds.
    ///
    /// On error the previous matrices are kept and the transformer stays stale.
    pub fn recompute(&mut self) -> Result<(), ViewportError> {
        let s = self.scale_factor()?;
        let forward = Affine::translate(self.view.middle().to_vec2())
            * Affine::scale_non_uniform(s, -s)
            * Affine::translate(-self.world.middle().to_vec2());
        self.forward = forward;
        self.inverse = forward.inverse();
        self.scale = s;
        self.stale = false;
        debug!(scale = s, "recomputed viewport transform");
        Ok(())
    }

    /// World → view matrix.
    pub fn forward(&self) -> Affine {
        self.forward
    }

    /// View → world matrix.
    pub fn inverse(&self) -> Affine {
        self.inverse
    }

    /// Map a world point to view space.
    pub fn to_view(&self, world: Point) -> Point {
        self.warn_if_stale();
        self.forward * world
    }

    /// Map a view point to world space.
    pub fn to_world(&self, view: Point) -> Point {
        self.warn_if_stale();
        self.inverse * view
    }

    /// Convert a world length to pixels (ignores translation).
    pub fn to_view_length(&self, len: f64) -> f64 {
        self.warn_if_stale();
        self.scale * len
    }

    /// Convert a pixel length to world units (ignores translation).
    pub fn to_world_length(&self, len: f64) -> f64 {
        self.warn_if_stale();
        len / self.scale
    }

    /// Zoom around a pivot given in view space.
    ///
    /// Each world corner moves toward the world point under the pivot by
    /// `factor` of the way: `corner' = corner · (1 − factor) + pivot · factor`.
    /// Positive factors zoom in, negative factors zoom out, and the pixel under
    /// the pivot stays where it is.
    pub fn zoom(&mut self, factor: f64, pivot: Point) -> Result<(), ViewportError> {
        let pivot_world = self.to_world(pivot);
        let (a, b) = self.world.bounds();
        self.replace_world(a.lerp(pivot_world, factor), b.lerp(pivot_world, factor))
    }

    /// Shift the world window so content follows a pointer drag of `delta` pixels.
    pub fn pan(&mut self, delta: Vec2) -> Result<(), ViewportError> {
        let shift = self.to_world(Point::ORIGIN + delta) - self.to_world(Point::ORIGIN);
        let (a, b) = self.world.bounds();
        self.replace_world(a - shift, b - shift)
    }

    /// Set new world bounds and recompute, leaving everything untouched on failure.
    fn replace_world(&mut self, corner_a: Point, corner_b: Point) -> Result<(), ViewportError> {
        let saved = (self.world, self.stale);
        self.set_world_bounds(corner_a, corner_b);
        if let Err(err) = self.recompute() {
            (self.world, self.stale) = saved;
            return Err(err);
        }
        Ok(())
    }

    fn warn_if_stale(&self) {
        if self.stale {
            warn!("mapping through stale viewport matrices; call recompute() after changing bounds");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    fn square() -> CoordinateTransformer {
        CoordinateTransformer::new(
            (Point::new(0.0, 100.0), Point::new(100.0, 0.0)),
            (Point::new(0.0, 0.0), Point::new(200.0, 200.0)),
        )
        .unwrap()
    }

    #[test]
    fn maps_corners_and_middle() {
        let t = square();
        assert!(close(t.to_view(Point::new(50.0, 50.0)), Point::new(100.0, 100.0)));
        assert!(close(t.to_view(Point::new(0.0, 100.0)), Point::new(0.0, 0.0)));
        assert!(close(t.to_view(Point::new(100.0, 0.0)), Point::new(200.0, 200.0)));
        assert!(close(t.to_world(Point::new(0.0, 0.0)), Point::new(0.0, 100.0)));
    }

    #[test]
    fn lengths_scale_uniformly() {
        let t = square();
        assert_eq!(t.scale_factor().unwrap(), 2.0);
        assert_eq!(t.to_view_length(10.0), 20.0);
        assert_eq!(t.to_world_length(20.0), 10.0);
    }

    #[test]
    fn fit_uses_the_tighter_axis() {
        // 100×50 world into a 400×400 view: x allows 4, y allows 8.
        let t = CoordinateTransformer::new(
            (Point::new(0.0, 50.0), Point::new(100.0, 0.0)),
            (Point::new(0.0, 0.0), Point::new(400.0, 400.0)),
        )
        .unwrap();
        assert_eq!(t.scale_factor().unwrap(), 4.0);
        // Midpoints line up; the short axis is letterboxed.
        assert!(close(t.to_view(Point::new(0.0, 50.0)), Point::new(0.0, 100.0)));
    }

    #[test]
    fn y_axis_is_flipped() {
        let t = square();
        let low = t.to_view(Point::new(50.0, 10.0));
        let high = t.to_view(Point::new(50.0, 90.0));
        assert!(high.y < low.y);
    }

    #[test]
    fn bounds_changes_mark_stale_until_recompute() {
        let mut t = square();
        assert!(!t.is_stale());
        t.set_view_bounds(Point::new(0.0, 0.0), Point::new(400.0, 400.0));
        assert!(t.is_stale());
        // Stale matrices still answer with the previous mapping.
        assert_eq!(t.to_view_length(10.0), 20.0);
        t.recompute().unwrap();
        assert!(!t.is_stale());
        assert_eq!(t.to_view_length(10.0), 40.0);
    }

    #[test]
    fn degenerate_bounds_are_reported() {
        let mut t = square();
        t.set_world_bounds(Point::new(5.0, 0.0), Point::new(5.0, 100.0));
        let err = t.recompute().unwrap_err();
        assert!(matches!(err, ViewportError::DegenerateBounds { .. }));
        assert!(t.is_stale());
        // Previous matrices survive.
        assert_eq!(t.to_view_length(10.0), 20.0);

        let unset = CoordinateTransformer::default();
        assert!(unset.scale_factor().is_err());
    }

    #[test]
    fn non_finite_scale_is_degenerate() {
        // Subnormal world extent: the scale overflows to infinity.
        let err = CoordinateTransformer::new(
            (Point::new(0.0, 1e-320), Point::new(1e-320, 0.0)),
            (Point::new(0.0, 0.0), Point::new(200.0, 200.0)),
        )
        .unwrap_err();
        assert!(matches!(err, ViewportError::DegenerateBounds { .. }));

        // Infinite world extent: the scale collapses to zero.
        let mut t = CoordinateTransformer::default();
        t.set_world_bounds(Point::new(f64::NEG_INFINITY, 1.0), Point::new(f64::INFINITY, 0.0));
        t.set_view_bounds(Point::new(0.0, 0.0), Point::new(200.0, 200.0));
        assert!(t.scale_factor().is_err());
        assert!(t.recompute().is_err());
        assert!(t.is_stale());
    }

    #[test]
    fn zoom_out_to_overflow_is_rejected() {
        let mut t = square();
        let before = *t.world();
        let err = t.zoom(-1e308, Point::new(50.0, 50.0)).unwrap_err();
        assert!(matches!(err, ViewportError::DegenerateBounds { .. }));
        assert_eq!(*t.world(), before);
        assert!(!t.is_stale());
        assert!(close(t.to_world(Point::new(100.0, 100.0)), Point::new(50.0, 50.0)));
    }

    #[test]
    fn zoom_in_shrinks_world_around_pivot() {
        let mut t = square();
        let pivot = Point::new(50.0, 150.0);
        let before = t.to_world(pivot);
        t.zoom(0.5, pivot).unwrap();
        assert_eq!(t.scale_factor().unwrap(), 4.0);
        assert!(close(t.to_view(before), pivot));

        let (a, b) = t.world().bounds();
        assert!(close(a, Point::new(12.5, 62.5)));
        assert!(close(b, Point::new(62.5, 12.5)));
    }

    #[test]
    fn zoom_out_grows_world() {
        let mut t = square();
        t.zoom(-0.1, Point::new(100.0, 100.0)).unwrap();
        let r = t.world().rect();
        assert!((r.width() - 110.0).abs() < EPS);
        assert!(t.scale_factor().unwrap() < 2.0);
    }

    #[test]
    fn zoom_that_collapses_world_is_rejected() {
        let mut t = square();
        let before = *t.world();
        let err = t.zoom(1.0, Point::new(20.0, 20.0)).unwrap_err();
        assert!(matches!(err, ViewportError::DegenerateBounds { .. }));
        assert_eq!(*t.world(), before);
        assert!(!t.is_stale());
    }

    #[test]
    fn pan_moves_content_with_the_pointer() {
        let mut t = square();
        let star = Point::new(30.0, 70.0);
        let at = t.to_view(star);
        t.pan(Vec2::new(15.0, -40.0)).unwrap();
        assert!(close(t.to_view(star), at + Vec2::new(15.0, -40.0)));
        assert_eq!(t.scale_factor().unwrap(), 2.0);
    }
}
