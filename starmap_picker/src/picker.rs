// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The map picker: points, index, and transformer wired to pointer input.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use kurbo::{Point, Rect, Size, Vec2};
use starmap_kdtree::{Iter, KdTree, KdTreeError};
use starmap_viewport::CoordinateTransformer;
use tracing::{debug, trace, warn};

use crate::error::PickerError;
use crate::hover::{HoverEvent, HoverState};
use crate::types::{Pick, PickerConfig, PlotPoint};

/// World units added on each side of an axis along which all points coincide.
const DEGENERATE_PAD: f64 = 0.5;

/// Picks plotted points under a cursor and keeps a map view's zoom and pan.
///
/// Feed it points with [`set_points`](Self::set_points) and the widget size
/// with [`resize`](Self::resize); then route pointer input through
/// [`pointer_moved`](Self::pointer_moved), [`double_clicked`](Self::double_clicked),
/// [`wheel`](Self::wheel), and [`drag`](Self::drag).
///
/// The world window is fitted to the first non-empty point set and afterwards
/// only changes through zoom and pan, so replacing the points (e.g. after a
/// filter change) keeps the user's view.
pub struct MapPicker<T> {
    config: PickerConfig,
    transformer: CoordinateTransformer,
    tree: KdTree<PlotPoint<T>>,
    hover: HoverState<usize>,
    world_fitted: bool,
}

impl<T> Default for MapPicker<T> {
    fn default() -> Self {
        Self::new(PickerConfig::default())
    }
}

impl<T> MapPicker<T> {
    /// Create an empty picker.
    pub fn new(config: PickerConfig) -> Self {
        Self {
            config,
            transformer: CoordinateTransformer::default(),
            tree: KdTree::default(),
            hover: HoverState::new(),
            world_fitted: false,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The world/view transformer, for drawing.
    pub fn transformer(&self) -> &CoordinateTransformer {
        &self.transformer
    }

    /// Number of plotted points.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether no points are plotted.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Iterate over plotted points in unspecified order.
    pub fn points(&self) -> Iter<'_, PlotPoint<T>> {
        self.tree.iter()
    }

    /// List index of the hovered point, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hover.current()
    }

    /// Replace the plotted points.
    ///
    /// Points with a non-finite coordinate are skipped. Hover is cleared and
    /// the matching leave event returned. The first non-empty set also fits
    /// the world window to the extents of these points, unless
    /// [`fit_world`](Self::fit_world) was called first. When only a filtered
    /// subset is plotted, call `fit_world` with the extent of the full
    /// catalogue beforehand to frame the whole map.
    pub fn set_points(
        &mut self,
        points: impl IntoIterator<Item = PlotPoint<T>>,
    ) -> Result<Vec<HoverEvent<usize>>, PickerError> {
        let mut skipped = 0_usize;
        let points: Vec<_> = points
            .into_iter()
            .filter(|p| {
                let keep = p.position.is_finite();
                skipped += usize::from(!keep);
                keep
            })
            .collect();
        if skipped > 0 {
            debug!(skipped, "dropped points without finite coordinates");
        }

        if !self.world_fitted
            && let Some(extent) = extent_of(&points)
        {
            self.fit_world(extent)?;
        }
        self.tree = KdTree::build(points, 2)?;
        Ok(self.hover.clear())
    }

    /// Fit the world window to `extent`, padding zero-width or zero-height axes.
    ///
    /// The world's top-left corner is (min x, max y), so world up is view up.
    pub fn fit_world(&mut self, extent: Rect) -> Result<(), PickerError> {
        let extent = pad_degenerate(extent.abs());
        self.transformer.set_world_bounds(
            Point::new(extent.x0, extent.y1),
            Point::new(extent.x1, extent.y0),
        );
        self.world_fitted = true;
        self.sync()
    }

    /// Set the widget size; the view rectangle is inset by the configured margin.
    pub fn resize(&mut self, size: Size) -> Result<(), PickerError> {
        let m = self.config.view_margin;
        self.transformer.set_view_bounds(
            Point::new(size.width * m, size.height * m),
            Point::new(size.width * (1.0 - m), size.height * (1.0 - m)),
        );
        self.sync()
    }

    /// The nearest plotted point to `cursor`, however far away.
    ///
    /// `None` when nothing is plotted or the view is not set up yet.
    pub fn nearest(&self, cursor: Point) -> Option<Pick<'_, T>> {
        if self.transformer.is_stale() {
            return None;
        }
        let world = self.transformer.to_world(cursor);
        let point = match self.tree.nearest(&[world.x, world.y]) {
            Ok(point) => point,
            Err(KdTreeError::EmptyIndex) => return None,
            Err(err) => {
                warn!(%err, "nearest-point query failed");
                return None;
            }
        };
        let view_distance = self
            .transformer
            .to_view_length(world.distance(point.position));
        Some(Pick {
            point,
            view_distance,
        })
    }

    /// The nearest plotted point if it lies within the pick radius of `cursor`.
    pub fn pick(&self, cursor: Point) -> Option<Pick<'_, T>> {
        self.nearest(cursor)
            .filter(|p| p.view_distance <= self.config.pick_radius)
    }

    /// Update hover for a pointer at `cursor`, returning the transitions.
    pub fn pointer_moved(&mut self, cursor: Point) -> Vec<HoverEvent<usize>> {
        let next = self.pick(cursor).map(|p| p.point.index);
        let events = self.hover.update(next);
        if !events.is_empty() {
            trace!(?events, "hover changed");
        }
        events
    }

    /// The pointer left the widget: clear hover.
    pub fn pointer_left(&mut self) -> Vec<HoverEvent<usize>> {
        self.hover.clear()
    }

    /// List index of the point double-clicked at `cursor`, if any.
    pub fn double_clicked(&self, cursor: Point) -> Option<usize> {
        self.pick(cursor).map(|p| p.point.index)
    }

    /// Zoom one step around `cursor`: in for `delta_y >= 0`, out otherwise.
    ///
    /// Ignored until both the world window and the view are set.
    pub fn wheel(&mut self, delta_y: f64, cursor: Point) -> Result<(), PickerError> {
        if self.transformer.is_stale() {
            return Ok(());
        }
        let step = if delta_y >= 0.0 {
            self.config.zoom_step
        } else {
            -self.config.zoom_step
        };
        self.transformer.zoom(step, cursor)?;
        Ok(())
    }

    /// Pan so the content follows a pointer drag of `delta` pixels.
    ///
    /// Ignored until both the world window and the view are set.
    pub fn drag(&mut self, delta: Vec2) -> Result<(), PickerError> {
        if self.transformer.is_stale() {
            return Ok(());
        }
        self.transformer.pan(delta)?;
        Ok(())
    }

    /// Recompute the transform once both rectangles are usable.
    fn sync(&mut self) -> Result<(), PickerError> {
        if self.world_fitted && !self.transformer.view().is_degenerate() {
            self.transformer.recompute()?;
        }
        Ok(())
    }
}

impl<T> Debug for MapPicker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapPicker")
            .field("config", &self.config)
            .field("points", &self.tree.len())
            .field("hovered", &self.hover.current())
            .field("world_fitted", &self.world_fitted)
            .field("transformer", &self.transformer)
            .finish_non_exhaustive()
    }
}

fn extent_of<T>(points: &[PlotPoint<T>]) -> Option<Rect> {
    let (first, rest) = points.split_first()?;
    let seed = Rect::from_points(first.position, first.position);
    Some(rest.iter().fold(seed, |r, p| r.union_pt(p.position)))
}

fn pad_degenerate(mut r: Rect) -> Rect {
    if r.width() <= 0.0 {
        r.x0 -= DEGENERATE_PAD;
        r.x1 += DEGENERATE_PAD;
    }
    if r.height() <= 0.0 {
        r.y0 -= DEGENERATE_PAD;
        r.y1 += DEGENERATE_PAD;
    }
    r
}
