// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for viewport transforms.

use kurbo::Rect;
use thiserror::Error;

/// Errors that can occur while deriving a world/view mapping.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ViewportError {
    /// The world or view rectangle has zero width or height, so no uniform
    /// scale maps one onto the other.
    #[error("degenerate viewport bounds: world {world:?}, view {view:?}")]
    DegenerateBounds {
        /// Normalized world rectangle at the time of the failure.
        world: Rect,
        /// Normalized view rectangle at the time of the failure.
        view: Rect,
    },
}
