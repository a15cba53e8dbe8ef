// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for the picker.

use starmap_kdtree::KdTreeError;
use starmap_viewport::ViewportError;
use thiserror::Error;

/// Errors surfaced by [`MapPicker`](crate::MapPicker) operations.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum PickerError {
    /// Building or querying the point index failed.
    #[error(transparent)]
    Index(#[from] KdTreeError),
    /// The world/view mapping could not be derived.
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
