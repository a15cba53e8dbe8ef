// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state helper: compute enter/leave transitions as the hovered point changes.
//!
//! ```
//! use starmap_picker::hover::{HoverEvent, HoverState};
//! let mut h: HoverState<usize> = HoverState::new();
//! assert_eq!(h.update(Some(4)), vec![HoverEvent::Enter(4)]);
//! assert!(h.update(Some(4)).is_empty());
//! assert_eq!(h.update(Some(9)), vec![HoverEvent::Leave(4), HoverEvent::Enter(9)]);
//! assert_eq!(h.clear(), vec![HoverEvent::Leave(9)]);
//! ```

use alloc::vec::Vec;

/// Tracks at most one hovered key and reports transitions between keys.
///
/// A map view only ever highlights the single nearest point, so there is no
/// ancestry to walk: a change of target is one `Leave` followed by one `Enter`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Copy + Eq> {
    current: Option<K>,
}

/// A hover transition event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer is now over the given point.
    Enter(K),
    /// The pointer is no longer over the given point.
    Leave(K),
}

impl<K: Copy + Eq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self { current: None }
    }

    /// The currently hovered key, if any.
    pub fn current(&self) -> Option<K> {
        self.current
    }

    /// Clear the hovered key, returning the leave event if something was hovered.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.update(None)
    }

    /// Move hover to `next` and return the transitions, leave before enter.
    ///
    /// Returns an empty list when the target did not change.
    pub fn update(&mut self, next: Option<K>) -> Vec<HoverEvent<K>> {
        if next == self.current {
            return Vec::new();
        }
        let mut out = Vec::with_capacity(2);
        if let Some(old) = self.current {
            out.push(HoverEvent::Leave(old));
        }
        if let Some(new) = next {
            out.push(HoverEvent::Enter(new));
        }
        self.current = next;
        out
    }
}
