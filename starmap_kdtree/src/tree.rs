// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bulk-built k-d tree with nearest-neighbour search and traversal.

use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::Debug;
use core::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::KdTreeError;
use crate::types::{Coords, ScalarAcc, axis_dist_sq, cmp_t, dist_sq, le, lt};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

impl NodeIdx {
    const fn new(i: usize) -> Self {
        Self(i)
    }

    const fn get(self) -> usize {
        self.0
    }
}

/// Where a freshly built node hangs.
#[derive(Copy, Clone, Debug)]
enum Slot {
    Root,
    Left(NodeIdx),
    Right(NodeIdx),
}

#[derive(Copy, Clone, Debug)]
enum Step {
    Descend(NodeIdx),
    Visit(NodeIdx),
}

#[derive(Clone)]
struct Node<P> {
    value: P,
    axis: usize,
    left: Option<NodeIdx>,
    right: Option<NodeIdx>,
}

impl<P: Coords> Node<P> {
    /// Descent direction shared by build and query: ties go left.
    fn goes_left<Q>(&self, query: &Q) -> bool
    where
        Q: Coords<Scalar = P::Scalar> + ?Sized,
    {
        le(query.coord(self.axis), self.value.coord(self.axis))
    }

    fn child_toward<Q>(&self, query: &Q) -> Option<NodeIdx>
    where
        Q: Coords<Scalar = P::Scalar> + ?Sized,
    {
        if self.goes_left(query) {
            self.left
        } else {
            self.right
        }
    }

    fn child_away<Q>(&self, query: &Q) -> Option<NodeIdx>
    where
        Q: Coords<Scalar = P::Scalar> + ?Sized,
    {
        if self.goes_left(query) {
            self.right
        } else {
            self.left
        }
    }
}

/// Whether every point equals the first on every axis.
fn all_coincident<P: Coords>(items: &[P], dims: usize) -> bool {
    let Some((first, rest)) = items.split_first() else {
        return true;
    };
    rest.iter().all(|p| {
        (0..dims).all(|axis| p.coord(axis).partial_cmp(&first.coord(axis)) == Some(Ordering::Equal))
    })
}

/// A k-d tree over opaque point payloads.
///
/// The tree is built once from a list of points and never mutated; rebuild it
/// when the point set changes. Nodes live in an arena without parent links, so
/// the whole structure is dropped at once.
///
/// Among several points at the same minimal distance from a query,
/// [`nearest`](Self::nearest) returns one of them. Which one is unspecified,
/// but it is the same for repeated calls with the same tree and query.
#[derive(Clone)]
pub struct KdTree<P: Coords> {
    dims: usize,
    root: Option<NodeIdx>,
    arena: Vec<Node<P>>,
}

impl<P: Coords> Default for KdTree<P> {
    fn default() -> Self {
        Self {
            dims: 0,
            root: None,
            arena: Vec::new(),
        }
    }
}

impl<P: Coords> KdTree<P> {
    /// Build a tree over `points`, each of which must have `dims` coordinates.
    ///
    /// An empty `points` list yields an empty tree; querying it fails with
    /// [`KdTreeError::EmptyIndex`].
    pub fn build(points: Vec<P>, dims: usize) -> Result<Self, KdTreeError> {
        if dims == 0 {
            return Err(KdTreeError::ZeroDimensions);
        }
        if let Some((index, p)) = points.iter().enumerate().find(|(_, p)| p.dims() != dims) {
            return Err(KdTreeError::InvalidDimension {
                index,
                expected: dims,
                found: p.dims(),
            });
        }
        let tree = Self::build_arena(points, dims);
        debug!(points = tree.len(), dims, depth = tree.depth(), "built k-d tree");
        Ok(tree)
    }

    /// Build a tree taking the dimensionality from the first point.
    ///
    /// All other points must agree with it. An empty list yields an empty tree
    /// whose [`dims`](Self::dims) is `0`.
    pub fn from_points(points: Vec<P>) -> Result<Self, KdTreeError> {
        match points.first().map(Coords::dims) {
            None => Ok(Self::default()),
            Some(dims) => Self::build(points, dims),
        }
    }

    /// Split `points` into the arena with an explicit work stack.
    ///
    /// Coincident points can never be separated by a split, so a run of them
    /// forms a left-leaning chain as deep as the run is long.
    fn build_arena(points: Vec<P>, dims: usize) -> Self {
        let mut tree = Self {
            dims,
            root: None,
            arena: Vec::with_capacity(points.len()),
        };
        let mut work = vec![(points, 0_usize, Slot::Root)];
        while let Some((mut items, depth, slot)) = work.pop() {
            if items.is_empty() {
                continue;
            }
            if all_coincident(&items, dims) {
                let (mut slot, mut depth) = (slot, depth);
                while let Some(value) = items.pop() {
                    let idx = tree.attach(slot, value, depth % dims);
                    slot = Slot::Left(idx);
                    depth += 1;
                }
                continue;
            }

            let axis = depth % dims;
            items.sort_by(|a, b| cmp_t(a.coord(axis), b.coord(axis)));

            // Lower median, moved past equal keys so the right subtree is strictly greater.
            let mut m = items.len() / 2;
            while m + 1 < items.len() && le(items[m + 1].coord(axis), items[m].coord(axis)) {
                m += 1;
            }

            let mut upper = items.split_off(m);
            let right_items = upper.split_off(1);
            let Some(value) = upper.pop() else {
                continue;
            };
            let idx = tree.attach(slot, value, axis);
            work.push((right_items, depth + 1, Slot::Right(idx)));
            work.push((items, depth + 1, Slot::Left(idx)));
        }
        tree
    }

    fn attach(&mut self, slot: Slot, value: P, axis: usize) -> NodeIdx {
        let idx = NodeIdx::new(self.arena.len());
        self.arena.push(Node {
            value,
            axis,
            left: None,
            right: None,
        });
        match slot {
            Slot::Root => self.root = Some(idx),
            Slot::Left(parent) => self.arena[parent.get()].left = Some(idx),
            Slot::Right(parent) => self.arena[parent.get()].right = Some(idx),
        }
        idx
    }

    /// Number of coordinates per point.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels from the root to the deepest node (`0` when empty).
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeIdx, usize)> = self.root.map(|r| (r, 1)).into_iter().collect();
        while let Some((idx, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = self.node(idx);
            stack.extend(node.left.map(|c| (c, level + 1)));
            stack.extend(node.right.map(|c| (c, level + 1)));
        }
        deepest
    }

    /// The stored point closest to `query` by Euclidean distance.
    pub fn nearest<Q>(&self, query: &Q) -> Result<&P, KdTreeError>
    where
        Q: Coords<Scalar = P::Scalar> + ?Sized,
    {
        self.nearest_with_distance_sq(query).map(|(p, _)| p)
    }

    /// Like [`nearest`](Self::nearest), also returning the squared distance.
    pub fn nearest_with_distance_sq<Q>(
        &self,
        query: &Q,
    ) -> Result<(&P, ScalarAcc<P::Scalar>), KdTreeError>
    where
        Q: Coords<Scalar = P::Scalar> + ?Sized,
    {
        let Some(root) = self.root else {
            return Err(KdTreeError::EmptyIndex);
        };
        if query.dims() != self.dims {
            return Err(KdTreeError::InvalidDimension {
                index: 0,
                expected: self.dims,
                found: query.dims(),
            });
        }
        let seed = (root, dist_sq(query, &self.node(root).value, self.dims));
        let mut visited = 0_usize;
        let (best, best_d) = self.search(root, query, seed, &mut visited);
        trace!(visited, points = self.len(), "nearest-neighbour query");
        Ok((&self.node(best).value, best_d))
    }

    /// Descend from `start` to a leaf, then unwind the path, crossing into the
    /// unvisited child wherever the splitting plane is within the best distance.
    ///
    /// Crossings go on the same stack as the pending path, so they are explored
    /// before the remaining ancestors.
    fn search<Q>(
        &self,
        start: NodeIdx,
        query: &Q,
        seed: (NodeIdx, ScalarAcc<P::Scalar>),
        visited: &mut usize,
    ) -> (NodeIdx, ScalarAcc<P::Scalar>)
    where
        Q: Coords<Scalar = P::Scalar> + ?Sized,
    {
        let (mut best, mut best_d) = seed;
        let mut stack = vec![Step::Descend(start)];
        while let Some(step) = stack.pop() {
            match step {
                Step::Descend(from) => {
                    let mut next = Some(from);
                    while let Some(idx) = next {
                        stack.push(Step::Visit(idx));
                        next = self.node(idx).child_toward(query);
                    }
                }
                Step::Visit(idx) => {
                    *visited += 1;
                    let node = self.node(idx);
                    let d = dist_sq(query, &node.value, self.dims);
                    if lt(d, best_d) {
                        best = idx;
                        best_d = d;
                    }
                    let plane_d =
                        axis_dist_sq(query.coord(node.axis), node.value.coord(node.axis));
                    if le(plane_d, best_d)
                        && let Some(other) = node.child_away(query)
                    {
                        stack.push(Step::Descend(other));
                    }
                }
            }
        }
        (best, best_d)
    }

    /// Iterate over every stored point exactly once, in unspecified order.
    pub fn iter(&self) -> Iter<'_, P> {
        Iter {
            tree: self,
            stack: self.root.into_iter().collect(),
            remaining: self.len(),
        }
    }

    fn node(&self, idx: NodeIdx) -> &Node<P> {
        &self.arena[idx.get()]
    }
}

impl<P: Coords> Debug for KdTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("dims", &self.dims)
            .field("points", &self.len())
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

impl<'a, P: Coords> IntoIterator for &'a KdTree<P> {
    type Item = &'a P;
    type IntoIter = Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`KdTree`], created by [`KdTree::iter`].
pub struct Iter<'a, P: Coords> {
    tree: &'a KdTree<P>,
    stack: Vec<NodeIdx>,
    remaining: usize,
}

impl<'a, P: Coords> Iterator for Iter<'a, P> {
    type Item = &'a P;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(idx);
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P: Coords> ExactSizeIterator for Iter<'_, P> {}

impl<P: Coords> FusedIterator for Iter<'_, P> {}

impl<P: Coords> Debug for Iter<'_, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}
