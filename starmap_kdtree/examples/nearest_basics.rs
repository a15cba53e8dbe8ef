// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of the Starmap k-d tree: build, query, and walk.

use starmap_kdtree::KdTree;

fn main() {
    let stars: Vec<[f64; 2]> = vec![[0.0, 0.0], [12.0, 4.0], [-3.0, 9.0], [7.5, -6.0]];
    let tree = KdTree::build(stars, 2).expect("all points are 2D");
    println!("tree: {:?}", tree);

    let (nearest, d2) = tree
        .nearest_with_distance_sq(&[8.0, -5.0])
        .expect("tree is not empty");
    println!("nearest to (8, -5): {:?} at distance {}", nearest, d2.sqrt());

    // Rebuild when the point set changes.
    let mut moved: Vec<_> = tree.iter().copied().collect();
    moved.push([8.0, -5.5]);
    let tree = KdTree::build(moved, 2).expect("all points are 2D");
    println!("after rebuild: {:?}", tree.nearest(&[8.0, -5.0]));
}
