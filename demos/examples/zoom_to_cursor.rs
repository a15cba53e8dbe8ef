// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel zoom around the cursor, then drag to pan.
//!
//! The world point under the cursor stays put while zooming.
//!
//! Run:
//! - `RUST_LOG=starmap_viewport=debug cargo run -p starmap_demos --example zoom_to_cursor`

use kurbo::{Point, Vec2};
use starmap_viewport::CoordinateTransformer;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut t = CoordinateTransformer::new(
        (Point::new(-50.0, 50.0), Point::new(50.0, -50.0)),
        (Point::new(40.0, 30.0), Point::new(360.0, 270.0)),
    )
    .expect("non-degenerate bounds");

    let cursor = Point::new(250.0, 100.0);
    let under = t.to_world(cursor);
    println!("cursor {:?} is over world {:?}", cursor, under);

    for notch in [1.0, 1.0, 1.0, -1.0] {
        let step = if notch >= 0.0 { 0.1 } else { -0.1 };
        t.zoom(step, cursor).expect("zoom keeps a positive extent");
        let (a, b) = t.world().bounds();
        println!(
            "zoom {:+.1}: world {:?}..{:?}, 1 world unit = {:.3} px, cursor still over {:?}",
            step,
            a,
            b,
            t.to_view_length(1.0),
            t.to_world(cursor)
        );
    }

    t.pan(Vec2::new(-40.0, 25.0)).expect("pan keeps the extent");
    println!(
        "after drag, {:?} is drawn at {:?}",
        under,
        t.to_view(under)
    );
}
