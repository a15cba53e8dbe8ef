// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover transitions while a pointer sweeps across the map.
//!
//! Run:
//! - `cargo run -p starmap_demos --example hover_transitions`

use kurbo::{Point, Size};
use starmap_picker::{HoverEvent, MapPicker, PickerConfig, PlotPoint};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A row of stars 10 world units apart.
    let names = ["Alnitak", "Alnilam", "Mintaka"];
    let stars = names
        .iter()
        .enumerate()
        .map(|(i, &name)| PlotPoint::new(Point::new(i as f64 * 10.0, 0.0), name, i));

    let mut picker = MapPicker::new(PickerConfig {
        pick_radius: 12.0,
        ..PickerConfig::default()
    });
    picker.set_points(stars).expect("stars have two coordinates");
    picker
        .resize(Size::new(400.0, 200.0))
        .expect("widget has a non-zero size");

    let y = picker.transformer().to_view(Point::new(0.0, 0.0)).y;
    for step in 0..=40 {
        let cursor = Point::new(step as f64 * 10.0, y);
        for event in picker.pointer_moved(cursor) {
            match event {
                HoverEvent::Enter(i) => println!("x={:>5.1} enter {}", cursor.x, names[i]),
                HoverEvent::Leave(i) => println!("x={:>5.1} leave {}", cursor.x, names[i]),
            }
        }
    }
    for event in picker.pointer_left() {
        println!("pointer left: {:?}", event);
    }
}
