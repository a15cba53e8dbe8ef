// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker basics.
//!
//! Plot a handful of stars, size the widget, and pick under a few cursors.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p starmap_demos --example pick_basics`

use kurbo::{Point, Size};
use starmap_picker::{MapPicker, PickerConfig, PlotPoint};
use tracing_subscriber::EnvFilter;

struct Star {
    name: &'static str,
    x: Option<f64>,
    y: Option<f64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalogue = [
        Star { name: "Sol", x: Some(0.0), y: Some(0.0) },
        Star { name: "Sirius", x: Some(-16.1), y: Some(-4.2) },
        Star { name: "Unplotted", x: None, y: Some(3.0) },
        Star { name: "Procyon", x: Some(-9.4), y: Some(8.1) },
        Star { name: "Altair", x: Some(14.7), y: Some(11.9) },
    ];

    // Stars without coordinates are not plotted, but keep their catalogue index.
    let plotted = catalogue.iter().enumerate().filter_map(|(i, s)| {
        Some(PlotPoint::new(Point::new(s.x?, s.y?), s.name, i))
    });

    let mut picker = MapPicker::new(PickerConfig::default());
    picker.set_points(plotted).expect("stars have two coordinates");
    picker
        .resize(Size::new(640.0, 480.0))
        .expect("widget has a non-zero size");
    println!("plotted {} of {} stars", picker.len(), catalogue.len());

    for star in &catalogue {
        let (Some(x), Some(y)) = (star.x, star.y) else {
            continue;
        };
        let at = picker.transformer().to_view(Point::new(x, y));
        println!("{:>8} drawn at ({:.1}, {:.1})", star.name, at.x, at.y);
    }

    for cursor in [Point::new(320.0, 240.0), Point::new(100.0, 300.0), Point::new(20.0, 20.0)] {
        match picker.pick(cursor) {
            Some(hit) => println!(
                "cursor {:?}: {} (#{}), {:.1} px away",
                cursor, hit.point.item, hit.point.index, hit.view_distance
            ),
            None => {
                let near = picker.nearest(cursor);
                println!(
                    "cursor {:?}: nothing within {} px (nearest {:?})",
                    cursor,
                    picker.config().pick_radius,
                    near.map(|n| (n.point.item, n.view_distance))
                );
            }
        }
    }
}
