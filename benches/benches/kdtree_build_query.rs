// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use starmap_kdtree::{KdTree, dist_sq};
use starmap_picker::{MapPicker, PickerConfig, PlotPoint};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_points(count: usize, extent: f64, seed: u64) -> Vec<[f64; 2]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| [rng.next_f64() * extent, rng.next_f64() * extent])
        .collect()
}

fn gen_points_3d(count: usize, extent: f64, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            [
                rng.next_f64() * extent,
                rng.next_f64() * extent,
                rng.next_f64() * extent,
            ]
        })
        .collect()
}

fn brute_nearest<'a>(points: &'a [[f64; 2]], q: &[f64; 2]) -> Option<&'a [f64; 2]> {
    points
        .iter()
        .min_by(|a, b| dist_sq(*a, q, 2).total_cmp(&dist_sq(*b, q, 2)))
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_build");
    for &n in &[1_000usize, 10_000, 100_000] {
        let pts = gen_points(n, 10_000.0, 0xC0FFEE);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_2d_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| black_box(KdTree::build(pts, 2)),
                BatchSize::LargeInput,
            )
        });
    }
    let pts = gen_points_3d(10_000, 10_000.0, 0xBEEF);
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("build_3d_n10000", |b| {
        b.iter_batched(
            || pts.clone(),
            |pts| black_box(KdTree::build(pts, 3)),
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("kdtree_nearest");
    let queries = gen_points(256, 10_000.0, 0xFACE);
    for &n in &[1_000usize, 10_000, 100_000] {
        let pts = gen_points(n, 10_000.0, 0xC0FFEE);
        let Ok(tree) = KdTree::build(pts.clone(), 2) else {
            continue;
        };
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("tree_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    let _ = black_box(tree.nearest(q));
                }
            })
        });
        // Linear scan baseline; only at sizes where it finishes in reasonable time.
        if n <= 10_000 {
            group.bench_function(format!("brute_force_n{}", n), |b| {
                b.iter(|| {
                    for q in &queries {
                        black_box(brute_nearest(&pts, q));
                    }
                })
            });
        }
    }
    group.finish();
}

fn bench_pointer_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("picker_pointer_moved");
    let stars: Vec<_> = gen_points(20_000, 1_000.0, 0xD00D)
        .into_iter()
        .enumerate()
        .map(|(i, [x, y])| PlotPoint::new(Point::new(x, y), (), i))
        .collect();
    let mut rng = Rng::new(0xABCD);
    let cursors: Vec<_> = (0..256)
        .map(|_| Point::new(rng.next_f64() * 1280.0, rng.next_f64() * 800.0))
        .collect();

    let mut picker = MapPicker::new(PickerConfig::default());
    if picker.set_points(stars).is_err() || picker.resize(Size::new(1280.0, 800.0)).is_err() {
        return;
    }
    group.throughput(Throughput::Elements(cursors.len() as u64));
    group.bench_function("n20000", |b| {
        b.iter(|| {
            for &cursor in &cursors {
                black_box(picker.pointer_moved(cursor));
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_nearest, bench_pointer_moves);
criterion_main!(benches);
