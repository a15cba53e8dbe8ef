// Copyright 2025 the Starmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use starmap_kdtree::KdTree;

use rstar::RTree;

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

fn bench_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_external_compare_f64");
    let queries = gen_points(256, 10_000.0, 0xFACE);
    for &n in &[10_000usize, 100_000] {
        let pts = gen_points(n, 10_000.0, 0xC0FFEE);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(format!("starmap_build_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| black_box(KdTree::build(pts, 2)),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("rstar_bulk_load_n{}", n), |b| {
            b.iter_batched(
                || pts.clone(),
                |pts| black_box(RTree::bulk_load(pts)),
                BatchSize::LargeInput,
            )
        });

        let Ok(tree) = KdTree::build(pts.clone(), 2) else {
            continue;
        };
        let rtree = RTree::bulk_load(pts);
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("starmap_nearest_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    let _ = black_box(tree.nearest(q));
                }
            })
        });
        group.bench_function(format!("rstar_nearest_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(rtree.nearest_neighbor(q));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_external_compare);
criterion_main!(benches);
