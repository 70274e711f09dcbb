// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use loupe_ruler::{label, measure};

fn bench_measure(c: &mut Criterion) {
    let mut group = c.benchmark_group("ruler/measure");
    let canvas = Size::new(375.0, 812.0);
    let selected = [
        Rect::new(16.0, 120.0, 359.0, 184.0),
        Rect::new(56.0, 142.0, 256.0, 162.0),
    ];
    // A pointer sweep across the canvas, as pointer-move events would produce.
    let cursors: Vec<Point> = (0..64)
        .map(|i| Point::new(f64::from(i) * 5.8, f64::from(i) * 12.6))
        .collect();

    for (name, count) in [("none", 0usize), ("one", 1), ("two", 2)] {
        for extended in [false, true] {
            let id = BenchmarkId::new(name, if extended { "extended" } else { "plain" });
            group.bench_function(id, |b| {
                b.iter(|| {
                    for &cursor in &cursors {
                        let rect = measure(
                            cursor,
                            canvas,
                            selected[..count].iter().copied(),
                            extended,
                        );
                        black_box(rect);
                    }
                });
            });
        }
    }
    group.finish();
}

fn bench_label(c: &mut Criterion) {
    let rect = Rect::new(12.25, 0.0, 4_012.5, 93.333);
    c.bench_function("ruler/label", |b| {
        b.iter(|| black_box(label(black_box(rect)).to_string()));
    });
}

criterion_group!(benches, bench_measure, bench_label);
criterion_main!(benches);
