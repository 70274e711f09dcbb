// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use loupe_inspector::{Inspector, Key};
use loupe_selection::{SelectionPair, Slot, cycle};
use serde_json::{Value, json};

fn bench_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/cycle");
    for depth in [2usize, 8, 32] {
        let hits: Vec<u32> = (0..depth as u32).collect();
        let other = hits.get(1).copied();
        let current = hits.last().copied();
        group.bench_with_input(BenchmarkId::new("pure", depth), &hits, |b, hits| {
            b.iter(|| black_box(cycle(hits, other.as_ref(), current.as_ref())));
        });
        group.bench_with_input(BenchmarkId::new("pair", depth), &hits, |b, hits| {
            b.iter_batched(
                SelectionPair::<u32>::new,
                |mut pair| {
                    for _ in 0..depth {
                        pair.cycle(Slot::Primary, hits);
                    }
                    black_box(pair);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// `depth` nested groups, each inset by one point.
fn nested(depth: usize) -> String {
    let mut layer: Value = json!({
        "_id": "leaf", "type": "shape",
        "rect": { "x": 1, "y": 1, "width": 10, "height": 10 }
    });
    for level in 0..depth {
        layer = json!({
            "_id": format!("g{level}"), "type": "group",
            "rect": { "x": 1, "y": 1, "width": 400, "height": 400 },
            "layers": [layer]
        });
    }
    json!({ "width": 500, "height": 500, "layers": [layer], "assets": [] }).to_string()
}

fn bench_inspector_events(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection/inspector");
    for depth in [4usize, 16] {
        let mut inspector = Inspector::default();
        inspector.load_json(&nested(depth)).unwrap();
        let at = Point::new(depth as f64 + 5.0, depth as f64 + 5.0);
        group.bench_function(BenchmarkId::new("click_then_move", depth), |b| {
            b.iter(|| {
                inspector.click(black_box(at));
                inspector.pointer_move(black_box(at + Vec2::new(30.0, 30.0)));
                black_box(inspector.ruler());
            });
        });
        inspector.key_down(Key::Shift);
        group.bench_function(BenchmarkId::new("extended_move", depth), |b| {
            b.iter(|| {
                inspector.pointer_move(black_box(at + Vec2::new(30.0, 30.0)));
                black_box(inspector.ruler_label());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cycle, bench_inspector_events);
criterion_main!(benches);
