// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use loupe_layers::{LayerTree, ValidatorConfig, raw::RawScreen, validate};
use serde_json::{Value, json};

/// A grid of `rows` cards, each a group of a background, an icon and a label.
fn screen(rows: usize) -> RawScreen {
    let layers: Vec<Value> = (0..rows)
        .map(|row| {
            json!({
                "_id": format!("card-{row}"), "sourceId": format!("S-{row}"), "type": "group",
                "rect": { "x": 0, "y": row * 64, "width": 375, "height": 64 },
                "layers": [
                    { "_id": format!("bg-{row}"), "type": "shape",
                      "rect": { "x": 0, "y": 0, "width": 375, "height": 64 },
                      "fills": [{ "fillType": "color", "color": { "r": 255, "g": 255, "b": 255 } }] },
                    { "_id": format!("icon-{row}"), "type": "shape",
                      "rect": { "x": 16, "y": 20, "width": 24, "height": 24 } },
                    { "_id": format!("label-{row}"), "type": "text", "content": "Row",
                      "rect": { "x": 56, "y": 22, "width": 200, "height": 20 },
                      "textStyles": [{ "style": { "fontFace": "Lato-Regular", "fontSize": 16 } }] }
                ]
            })
        })
        .collect();
    let assets: Vec<Value> = (0..rows)
        .step_by(4)
        .map(|row| json!({ "layerId": format!("S-{row}"), "displayName": "card", "contents": [] }))
        .collect();
    RawScreen::from_value(json!({
        "width": 375, "height": rows * 64, "layers": layers, "assets": assets,
    }))
    .unwrap()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_tree/build");
    for rows in [25usize, 100, 400] {
        let raw = screen(rows);
        group.throughput(Throughput::Elements((rows * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &raw, |b, raw| {
            b.iter(|| black_box(LayerTree::build(&raw.layers, &raw.assets)));
        });
    }
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_tree/validate");
    let config = ValidatorConfig::default();
    for rows in [25usize, 100, 400] {
        let raw = screen(rows);
        let tree = LayerTree::build(&raw.layers, &raw.assets);
        group.throughput(Throughput::Elements(tree.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &tree, |b, tree| {
            b.iter(|| black_box(validate(tree, &config)));
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("layer_tree/hit_test");
    for rows in [25usize, 100, 400] {
        let raw = screen(rows);
        let tree = LayerTree::build(&raw.layers, &raw.assets);
        let at = Point::new(60.0, (rows as f64 / 2.0).floor() * 64.0 + 30.0);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &tree, |b, tree| {
            b.iter(|| black_box(tree.hit_test(black_box(at))));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_validate, bench_hit_test);
criterion_main!(benches);
