// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advisory validation findings.

use loupe_layers::{ScreenDetail, ValidatorConfig, WarningKind, validate};
use serde_json::json;

fn build(layers: serde_json::Value) -> ScreenDetail {
    let doc = json!({ "width": 100, "height": 100, "layers": layers, "assets": [] });
    ScreenDetail::from_json(&doc.to_string()).unwrap()
}

fn kinds(screen: &ScreenDetail) -> Vec<(String, WarningKind)> {
    validate(screen, &ValidatorConfig::default())
        .into_iter()
        .map(|w| (w.path, w.kind))
        .collect()
}

#[test]
fn clean_screen_has_no_findings() {
    let screen = build(json!([
        {
            "_id": "g", "type": "group",
            "fills": [
                { "fillType": "color", "color": { "r": 0, "g": 0, "b": 0, "a": 1 } },
                { "fillType": "gradient", "gradient": { "type": "angular" } }
            ],
            "borders": [{ "fillType": "color", "position": "inside", "join": "round" }],
            "shadows": [{ "type": "outer", "color": { "r": 0, "g": 0, "b": 0, "a": 0.2 } }],
            "layers": [
                { "_id": "t", "type": "text", "content": "   " },
                { "_id": "s", "type": "shape", "borders": [{ "fillType": "color", "position": "center" }] }
            ]
        }
    ]));
    assert!(kinds(&screen).is_empty());
}

#[test]
fn text_layer_findings() {
    let screen = build(json!([
        {
            "_id": "t", "type": "text", "content": "Hi",
            "fills": [{ "fillType": "color" }],
            "shadows": [{ "type": "outer", "color": {} }]
        },
        {
            "_id": "u", "type": "text", "content": "Yo",
            "textStyles": [
                { "style": { "fontFace": "Comic-Sans" } },
                { "style": { "fontFace": "Roboto-Bold" } },
                { "style": {} }
            ]
        }
    ]));
    assert_eq!(
        kinds(&screen),
        [
            ("layers[0]".to_string(), WarningKind::TextHasFills),
            ("layers[0]".to_string(), WarningKind::TextHasShadows),
            ("layers[0]".to_string(), WarningKind::TextWithoutStyles),
            (
                "layers[1]".to_string(),
                WarningKind::UnknownFontFace(Some("Comic-Sans".into()))
            ),
            ("layers[1]".to_string(), WarningKind::UnknownFontFace(None)),
        ]
    );
}

#[test]
fn paint_findings_on_nested_layers() {
    let screen = build(json!([
        {
            "_id": "g", "type": "group",
            "layers": [
                { "_id": "a", "type": "shape" },
                {
                    "_id": "b", "type": "shape",
                    "fills": [
                        { "fillType": "pattern" },
                        { "fillType": "gradient", "gradient": { "type": "radial" } }
                    ],
                    "shadows": [{ "type": "inner" }],
                    "borders": [{ "fillType": "gradient", "join": "bevel", "position": "middle" }]
                }
            ]
        }
    ]));
    let path = "layers[0].layers[1]".to_string();
    assert_eq!(
        kinds(&screen),
        [
            (path.clone(), WarningKind::UnknownFillType("pattern".into())),
            (path.clone(), WarningKind::UnknownGradientType("radial".into())),
            (path.clone(), WarningKind::UnknownShadowType("inner".into())),
            (path.clone(), WarningKind::ShadowWithoutColor),
            (path.clone(), WarningKind::UnknownBorderFillType("gradient".into())),
            (path.clone(), WarningKind::UnknownBorderJoin("bevel".into())),
            (path, WarningKind::UnknownBorderPosition("middle".into())),
        ]
    );
}

#[test]
fn unknown_types_and_stray_children() {
    let screen = build(json!([
        { "_id": "x", "type": "slice" },
        { "_id": "s", "type": "shape", "layers": [{ "_id": "inner", "type": "shape" }] }
    ]));
    assert_eq!(
        kinds(&screen),
        [
            ("layers[0]".to_string(), WarningKind::UnknownLayerType("slice".into())),
            ("layers[1]".to_string(), WarningKind::ChildrenOnNonGroup),
        ]
    );
    // The stray child is still part of the tree.
    assert!(screen.get("inner").is_some());
}

#[test]
fn validation_leaves_tree_untouched() {
    let screen = build(json!([{ "_id": "x", "type": "slice", "fills": [{ "fillType": "?" }] }]));
    let before = format!("{:?}", screen.tree);
    let warnings = validate(&screen, &ValidatorConfig::default());
    assert_eq!(warnings.len(), 1);
    assert_eq!(format!("{:?}", screen.tree), before);
    assert_eq!(warnings[0].node, screen.lookup("x").unwrap());
    assert_eq!(warnings[0].to_string(), "layers[0] unknown layer type: \"slice\"");
}

#[test]
fn custom_font_allow_list() {
    let screen = build(json!([
        { "_id": "t", "type": "text", "content": "A",
          "textStyles": [{ "style": { "fontFace": "Inter-Regular" } }] }
    ]));
    let config = ValidatorConfig {
        known_fonts: vec!["Inter-Regular".into()],
    };
    assert!(validate(&screen, &config).is_empty());
    assert_eq!(validate(&screen, &ValidatorConfig::default()).len(), 1);
}
