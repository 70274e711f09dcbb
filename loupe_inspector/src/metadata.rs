// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The side panel's view of a layer.
//!
//! [`layer_json`] projects a layer back into the description's vocabulary and
//! [`prune`] strips it down to what is worth reading: bookkeeping keys,
//! default values and empty containers go, and colours become `#rrggbb` (or a
//! palette token) strings.

use loupe_layers::{
    Border, BorderJoin, BorderPosition, Color, Fill, GradientKind, Layer, LayerKind, Shadow,
};
use loupe_ruler::Decimal;
use serde_json::{Map, Value, json};

/// Keys that are never shown.
pub const HIDDEN_KEYS: &[&str] = &[
    "sourceId",
    "type",
    "_id",
    "componentId",
    "componentName",
    "componentProperties",
    "fromLibrary",
    "interactionLevel",
    "blendMode",
    "layers",
    "exportable",
    "constraints",
    "relativeTo",
    "layerHashes",
    "bitmapImageHash",
    "renderRect",
    "asset",
    "verticalAlignment",
    "alignment",
    "itemAlignment",
    "distribution",
    "sizingMode",
    "layoutAlignment",
    "join",
    "miterLimit",
    "fillType",
];

/// Keys hidden when they hold their default value.
const DEFAULTS: &[(&str, f64)] = &[
    ("rotation", 0.0),
    ("layoutGrow", 0.0),
    ("opacity", 1.0),
    ("borderRadius", 0.0),
    ("paragraphSpacing", 0.0),
    ("paragraphIndent", 0.0),
    ("listSpacing", 0.0),
];

/// Design-token names for palette colours, keyed by lowercase `rrggbb`.
pub const PALETTE: &[(&str, &str)] = &[
    ("ffffff", "$w"),
    ("f3f3f3", "$lgy"),
    ("e5e5e5", "$egy"),
    ("e2e2e2", "$gy"),
    ("cccccc", "$cgy"),
    ("8e8e8e", "$dgy"),
    ("3e3e3e", "$bgy"),
    ("000000", "$b"),
    ("85796e", "$lbr"),
    ("4e3c2d", "$br"),
    ("b3865a", "$kh"),
    ("ffcb05", "$y"),
    ("fffcdf", "$ly"),
    ("e54e26", "$o"),
    ("e34f26", "$od"),
    ("ff8200", "$or"),
    ("3e75d9", "$bu"),
    ("3e52ff", "$bbg"),
    ("002c8c", "$navy"),
    ("783875", "$p"),
    ("009342", "$g"),
    ("ffe8a3", "$by"),
    ("132737", "$nb"),
];

/// Renders a colour as its palette token or `#rrggbb`, wrapped in
/// `alpha(.., a)` when it is not opaque.
///
/// ```rust
/// use loupe_inspector::metadata::color_name;
/// use loupe_layers::Color;
///
/// let blue = Color { r: 0x3e, g: 0x75, b: 0xd9, a: 1.0 };
/// assert_eq!(color_name(&blue), "$bu");
/// let tint = Color { r: 0x12, g: 0x34, b: 0x56, a: 0.5 };
/// assert_eq!(color_name(&tint), "alpha(#123456, 0.5)");
/// ```
#[must_use]
pub fn color_name(color: &Color) -> String {
    let hex = format!("{color:x}");
    let base = PALETTE
        .iter()
        .find(|(code, _)| *code == hex)
        .map_or_else(|| format!("#{hex}"), |(_, token)| (*token).to_string());
    if color.is_opaque() {
        base
    } else {
        format!("alpha({base}, {})", Decimal(color.a))
    }
}

fn as_color(map: &Map<String, Value>) -> Option<Color> {
    let channel = |key: &str| map.get(key).and_then(Value::as_f64);
    #[expect(
        clippy::cast_possible_truncation,
        reason = "clamped to 0..=255 first"
    )]
    let byte = |v: f64| v.round().clamp(0.0, 255.0) as u8;
    Some(Color {
        r: byte(channel("r")?),
        g: byte(channel("g")?),
        b: byte(channel("b")?),
        a: channel("a").unwrap_or(1.0),
    })
}

/// Strips a JSON value down for display.
///
/// Returns `None` when nothing worth showing remains: `null`, and arrays or
/// objects that prune to empty. Objects with numeric `r`, `g` and `b` become a
/// colour string (see [`color_name`]). Object keys in [`HIDDEN_KEYS`] and keys
/// holding their default value are dropped. Other scalars are kept as is.
#[must_use]
pub fn prune(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Array(items) => {
            let items: Vec<Value> = items.iter().filter_map(prune).collect();
            (!items.is_empty()).then_some(Value::Array(items))
        }
        Value::Object(map) => {
            if let Some(color) = as_color(map) {
                return Some(Value::String(color_name(&color)));
            }
            let mut out = Map::new();
            for (key, value) in map {
                if HIDDEN_KEYS.contains(&key.as_str()) {
                    continue;
                }
                let is_default = DEFAULTS
                    .iter()
                    .any(|&(name, default)| name == key.as_str() && value.as_f64() == Some(default));
                if is_default {
                    continue;
                }
                if let Some(value) = prune(value) {
                    out.insert(key.clone(), value);
                }
            }
            (!out.is_empty()).then_some(Value::Object(out))
        }
        scalar => Some(scalar.clone()),
    }
}

fn color_json(color: &Color) -> Value {
    json!({ "r": color.r, "g": color.g, "b": color.b, "a": color.a })
}

fn opt_color_json(color: Option<&Color>) -> Value {
    color.map_or(Value::Null, color_json)
}

fn fill_json(fill: &Fill) -> Value {
    match fill {
        Fill::Color { color, opacity } => json!({
            "fillType": "color",
            "color": color_json(color),
            "opacity": opacity,
        }),
        Fill::Gradient { gradient, opacity } => {
            let kind = match &gradient.kind {
                GradientKind::Linear => "linear",
                GradientKind::Angular => "angular",
                GradientKind::Unknown(kind) => kind.as_str(),
            };
            let stops: Vec<Value> = gradient
                .stops
                .iter()
                .map(|(position, color)| json!({ "color": color_json(color), "position": position }))
                .collect();
            json!({
                "fillType": "gradient",
                "gradient": {
                    "type": kind,
                    "aspectRatio": gradient.aspect_ratio,
                    "colorStops": stops,
                    "from": { "x": gradient.from.x, "y": gradient.from.y },
                    "to": { "x": gradient.to.x, "y": gradient.to.y },
                },
                "opacity": opacity,
            })
        }
        Fill::Unknown(kind) => json!({ "fillType": kind }),
    }
}

fn border_json(border: &Border) -> Value {
    let join = border.join.as_ref().map(|join| match join {
        BorderJoin::Miter => "miter",
        BorderJoin::Round => "round",
        BorderJoin::Unknown(join) => join.as_str(),
    });
    let position = match &border.position {
        BorderPosition::Inside => "inside",
        BorderPosition::Outside => "outside",
        BorderPosition::Center => "center",
        BorderPosition::Unknown(position) => position.as_str(),
    };
    json!({
        "fillType": border.unknown_fill.as_deref().unwrap_or("color"),
        "color": opt_color_json(border.color.as_ref()),
        "join": join,
        "miterLimit": border.miter_limit,
        "position": position,
        "thickness": border.thickness,
        "opacity": border.opacity,
    })
}

fn shadow_json(shadow: &Shadow) -> Value {
    json!({
        "type": shadow.unknown_kind.as_deref().unwrap_or("outer"),
        "color": opt_color_json(shadow.color.as_ref()),
        "blurRadius": shadow.blur_radius,
        "offsetX": shadow.offset.x,
        "offsetY": shadow.offset.y,
        "spread": shadow.spread,
    })
}

/// Projects a layer back into the description's vocabulary.
///
/// Computed values (absolute rect, depth, parent, children and asset) are not
/// part of the projection; unmodelled keys from the description are.
#[must_use]
pub fn layer_json(layer: &Layer) -> Value {
    let mut map = layer.extra.clone();
    let mut put = |key: &str, value: Value| {
        map.insert(key.into(), value);
    };
    put("_id", layer.id.as_str().into());
    put("sourceId", layer.source_id.as_deref().into());
    put("type", layer.kind.tag().into());
    put("name", layer.name.as_str().into());
    put(
        "rect",
        json!({
            "x": layer.rect.x0,
            "y": layer.rect.y0,
            "width": layer.size.width,
            "height": layer.size.height,
        }),
    );
    put("opacity", layer.opacity.into());
    put("rotation", layer.rotation.into());
    put("borderRadius", layer.border_radius.into());
    put("exportable", layer.exportable.into());
    if let LayerKind::Text { content, styles } = &layer.kind {
        put("content", content.as_str().into());
        let styles = styles
            .iter()
            .map(|run| {
                json!({
                    "range": { "location": run.location, "length": run.length },
                    "style": {
                        "color": opt_color_json(run.color.as_ref()),
                        "fontFace": run.font_face,
                        "fontSize": run.font_size,
                        "letterSpacing": run.letter_spacing,
                    },
                })
            })
            .collect();
        put("textStyles", Value::Array(styles));
    }
    put("fills", layer.fills.iter().map(fill_json).collect());
    put("borders", layer.borders.iter().map(border_json).collect());
    put("shadows", layer.shadows.iter().map(shadow_json).collect());
    Value::Object(map)
}
