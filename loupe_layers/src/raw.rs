// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The screen description as delivered by the design service.
//!
//! These types mirror the JSON document field for field. Everything except the
//! overall shape is optional: absent or `null` values fall back to defaults so
//! that incomplete layers still make it into the tree. Keys the model does not
//! name are kept in [`RawLayer::extra`].

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::ParseError;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

const fn one() -> f64 {
    1.0
}

fn null_as_one<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(1.0))
}

/// A whole screen description.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawScreen {
    /// Canvas width.
    #[serde(deserialize_with = "null_as_default")]
    pub width: f64,
    /// Canvas height.
    #[serde(deserialize_with = "null_as_default")]
    pub height: f64,
    /// Canvas background.
    pub background_color: Option<RawColor>,
    /// Root layers, back to front.
    #[serde(deserialize_with = "null_as_default")]
    pub layers: Vec<RawLayer>,
    /// Exported assets, correlated to layers by source id.
    #[serde(deserialize_with = "null_as_default")]
    pub assets: Vec<RawAsset>,
}

impl RawScreen {
    /// Decodes a screen description from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        serde_json::from_str(json).map_err(ParseError::from)
    }

    /// Decodes a screen description from an already parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, ParseError> {
        serde_json::from_value(value).map_err(ParseError::from)
    }
}

/// One layer of any type, with its children.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawLayer {
    /// Service-assigned identifier.
    #[serde(rename = "_id", default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Correlation key used to attach exported assets.
    #[serde(default)]
    pub source_id: Option<String>,
    /// Type tag: `text`, `shape` or `group`.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Geometry relative to the parent layer.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rect: RawRect,
    /// Layer opacity, `1` when absent.
    #[serde(default = "one", deserialize_with = "null_as_one")]
    pub opacity: f64,
    /// Rotation in degrees.
    #[serde(default, deserialize_with = "null_as_default")]
    pub rotation: f64,
    /// Corner radius.
    #[serde(default, deserialize_with = "null_as_default")]
    pub border_radius: f64,
    /// Whether the layer is marked for export.
    #[serde(default, deserialize_with = "null_as_default")]
    pub exportable: bool,
    /// Text content (text layers).
    #[serde(default)]
    pub content: Option<String>,
    /// Style runs over the text content (text layers).
    #[serde(default, deserialize_with = "null_as_default")]
    pub text_styles: Vec<RawTextStyle>,
    /// Fills, bottom to top.
    #[serde(default, deserialize_with = "null_as_default")]
    pub fills: Vec<RawFill>,
    /// Borders.
    #[serde(default, deserialize_with = "null_as_default")]
    pub borders: Vec<RawBorder>,
    /// Shadows.
    #[serde(default, deserialize_with = "null_as_default")]
    pub shadows: Vec<RawShadow>,
    /// Child layers, back to front (groups).
    #[serde(default)]
    pub layers: Option<Vec<RawLayer>>,
    /// Every key not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A parent-relative rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawRect {
    /// Left offset from the parent's left edge.
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    /// Top offset from the parent's top edge.
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
    /// Width.
    #[serde(deserialize_with = "null_as_default")]
    pub width: f64,
    /// Height.
    #[serde(deserialize_with = "null_as_default")]
    pub height: f64,
}

/// An RGBA colour with `0..=255` channels and a `0..=1` alpha.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawColor {
    /// Red.
    #[serde(deserialize_with = "null_as_default")]
    pub r: f64,
    /// Green.
    #[serde(deserialize_with = "null_as_default")]
    pub g: f64,
    /// Blue.
    #[serde(deserialize_with = "null_as_default")]
    pub b: f64,
    /// Alpha.
    #[serde(deserialize_with = "null_as_one")]
    pub a: f64,
}

impl Default for RawColor {
    fn default() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 1.0,
        }
    }
}

/// A 2D coordinate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawCoords {
    /// Horizontal component.
    #[serde(deserialize_with = "null_as_default")]
    pub x: f64,
    /// Vertical component.
    #[serde(deserialize_with = "null_as_default")]
    pub y: f64,
}

/// A fill entry.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawFill {
    /// `color` or `gradient`.
    #[serde(deserialize_with = "null_as_default")]
    pub fill_type: String,
    /// Solid colour (colour fills).
    pub color: Option<RawColor>,
    /// Gradient (gradient fills).
    pub gradient: Option<RawGradient>,
    /// Fill opacity.
    pub opacity: Option<f64>,
}

/// A gradient description.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawGradient {
    /// `linear` or `angular`.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Aspect ratio of the gradient's ellipse.
    #[serde(deserialize_with = "null_as_default")]
    pub aspect_ratio: f64,
    /// Colour stops.
    #[serde(deserialize_with = "null_as_default")]
    pub color_stops: Vec<RawColorStop>,
    /// Start point, in unit space.
    #[serde(deserialize_with = "null_as_default")]
    pub from: RawCoords,
    /// End point, in unit space.
    #[serde(deserialize_with = "null_as_default")]
    pub to: RawCoords,
}

/// One gradient colour stop.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawColorStop {
    /// Stop colour.
    #[serde(deserialize_with = "null_as_default")]
    pub color: RawColor,
    /// Stop position in `0..=1`.
    #[serde(deserialize_with = "null_as_default")]
    pub position: f64,
}

/// A border entry.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawBorder {
    /// Paint kind, `color` is the only known one.
    #[serde(deserialize_with = "null_as_default")]
    pub fill_type: String,
    /// Border colour.
    pub color: Option<RawColor>,
    /// Line join, `miter` or `round`.
    pub join: Option<String>,
    /// Miter limit.
    pub miter_limit: Option<f64>,
    /// Border opacity.
    pub opacity: Option<f64>,
    /// `inside`, `outside` or `center`.
    #[serde(deserialize_with = "null_as_default")]
    pub position: String,
    /// Line thickness.
    #[serde(deserialize_with = "null_as_default")]
    pub thickness: f64,
}

/// A shadow entry.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawShadow {
    /// Shadow kind, `outer` is the only known one.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    /// Shadow colour.
    pub color: Option<RawColor>,
    /// Blur radius.
    #[serde(deserialize_with = "null_as_default")]
    pub blur_radius: f64,
    /// Horizontal offset.
    #[serde(deserialize_with = "null_as_default")]
    pub offset_x: f64,
    /// Vertical offset.
    #[serde(deserialize_with = "null_as_default")]
    pub offset_y: f64,
    /// Spread.
    #[serde(deserialize_with = "null_as_default")]
    pub spread: f64,
}

/// A style run applied to a range of a text layer's content.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTextStyle {
    /// Covered range of the content.
    #[serde(deserialize_with = "null_as_default")]
    pub range: RawRange,
    /// The style itself.
    #[serde(deserialize_with = "null_as_default")]
    pub style: RawStyle,
}

/// A `location`/`length` range in UTF-16 code units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RawRange {
    /// Start offset.
    #[serde(deserialize_with = "null_as_default")]
    pub location: usize,
    /// Length.
    #[serde(deserialize_with = "null_as_default")]
    pub length: usize,
}

/// Font and colour for a text run.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawStyle {
    /// Colour.
    pub color: Option<RawColor>,
    /// PostScript font face name.
    pub font_face: Option<String>,
    /// Font size.
    #[serde(deserialize_with = "null_as_default")]
    pub font_size: f64,
    /// Additional letter spacing.
    pub letter_spacing: Option<f64>,
}

/// An exported asset.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAsset {
    /// Source id of the layer that produced the asset.
    #[serde(deserialize_with = "null_as_default")]
    pub layer_id: String,
    /// Name shown to users and used for downloads.
    #[serde(deserialize_with = "null_as_default")]
    pub display_name: String,
    /// Exported files.
    #[serde(deserialize_with = "null_as_default")]
    pub contents: Vec<RawAssetContent>,
}

/// One exported file of an asset.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawAssetContent {
    /// Download location.
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    /// `png`, `svg`, `pdf` or `jpg`.
    #[serde(deserialize_with = "null_as_default")]
    pub format: String,
    /// Pixel density multiplier.
    #[serde(deserialize_with = "null_as_one")]
    pub density_scale: f64,
}

impl Default for RawAssetContent {
    fn default() -> Self {
        Self {
            url: String::new(),
            format: String::new(),
            density_scale: 1.0,
        }
    }
}
