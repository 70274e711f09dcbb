// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorated layer types.
//!
//! Values here are built fresh from the raw description by
//! [`LayerTree::build`](crate::LayerTree::build) and never alias the input.
//! Sub-kinds the service may add later (fill types, border positions, and so
//! on) are kept as `Unknown` variants carrying the original tag, so nothing is
//! dropped and the validator can report them.

use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};
use serde_json::{Map, Value};

use crate::raw::{
    RawAsset, RawAssetContent, RawBorder, RawColor, RawFill, RawGradient, RawShadow, RawTextStyle,
};

/// Handle of a layer within its [`LayerTree`](crate::LayerTree).
///
/// Handles are slot indices into the tree's storage, which is laid out in
/// pre-order. A handle is only meaningful for the tree that produced it; trees
/// are rebuilt wholesale per screen, so handles from a previous screen must be
/// dropped along with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "screens hold far fewer than u32::MAX layers"
    )]
    pub(crate) const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Returns the slot index (pre-order position) of this layer.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// An 8-bit RGB colour with a floating point alpha.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Color {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha in `0..=1`.
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        a: 1.0,
    };

    /// Returns `true` when alpha is exactly `1`.
    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.a == 1.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<RawColor> for Color {
    fn from(raw: RawColor) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "clamped to 0..=255 first"
        )]
        fn channel(v: f64) -> u8 {
            v.round().clamp(0.0, 255.0) as u8
        }
        Self {
            r: channel(raw.r),
            g: channel(raw.g),
            b: channel(raw.b),
            a: raw.a,
        }
    }
}

/// Lowercase `rrggbb`, without alpha.
impl fmt::LowerHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A fill paint.
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    /// Solid colour.
    Color {
        /// The colour.
        color: Color,
        /// Fill opacity.
        opacity: f64,
    },
    /// Gradient.
    Gradient {
        /// The gradient.
        gradient: Gradient,
        /// Fill opacity.
        opacity: f64,
    },
    /// A fill type this model does not know.
    Unknown(String),
}

impl From<&RawFill> for Fill {
    fn from(raw: &RawFill) -> Self {
        let opacity = raw.opacity.unwrap_or(1.0);
        match raw.fill_type.as_str() {
            "color" => Self::Color {
                color: raw.color.map(Color::from).unwrap_or_default(),
                opacity,
            },
            "gradient" => Self::Gradient {
                gradient: raw.gradient.as_ref().map(Gradient::from).unwrap_or_default(),
                opacity,
            },
            other => Self::Unknown(other.into()),
        }
    }
}

/// Gradient geometry kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GradientKind {
    /// Linear gradient from `from` to `to`.
    #[default]
    Linear,
    /// Angular (conic) gradient.
    Angular,
    /// A gradient type this model does not know.
    Unknown(String),
}

/// A gradient paint.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gradient {
    /// Geometry kind.
    pub kind: GradientKind,
    /// Aspect ratio of the gradient's ellipse.
    pub aspect_ratio: f64,
    /// `(position, colour)` stops.
    pub stops: Vec<(f64, Color)>,
    /// Start point, in unit space.
    pub from: Point,
    /// End point, in unit space.
    pub to: Point,
}

impl From<&RawGradient> for Gradient {
    fn from(raw: &RawGradient) -> Self {
        let kind = match raw.kind.as_str() {
            "linear" => GradientKind::Linear,
            "angular" => GradientKind::Angular,
            other => GradientKind::Unknown(other.into()),
        };
        Self {
            kind,
            aspect_ratio: raw.aspect_ratio,
            stops: raw
                .color_stops
                .iter()
                .map(|stop| (stop.position, stop.color.into()))
                .collect(),
            from: Point::new(raw.from.x, raw.from.y),
            to: Point::new(raw.to.x, raw.to.y),
        }
    }
}

/// Line join of a border.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BorderJoin {
    /// Mitered corners.
    Miter,
    /// Rounded corners.
    Round,
    /// A join this model does not know.
    Unknown(String),
}

/// Where a border is drawn relative to the layer's outline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BorderPosition {
    /// Inside the outline.
    Inside,
    /// Outside the outline.
    Outside,
    /// Centred on the outline.
    Center,
    /// A position this model does not know.
    Unknown(String),
}

/// A border stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Border {
    /// Paint kind; `None` for a solid colour, otherwise the unknown tag.
    pub unknown_fill: Option<String>,
    /// Stroke colour.
    pub color: Option<Color>,
    /// Line join, if specified.
    pub join: Option<BorderJoin>,
    /// Miter limit, if specified.
    pub miter_limit: Option<f64>,
    /// Placement relative to the outline.
    pub position: BorderPosition,
    /// Line thickness.
    pub thickness: f64,
    /// Stroke opacity.
    pub opacity: f64,
}

impl From<&RawBorder> for Border {
    fn from(raw: &RawBorder) -> Self {
        let join = raw.join.as_deref().map(|join| match join {
            "miter" => BorderJoin::Miter,
            "round" => BorderJoin::Round,
            other => BorderJoin::Unknown(other.into()),
        });
        let position = match raw.position.as_str() {
            "inside" => BorderPosition::Inside,
            "outside" => BorderPosition::Outside,
            "center" => BorderPosition::Center,
            other => BorderPosition::Unknown(other.into()),
        };
        Self {
            unknown_fill: (raw.fill_type != "color").then(|| raw.fill_type.clone()),
            color: raw.color.map(Color::from),
            join,
            miter_limit: raw.miter_limit,
            position,
            thickness: raw.thickness,
            opacity: raw.opacity.unwrap_or(1.0),
        }
    }
}

/// A drop shadow.
#[derive(Clone, Debug, PartialEq)]
pub struct Shadow {
    /// Shadow kind; `None` for an outer shadow, otherwise the unknown tag.
    pub unknown_kind: Option<String>,
    /// Shadow colour.
    pub color: Option<Color>,
    /// Blur radius.
    pub blur_radius: f64,
    /// Offset from the layer.
    pub offset: Vec2,
    /// Spread.
    pub spread: f64,
}

impl From<&RawShadow> for Shadow {
    fn from(raw: &RawShadow) -> Self {
        Self {
            unknown_kind: (raw.kind != "outer").then(|| raw.kind.clone()),
            color: raw.color.map(Color::from),
            blur_radius: raw.blur_radius,
            offset: Vec2::new(raw.offset_x, raw.offset_y),
            spread: raw.spread,
        }
    }
}

/// A style run over part of a text layer's content.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyleRun {
    /// Start offset of the run, in UTF-16 code units.
    pub location: usize,
    /// Length of the run, in UTF-16 code units.
    pub length: usize,
    /// PostScript font face name.
    pub font_face: Option<String>,
    /// Font size.
    pub font_size: f64,
    /// Text colour.
    pub color: Option<Color>,
    /// Additional letter spacing.
    pub letter_spacing: Option<f64>,
}

impl From<&RawTextStyle> for TextStyleRun {
    fn from(raw: &RawTextStyle) -> Self {
        Self {
            location: raw.range.location,
            length: raw.range.length,
            font_face: raw.style.font_face.clone(),
            font_size: raw.style.font_size,
            color: raw.style.color.map(Color::from),
            letter_spacing: raw.style.letter_spacing,
        }
    }
}

/// File format of an exported asset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssetFormat {
    /// PNG raster.
    Png,
    /// SVG vector.
    Svg,
    /// PDF vector.
    Pdf,
    /// JPEG raster.
    Jpg,
    /// Any other extension.
    Other(String),
}

impl AssetFormat {
    /// The file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
            Self::Jpg => "jpg",
            Self::Other(ext) => ext,
        }
    }
}

impl From<&str> for AssetFormat {
    fn from(tag: &str) -> Self {
        match tag {
            "png" => Self::Png,
            "svg" => Self::Svg,
            "pdf" => Self::Pdf,
            "jpg" => Self::Jpg,
            other => Self::Other(other.into()),
        }
    }
}

/// One exported file of an [`Asset`].
#[derive(Clone, Debug, PartialEq)]
pub struct AssetContent {
    /// Download location.
    pub url: String,
    /// File format.
    pub format: AssetFormat,
    /// Pixel density multiplier (`1`, `2`, `3`, ...).
    pub density_scale: f64,
}

impl AssetContent {
    /// Returns the download file name for this content.
    ///
    /// Density `1` produces `name.ext`; any other density produces
    /// `name@{scale}x.ext`.
    ///
    /// ```rust
    /// use loupe_layers::{AssetContent, AssetFormat};
    ///
    /// let content = AssetContent {
    ///     url: "https://cdn.example/icon.png".into(),
    ///     format: AssetFormat::Png,
    ///     density_scale: 2.0,
    /// };
    /// assert_eq!(content.file_name("icon"), "icon@2x.png");
    /// ```
    #[must_use]
    pub fn file_name(&self, display_name: &str) -> String {
        let ext = self.format.extension();
        if self.density_scale == 1.0 {
            format!("{display_name}.{ext}")
        } else {
            format!("{display_name}@{}x.{ext}", self.density_scale)
        }
    }
}

impl From<&RawAssetContent> for AssetContent {
    fn from(raw: &RawAssetContent) -> Self {
        Self {
            url: raw.url.clone(),
            format: raw.format.as_str().into(),
            density_scale: raw.density_scale,
        }
    }
}

/// An exported asset attached to the layer that produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct Asset {
    /// Name shown to users and used for downloads.
    pub display_name: String,
    /// Source id of the producing layer.
    pub source_id: String,
    /// Exported files, one per format and density.
    pub contents: Vec<AssetContent>,
}

impl Asset {
    /// Returns the content best suited for a preview: the first one listed.
    #[must_use]
    pub fn preview(&self) -> Option<&AssetContent> {
        self.contents.first()
    }
}

impl From<&RawAsset> for Asset {
    fn from(raw: &RawAsset) -> Self {
        Self {
            display_name: raw.display_name.clone(),
            source_id: raw.layer_id.clone(),
            contents: raw.contents.iter().map(AssetContent::from).collect(),
        }
    }
}

/// Type-specific layer data.
#[derive(Clone, Debug, PartialEq)]
pub enum LayerKind {
    /// A text layer.
    Text {
        /// The text.
        content: String,
        /// Style runs over `content`.
        styles: Vec<TextStyleRun>,
    },
    /// A vector shape or bitmap.
    Shape,
    /// A container of child layers.
    Group,
    /// A type tag this model does not know.
    Other(String),
}

impl LayerKind {
    /// The type tag as it appears in the description.
    #[must_use]
    pub fn tag(&self) -> &str {
        match self {
            Self::Text { .. } => "text",
            Self::Shape => "shape",
            Self::Group => "group",
            Self::Other(tag) => tag,
        }
    }
}

/// A decorated layer.
///
/// Besides what the description says about the layer, it carries the values
/// computed while building the tree: [`abs_rect`](Self::abs_rect),
/// [`depth`](Self::depth), [`parent`](Self::parent), and the attached
/// [`asset`](Self::asset). Child layers are owned by the tree and listed in
/// [`children`](Self::children) back to front; `parent` is only a handle for
/// looking upward.
#[derive(Clone, Debug)]
pub struct Layer {
    /// Service-assigned identifier.
    pub id: String,
    /// Correlation key for exported assets.
    pub source_id: Option<String>,
    /// Display name.
    pub name: String,
    /// Type-specific data.
    pub kind: LayerKind,
    /// Geometry relative to the parent.
    pub rect: Rect,
    /// Geometry in screen space.
    pub abs_rect: Rect,
    /// Width and height exactly as described.
    ///
    /// [`rect`](Self::rect) and [`abs_rect`](Self::abs_rect) store corners, so
    /// their `width()`/`height()` can be off in the last bits for fractional
    /// input; this is the value to display.
    pub size: Size,
    /// Layer opacity.
    pub opacity: f64,
    /// Rotation in degrees.
    pub rotation: f64,
    /// Corner radius.
    pub border_radius: f64,
    /// Whether the layer is marked for export.
    pub exportable: bool,
    /// Fills, bottom to top.
    pub fills: Vec<Fill>,
    /// Borders.
    pub borders: Vec<Border>,
    /// Shadows.
    pub shadows: Vec<Shadow>,
    /// Distance from the root list; roots are `0`.
    pub depth: u32,
    /// Containing layer, `None` for roots.
    pub parent: Option<NodeId>,
    /// Child layers, back to front.
    pub children: Vec<NodeId>,
    /// Asset exported from this layer, if any.
    pub asset: Option<Asset>,
    /// Description keys not modelled above.
    pub extra: Map<String, Value>,
}

impl Layer {
    /// Returns `true` for group layers.
    #[must_use]
    pub fn is_group(&self) -> bool {
        matches!(self.kind, LayerKind::Group)
    }
}
