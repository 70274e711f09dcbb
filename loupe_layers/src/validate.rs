// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Advisory structural checks over a built tree.
//!
//! [`validate`] walks the tree in pre-order and reports anything that looks
//! off for the layer's type. Findings are diagnostics only: they are returned
//! and logged at `warn` level, and never change the tree or fail a load.

use core::fmt;

use crate::tree::LayerTree;
use crate::types::{BorderJoin, BorderPosition, Fill, GradientKind, Layer, LayerKind, NodeId};

/// Font faces a text run is expected to use unless configured otherwise.
pub const DEFAULT_KNOWN_FONTS: &[&str] = &[
    "Lato-Black",
    "Lato-Regular",
    "Lato-Medium",
    "Lato-Semibold",
    "Lato-SemiBold",
    "Lato-Bold",
    "Lato-Light",
    "SFUIText-Regular",
    "SFUIText-Medium",
    "SFUIText-Bold",
    "SFProText-Semibold",
    "Roboto-Regular",
    "Roboto-Bold",
    "PingFangHK-Regular",
    "PingFangHK-Semibold",
];

/// Validator settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Font faces that text runs may use without a warning.
    pub known_fonts: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            known_fonts: DEFAULT_KNOWN_FONTS.iter().map(|&f| f.into()).collect(),
        }
    }
}

impl ValidatorConfig {
    fn knows_font(&self, face: &str) -> bool {
        self.known_fonts.iter().any(|known| known == face)
    }
}

/// What a [`Warning`] is about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WarningKind {
    /// A text layer has fills.
    TextHasFills,
    /// A text layer has shadows.
    TextHasShadows,
    /// A text layer has visible content but no style runs.
    TextWithoutStyles,
    /// A style run names a font outside the allow-list (`None` if it names none).
    UnknownFontFace(Option<String>),
    /// A fill has an unrecognised type.
    UnknownFillType(String),
    /// A gradient fill has an unrecognised gradient type.
    UnknownGradientType(String),
    /// A shadow has an unrecognised type.
    UnknownShadowType(String),
    /// A shadow has no colour.
    ShadowWithoutColor,
    /// A border has an unrecognised paint type.
    UnknownBorderFillType(String),
    /// A border has an unrecognised line join.
    UnknownBorderJoin(String),
    /// A border has an unrecognised position.
    UnknownBorderPosition(String),
    /// The layer's type tag is unrecognised.
    UnknownLayerType(String),
    /// A layer other than a group has child layers.
    ChildrenOnNonGroup,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextHasFills => f.write_str("fills is not empty for text layer"),
            Self::TextHasShadows => f.write_str("shadows is not empty for text layer"),
            Self::TextWithoutStyles => f.write_str("textStyles is empty for text layer"),
            Self::UnknownFontFace(Some(face)) => write!(f, "unknown font face: {face}"),
            Self::UnknownFontFace(None) => f.write_str("unknown font face: (none)"),
            Self::UnknownFillType(t) => write!(f, "unknown fill type: {t:?}"),
            Self::UnknownGradientType(t) => write!(f, "unknown fill gradient type: {t:?}"),
            Self::UnknownShadowType(t) => write!(f, "unknown shadow type: {t:?}"),
            Self::ShadowWithoutColor => f.write_str("no shadow color"),
            Self::UnknownBorderFillType(t) => write!(f, "unknown border fillType: {t:?}"),
            Self::UnknownBorderJoin(t) => write!(f, "unknown border join: {t:?}"),
            Self::UnknownBorderPosition(t) => write!(f, "unknown border position: {t:?}"),
            Self::UnknownLayerType(t) => write!(f, "unknown layer type: {t:?}"),
            Self::ChildrenOnNonGroup => f.write_str("layers is not empty for non-group layer"),
        }
    }
}

/// One advisory finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Warning {
    /// Location in the description, such as `layers[0].layers[2]`.
    pub path: String,
    /// The offending layer.
    pub node: NodeId,
    /// What was found.
    pub kind: WarningKind,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.path, self.kind)
    }
}

/// Checks every layer of `tree` and returns the findings in pre-order.
///
/// Each finding is also logged with `tracing::warn!`.
#[must_use]
pub fn validate(tree: &LayerTree, config: &ValidatorConfig) -> Vec<Warning> {
    let mut out = Vec::new();
    for (i, &root) in tree.roots().iter().enumerate() {
        walk(tree, config, root, format!("layers[{i}]"), &mut out);
    }
    out
}

fn walk(
    tree: &LayerTree,
    config: &ValidatorConfig,
    node: NodeId,
    path: String,
    out: &mut Vec<Warning>,
) {
    let layer = &tree[node];
    let mut kinds = Vec::new();
    check(layer, config, &mut kinds);
    for kind in kinds {
        tracing::warn!(path = %path, layer = %layer.id, "{kind}");
        out.push(Warning {
            path: path.clone(),
            node,
            kind,
        });
    }
    for (i, &child) in layer.children.iter().enumerate() {
        walk(tree, config, child, format!("{path}.layers[{i}]"), out);
    }
}

fn check(layer: &Layer, config: &ValidatorConfig, out: &mut Vec<WarningKind>) {
    match &layer.kind {
        LayerKind::Text { content, styles } => {
            if !layer.fills.is_empty() {
                out.push(WarningKind::TextHasFills);
            }
            if !layer.shadows.is_empty() {
                out.push(WarningKind::TextHasShadows);
            }
            if styles.is_empty() && !content.trim().is_empty() {
                out.push(WarningKind::TextWithoutStyles);
            }
            for run in styles {
                let known = run.font_face.as_deref().is_some_and(|f| config.knows_font(f));
                if !known {
                    out.push(WarningKind::UnknownFontFace(run.font_face.clone()));
                }
            }
        }
        LayerKind::Shape | LayerKind::Group => check_paint(layer, out),
        LayerKind::Other(tag) => out.push(WarningKind::UnknownLayerType(tag.clone())),
    }
    if !layer.is_group() && !layer.children.is_empty() {
        out.push(WarningKind::ChildrenOnNonGroup);
    }
}

fn check_paint(layer: &Layer, out: &mut Vec<WarningKind>) {
    for fill in &layer.fills {
        match fill {
            Fill::Color { .. } => {}
            Fill::Gradient { gradient, .. } => {
                if let GradientKind::Unknown(t) = &gradient.kind {
                    out.push(WarningKind::UnknownGradientType(t.clone()));
                }
            }
            Fill::Unknown(t) => out.push(WarningKind::UnknownFillType(t.clone())),
        }
    }
    for shadow in &layer.shadows {
        if let Some(t) = &shadow.unknown_kind {
            out.push(WarningKind::UnknownShadowType(t.clone()));
        }
        if shadow.color.is_none() {
            out.push(WarningKind::ShadowWithoutColor);
        }
    }
    for border in &layer.borders {
        if let Some(t) = &border.unknown_fill {
            out.push(WarningKind::UnknownBorderFillType(t.clone()));
        }
        if let Some(BorderJoin::Unknown(t)) = &border.join {
            out.push(WarningKind::UnknownBorderJoin(t.clone()));
        }
        if let BorderPosition::Unknown(t) = &border.position {
            out.push(WarningKind::UnknownBorderPosition(t.clone()));
        }
    }
}
