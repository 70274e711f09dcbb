// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A loaded screen: canvas properties plus the decorated tree.

use core::ops::Deref;

use kurbo::{Rect, Size};

use crate::ParseError;
use crate::raw::RawScreen;
use crate::tree::LayerTree;
use crate::types::Color;

/// A design screen ready for inspection.
///
/// Dereferences to its [`LayerTree`], so tree queries can be called directly on
/// the screen.
#[derive(Clone, Debug, Default)]
pub struct ScreenDetail {
    /// Canvas size.
    pub size: Size,
    /// Canvas background, if the description has one.
    pub background_color: Option<Color>,
    /// Decorated layers and their index.
    pub tree: LayerTree,
}

impl ScreenDetail {
    /// Builds a screen from a decoded description.
    #[must_use]
    pub fn from_raw(raw: &RawScreen) -> Self {
        Self {
            size: Size::new(raw.width, raw.height),
            background_color: raw.background_color.map(Color::from),
            tree: LayerTree::build(&raw.layers, &raw.assets),
        }
    }

    /// Decodes and builds a screen from JSON text.
    ///
    /// Fails only when the text as a whole cannot be decoded; see [`ParseError`].
    pub fn from_json(json: &str) -> Result<Self, ParseError> {
        RawScreen::from_json(json).map(|raw| Self::from_raw(&raw))
    }

    /// The canvas as a rectangle at the origin.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }
}

impl Deref for ScreenDetail {
    type Target = LayerTree;

    fn deref(&self) -> &LayerTree {
        &self.tree
    }
}
