// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_layers --heading-base-level=0

//! Loupe Layers: decorated, queryable layer trees for design screens.
//!
//! A design service describes a screen as nested JSON: a canvas size, a
//! background, a type-tagged layer array in which groups carry their children,
//! and a list of exported assets. This crate turns that description into a
//! [`LayerTree`] an inspector can query:
//!
//! - every layer knows its screen-space rectangle ([`Layer::abs_rect`]), its
//!   depth, and its parent;
//! - an id index resolves the service's layer ids ([`LayerTree::get`]);
//! - exported assets are attached to the layers that produced them, matched by
//!   source id ([`Layer::asset`], [`LayerTree::nearest_asset`]);
//! - [`LayerTree::hit_test`] lists the layers under a point, topmost first.
//!
//! A separate, read-only [`validate`] pass reports structural oddities (a text
//! layer with fills, a fill of an unknown type, an unexpected font) as
//! advisory [`Warning`]s.
//!
//! ## Pipeline
//!
//! ```text
//! JSON ──serde──▶ RawScreen ──LayerTree::build──▶ ScreenDetail ──validate──▶ Vec<Warning>
//! ```
//!
//! - [`raw`] mirrors the wire format. Absent or `null` fields take defaults, so
//!   only a document that is not JSON (or has the wrong overall shape) fails to
//!   decode, with a [`ParseError`].
//! - [`LayerTree::build`] is a pure function of the raw layers and assets. It
//!   constructs new values and never fails.
//! - [`validate`] never changes the tree; removing it changes nothing about
//!   the tree.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use loupe_layers::{ScreenDetail, ValidatorConfig, validate};
//!
//! let screen = ScreenDetail::from_json(r#"{
//!     "width": 400, "height": 300,
//!     "layers": [{
//!         "_id": "card", "type": "group",
//!         "rect": { "x": 20, "y": 30, "width": 200, "height": 100 },
//!         "layers": [{
//!             "_id": "title", "type": "text", "content": "Hello",
//!             "rect": { "x": 10, "y": 10, "width": 80, "height": 20 },
//!             "textStyles": [{ "style": { "fontFace": "Lato-Bold" } }]
//!         }]
//!     }],
//!     "assets": []
//! }"#).unwrap();
//!
//! let title = screen.get("title").unwrap();
//! assert_eq!(title.abs_rect, Rect::new(30.0, 40.0, 110.0, 60.0));
//! assert_eq!(title.depth, 1);
//!
//! let hits = screen.hit_test(Point::new(35.0, 45.0));
//! assert_eq!(screen[hits[0]].id, "title");
//!
//! assert!(validate(&screen, &ValidatorConfig::default()).is_empty());
//! ```

mod error;
pub mod raw;
mod screen;
mod tree;
mod types;
mod validate;

pub use error::ParseError;
pub use screen::ScreenDetail;
pub use tree::{Ancestors, Hits, LayerTree};
pub use types::{
    Asset, AssetContent, AssetFormat, Border, BorderJoin, BorderPosition, Color, Fill, Gradient,
    GradientKind, Layer, LayerKind, NodeId, Shadow, TextStyleRun,
};
pub use validate::{DEFAULT_KNOWN_FONTS, ValidatorConfig, Warning, WarningKind, validate};
