// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_inspector --heading-base-level=0

//! Loupe Inspector: the headless state behind a design-screen inspector.
//!
//! [`Inspector`] ties the other Loupe crates together. It holds the loaded
//! [`ScreenDetail`], the primary/secondary [`SelectionPair`], the extended
//! measurement flag, the cursor, and the last validation warnings, and it
//! exposes one handler per input event:
//!
//! - [`Inspector::pointer_move`] moves the cursor,
//! - [`Inspector::click`] and [`Inspector::context_click`] hit test the screen
//!   and cycle the primary and secondary slot respectively,
//! - [`Inspector::key_down`] and [`Inspector::key_up`] handle the keyboard
//!   (see [`Key`]).
//!
//! Derived values are recomputed on demand from that state: the ruler
//! rectangle ([`Inspector::ruler`]) and its label, and the side-panel layer,
//! asset and pruned [`metadata`].
//!
//! Nothing here paints, fetches or blocks. A host forwards events and redraws
//! from the accessors; [`SelectionPair::revision`] tells it when the selection
//! changed.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use loupe_inspector::{Inspector, Key};
//!
//! let mut inspector = Inspector::default();
//! inspector.load_json(r#"{
//!     "width": 400, "height": 400,
//!     "layers": [{
//!         "_id": "box", "type": "shape",
//!         "rect": { "x": 50, "y": 50, "width": 100, "height": 100 }
//!     }],
//!     "assets": []
//! }"#).unwrap();
//!
//! inspector.click(Point::new(100.0, 100.0));
//! assert_eq!(inspector.side_layer().map(|l| l.id.as_str()), Some("box"));
//!
//! inspector.pointer_move(Point::new(200.0, 100.0));
//! assert_eq!(inspector.ruler(), Some(Rect::new(150.0, 0.0, 400.0, 400.0)));
//!
//! inspector.key_down(Key::Shift);
//! assert_eq!(inspector.ruler(), Some(Rect::new(150.0, 50.0, 400.0, 150.0)));
//! assert_eq!(inspector.ruler_label().as_deref(), Some("250 x 100"));
//! ```

mod input;
pub mod metadata;

pub use input::Key;

use kurbo::{Point, Rect};
use loupe_layers::{Asset, Layer, NodeId, ParseError, ScreenDetail, ValidatorConfig, Warning};
use loupe_selection::{SelectionPair, Slot};
use serde_json::Value;

/// Inspector settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectorOptions {
    /// Settings for the validation pass run on every load.
    pub validator: ValidatorConfig,
    /// Whether the ruler starts out shown.
    pub ruler_active: bool,
}

impl Default for InspectorOptions {
    fn default() -> Self {
        Self {
            validator: ValidatorConfig::default(),
            ruler_active: true,
        }
    }
}

/// Selection, measurement and side-panel state for one screen at a time.
///
/// The inspector starts, and falls back to, the empty state: no screen, no
/// selection, no ruler. Every handler is safe to call in the empty state.
#[derive(Debug)]
pub struct Inspector {
    options: InspectorOptions,
    screen: Option<ScreenDetail>,
    warnings: Vec<Warning>,
    selection: SelectionPair<NodeId>,
    extended: bool,
    ruler_active: bool,
    cursor: Point,
    side: Slot,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new(InspectorOptions::default())
    }
}

impl Inspector {
    /// Creates an empty inspector.
    #[must_use]
    pub fn new(options: InspectorOptions) -> Self {
        Self {
            ruler_active: options.ruler_active,
            options,
            screen: None,
            warnings: Vec::new(),
            selection: SelectionPair::new(),
            extended: false,
            cursor: Point::ZERO,
            side: Slot::Primary,
        }
    }

    /// Replaces the screen wholesale.
    ///
    /// Both selection slots are cleared. The new screen is validated and the
    /// warnings replace the previous ones. `None` yields the empty state.
    pub fn load(&mut self, screen: Option<ScreenDetail>) {
        self.selection.clear();
        self.warnings = match &screen {
            Some(screen) => {
                let warnings = loupe_layers::validate(screen, &self.options.validator);
                tracing::info!(
                    layers = screen.len(),
                    warnings = warnings.len(),
                    "screen loaded"
                );
                warnings
            }
            None => {
                tracing::debug!("screen cleared");
                Vec::new()
            }
        };
        self.screen = screen;
    }

    /// Decodes and loads a screen description.
    ///
    /// On a decode failure the inspector is left in the empty state and the
    /// error is returned for the host to surface.
    pub fn load_json(&mut self, json: &str) -> Result<(), ParseError> {
        match ScreenDetail::from_json(json) {
            Ok(screen) => {
                self.load(Some(screen));
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "screen description rejected");
                self.load(None);
                Err(err)
            }
        }
    }

    /// The loaded screen, if any.
    #[must_use]
    pub fn screen(&self) -> Option<&ScreenDetail> {
        self.screen.as_ref()
    }

    /// Validation findings for the loaded screen.
    #[must_use]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// The selection pair.
    #[must_use]
    pub fn selection(&self) -> &SelectionPair<NodeId> {
        &self.selection
    }

    /// The layer selected in `slot`.
    #[must_use]
    pub fn selected(&self, slot: Slot) -> Option<&Layer> {
        let screen = self.screen.as_ref()?;
        screen.node(*self.selection.get(slot)?)
    }

    /// The service id of the layer selected in `slot`.
    #[must_use]
    pub fn selected_id(&self, slot: Slot) -> Option<&str> {
        self.selected(slot).map(|layer| layer.id.as_str())
    }

    /// Whether extended measurement (Shift held) is on.
    #[must_use]
    pub fn is_extended(&self) -> bool {
        self.extended
    }

    /// Whether the ruler is shown.
    #[must_use]
    pub fn is_ruler_active(&self) -> bool {
        self.ruler_active
    }

    /// The last cursor position, in screen space.
    #[must_use]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// The slot whose layer the side panel shows.
    #[must_use]
    pub fn side_slot(&self) -> Slot {
        self.side
    }

    /// Moves the cursor.
    pub fn pointer_move(&mut self, at: Point) {
        self.cursor = at;
    }

    /// Handles a primary click: cycles the primary slot through the layers
    /// under `at`.
    pub fn click(&mut self, at: Point) {
        self.cycle(Slot::Primary, at);
    }

    /// Handles a secondary (context) click: cycles the secondary slot through
    /// the layers under `at`.
    pub fn context_click(&mut self, at: Point) {
        self.cycle(Slot::Secondary, at);
    }

    fn cycle(&mut self, slot: Slot, at: Point) {
        self.cursor = at;
        let Some(screen) = &self.screen else {
            return;
        };
        let hits = screen.hit_test(at);
        let before = self.selection.revision();
        let picked = self.selection.cycle(slot, &hits).copied();
        if self.selection.revision() != before {
            tracing::debug!(
                ?slot,
                hits = hits.len(),
                layer = picked.and_then(|id| screen.node(id)).map(|l| l.id.as_str()),
                "selection cycled"
            );
        }
    }

    /// Handles a key press.
    pub fn key_down(&mut self, key: Key) {
        if key == Key::Shift {
            self.extended = true;
        }
    }

    /// Handles a key release.
    pub fn key_up(&mut self, key: Key) {
        match key {
            Key::Shift => self.extended = false,
            Key::Escape => self.selection.clear(),
            Key::Backquote => self.ruler_active = !self.ruler_active,
            Key::Digit1 => self.side = Slot::Primary,
            Key::Digit2 => self.side = Slot::Secondary,
            Key::Other => {}
        }
    }

    /// The ruler rectangle around the cursor.
    ///
    /// `None` when no screen is loaded or the ruler is hidden.
    #[must_use]
    pub fn ruler(&self) -> Option<Rect> {
        if !self.ruler_active {
            return None;
        }
        let screen = self.screen.as_ref()?;
        let selected = self
            .selection
            .iter()
            .filter_map(|&id| screen.node(id))
            .map(|layer| layer.abs_rect);
        Some(loupe_ruler::measure(
            self.cursor,
            screen.size,
            selected,
            self.extended,
        ))
    }

    /// The `W x H` readout of [`ruler`](Self::ruler).
    #[must_use]
    pub fn ruler_label(&self) -> Option<String> {
        self.ruler().map(|rect| loupe_ruler::label(rect).to_string())
    }

    /// The layer shown in the side panel.
    #[must_use]
    pub fn side_layer(&self) -> Option<&Layer> {
        self.selected(self.side)
    }

    /// The asset for the side-panel layer: its own, or the nearest ancestor's.
    #[must_use]
    pub fn side_asset(&self) -> Option<&Asset> {
        let screen = self.screen.as_ref()?;
        screen.nearest_asset(*self.selection.get(self.side)?)
    }

    /// Pruned metadata of the side-panel layer; see [`metadata::prune`].
    #[must_use]
    pub fn side_metadata(&self) -> Option<Value> {
        self.side_layer()
            .and_then(|layer| metadata::prune(&metadata::layer_json(layer)))
    }
}
