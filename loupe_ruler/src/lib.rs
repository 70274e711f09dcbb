// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_ruler --heading-base-level=0

//! Loupe Ruler: nearest-edge measurement around a cursor.
//!
//! Given a cursor position in screen space, the canvas size, and the absolute
//! rectangles of up to two selected layers, [`measure`] derives the tightest
//! rectangle of *relevant* edges around the cursor. An inspector draws this as
//! a pair of crossing guide lines plus a `width x height` readout, which lets a
//! user read off the distance from the cursor to the nearest selected edges (or
//! to the canvas bounds when nothing relevant is nearby).
//!
//! ## Which edges participate
//!
//! Each selected rectangle contributes its edges independently:
//!
//! - In normal mode a rectangle's left/right edges count only when the cursor's
//!   `y` lies within its vertical span, and its top/bottom edges only when the
//!   cursor's `x` lies within its horizontal span. This keeps the guide lines
//!   from snapping to edges the cursor is not beside.
//! - In **extended** mode every edge of every selected rectangle counts.
//!
//! See [`Edges::participating`] for the per-rectangle decision.
//!
//! ## Result
//!
//! Participating `x` edges and `y` edges are folded separately. The result's
//! left is the largest `x` edge at or before the cursor (canvas left when there
//! is none), its right the smallest at or after it (canvas right when there is
//! none), and likewise for top and bottom. As long as the cursor lies within the
//! canvas, the result contains it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use loupe_ruler::measure;
//!
//! let canvas = Size::new(400.0, 400.0);
//! let selected = Rect::new(50.0, 50.0, 150.0, 150.0);
//!
//! // Beside the layer: only its left/right edges are relevant.
//! let r = measure(Point::new(200.0, 100.0), canvas, [selected], false);
//! assert_eq!(r, Rect::new(150.0, 0.0, 400.0, 400.0));
//!
//! // Extended mode: its top/bottom edges count as well.
//! let r = measure(Point::new(200.0, 100.0), canvas, [selected], true);
//! assert_eq!(r, Rect::new(150.0, 50.0, 400.0, 150.0));
//! ```
//!
//! Measurement does not allocate; it is meant to be recomputed on every
//! pointer move.
//!
//! This crate is `no_std`.

#![no_std]

mod label;
mod measure;

pub use label::{Decimal, Label, label};
pub use measure::{Edges, measure};
