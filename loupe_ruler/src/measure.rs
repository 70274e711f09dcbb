// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The measurement fold.

use kurbo::{Point, Rect, Size};

bitflags::bitflags! {
    /// The edge pairs of a selected rectangle that take part in a measurement.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Edges: u8 {
        /// Left and right edges (candidates for the result's left/right).
        const LEFT_RIGHT = 0b0000_0001;
        /// Top and bottom edges (candidates for the result's top/bottom).
        const TOP_BOTTOM = 0b0000_0010;
    }
}

impl Edges {
    /// Decides which edges of `rect` participate for a cursor at `cursor`.
    ///
    /// With `extended` set, all edges participate. Otherwise the left/right
    /// pair participates only when `rect.y0 <= cursor.y <= rect.y1`, and the
    /// top/bottom pair only when `rect.x0 <= cursor.x <= rect.x1`. Both bounds
    /// are inclusive.
    #[must_use]
    pub fn participating(rect: Rect, cursor: Point, extended: bool) -> Self {
        if extended {
            return Self::all();
        }
        let mut edges = Self::empty();
        if rect.y0 <= cursor.y && cursor.y <= rect.y1 {
            edges |= Self::LEFT_RIGHT;
        }
        if rect.x0 <= cursor.x && cursor.x <= rect.x1 {
            edges |= Self::TOP_BOTTOM;
        }
        edges
    }
}

/// Computes the tightest rectangle of relevant edges around `cursor`.
///
/// `selected` holds the absolute rectangles of the selected layers, normally
/// zero, one or two of them. The result starts as the canvas `(0, 0)` to
/// `(canvas.width, canvas.height)` and is narrowed by every participating edge:
///
/// - `x0` is the largest participating `x` edge `<= cursor.x`,
/// - `x1` is the smallest participating `x` edge `>= cursor.x`,
/// - `y0` / `y1` likewise for `y` edges against `cursor.y`.
///
/// An edge lying exactly under the cursor bounds both sides, collapsing that
/// axis to zero length.
#[must_use]
pub fn measure<I>(cursor: Point, canvas: Size, selected: I, extended: bool) -> Rect
where
    I: IntoIterator<Item = Rect>,
{
    let mut out = Rect::new(0.0, 0.0, canvas.width, canvas.height);
    for rect in selected {
        let edges = Edges::participating(rect, cursor, extended);
        if edges.contains(Edges::LEFT_RIGHT) {
            tighten(&mut out.x0, &mut out.x1, rect.x0, cursor.x);
            tighten(&mut out.x0, &mut out.x1, rect.x1, cursor.x);
        }
        if edges.contains(Edges::TOP_BOTTOM) {
            tighten(&mut out.y0, &mut out.y1, rect.y0, cursor.y);
            tighten(&mut out.y0, &mut out.y1, rect.y1, cursor.y);
        }
    }
    out
}

fn tighten(low: &mut f64, high: &mut f64, edge: f64, at: f64) {
    if edge <= at {
        *low = low.max(edge);
    }
    if edge >= at {
        *high = high.min(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: Size = Size::new(400.0, 400.0);
    const LAYER: Rect = Rect::new(50.0, 50.0, 150.0, 150.0);

    #[test]
    fn no_selection_yields_canvas() {
        let r = measure(Point::new(12.0, 34.0), CANVAS, [], false);
        assert_eq!(r, Rect::new(0.0, 0.0, 400.0, 400.0));
        let r = measure(Point::new(12.0, 34.0), CANVAS, [], true);
        assert_eq!(r, Rect::new(0.0, 0.0, 400.0, 400.0));
    }

    #[test]
    fn beside_layer_uses_only_side_edges() {
        let r = measure(Point::new(200.0, 100.0), CANVAS, [LAYER], false);
        assert_eq!(r, Rect::new(150.0, 0.0, 400.0, 400.0));
    }

    #[test]
    fn extended_mode_uses_all_edges() {
        let r = measure(Point::new(200.0, 100.0), CANVAS, [LAYER], true);
        assert_eq!(r, Rect::new(150.0, 50.0, 400.0, 150.0));
    }

    #[test]
    fn inside_layer_is_bounded_by_it() {
        let r = measure(Point::new(100.0, 120.0), CANVAS, [LAYER], false);
        assert_eq!(r, LAYER);
    }

    #[test]
    fn diagonal_to_layer_contributes_nothing() {
        let r = measure(Point::new(300.0, 300.0), CANVAS, [LAYER], false);
        assert_eq!(r, Rect::new(0.0, 0.0, 400.0, 400.0));
    }

    #[test]
    fn two_layers_pick_nearest_edges() {
        let second = Rect::new(250.0, 80.0, 350.0, 200.0);
        let r = measure(Point::new(200.0, 100.0), CANVAS, [LAYER, second], false);
        assert_eq!(r, Rect::new(150.0, 0.0, 250.0, 400.0));
    }

    #[test]
    fn edge_under_cursor_bounds_both_sides() {
        let r = measure(Point::new(150.0, 100.0), CANVAS, [LAYER], false);
        assert_eq!(r.x0, 150.0);
        assert_eq!(r.x1, 150.0);
        assert_eq!(r.y0, 50.0);
        assert_eq!(r.y1, 150.0);
    }

    #[test]
    fn participation_bounds_are_inclusive() {
        let on_top_edge = Point::new(400.0, 50.0);
        assert_eq!(
            Edges::participating(LAYER, on_top_edge, false),
            Edges::LEFT_RIGHT
        );
        let on_corner = Point::new(150.0, 150.0);
        assert_eq!(Edges::participating(LAYER, on_corner, false), Edges::all());
        let outside = Point::new(151.0, 151.0);
        assert!(Edges::participating(LAYER, outside, false).is_empty());
    }

    #[test]
    fn edges_outside_canvas_never_widen_result() {
        let spill = Rect::new(-40.0, -40.0, 500.0, 500.0);
        let r = measure(Point::new(10.0, 10.0), CANVAS, [spill], false);
        assert_eq!(r, Rect::new(0.0, 0.0, 400.0, 400.0));
    }
}
