// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Building and querying the decorated layer tree.

use core::ops::Index;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use crate::raw::{RawAsset, RawLayer};
use crate::types::{Asset, Border, Fill, Layer, LayerKind, NodeId, Shadow, TextStyleRun};

/// Layers under a point, topmost first.
///
/// Stacks deeper than the inline capacity spill to the heap.
pub type Hits = SmallVec<[NodeId; 8]>;

/// A decorated layer tree plus its lookup index.
///
/// Layers are stored in a single vector in pre-order, so a parent always
/// precedes its descendants and [`NodeId::index`] is a layer's pre-order
/// position. The vector owns every layer; [`Layer::children`] and
/// [`Layer::parent`] are handles into it.
///
/// The tree is immutable once built. Loading another screen means building a
/// new tree and dropping this one.
#[derive(Clone, Debug, Default)]
pub struct LayerTree {
    nodes: Vec<Layer>,
    roots: Vec<NodeId>,
    by_id: HashMap<String, NodeId>,
}

impl LayerTree {
    /// Builds a decorated tree from raw layers and attaches raw assets.
    ///
    /// Layers are visited in pre-order. Each one gets:
    /// - `abs_rect`: its local rect offset by the parent's absolute origin
    ///   (`(0, 0)` for roots), keeping the local width and height;
    /// - `depth`: the parent's depth plus one (`0` for roots);
    /// - `parent`: the handle of the containing layer.
    ///
    /// Every visited layer is entered in the id index. Ids are assumed to be
    /// unique; when two layers share an id, the one visited later wins the
    /// index entry (both stay in the tree).
    ///
    /// Assets are matched against layers' source ids and attached to the
    /// matching layer. Assets whose source id matches no layer are dropped. A
    /// layer holds at most one asset; a later asset for the same source id
    /// replaces an earlier one.
    ///
    /// Building never fails: absent optional data is simply absent on the
    /// decorated layer.
    #[must_use]
    pub fn build(layers: &[RawLayer], assets: &[RawAsset]) -> Self {
        let mut builder = Builder::default();
        let roots = layers
            .iter()
            .map(|raw| builder.visit(raw, None))
            .collect();

        let mut attached = 0_usize;
        for raw in assets {
            if let Some(&id) = builder.by_source.get(raw.layer_id.as_str()) {
                builder.nodes[id.index()].asset = Some(Asset::from(raw));
                attached += 1;
            }
        }

        tracing::debug!(
            layers = builder.nodes.len(),
            indexed = builder.by_id.len(),
            assets = assets.len(),
            attached,
            "built layer tree"
        );

        Self {
            nodes: builder.nodes,
            roots,
            by_id: builder.by_id,
        }
    }

    /// Returns the number of layers in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree has no layers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of entries in the id index.
    ///
    /// Equals [`len`](Self::len) unless ids collide.
    #[must_use]
    pub fn index_len(&self) -> usize {
        self.by_id.len()
    }

    /// Root layers, back to front.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Returns the layer for a handle, or `None` if the handle is out of range.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Layer> {
        self.nodes.get(id.index())
    }

    /// Resolves a service id to a handle.
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<NodeId> {
        self.by_id.get(id).copied()
    }

    /// Returns the layer with the given service id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Layer> {
        self.lookup(id).map(|node| &self[node])
    }

    /// Child handles of a layer, back to front.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map_or(&[], |layer| &layer.children)
    }

    /// Parent handle of a layer.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|layer| layer.parent)
    }

    /// Iterates the ancestors of a layer, nearest first, excluding the layer itself.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Iterates all layers in pre-order.
    pub fn iter(
        &self,
    ) -> impl DoubleEndedIterator<Item = (NodeId, &Layer)> + ExactSizeIterator {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, layer)| (NodeId::new(idx), layer))
    }

    /// Returns the asset of the layer or of its nearest ancestor that has one.
    #[must_use]
    pub fn nearest_asset(&self, id: NodeId) -> Option<&Asset> {
        core::iter::once(id)
            .chain(self.ancestors(id))
            .find_map(|node| self[node].asset.as_ref())
    }

    /// Returns every layer whose absolute rect contains `point`, topmost first.
    ///
    /// Containment is half-open (`x0 <= x < x1`). Later siblings are above
    /// earlier ones and children above their parent, so the order is reverse
    /// pre-order. Children are not clipped to their parent.
    ///
    /// Only groups show their children: layers listed under a text or shape
    /// layer, at any depth, are never hit.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Hits {
        self.iter()
            .rev()
            .filter(|(_, layer)| layer.abs_rect.contains(point))
            .filter(|&(id, _)| self.ancestors(id).all(|up| self[up].is_group()))
            .map(|(id, _)| id)
            .collect()
    }

    /// Returns the union of all absolute rects, or `None` for an empty tree.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.nodes
            .iter()
            .map(|layer| layer.abs_rect)
            .reduce(|acc, rect| acc.union(rect))
    }
}

impl Index<NodeId> for LayerTree {
    type Output = Layer;

    fn index(&self, id: NodeId) -> &Layer {
        &self.nodes[id.index()]
    }
}

/// Iterator over the ancestors of a layer.
///
/// Created by [`LayerTree::ancestors`].
#[derive(Debug, Clone)]
pub struct Ancestors<'a> {
    tree: &'a LayerTree,
    current: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

/// Corners of a box at `origin`; negative sizes are kept, not normalized.
fn place(origin: Point, size: Size) -> Rect {
    Rect::new(
        origin.x,
        origin.y,
        origin.x + size.width,
        origin.y + size.height,
    )
}

#[derive(Default)]
struct Builder {
    nodes: Vec<Layer>,
    by_id: HashMap<String, NodeId>,
    by_source: HashMap<String, NodeId>,
}

impl Builder {
    fn visit(&mut self, raw: &RawLayer, parent: Option<NodeId>) -> NodeId {
        let (origin, depth) = match parent {
            Some(parent) => {
                let parent = &self.nodes[parent.index()];
                (parent.abs_rect.origin(), parent.depth + 1)
            }
            None => (Point::ZERO, 0),
        };
        let r = raw.rect;
        let size = Size::new(r.width, r.height);
        let rect = place(Point::new(r.x, r.y), size);
        let abs_rect = place(Point::new(origin.x + r.x, origin.y + r.y), size);

        let kind = match raw.kind.as_str() {
            "text" => LayerKind::Text {
                content: raw.content.clone().unwrap_or_default(),
                styles: raw.text_styles.iter().map(TextStyleRun::from).collect(),
            },
            "shape" => LayerKind::Shape,
            "group" => LayerKind::Group,
            other => LayerKind::Other(other.into()),
        };

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Layer {
            id: raw.id.clone(),
            source_id: raw.source_id.clone(),
            name: raw.name.clone(),
            kind,
            rect,
            abs_rect,
            size,
            opacity: raw.opacity,
            rotation: raw.rotation,
            border_radius: raw.border_radius,
            exportable: raw.exportable,
            fills: raw.fills.iter().map(Fill::from).collect(),
            borders: raw.borders.iter().map(Border::from).collect(),
            shadows: raw.shadows.iter().map(Shadow::from).collect(),
            depth,
            parent,
            children: Vec::new(),
            asset: None,
            extra: raw.extra.clone(),
        });

        self.by_id.insert(raw.id.clone(), id);
        if let Some(source_id) = &raw.source_id {
            self.by_source.insert(source_id.clone(), id);
        }

        if let Some(children) = &raw.layers {
            let children = children
                .iter()
                .map(|child| self.visit(child, Some(id)))
                .collect();
            self.nodes[id.index()].children = children;
        }
        id
    }
}
