//! Node registry, coordinates and spatial index for referenced nodes

use geo::Point;
use hashbrown::HashMap;
use rstar::primitives::GeomWithData;
use rstar::{AABB, RTree};

use crate::model::InvertedIndex;
use crate::{NodeId, WayId};

/// R-tree entry, a node's point geometry tagged with its id
pub type IndexedPoint = GeomWithData<Point<f64>, NodeId>;

/// A raw node record as decoded from the extract
#[derive(Debug, Clone, Copy)]
pub struct RawNode {
    pub id: NodeId,
    pub lat: f64,
    pub lon: f64,
}

/// Coordinates for exactly the node ids referenced by retained ways.
///
/// Points are stored with x = longitude, y = latitude. The R-tree holds
/// the same nodes with degenerate point envelopes and serves the
/// nearest/contains queries; it is derived, read-only state.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    coords: HashMap<NodeId, Point<f64>>,
    rtree: RTree<IndexedPoint>,
}

impl NodeRegistry {
    /// Collect coordinates for the node ids required by `index`.
    ///
    /// Records for irrelevant ids are ignored. If the extract repeats a
    /// node id, the later occurrence's coordinates win.
    pub fn from_raw(raw: Vec<RawNode>, index: &InvertedIndex<WayId>) -> Self {
        let mut coords = HashMap::with_capacity(index.len());
        for node in raw {
            if !index.contains(node.id) {
                continue;
            }
            coords.insert(node.id, Point::new(node.lon, node.lat));
        }

        let rtree = RTree::bulk_load(
            coords
                .iter()
                .map(|(&id, &point)| IndexedPoint::new(point, id))
                .collect(),
        );

        Self { coords, rtree }
    }

    pub fn get(&self, node: NodeId) -> Option<Point<f64>> {
        self.coords.get(&node).copied()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.coords.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.coords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.coords.keys().copied()
    }

    /// Id of the node closest to `point`, if the registry is non-empty
    pub fn nearest(&self, point: &Point<f64>) -> Option<NodeId> {
        self.rtree.nearest_neighbor(point).map(|entry| entry.data)
    }

    /// Ids of all nodes inside the axis-aligned box spanned by two corners
    pub fn in_bbox(&self, lower: Point<f64>, upper: Point<f64>) -> Vec<NodeId> {
        self.rtree
            .locate_in_envelope_intersecting(&AABB::from_corners(lower, upper))
            .map(|entry| entry.data)
            .collect()
    }

    /// Bounding box over all registered nodes as (lower, upper) corners
    pub fn bounds(&self) -> Option<(Point<f64>, Point<f64>)> {
        if self.rtree.size() == 0 {
            return None;
        }
        let envelope = self.rtree.root().envelope();
        Some((envelope.lower(), envelope.upper()))
    }
}
