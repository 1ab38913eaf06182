//! Final street network aggregate handed to consumers

use hashbrown::HashSet;
use serde::Serialize;

use crate::model::{InvertedIndex, NodeRegistry};
use crate::{NodeId, SegmentId, SegmentNodes, WayId, WayNodes};

/// Everything the pipeline produces for one extract.
///
/// The way-level and segment-level views share the node registry; the
/// crossing set is derived from the way index after reconciliation and
/// carried forward unchanged into the segment view.
#[derive(Debug, Clone)]
pub struct StreetNetwork {
    pub nodes: NodeRegistry,
    pub ways: WayNodes,
    pub way_index: InvertedIndex<WayId>,
    pub crossings: HashSet<NodeId>,
    pub segments: SegmentNodes,
    pub segment_index: InvertedIndex<SegmentId>,
}

/// Headline counts and extent, for logs and the CLI `--stats` output
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub nodes: usize,
    pub ways: usize,
    pub crossings: usize,
    pub segments: usize,
    /// [min_lon, min_lat, max_lon, max_lat], absent for an empty network
    pub bbox: Option<[f64; 4]>,
}

impl StreetNetwork {
    pub fn summary(&self) -> NetworkSummary {
        let bbox = self
            .nodes
            .bounds()
            .map(|(lower, upper)| [lower.x(), lower.y(), upper.x(), upper.y()]);

        NetworkSummary {
            nodes: self.nodes.len(),
            ways: self.ways.len(),
            crossings: self.crossings.len(),
            segments: self.segments.len(),
            bbox,
        }
    }
}
