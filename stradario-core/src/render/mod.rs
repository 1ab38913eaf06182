//! Rendering boundary
//!
//! The pipeline hands its output to a [`Canvas`] and has no opinion on
//! the visualization target. Backends collect draw calls and serialize
//! them however they like.

pub mod geojson;
pub mod wkt;

use geo::Point;
use itertools::Itertools;

use crate::model::StreetNetwork;
use crate::SegmentId;

pub use geojson::GeoJsonCanvas;
pub use wkt::WktCanvas;

/// Capability set a rendering backend must provide.
pub trait Canvas {
    /// Plain graph nodes
    fn draw_points(&mut self, points: &[Point<f64>]);
    /// One segment's geometry
    fn draw_polyline(&mut self, id: SegmentId, points: &[Point<f64>]);
    /// Crossings, drawn over everything else
    fn draw_highlighted_points(&mut self, points: &[Point<f64>]);
}

/// Draw the whole network: nodes, then segment polylines in ascending
/// segment-id order, then crossings. Sorted iteration keeps the output
/// byte-stable across runs.
pub fn render_network(network: &StreetNetwork, canvas: &mut dyn Canvas) {
    let nodes: Vec<Point<f64>> = network
        .nodes
        .node_ids()
        .sorted()
        .filter_map(|id| network.nodes.get(id))
        .collect();
    canvas.draw_points(&nodes);

    for segment_id in network.segments.keys().copied().sorted() {
        let line: Vec<Point<f64>> = network.segments[&segment_id]
            .iter()
            .filter_map(|&node| network.nodes.get(node))
            .collect();
        canvas.draw_polyline(segment_id, &line);
    }

    let crossings: Vec<Point<f64>> = network
        .crossings
        .iter()
        .copied()
        .sorted()
        .filter_map(|id| network.nodes.get(id))
        .collect();
    canvas.draw_highlighted_points(&crossings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{filter_street_ways, find_crossings, segment_ways};
    use crate::model::nodes::RawNode;
    use crate::model::{InvertedIndex, NodeRegistry};

    #[derive(Default)]
    struct RecordingCanvas {
        points: usize,
        polylines: Vec<(SegmentId, usize)>,
        highlighted: usize,
    }

    impl Canvas for RecordingCanvas {
        fn draw_points(&mut self, points: &[Point<f64>]) {
            self.points += points.len();
        }

        fn draw_polyline(&mut self, id: SegmentId, points: &[Point<f64>]) {
            self.polylines.push((id, points.len()));
        }

        fn draw_highlighted_points(&mut self, points: &[Point<f64>]) {
            self.highlighted += points.len();
        }
    }

    pub(crate) fn square_network() -> StreetNetwork {
        let raw_ways = vec![
            crate::graph::RawWay {
                id: 100,
                node_refs: vec![1, 2, 3],
                tags: vec![("highway".into(), "residential".into())],
            },
            crate::graph::RawWay {
                id: 200,
                node_refs: vec![3, 4, 1],
                tags: vec![("highway".into(), "service".into())],
            },
        ];
        let (ways, way_index) = filter_street_ways(raw_ways);
        let raw_nodes = vec![
            RawNode { id: 1, lat: 0.0, lon: 0.0 },
            RawNode { id: 2, lat: 0.0, lon: 1.0 },
            RawNode { id: 3, lat: 1.0, lon: 1.0 },
            RawNode { id: 4, lat: 1.0, lon: 0.0 },
        ];
        let nodes = NodeRegistry::from_raw(raw_nodes, &way_index);
        let crossings = find_crossings(&way_index);
        let (segments, segment_index) = segment_ways(&ways, &crossings);
        StreetNetwork {
            nodes,
            ways,
            way_index,
            crossings,
            segments,
            segment_index,
        }
    }

    #[test]
    fn draws_all_layers_in_segment_order() {
        let network = square_network();
        let mut canvas = RecordingCanvas::default();
        render_network(&network, &mut canvas);

        assert_eq!(canvas.points, 4);
        assert_eq!(canvas.polylines, vec![(0, 3), (1, 3)]);
        assert_eq!(canvas.highlighted, 2);
    }

    #[test]
    fn empty_network_renders_empty_layers() {
        let (ways, way_index) = filter_street_ways(vec![]);
        let nodes = NodeRegistry::from_raw(vec![], &InvertedIndex::new());
        let crossings = find_crossings(&way_index);
        let (segments, segment_index) = segment_ways(&ways, &crossings);
        let network = StreetNetwork {
            nodes,
            ways,
            way_index,
            crossings,
            segments,
            segment_index,
        };

        let mut canvas = RecordingCanvas::default();
        render_network(&network, &mut canvas);
        assert_eq!(canvas.points, 0);
        assert!(canvas.polylines.is_empty());
        assert_eq!(canvas.highlighted, 0);
    }
}
