//! GeoJSON rendering backend

use std::io::Write;

use geo::{LineString, MultiPoint, Point};
use geojson::{Feature, FeatureCollection, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::Canvas;
use crate::{Error, Result, SegmentId};

/// Stroke colors cycled by segment id. A fixed palette keyed by id keeps
/// the output deterministic where the original design used random colors.
const SEGMENT_PALETTE: [&str; 10] = [
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
    "#BCBD22", "#17BECF",
];

/// Collects draw calls into a `FeatureCollection`.
#[derive(Debug, Default)]
pub struct GeoJsonCanvas {
    features: Vec<Feature>,
}

impl GeoJsonCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_collection(self) -> FeatureCollection {
        FeatureCollection {
            features: self.features,
            bbox: None,
            foreign_members: None,
        }
    }

    /// Serialize the collected features to `writer`.
    pub fn write_to(self, writer: &mut dyn Write) -> Result<()> {
        let collection = self.into_collection();
        serde_json::to_writer(writer, &collection)
            .map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}

fn feature(geometry: Geometry, properties: serde_json::Value) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: properties.as_object().cloned(),
        foreign_members: None,
    }
}

impl Canvas for GeoJsonCanvas {
    fn draw_points(&mut self, points: &[Point<f64>]) {
        if points.is_empty() {
            return;
        }
        let geometry = Geometry::new(GeoJsonValue::from(&MultiPoint::from(points.to_vec())));
        self.features
            .push(feature(geometry, json!({ "role": "node" })));
    }

    fn draw_polyline(&mut self, id: SegmentId, points: &[Point<f64>]) {
        if points.len() < 2 {
            return;
        }
        let line: LineString<f64> = points.iter().map(|p| p.0).collect();
        let geometry = Geometry::new(GeoJsonValue::from(&line));
        self.features.push(feature(
            geometry,
            json!({
                "role": "segment",
                "segment_id": id,
                "stroke": SEGMENT_PALETTE[id % SEGMENT_PALETTE.len()],
            }),
        ));
    }

    fn draw_highlighted_points(&mut self, points: &[Point<f64>]) {
        if points.is_empty() {
            return;
        }
        let geometry = Geometry::new(GeoJsonValue::from(&MultiPoint::from(points.to_vec())));
        self.features.push(feature(
            geometry,
            json!({ "role": "crossing", "marker-color": "#000000" }),
        ));
    }
}
