//! WKT rendering backend, one geometry per line

use std::io::Write;

use geo::{LineString, MultiPoint, Point};
use wkt::ToWkt;

use super::Canvas;
use crate::{Result, SegmentId};

/// Collects draw calls as WKT text. Nodes and crossings become
/// `MULTIPOINT` rows, segments become `LINESTRING` rows in draw order.
#[derive(Debug, Default)]
pub struct WktCanvas {
    lines: Vec<String>,
}

impl WktCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_text(self) -> String {
        let mut text = self.lines.join("\n");
        if !text.is_empty() {
            text.push('\n');
        }
        text
    }

    pub fn write_to(self, writer: &mut dyn Write) -> Result<()> {
        writer.write_all(self.into_text().as_bytes())?;
        Ok(())
    }
}

impl Canvas for WktCanvas {
    fn draw_points(&mut self, points: &[Point<f64>]) {
        if points.is_empty() {
            return;
        }
        self.lines
            .push(MultiPoint::from(points.to_vec()).wkt_string());
    }

    fn draw_polyline(&mut self, _id: SegmentId, points: &[Point<f64>]) {
        if points.len() < 2 {
            return;
        }
        let line: LineString<f64> = points.iter().map(|p| p.0).collect();
        self.lines.push(line.wkt_string());
    }

    fn draw_highlighted_points(&mut self, points: &[Point<f64>]) {
        self.draw_points(points);
    }
}
