//! Street-network extraction and segmentation for OSM XML extracts.
//!
//! The pipeline decodes one map extract, keeps street-classified ways,
//! collects the coordinates they reference, heals dangling references,
//! detects crossings and cuts every way into crossing-bounded segments.
//! Rendering is a pluggable backend behind the [`render::Canvas`] trait.

pub mod error;
pub mod graph;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod render;

pub use error::{Error, Result};
pub use loading::extract_street_network;
pub use model::{InvertedIndex, NetworkSummary, NodeRegistry, StreetNetwork};

/// OSM node id as assigned by the source extract
pub type NodeId = i64;
/// OSM way id as assigned by the source extract
pub type WayId = i64;
/// Segment id, assigned sequentially from 0 by the segmenter
pub type SegmentId = usize;

/// Retained ways, way id to its ordered node sequence
pub type WayNodes = hashbrown::HashMap<WayId, Vec<NodeId>>;
/// Emitted segments, segment id to its ordered node sequence
pub type SegmentNodes = hashbrown::HashMap<SegmentId, Vec<NodeId>>;

/// `highway` tag values that classify a way as a street.
///
/// Fixed set, not user-configurable. Ways carrying any other `highway`
/// value (footway, cycleway, ...) are discarded together with untagged ways.
pub const STREET_HIGHWAY_VALUES: [&str; 9] = [
    "motorway",
    "trunk",
    "primary",
    "secondary",
    "tertiary",
    "unclassified",
    "residential",
    "service",
    "living_street",
];
