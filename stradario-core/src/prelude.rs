pub use crate::STREET_HIGHWAY_VALUES;

// Re-export key components
pub use crate::graph::{filter_street_ways, find_crossings, reconcile, segment_ways};
pub use crate::loading::extract_street_network;
pub use crate::model::{InvertedIndex, NetworkSummary, NodeRegistry, StreetNetwork};
pub use crate::render::{Canvas, GeoJsonCanvas, WktCanvas, render_network};

// Core id types
pub use crate::NodeId;
pub use crate::SegmentId;
pub use crate::WayId;
