//! Graph construction pipeline: way filtering, reference reconciliation,
//! crossing detection and segmentation.

pub mod crossings;
pub mod filter;
pub mod reconcile;
pub mod segment;

pub use crossings::find_crossings;
pub use filter::{RawWay, filter_street_ways};
pub use reconcile::reconcile;
pub use segment::segment_ways;
