//! Data model for the extracted street network
//!
//! Contains the inverted reference index, the node registry with its
//! spatial index, and the final network aggregate.

pub mod index;
pub mod network;
pub mod nodes;

pub use index::InvertedIndex;
pub use network::{NetworkSummary, StreetNetwork};
pub use nodes::{IndexedPoint, NodeRegistry};
