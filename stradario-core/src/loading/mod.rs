//! This module is responsible for decoding an OSM XML extract and
//! running the graph construction pipeline over it.

mod builder;
pub mod osm;

pub use builder::extract_street_network;
