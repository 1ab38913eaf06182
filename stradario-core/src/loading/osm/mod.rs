//! OSM XML processing

mod parser;

pub use parser::parse_osm_xml;
