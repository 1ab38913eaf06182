use std::path::Path;

use log::{debug, info};

use super::osm::parse_osm_xml;
use crate::graph::{filter_street_ways, find_crossings, reconcile, segment_ways};
use crate::model::{NodeRegistry, StreetNetwork};
use crate::Result;

/// Extract the segmented street network from one OSM XML file.
///
/// Runs the whole pipeline in order: decode, street filtering, node
/// collection, reference reconciliation, crossing detection and
/// segmentation. An extract with no streets or no crossings is not an
/// error and yields an empty network.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains a malformed
/// node or way record.
pub fn extract_street_network(path: &Path) -> Result<StreetNetwork> {
    info!("Processing OSM extract: {}", path.display());
    let (raw_nodes, raw_ways) = parse_osm_xml(path)?;
    debug!(
        "Decoded {} node and {} way records",
        raw_nodes.len(),
        raw_ways.len()
    );

    let (mut ways, mut way_index) = filter_street_ways(raw_ways);
    info!("Retained {} street ways", ways.len());

    let nodes = NodeRegistry::from_raw(raw_nodes, &way_index);
    debug!("Found {} path nodes", nodes.len());

    let orphans = reconcile(&mut ways, &mut way_index, &nodes);
    if orphans > 0 {
        debug!("Filtered {orphans} orphan node references");
    }

    let crossings = find_crossings(&way_index);
    let (segments, segment_index) = segment_ways(&ways, &crossings);
    info!(
        "Found {} crossings and {} segments",
        crossings.len(),
        segments.len()
    );

    Ok(StreetNetwork {
        nodes,
        ways,
        way_index,
        crossings,
        segments,
        segment_index,
    })
}
