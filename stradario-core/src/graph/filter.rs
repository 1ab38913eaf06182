//! Street classification over raw way records

use rayon::prelude::*;

use crate::model::InvertedIndex;
use crate::{NodeId, STREET_HIGHWAY_VALUES, WayId, WayNodes};

/// A raw way record as decoded from the extract
#[derive(Debug, Clone)]
pub struct RawWay {
    pub id: WayId,
    pub node_refs: Vec<NodeId>,
    pub tags: Vec<(String, String)>,
}

/// True iff the tag bag carries a `highway` tag with a street-type value.
///
/// Pure predicate; tag order does not affect the result.
pub fn is_street(tags: &[(String, String)]) -> bool {
    tags.iter()
        .any(|(key, value)| key == "highway" && STREET_HIGHWAY_VALUES.contains(&value.as_str()))
}

/// Keep street-classified ways and build the inverted node index from them.
///
/// Ways with an empty node sequence are never retained. Classification is
/// a per-way parallel pass; the index build is sequential so reference
/// order within each entry follows each way's node order.
pub fn filter_street_ways(raw: Vec<RawWay>) -> (WayNodes, InvertedIndex<WayId>) {
    let kept: Vec<RawWay> = raw
        .into_par_iter()
        .filter(|way| !way.node_refs.is_empty() && is_street(&way.tags))
        .collect();

    let mut ways = WayNodes::with_capacity(kept.len());
    let mut index = InvertedIndex::new();
    for way in kept {
        for &node in &way.node_refs {
            index.record(node, way.id);
        }
        ways.insert(way.id, way.node_refs);
    }

    (ways, index)
}
