//! Decomposition of ways into crossing-bounded segments

use hashbrown::HashSet;
use itertools::Itertools;

use crate::model::InvertedIndex;
use crate::{NodeId, SegmentId, SegmentNodes, WayNodes};

/// Cut every way into maximal sub-sequences bounded by crossings.
///
/// Ways are walked in ascending id order and segment ids come from a
/// single counter starting at 0, so the numbering is stable across runs.
/// Consecutive segments of one way share their boundary crossing: the
/// buffer for the next segment restarts from the node that closed the
/// previous one, which keeps the segment graph connected at crossings.
///
/// Known limitations, kept from the original design: a way that touches
/// no crossing emits no segments at all, and a trailing buffer that never
/// closes on a crossing is discarded rather than emitted.
pub fn segment_ways(
    ways: &WayNodes,
    crossings: &HashSet<NodeId>,
) -> (SegmentNodes, InvertedIndex<SegmentId>) {
    let mut segments = SegmentNodes::new();
    let mut index = InvertedIndex::new();
    let mut next_id: SegmentId = 0;

    for way_id in ways.keys().copied().sorted() {
        let nodes = &ways[&way_id];
        if !nodes.iter().any(|node| crossings.contains(node)) {
            continue;
        }

        let mut buffer: Vec<NodeId> = Vec::new();
        for &node in nodes {
            buffer.push(node);
            if crossings.contains(&node) && buffer.len() > 1 {
                for &member in &buffer {
                    index.record(member, next_id);
                }
                segments.insert(next_id, std::mem::replace(&mut buffer, vec![node]));
                next_id += 1;
            }
        }
        // trailing partial buffer dropped here
    }

    (segments, index)
}
