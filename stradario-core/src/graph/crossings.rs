//! Crossing detection

use hashbrown::HashSet;

use crate::NodeId;
use crate::model::InvertedIndex;

/// Node ids referenced by more than one way (or segment).
///
/// Pure derived view over the index; recompute whenever the index
/// changes.
pub fn find_crossings<Id: Copy>(index: &InvertedIndex<Id>) -> HashSet<NodeId> {
    index
        .iter()
        .filter(|(_, ids)| ids.len() > 1)
        .map(|(node, _)| node)
        .collect()
}
