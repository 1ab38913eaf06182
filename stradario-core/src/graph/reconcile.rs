//! Healing of dangling node references
//!
//! Extracts clipped to a bounding region omit nodes outside it while
//! keeping the ways that touch them, so retained ways may reference node
//! ids with no known coordinates. This pass removes those references
//! instead of failing the run.

use crate::model::{InvertedIndex, NodeRegistry};
use crate::{WayId, WayNodes};

/// Drop references to nodes absent from the registry.
///
/// Returns the number of orphan node ids removed from the index. After
/// this pass the index key set equals the registry key set. A way whose
/// node sequence becomes empty stays in the map as an empty entry, so
/// its id is not ambiguously freed for reuse; downstream stages tolerate
/// empty sequences. Applying the pass twice is a no-op the second time.
pub fn reconcile(
    ways: &mut WayNodes,
    index: &mut InvertedIndex<WayId>,
    registry: &NodeRegistry,
) -> usize {
    // Registry keys are built from the index keys, so equal counts mean
    // equal sets and nothing dangles.
    if index.len() == registry.len() {
        return 0;
    }
    let orphans = index.len() - registry.len();

    for nodes in ways.values_mut() {
        nodes.retain(|&node| registry.contains(node));
    }
    index.retain_nodes(|node| registry.contains(node));

    orphans
}
