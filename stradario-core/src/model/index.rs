//! Inverted reference index, node id to referencing way or segment ids

use hashbrown::HashMap;

use crate::NodeId;

/// Maps a node id to the ids of the ways (or segments) that reference it.
///
/// Invariant after reconciliation: a node id is a key here iff it appears
/// in at least one retained way's node sequence, and every key has known
/// coordinates in the [`crate::NodeRegistry`].
#[derive(Debug, Clone)]
pub struct InvertedIndex<Id> {
    refs: HashMap<NodeId, Vec<Id>>,
}

impl<Id> Default for InvertedIndex<Id> {
    fn default() -> Self {
        Self {
            refs: HashMap::new(),
        }
    }
}

impl<Id: Copy> InvertedIndex<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one reference from `id`'s node sequence to `node`.
    pub fn record(&mut self, node: NodeId, id: Id) {
        self.refs.entry(node).or_default().push(id);
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.refs.contains_key(&node)
    }

    /// Ids referencing `node`, in recording order
    pub fn get(&self, node: NodeId) -> Option<&[Id]> {
        self.refs.get(&node).map(Vec::as_slice)
    }

    /// Number of distinct referenced node ids
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.refs.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[Id])> + '_ {
        self.refs.iter().map(|(&node, ids)| (node, ids.as_slice()))
    }

    /// Drop every node id for which `keep` returns false.
    pub fn retain_nodes(&mut self, mut keep: impl FnMut(NodeId) -> bool) {
        self.refs.retain(|&node, _| keep(node));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_references_in_order() {
        let mut index: InvertedIndex<i64> = InvertedIndex::new();
        index.record(1, 10);
        index.record(1, 20);
        index.record(2, 10);

        assert_eq!(index.get(1), Some(&[10, 20][..]));
        assert_eq!(index.get(2), Some(&[10][..]));
        assert_eq!(index.len(), 2);
        assert!(!index.contains(3));
    }

    #[test]
    fn retain_nodes_drops_keys() {
        let mut index: InvertedIndex<i64> = InvertedIndex::new();
        index.record(1, 10);
        index.record(2, 10);
        index.retain_nodes(|node| node != 2);

        assert!(index.contains(1));
        assert!(!index.contains(2));
        assert_eq!(index.len(), 1);
    }
}
