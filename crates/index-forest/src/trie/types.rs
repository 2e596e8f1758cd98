use std::collections::BTreeMap;

/// Trie node: per-character child table and end-of-word marker.
///
/// Ownership is strictly hierarchical: children are arena indices held
/// only by their parent's table; there are no back-references. `BTreeMap`
/// keeps sibling characters in a fixed lexicographic order, which makes
/// prefix enumeration deterministic.
#[derive(Clone, Debug, Default)]
pub struct TrieNode {
    pub children: BTreeMap<char, u32>,
    pub is_end: bool,
}

impl TrieNode {
    pub fn new() -> Self {
        Self::default()
    }
}
