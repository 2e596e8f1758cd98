//! Shared node traits for the arena-backed ordered trees.
//!
//! Every tree keeps its nodes in a `Vec`-backed arena owned by the map
//! shell; `parent` / `left` / `right` are non-owning `Option<u32>` indices
//! into that arena. Tree-manipulation functions take the arena plus indices
//! and never hold node references across mutations.

/// Binary-tree links (`p`, `l`, `r`) as arena indices.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value access on top of the link structure.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V);
}

/// Natural ordering via [`PartialOrd`], the default comparator for every
/// ordered map in this crate.
///
/// A comparator returns a negative value, zero, or a positive value for
/// less / equal / greater. The trees trust its total-order contract and do
/// not re-validate it per comparison.
pub fn natural_order<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}
