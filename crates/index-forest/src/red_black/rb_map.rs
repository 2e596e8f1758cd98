use crate::map::{ForestMap, TreeOps};
use crate::types::natural_order;

use super::types::RbNode;
use super::util;

pub struct RbOps;

impl<K, V> TreeOps<K, V, RbNode<K, V>> for RbOps {
    fn insert<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<RbNode<K, V>>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32> {
        util::insert(arena, root, node, comparator)
    }

    fn insert_left(
        arena: &mut Vec<RbNode<K, V>>,
        root: Option<u32>,
        node: u32,
        parent: u32,
    ) -> Option<u32> {
        util::insert_left(arena, root, node, parent)
    }

    fn insert_right(
        arena: &mut Vec<RbNode<K, V>>,
        root: Option<u32>,
        node: u32,
        parent: u32,
    ) -> Option<u32> {
        util::insert_right(arena, root, node, parent)
    }

    fn remove(arena: &mut Vec<RbNode<K, V>>, root: Option<u32>, node: u32) -> Option<u32> {
        util::remove(arena, root, node)
    }
}

fn new_node<K, V>(k: K, v: V) -> RbNode<K, V> {
    RbNode::new(k, v)
}

/// Color-balanced red-black tree map.
pub struct RbMap<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    inner: ForestMap<K, V, RbNode<K, V>, RbOps, C, fn(K, V) -> RbNode<K, V>>,
}

impl<K, V> RbMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    pub fn new() -> Self {
        Self::with_comparator(natural_order::<K>)
    }
}

impl<K, V> Default for RbMap<K, V, fn(&K, &K) -> i32>
where
    K: PartialOrd,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbMap<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            inner: ForestMap::with(comparator, new_node::<K, V>),
        }
    }

    pub fn insert(&mut self, key: K, value: V) -> u32 {
        self.inner.insert(key, value)
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        self.inner.find(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(key)
    }

    pub fn remove(&mut self, key: &K) -> bool {
        self.inner.remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }

    pub fn min_key(&self) -> Option<&K> {
        self.inner.min_key()
    }

    pub fn max_key(&self) -> Option<&K> {
        self.inner.max_key()
    }

    pub fn first(&self) -> Option<u32> {
        self.inner.first()
    }

    pub fn last(&self) -> Option<u32> {
        self.inner.last()
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        self.inner.next(curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        self.inner.prev(curr)
    }

    /// Index of `key`, or of the greatest key below it when absent.
    pub fn get_or_next_lower(&self, key: &K) -> Option<u32> {
        self.inner.get_or_next_lower(key)
    }

    pub fn key(&self, idx: u32) -> &K {
        self.inner.key(idx)
    }

    pub fn value(&self, idx: u32) -> &V {
        self.inner.value(idx)
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.inner.keys()
    }

    pub fn for_each<G: FnMut(&K, &V)>(&self, f: G) {
        self.inner.for_each(f)
    }

    pub fn root_index(&self) -> Option<u32> {
        self.inner.root_index()
    }

    /// Measured tree height (empty = 0); within 2·log2(n+1) by invariant.
    pub fn height(&self) -> usize {
        crate::util::height(self.inner.arena(), self.inner.root_index())
    }

    pub fn assert_valid(&self) -> Result<(), crate::error::InvariantError> {
        util::check_red_black(
            self.inner.arena(),
            self.inner.root_index(),
            self.inner.comparator(),
            self.inner.len(),
        )
    }
}
