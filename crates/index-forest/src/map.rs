//! Arena-backed ordered map shell shared by the three binary trees.
//!
//! The shell owns the node arena, the root index, cached min/max indices,
//! the comparator, and the live entry count. Structure-specific attach and
//! detach logic (plain BST, AVL retracing, red-black fixup) is funneled
//! through [`TreeOps`], so the shell's descent, overwrite-on-equal, and
//! min/max bookkeeping are written once.
//!
//! Node slots freed by removal stay in the arena as garbage; `clear` resets
//! the arena wholesale. Arena indices are key-stable: removal relocates
//! nodes topologically and never migrates a key to another slot, so cached
//! indices held by the shell remain valid.

use std::marker::PhantomData;

use crate::types::KvNode;
use crate::util::{find_or_next_lower, first, last, next, prev};

/// Structural mutation callbacks required by [`ForestMap`].
///
/// `insert` seeds an empty tree; `insert_left` / `insert_right` attach an
/// already-allocated node under a known parent slot and rebalance as the
/// structure requires; `remove` detaches a node and rebalances. Each
/// returns the new root index.
pub trait TreeOps<K, V, N>
where
    N: KvNode<K, V>,
{
    fn insert<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<N>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32>;

    fn insert_left(arena: &mut Vec<N>, root: Option<u32>, node: u32, parent: u32) -> Option<u32>;

    fn insert_right(arena: &mut Vec<N>, root: Option<u32>, node: u32, parent: u32) -> Option<u32>;

    fn remove(arena: &mut Vec<N>, root: Option<u32>, node: u32) -> Option<u32>;
}

/// Generic arena-backed ordered map core.
pub struct ForestMap<K, V, N, O, C, F>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    F: Fn(K, V) -> N,
{
    arena: Vec<N>,
    root: Option<u32>,
    min: Option<u32>,
    max: Option<u32>,
    comparator: C,
    new_node: F,
    len: usize,
    _kv: PhantomData<(K, V)>,
    _ops: PhantomData<O>,
}

impl<K, V, N, O, C, F> ForestMap<K, V, N, O, C, F>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    F: Fn(K, V) -> N,
{
    pub fn with(comparator: C, new_node: F) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            min: None,
            max: None,
            comparator,
            new_node,
            len: 0,
            _kv: PhantomData,
            _ops: PhantomData,
        }
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.node(idx).value()
    }

    fn alloc(&mut self, key: K, value: V) -> u32 {
        self.arena.push((self.new_node)(key, value));
        (self.arena.len() - 1) as u32
    }

    /// Inserts or overwrites. Returns the entry's arena index; the length
    /// grows only on true insertion.
    pub fn insert(&mut self, key: K, value: V) -> u32 {
        let Some(root) = self.root else {
            let idx = self.alloc(key, value);
            self.root = O::insert(&mut self.arena, None, idx, &self.comparator);
            self.min = self.root;
            self.max = self.root;
            self.len = 1;
            return idx;
        };

        // Fast paths: appending past the current max or before the current
        // min skips the general descent.
        let max = self.max.expect("max cached for non-empty tree");
        let max_cmp = (self.comparator)(&key, self.arena[max as usize].key());
        if max_cmp == 0 {
            self.arena[max as usize].set_value(value);
            return max;
        }
        if max_cmp > 0 {
            let idx = self.alloc(key, value);
            self.root = O::insert_right(&mut self.arena, Some(root), idx, max);
            self.max = Some(idx);
            self.len += 1;
            return idx;
        }

        let min = self.min.expect("min cached for non-empty tree");
        let min_cmp = (self.comparator)(&key, self.arena[min as usize].key());
        if min_cmp == 0 {
            self.arena[min as usize].set_value(value);
            return min;
        }
        if min_cmp < 0 {
            let idx = self.alloc(key, value);
            self.root = O::insert_left(&mut self.arena, Some(root), idx, min);
            self.min = Some(idx);
            self.len += 1;
            return idx;
        }

        let mut curr = root;
        loop {
            let cmp = (self.comparator)(&key, self.arena[curr as usize].key());
            if cmp == 0 {
                self.arena[curr as usize].set_value(value);
                return curr;
            }
            let child = if cmp > 0 {
                self.arena[curr as usize].r()
            } else {
                self.arena[curr as usize].l()
            };
            match child {
                Some(c) => curr = c,
                None => {
                    let idx = self.alloc(key, value);
                    self.root = if cmp > 0 {
                        O::insert_right(&mut self.arena, self.root, idx, curr)
                    } else {
                        O::insert_left(&mut self.arena, self.root, idx, curr)
                    };
                    self.len += 1;
                    return idx;
                }
            }
        }
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        let cmp = &self.comparator;
        let mut curr = self.root;
        while let Some(i) = curr {
            let c = cmp(key, self.arena[i as usize].key());
            if c == 0 {
                return Some(i);
            }
            curr = if c < 0 {
                self.arena[i as usize].l()
            } else {
                self.arena[i as usize].r()
            };
        }
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.arena[i as usize].value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.arena[idx as usize].value_mut())
    }

    /// Removes `key` if present. Absent keys are a normal outcome: the map
    /// is left untouched and `false` is returned.
    pub fn remove(&mut self, key: &K) -> bool {
        let node = match self.find(key) {
            Some(node) => node,
            None => return false,
        };

        if self.max == Some(node) {
            self.max = prev(&self.arena, node);
        }
        if self.min == Some(node) {
            self.min = next(&self.arena, node);
        }

        self.root = O::remove(&mut self.arena, self.root, node);
        if self.len > 0 {
            self.len -= 1;
        }

        if self.root.is_none() {
            self.min = None;
            self.max = None;
            self.len = 0;
        } else {
            if self.min.is_none() {
                self.min = first(&self.arena, self.root);
            }
            if self.max.is_none() {
                self.max = last(&self.arena, self.root);
            }
        }

        true
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.min = None;
        self.max = None;
        self.len = 0;
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn min_key(&self) -> Option<&K> {
        self.min.map(|i| self.arena[i as usize].key())
    }

    pub fn max_key(&self) -> Option<&K> {
        self.max.map(|i| self.arena[i as usize].key())
    }

    pub fn get_or_next_lower(&self, key: &K) -> Option<u32> {
        find_or_next_lower(
            &self.arena,
            self.root,
            key,
            |n| n.key(),
            |a, b| (self.comparator)(a, b),
        )
    }

    pub fn first(&self) -> Option<u32> {
        self.min
    }

    pub fn last(&self) -> Option<u32> {
        self.max
    }

    pub fn next(&self, curr: u32) -> Option<u32> {
        next(&self.arena, curr)
    }

    pub fn prev(&self, curr: u32) -> Option<u32> {
        prev(&self.arena, curr)
    }

    pub fn iter_indices(&self) -> IndexIter<'_, K, V, N, O, C, F> {
        IndexIter {
            map: self,
            curr: self.first(),
            _kv: PhantomData,
        }
    }

    /// Keys in ascending comparator order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter_indices().map(|i| self.key(i))
    }

    /// In-order visit of every live entry.
    pub fn for_each<G: FnMut(&K, &V)>(&self, mut f: G) {
        let mut curr = self.first();
        while let Some(i) = curr {
            let node = &self.arena[i as usize];
            f(node.key(), node.value());
            curr = self.next(i);
        }
    }
}

/// Ascending iterator over live arena indices.
pub struct IndexIter<'a, K, V, N, O, C, F>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    F: Fn(K, V) -> N,
{
    map: &'a ForestMap<K, V, N, O, C, F>,
    curr: Option<u32>,
    _kv: PhantomData<(K, V)>,
}

impl<'a, K, V, N, O, C, F> Iterator for IndexIter<'a, K, V, N, O, C, F>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    F: Fn(K, V) -> N,
{
    type Item = u32;

    fn next(&mut self) -> Option<Self::Item> {
        let out = self.curr;
        if let Some(i) = self.curr {
            self.curr = self.map.next(i);
        }
        out
    }
}
