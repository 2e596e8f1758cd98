//! Structural insert/remove for the plain BST. No rebalancing.

use crate::error::InvariantError;
use crate::types::KvNode;
use crate::util::{
    check_links_and_order, count, detach, first, get_l, get_p, get_r, set_l, set_p, set_r,
    transplant,
};

/// Attaches `n` as the root of an empty tree, or descends and attaches at
/// the correct empty slot. Returns the new root.
pub fn insert<K, V, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Some(n);
    };

    loop {
        let cmp = {
            let key = arena[n as usize].key();
            comparator(key, arena[curr as usize].key())
        };
        let child = if cmp < 0 {
            get_l(arena, curr)
        } else {
            get_r(arena, curr)
        };
        match child {
            Some(c) => curr = c,
            None => {
                return if cmp < 0 {
                    insert_left(arena, root, n, curr)
                } else {
                    insert_right(arena, root, n, curr)
                };
            }
        }
    }
}

/// Attaches `n` as the left child of `p`. The slot must be empty.
pub fn insert_left<K, V, N>(arena: &mut Vec<N>, root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: KvNode<K, V>,
{
    set_l(arena, p, Some(n));
    set_p(arena, n, Some(p));
    root
}

/// Attaches `n` as the right child of `p`. The slot must be empty.
pub fn insert_right<K, V, N>(arena: &mut Vec<N>, root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: KvNode<K, V>,
{
    set_r(arena, p, Some(n));
    set_p(arena, n, Some(p));
    root
}

/// Detaches `n` from the tree and returns the new root.
///
/// Zero children: unlink from the parent. One child: splice the child into
/// `n`'s slot. Two children: the in-order successor (leftmost of the right
/// subtree, which has no left child) is transplanted into `n`'s position,
/// so keys never move between arena slots.
pub fn remove<K, V, N>(arena: &mut Vec<N>, root: Option<u32>, n: u32) -> Option<u32>
where
    N: KvNode<K, V>,
{
    let mut root = root;
    let p = get_p(arena, n);
    let l = get_l(arena, n);
    let r = get_r(arena, n);

    match (l, r) {
        (Some(l), Some(r)) => {
            let s = first(arena, Some(r)).expect("right subtree is non-empty");
            if s != r {
                let sr = get_r(arena, s);
                transplant(arena, s, sr);
                set_r(arena, s, Some(r));
                set_p(arena, r, Some(s));
            }
            transplant(arena, n, Some(s));
            set_l(arena, s, Some(l));
            set_p(arena, l, Some(s));
            if p.is_none() {
                root = Some(s);
            }
        }
        (c, None) | (None, c) => {
            transplant(arena, n, c);
            if p.is_none() {
                root = c;
            }
        }
    }

    detach(arena, n);
    root
}

/// Validates parent links, strict in-order key ordering, and that the live
/// entry count matches `len`.
pub fn check_bst<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
    len: usize,
) -> Result<(), InvariantError>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    check_links_and_order(arena, root, |n: &N| n.key(), comparator)?;
    let reachable = count(arena, root);
    if reachable != len {
        return Err(InvariantError::LengthMismatch {
            len,
            count: reachable,
        });
    }
    Ok(())
}
