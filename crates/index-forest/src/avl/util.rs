//! AVL attach/detach with bottom-up height retracing.

use crate::error::InvariantError;
use crate::util::{
    check_links_and_order, count, detach, first, get_l, get_p, get_r, set_l, set_p, set_r,
    transplant,
};

use super::types::AvlNodeLike;

#[inline]
fn h<K, V, N>(arena: &[N], i: Option<u32>) -> u32
where
    N: AvlNodeLike<K, V>,
{
    i.map_or(0, |i| arena[i as usize].height())
}

/// Balance factor: `height(left) - height(right)`.
#[inline]
fn bf<K, V, N>(arena: &[N], i: u32) -> i32
where
    N: AvlNodeLike<K, V>,
{
    h(arena, get_l(arena, i)) as i32 - h(arena, get_r(arena, i)) as i32
}

#[inline]
fn fix_height<K, V, N>(arena: &mut [N], i: u32)
where
    N: AvlNodeLike<K, V>,
{
    let height = 1 + h(arena, get_l(arena, i)).max(h(arena, get_r(arena, i)));
    arena[i as usize].set_height(height);
}

/// Right rotation around `n`; recomputes heights for exactly the two nodes
/// involved. Returns the new subtree root (the old left child).
fn rotate_right<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let l = get_l(arena, n).expect("rotation requires a left child");
    let lr = get_r(arena, l);
    let p = get_p(arena, n);

    set_l(arena, n, lr);
    if let Some(lr) = lr {
        set_p(arena, lr, Some(n));
    }
    set_r(arena, l, Some(n));
    set_p(arena, n, Some(l));
    set_p(arena, l, p);
    if let Some(p) = p {
        if get_l(arena, p) == Some(n) {
            set_l(arena, p, Some(l));
        } else {
            set_r(arena, p, Some(l));
        }
    }

    fix_height(arena, n);
    fix_height(arena, l);
    l
}

/// Left rotation around `n`. Mirror of [`rotate_right`].
fn rotate_left<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let r = get_r(arena, n).expect("rotation requires a right child");
    let rl = get_l(arena, r);
    let p = get_p(arena, n);

    set_r(arena, n, rl);
    if let Some(rl) = rl {
        set_p(arena, rl, Some(n));
    }
    set_l(arena, r, Some(n));
    set_p(arena, n, Some(r));
    set_p(arena, r, p);
    if let Some(p) = p {
        if get_l(arena, p) == Some(n) {
            set_l(arena, p, Some(r));
        } else {
            set_r(arena, p, Some(r));
        }
    }

    fix_height(arena, n);
    fix_height(arena, r);
    r
}

/// Recomputes `n`'s height and applies the LL/LR/RR/RL case if the balance
/// factor leaves {-1, 0, 1}. A taller child with balance factor 0 takes the
/// single-rotation case, which only arises on removal. Returns the subtree
/// root after rebalancing.
fn rebalance_at<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    fix_height(arena, n);
    let b = bf(arena, n);
    if b > 1 {
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        if bf(arena, l) < 0 {
            rotate_left(arena, l);
        }
        rotate_right(arena, n)
    } else if b < -1 {
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        if bf(arena, r) > 0 {
            rotate_right(arena, r);
        }
        rotate_left(arena, n)
    } else {
        n
    }
}

/// Walks from `start` to the root, rebalancing every ancestor whose
/// subtree changed. Returns the (possibly new) root.
fn retrace<K, V, N>(arena: &mut [N], start: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let mut curr = start;
    loop {
        let top = rebalance_at(arena, curr);
        match get_p(arena, top) {
            Some(p) => curr = p,
            None => return top,
        }
    }
}

pub fn insert<K, V, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
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

pub fn insert_left<K, V, N>(arena: &mut Vec<N>, _root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    set_l(arena, p, Some(n));
    set_p(arena, n, Some(p));
    Some(retrace(arena, p))
}

pub fn insert_right<K, V, N>(arena: &mut Vec<N>, _root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    set_r(arena, p, Some(n));
    set_p(arena, n, Some(p));
    Some(retrace(arena, p))
}

/// Detaches `n`, then retraces from the deepest node whose subtree changed.
/// Two-children removal transplants the in-order successor into `n`'s
/// position; the retrace recomputes every stale height on the way up.
pub fn remove<K, V, N>(arena: &mut Vec<N>, _root: Option<u32>, n: u32) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    let p = get_p(arena, n);
    let l = get_l(arena, n);
    let r = get_r(arena, n);

    let start: Option<u32>;
    let mut fallback: Option<u32> = None;

    match (l, r) {
        (Some(l), Some(r)) => {
            let s = first(arena, Some(r)).expect("right subtree is non-empty");
            if s != r {
                let sp = get_p(arena, s).expect("successor below right child has a parent");
                let sr = get_r(arena, s);
                transplant(arena, s, sr);
                set_r(arena, s, Some(r));
                set_p(arena, r, Some(s));
                start = Some(sp);
            } else {
                start = Some(s);
            }
            transplant(arena, n, Some(s));
            set_l(arena, s, Some(l));
            set_p(arena, l, Some(s));
        }
        (c, None) | (None, c) => {
            transplant(arena, n, c);
            start = p;
            fallback = c;
        }
    }

    detach(arena, n);
    match start {
        Some(st) => Some(retrace(arena, st)),
        None => fallback,
    }
}

fn computed_height<K, V, N>(arena: &[N], node: Option<u32>) -> Result<u32, InvariantError>
where
    N: AvlNodeLike<K, V>,
{
    let Some(node) = node else {
        return Ok(0);
    };

    let lh = computed_height(arena, get_l(arena, node))?;
    let rh = computed_height(arena, get_r(arena, node))?;

    let b = lh as i32 - rh as i32;
    if !(-1..=1).contains(&b) {
        return Err(InvariantError::BalanceViolation { node, bf: b });
    }

    let computed = 1 + lh.max(rh);
    let stored = arena[node as usize].height();
    if stored != computed {
        return Err(InvariantError::HeightMismatch {
            node,
            stored,
            computed,
        });
    }

    Ok(computed)
}

/// Validates links, ordering, stored heights, balance factors, and the
/// live entry count. Test/debug helper; recursion here is bounded by the
/// AVL height guarantee.
pub fn check_avl<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
    len: usize,
) -> Result<(), InvariantError>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    check_links_and_order(arena, root, |n: &N| n.key(), comparator)?;
    computed_height(arena, root)?;
    let reachable = count(arena, root);
    if reachable != len {
        return Err(InvariantError::LengthMismatch {
            len,
            count: reachable,
        });
    }
    Ok(())
}
