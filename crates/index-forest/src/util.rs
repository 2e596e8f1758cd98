//! Traversal helpers shared by the binary trees.
//!
//! Everything here is iterative: in-order stepping walks parent links, and
//! whole-tree measurements use an explicit stack, so no helper recurses to
//! a depth proportional to tree height. That matters for the unbalanced
//! BST, whose height is unbounded under adversarial insertion order.

use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor of `curr`, stepping through parent links.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor of `curr`.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Climbs parent links from `idx` to the root of its tree.
pub(crate) fn top<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(p) = get_p(arena, idx) {
        idx = p;
    }
    idx
}

/// Finds a node by key under `root`.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    while let Some(i) = curr {
        let cmp = comparator(key, key_of(&arena[i as usize]));
        if cmp == 0 {
            return Some(i);
        }
        curr = if cmp < 0 {
            get_l(arena, i)
        } else {
            get_r(arena, i)
        };
    }
    None
}

/// Finds the node with `key`, or the next lower node when absent.
pub fn find_or_next_lower<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut curr = root;
    let mut result: Option<u32> = None;
    while let Some(i) = curr {
        let cmp = comparator(key_of(&arena[i as usize]), key);
        if cmp == 0 {
            return Some(i);
        }
        if cmp > 0 {
            curr = get_l(arena, i);
        } else {
            result = Some(i);
            curr = get_r(arena, i);
        }
    }
    result
}

/// Height of the subtree under `root` (empty = 0, leaf = 1), measured with
/// an explicit stack.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut max = 0usize;
    let mut stack: Vec<(u32, usize)> = vec![(root, 1)];
    while let Some((idx, depth)) = stack.pop() {
        if depth > max {
            max = depth;
        }
        if let Some(l) = get_l(arena, idx) {
            stack.push((l, depth + 1));
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push((r, depth + 1));
        }
    }
    max
}

/// Number of nodes reachable under `root`, measured with an explicit stack.
pub fn count<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let Some(root) = root else {
        return 0;
    };
    let mut n = 0usize;
    let mut stack: Vec<u32> = vec![root];
    while let Some(idx) = stack.pop() {
        n += 1;
        if let Some(l) = get_l(arena, idx) {
            stack.push(l);
        }
        if let Some(r) = get_r(arena, idx) {
            stack.push(r);
        }
    }
    n
}

/// Replaces the subtree rooted at `u` with the subtree rooted at `v` in
/// `u`'s parent. Does not touch `u`'s own child links.
pub(crate) fn transplant<N: Node>(arena: &mut [N], u: u32, v: Option<u32>) {
    let p = get_p(arena, u);
    if let Some(p) = p {
        if get_l(arena, p) == Some(u) {
            set_l(arena, p, v);
        } else {
            set_r(arena, p, v);
        }
    }
    if let Some(v) = v {
        set_p(arena, v, p);
    }
}

/// Detaches all of `idx`'s links, leaving the slot as arena garbage.
pub(crate) fn detach<N: Node>(arena: &mut [N], idx: u32) {
    set_p(arena, idx, None);
    set_l(arena, idx, None);
    set_r(arena, idx, None);
}

/// Shared ordering/link validation: parent links consistent, in-order key
/// sequence strictly ascending under `comparator`.
pub(crate) fn check_links_and_order<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key_of: F,
    comparator: &C,
) -> Result<(), crate::error::InvariantError>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    use crate::error::InvariantError;

    let Some(root) = root else {
        return Ok(());
    };
    if get_p(arena, root).is_some() {
        return Err(InvariantError::RootHasParent(root));
    }

    let mut stack: Vec<u32> = vec![root];
    while let Some(idx) = stack.pop() {
        if let Some(l) = get_l(arena, idx) {
            if get_p(arena, l) != Some(idx) {
                return Err(InvariantError::BrokenParentLink(l));
            }
            stack.push(l);
        }
        if let Some(r) = get_r(arena, idx) {
            if get_p(arena, r) != Some(idx) {
                return Err(InvariantError::BrokenParentLink(r));
            }
            stack.push(r);
        }
    }

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            let cmp = comparator(key_of(&arena[prev as usize]), key_of(&arena[i as usize]));
            if cmp >= 0 {
                return Err(InvariantError::OrderViolation(i));
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}
