//! Red-black attach/detach: rotations plus the two-phase fixups.

use crate::error::InvariantError;
use crate::util::{
    check_links_and_order, count, detach, first, get_l, get_p, get_r, set_l, set_p, set_r, top,
    transplant,
};

use super::types::{Color, RbNodeLike};

#[inline]
fn paint<K, V, N>(arena: &mut [N], i: u32, color: Color)
where
    N: RbNodeLike<K, V>,
{
    arena[i as usize].set_color(color);
}

#[inline]
fn color_of<K, V, N>(arena: &[N], i: u32) -> Color
where
    N: RbNodeLike<K, V>,
{
    arena[i as usize].color()
}

/// Color of an optional child; an absent child is black.
#[inline]
fn color_opt<K, V, N>(arena: &[N], i: Option<u32>) -> Color
where
    N: RbNodeLike<K, V>,
{
    i.map_or(Color::Black, |i| arena[i as usize].color())
}

/// Left rotation around `n`; relinks three child edges and the parent
/// link, preserving in-order key sequence.
fn rotate_left<K, V, N>(arena: &mut [N], n: u32)
where
    N: RbNodeLike<K, V>,
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
}

/// Right rotation around `n`. Mirror of [`rotate_left`].
fn rotate_right<K, V, N>(arena: &mut [N], n: u32)
where
    N: RbNodeLike<K, V>,
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
}

pub fn insert<K, V, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Option<u32>
where
    N: RbNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        paint(arena, n, Color::Black);
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
    N: RbNodeLike<K, V>,
{
    set_l(arena, p, Some(n));
    set_p(arena, n, Some(p));
    Some(finish_insert(arena, n))
}

pub fn insert_right<K, V, N>(arena: &mut Vec<N>, _root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    set_r(arena, p, Some(n));
    set_p(arena, n, Some(p));
    Some(finish_insert(arena, n))
}

fn finish_insert<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: RbNodeLike<K, V>,
{
    insert_fixup(arena, n);
    let root = top(arena, n);
    paint(arena, root, Color::Black);
    root
}

/// Insert-fixup: while the new node's parent is red, either recolor
/// through a red uncle and continue from the grandparent, or rotate once
/// or twice (LL/LR/RR/RL) through a black uncle and stop.
fn insert_fixup<K, V, N>(arena: &mut [N], mut z: u32)
where
    N: RbNodeLike<K, V>,
{
    loop {
        let Some(p) = get_p(arena, z) else {
            break;
        };
        if color_of(arena, p) == Color::Black {
            break;
        }
        let g = get_p(arena, p).expect("red node has a parent");

        if get_l(arena, g) == Some(p) {
            let u = get_r(arena, g);
            if color_opt(arena, u) == Color::Red {
                let u = u.expect("red uncle exists");
                paint(arena, p, Color::Black);
                paint(arena, u, Color::Black);
                paint(arena, g, Color::Red);
                z = g;
            } else {
                if get_r(arena, p) == Some(z) {
                    z = p;
                    rotate_left(arena, z);
                }
                let zp = get_p(arena, z).expect("rotated node has a parent");
                paint(arena, zp, Color::Black);
                let zg = get_p(arena, zp).expect("rotated node has a grandparent");
                paint(arena, zg, Color::Red);
                rotate_right(arena, zg);
            }
        } else {
            let u = get_l(arena, g);
            if color_opt(arena, u) == Color::Red {
                let u = u.expect("red uncle exists");
                paint(arena, p, Color::Black);
                paint(arena, u, Color::Black);
                paint(arena, g, Color::Red);
                z = g;
            } else {
                if get_l(arena, p) == Some(z) {
                    z = p;
                    rotate_right(arena, z);
                }
                let zp = get_p(arena, z).expect("rotated node has a parent");
                paint(arena, zp, Color::Black);
                let zg = get_p(arena, zp).expect("rotated node has a grandparent");
                paint(arena, zg, Color::Red);
                rotate_left(arena, zg);
            }
        }
    }
}

/// Detaches `z` using the transplant pattern, tracking the color of the
/// physically spliced node; a removed black triggers delete-fixup from the
/// replacement position (possibly an absent child, so its parent is
/// tracked explicitly). Returns the new root.
pub fn remove<K, V, N>(arena: &mut Vec<N>, _root: Option<u32>, z: u32) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    let zl = get_l(arena, z);
    let zr = get_r(arena, z);

    let mut spliced_color = color_of(arena, z);
    let x: Option<u32>;
    let xp: Option<u32>;

    match (zl, zr) {
        (None, _) => {
            x = zr;
            xp = get_p(arena, z);
            transplant(arena, z, zr);
        }
        (_, None) => {
            x = zl;
            xp = get_p(arena, z);
            transplant(arena, z, zl);
        }
        (Some(zl), Some(zr)) => {
            let y = first(arena, Some(zr)).expect("right subtree is non-empty");
            spliced_color = color_of(arena, y);
            x = get_r(arena, y);
            if get_p(arena, y) == Some(z) {
                xp = Some(y);
            } else {
                xp = get_p(arena, y);
                let yr = get_r(arena, y);
                transplant(arena, y, yr);
                set_r(arena, y, Some(zr));
                set_p(arena, zr, Some(y));
            }
            transplant(arena, z, Some(y));
            set_l(arena, y, Some(zl));
            set_p(arena, zl, Some(y));
            let zc = color_of(arena, z);
            paint(arena, y, zc);
        }
    }

    detach(arena, z);

    if spliced_color == Color::Black {
        delete_fixup(arena, x, xp);
    }

    let anchor = x.or(xp)?;
    let root = top(arena, anchor);
    paint(arena, root, Color::Black);
    Some(root)
}

/// Delete-fixup: pushes the double-black up through the four symmetric
/// sibling cases until black-height is restored or the root absorbs it.
fn delete_fixup<K, V, N>(arena: &mut [N], mut x: Option<u32>, mut xp: Option<u32>)
where
    N: RbNodeLike<K, V>,
{
    loop {
        if color_opt(arena, x) == Color::Red {
            break;
        }
        let Some(p) = xp else {
            break;
        };

        if get_l(arena, p) == x {
            let mut w = get_r(arena, p).expect("double-black node has a sibling");
            if color_of(arena, w) == Color::Red {
                paint(arena, w, Color::Black);
                paint(arena, p, Color::Red);
                rotate_left(arena, p);
                w = get_r(arena, p).expect("sibling exists after rotation");
            }
            if color_opt(arena, get_l(arena, w)) == Color::Black
                && color_opt(arena, get_r(arena, w)) == Color::Black
            {
                paint(arena, w, Color::Red);
                x = Some(p);
                xp = get_p(arena, p);
            } else {
                if color_opt(arena, get_r(arena, w)) == Color::Black {
                    let wl = get_l(arena, w).expect("near child is red");
                    paint(arena, wl, Color::Black);
                    paint(arena, w, Color::Red);
                    rotate_right(arena, w);
                    w = get_r(arena, p).expect("sibling exists after rotation");
                }
                let pc = color_of(arena, p);
                paint(arena, w, pc);
                paint(arena, p, Color::Black);
                let wr = get_r(arena, w).expect("far child is red");
                paint(arena, wr, Color::Black);
                rotate_left(arena, p);
                return;
            }
        } else {
            let mut w = get_l(arena, p).expect("double-black node has a sibling");
            if color_of(arena, w) == Color::Red {
                paint(arena, w, Color::Black);
                paint(arena, p, Color::Red);
                rotate_right(arena, p);
                w = get_l(arena, p).expect("sibling exists after rotation");
            }
            if color_opt(arena, get_l(arena, w)) == Color::Black
                && color_opt(arena, get_r(arena, w)) == Color::Black
            {
                paint(arena, w, Color::Red);
                x = Some(p);
                xp = get_p(arena, p);
            } else {
                if color_opt(arena, get_l(arena, w)) == Color::Black {
                    let wr = get_r(arena, w).expect("near child is red");
                    paint(arena, wr, Color::Black);
                    paint(arena, w, Color::Red);
                    rotate_left(arena, w);
                    w = get_l(arena, p).expect("sibling exists after rotation");
                }
                let pc = color_of(arena, p);
                paint(arena, w, pc);
                paint(arena, p, Color::Black);
                let wl = get_l(arena, w).expect("far child is red");
                paint(arena, wl, Color::Black);
                rotate_right(arena, p);
                return;
            }
        }
    }

    if let Some(x) = x {
        paint(arena, x, Color::Black);
    }
}

fn black_height<K, V, N>(arena: &[N], node: Option<u32>) -> Result<usize, InvariantError>
where
    N: RbNodeLike<K, V>,
{
    let Some(node) = node else {
        return Ok(0);
    };

    let l = get_l(arena, node);
    let r = get_r(arena, node);

    if color_of(arena, node) == Color::Red
        && (color_opt(arena, l) == Color::Red || color_opt(arena, r) == Color::Red)
    {
        return Err(InvariantError::RedRedViolation(node));
    }

    let lh = black_height(arena, l)?;
    let rh = black_height(arena, r)?;
    if lh != rh {
        return Err(InvariantError::BlackHeightMismatch(node));
    }

    Ok(lh + usize::from(color_of(arena, node) == Color::Black))
}

/// Validates links, ordering, the color invariants, black-height, and the
/// live entry count. Test/debug helper; recursion here is bounded by the
/// red-black height guarantee.
pub fn check_red_black<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
    len: usize,
) -> Result<(), InvariantError>
where
    N: RbNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    check_links_and_order(arena, root, |n: &N| n.key(), comparator)?;

    if let Some(root) = root {
        if color_of(arena, root) == Color::Red {
            return Err(InvariantError::RedRoot(root));
        }
    }
    black_height(arena, root)?;

    let reachable = count(arena, root);
    if reachable != len {
        return Err(InvariantError::LengthMismatch {
            len,
            count: reachable,
        });
    }
    Ok(())
}
