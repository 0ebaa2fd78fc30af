use std::fmt::Debug;

use tracing::trace;

use crate::error::InvariantViolation;
use crate::types::KvNode;
use crate::util::{
    first, get_l, get_p, get_r, next, replace_child, set_l, set_p, set_r, swap_entries,
};

use super::types::AvlNodeLike;

/// Height of the subtree at `i`; an absent subtree has height 0.
#[inline]
pub fn height<K, V, N>(arena: &[N], i: Option<u32>) -> u32
where
    N: AvlNodeLike<K, V>,
{
    i.map_or(0, |i| arena[i as usize].height())
}

#[inline]
fn update_height<K, V, N>(arena: &mut [N], i: u32)
where
    N: AvlNodeLike<K, V>,
{
    let lh = height(arena, get_l(arena, i));
    let rh = height(arena, get_r(arena, i));
    arena[i as usize].set_height(1 + lh.max(rh));
}

/// `height(right) - height(left)` from cached heights.
#[inline]
pub fn balance_factor<K, V, N>(arena: &[N], i: u32) -> i32
where
    N: AvlNodeLike<K, V>,
{
    height(arena, get_r(arena, i)) as i32 - height(arena, get_l(arena, i)) as i32
}

/// Promotes the right child of `n` into `n`'s position.
///
/// The promoted child's left subtree (the floater) is re-attached as `n`'s
/// right subtree. Returns the promoted node; the caller is responsible for
/// adopting it as root when `n` had no parent.
pub fn rotate_left<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    trace!(node = n, "rotate left");
    let p = get_p(arena, n);
    let nr = get_r(arena, n).expect("rotate_left requires a right child");
    let floater = get_l(arena, nr);

    set_p(arena, nr, p);
    if let Some(p) = p {
        replace_child(arena, p, n, Some(nr));
    }
    set_l(arena, nr, Some(n));
    set_p(arena, n, Some(nr));
    set_r(arena, n, floater);
    if let Some(f) = floater {
        set_p(arena, f, Some(n));
    }

    update_height(arena, n);
    update_height(arena, nr);
    nr
}

/// Promotes the left child of `n` into `n`'s position. Mirror of
/// [`rotate_left`].
pub fn rotate_right<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    trace!(node = n, "rotate right");
    let p = get_p(arena, n);
    let nl = get_l(arena, n).expect("rotate_right requires a left child");
    let floater = get_r(arena, nl);

    set_p(arena, nl, p);
    if let Some(p) = p {
        replace_child(arena, p, n, Some(nl));
    }
    set_r(arena, nl, Some(n));
    set_p(arena, n, Some(nl));
    set_l(arena, n, floater);
    if let Some(f) = floater {
        set_p(arena, f, Some(n));
    }

    update_height(arena, n);
    update_height(arena, nl);
    nl
}

/// Restores balance at `n`, whose children are already balanced and whose
/// cached height is current. Returns the root of the (possibly rotated)
/// subtree.
fn fix<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let bf = balance_factor(arena, n);
    if bf < -1 {
        trace!(node = n, bf, "left-heavy");
        let l = get_l(arena, n).expect("left-heavy node has a left child");
        if balance_factor(arena, l) > 0 {
            rotate_left(arena, l);
        }
        rotate_right(arena, n)
    } else if bf > 1 {
        trace!(node = n, bf, "right-heavy");
        let r = get_r(arena, n).expect("right-heavy node has a right child");
        if balance_factor(arena, r) < 0 {
            rotate_right(arena, r);
        }
        rotate_left(arena, n)
    } else {
        n
    }
}

/// Walks from `start` towards the root, refreshing cached heights and
/// rotating wherever the balance factor leaves [-1, 1].
///
/// The walk does not stop after the first rotation: deletion can unbalance
/// several ancestors in turn. It stops early only once a subtree ends up
/// with the same height it had before the structural change, since nothing
/// above it can have changed. Returns the possibly new root.
pub fn rebalance<K, V, N>(arena: &mut [N], mut root: Option<u32>, start: u32) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    let mut curr = Some(start);
    while let Some(n) = curr {
        let before = arena[n as usize].height();
        update_height(arena, n);
        let top = fix(arena, n);
        let p = get_p(arena, top);
        if p.is_none() {
            root = Some(top);
        }
        if arena[top as usize].height() == before {
            break;
        }
        curr = p;
    }
    root
}

/// Links the detached node `n` as the right child of `p` and rebalances.
pub fn insert_right<K, V, N>(arena: &mut [N], root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    set_r(arena, p, Some(n));
    set_p(arena, n, Some(p));
    rebalance(arena, root, p)
}

/// Links the detached node `n` as the left child of `p` and rebalances.
pub fn insert_left<K, V, N>(arena: &mut [N], root: Option<u32>, n: u32, p: u32) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    set_l(arena, p, Some(n));
    set_p(arena, n, Some(p));
    rebalance(arena, root, p)
}

/// Unlinks the entry stored at `n` from the tree.
///
/// A node with two children keeps its slot: it takes over its in-order
/// successor's entry and the successor (which has no left child) is spliced
/// out instead. Returns the new root and the index of the now detached node
/// holding the removed entry.
pub fn remove<K, V, N>(arena: &mut [N], root: Option<u32>, n: u32) -> (Option<u32>, u32)
where
    N: AvlNodeLike<K, V>,
{
    let target = match (get_l(arena, n), get_r(arena, n)) {
        (Some(_), Some(r)) => {
            let s = first(arena, Some(r)).expect("right subtree is not empty");
            swap_entries(arena, n, s);
            s
        }
        _ => n,
    };

    let p = get_p(arena, target);
    let c = get_l(arena, target).or(get_r(arena, target));
    if let Some(c) = c {
        set_p(arena, c, p);
    }
    set_p(arena, target, None);
    set_l(arena, target, None);
    set_r(arena, target, None);
    arena[target as usize].set_height(1);

    let root = match p {
        Some(p) => {
            replace_child(arena, p, target, c);
            rebalance(arena, root, p)
        }
        None => c,
    };
    (root, target)
}

fn tree_height<K, V, N>(arena: &[N], node: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let l = get_l(arena, node).map_or(0, |i| tree_height(arena, i));
    let r = get_r(arena, node).map_or(0, |i| tree_height(arena, i));
    1 + l.max(r)
}

/// Verifies links, cached heights, balance and key order of the tree at
/// `root`. Heights are recomputed from scratch, so this is O(n log n).
pub fn assert_avl_tree<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), InvariantViolation>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if get_p(arena, root).is_some() {
        return Err(InvariantViolation::RootHasParent { node: root });
    }

    fn validate_links_and_heights<K, V, N>(
        arena: &[N],
        node: u32,
    ) -> Result<(), InvariantViolation>
    where
        N: AvlNodeLike<K, V>,
    {
        let l = get_l(arena, node);
        let r = get_r(arena, node);

        for child in [l, r].into_iter().flatten() {
            if get_p(arena, child) != Some(node) {
                return Err(InvariantViolation::BrokenParentLink {
                    node: child,
                    parent: node,
                });
            }
            validate_links_and_heights(arena, child)?;
        }

        let expected = tree_height(arena, node);
        let cached = arena[node as usize].height();
        if cached != expected {
            return Err(InvariantViolation::HeightMismatch {
                node,
                expected,
                cached,
            });
        }

        let lh = l.map_or(0, |i| tree_height(arena, i)) as i32;
        let rh = r.map_or(0, |i| tree_height(arena, i)) as i32;
        let bf = rh - lh;
        if !(-1..=1).contains(&bf) {
            return Err(InvariantViolation::Unbalanced { node, bf });
        }

        Ok(())
    }

    validate_links_and_heights(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) >= 0 {
                return Err(InvariantViolation::OrderViolated { node: i });
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: AvlNodeLike<K, V> + KvNode<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={} bf={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.height(),
                balance_factor::<K, V, N>(arena, i),
                n.key(),
                n.value()
            )
        }
    }
}
