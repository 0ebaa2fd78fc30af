use crate::types::Node;

use super::{get_l, get_p, get_r, replace_child, set_p};

/// Rewrites every link that references arena slot `from` to reference `to`.
///
/// Called after the node at `from` has been physically moved to `to` (as
/// `Vec::swap_remove` does with the last slot). The moved node's own links
/// are left as they were; its parent's child slot and its children's parent
/// slots are repointed. Returns the possibly updated root.
pub fn relocate<N: Node>(arena: &mut [N], root: Option<u32>, from: u32, to: u32) -> Option<u32> {
    if from == to {
        return root;
    }

    if let Some(p) = get_p(arena, to) {
        replace_child(arena, p, from, Some(to));
    }
    if let Some(l) = get_l(arena, to) {
        set_p(arena, l, Some(to));
    }
    if let Some(r) = get_r(arena, to) {
        set_p(arena, r, Some(to));
    }

    if root == Some(from) {
        Some(to)
    } else {
        root
    }
}
