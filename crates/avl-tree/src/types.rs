//! Node trait definitions.
//!
//! Nodes live in a [`Vec`]-backed arena owned by the tree. Every link is an
//! `Option<u32>` index into that arena, so the `p` back-reference never owns
//! anything and the node graph cannot form an ownership cycle. All
//! tree-manipulation helpers take the arena as a slice and work with indices.

use std::cmp::Ordering;

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Comparator used by map/tree structures.
///
/// Returns a negative number when `a < b`, zero when equal and a positive
/// number when `a > b`. Must describe a strict total order.
pub type Comparator<K> = dyn Fn(&K, &K) -> i32;

/// Key/value node interface used by map-like structures.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
    fn set_value(&mut self, value: V);

    /// Exchanges key and value with `other`, leaving both nodes' links
    /// untouched.
    fn swap_entry(&mut self, other: &mut Self);

    /// Consumes the node, yielding its key and value.
    fn into_entry(self) -> (K, V);
}

/// Comparator derived from [`Ord`].
pub fn default_comparator<K: Ord>(a: &K, b: &K) -> i32 {
    match a.cmp(b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
