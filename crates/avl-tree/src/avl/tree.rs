use std::fmt::Debug;

use crate::error::InvariantViolation;
use crate::types::{default_comparator, KvNode, Node};
use crate::util::{find, first, last, next, prev, relocate, size};

use super::types::AvlNode;
use super::util;

/// Outcome of [`AvlTree::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Insertion<K, V> {
    /// A new node was linked in at this arena index.
    Inserted(u32),
    /// A node with an equal key already exists at `existing`; the tree is
    /// unchanged and the rejected pair is handed back.
    Duplicate { existing: u32, key: K, value: V },
}

impl<K, V> Insertion<K, V> {
    pub fn is_inserted(&self) -> bool {
        matches!(self, Insertion::Inserted(_))
    }
}

/// Outcome of [`AvlTree::delete`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal<K, V> {
    /// The key was present; its node is gone and the pair is returned.
    Deleted(K, V),
    NotFound,
}

impl<K, V> Removal<K, V> {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Removal::Deleted(..))
    }
}

/// Arena-backed AVL tree map.
///
/// Nodes are addressed by `u32` arena indices. The arena is kept dense: a
/// removal moves the last node into the freed slot, so an index obtained
/// from a lookup stays valid only until the next successful [`delete`] or
/// [`clear`].
///
/// [`delete`]: AvlTree::delete
/// [`clear`]: AvlTree::clear
pub struct AvlTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    arena: Vec<AvlNode<K, V>>,
    root: Option<u32>,
    comparator: C,
}

impl<K, V> AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K, V> Default for AvlTree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
        }
    }

    pub fn root(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[AvlNode<K, V>] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &AvlNode<K, V> {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.node(idx).value()
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        self.arena[idx as usize].value_mut()
    }

    /// Inserts `key` unless an equal key is already stored.
    pub fn insert(&mut self, key: K, value: V) -> Insertion<K, V> {
        let Some(mut curr) = self.root else {
            self.arena.push(AvlNode::new(key, value));
            self.root = Some(0);
            return Insertion::Inserted(0);
        };

        loop {
            let cmp = (self.comparator)(&key, self.arena[curr as usize].key());
            if cmp == 0 {
                return Insertion::Duplicate {
                    existing: curr,
                    key,
                    value,
                };
            }
            let child = if cmp < 0 {
                self.arena[curr as usize].l()
            } else {
                self.arena[curr as usize].r()
            };
            match child {
                Some(child) => curr = child,
                None => {
                    let idx = self.arena.len() as u32;
                    self.arena.push(AvlNode::new(key, value));
                    self.root = if cmp < 0 {
                        util::insert_left(&mut self.arena, self.root, idx, curr)
                    } else {
                        util::insert_right(&mut self.arena, self.root, idx, curr)
                    };
                    return Insertion::Inserted(idx);
                }
            }
        }
    }

    /// Removes the node holding `key`.
    pub fn delete(&mut self, key: &K) -> Removal<K, V> {
        let Some(node) = self.find(key) else {
            return Removal::NotFound;
        };

        let (root, detached) = util::remove(&mut self.arena, self.root, node);
        let last = (self.arena.len() - 1) as u32;
        let removed = self.arena.swap_remove(detached as usize);
        self.root = if detached == last {
            root
        } else {
            relocate(&mut self.arena, root, last, detached)
        };

        let (k, v) = removed.into_entry();
        Removal::Deleted(k, v)
    }

    pub fn find(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, &self.comparator)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|i| self.value(i))
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(self.value_mut(idx))
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Node with the smallest key.
    pub fn min(&self) -> Option<u32> {
        first(&self.arena, self.root)
    }

    /// Node with the largest key.
    pub fn max(&self) -> Option<u32> {
        last(&self.arena, self.root)
    }

    /// Smallest key within the subtree rooted at `idx`.
    pub fn subtree_min(&self, idx: Option<u32>) -> Option<u32> {
        first(&self.arena, idx)
    }

    /// Largest key within the subtree rooted at `idx`.
    pub fn subtree_max(&self, idx: Option<u32>) -> Option<u32> {
        last(&self.arena, idx)
    }

    pub fn predecessor(&self, idx: u32) -> Option<u32> {
        prev(&self.arena, idx)
    }

    pub fn successor(&self, idx: u32) -> Option<u32> {
        next(&self.arena, idx)
    }

    /// Counts nodes by walking the tree from the root.
    pub fn count(&self) -> usize {
        size(&self.arena, self.root)
    }

    /// Number of stored nodes. Always equal to [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
    }

    /// Height of the whole tree; 0 when empty.
    pub fn height(&self) -> u32 {
        util::height(&self.arena, self.root)
    }

    pub fn balance_factor(&self, idx: u32) -> i32 {
        util::balance_factor(&self.arena, idx)
    }

    /// In-order iterator over `(key, value)` pairs.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: self,
            curr: self.min(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn for_each<G: FnMut(u32, &AvlNode<K, V>)>(&self, mut f: G) {
        let mut curr = self.min();
        while let Some(i) = curr {
            f(i, self.node(i));
            curr = self.successor(i);
        }
    }

    pub fn assert_valid(&self) -> Result<(), InvariantViolation> {
        util::assert_avl_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = self.count();
        if reachable != self.arena.len() {
            return Err(InvariantViolation::Unreachable {
                reachable,
                stored: self.arena.len(),
            });
        }
        Ok(())
    }
}

impl<K, V, C> AvlTree<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    pub fn print(&self) -> String {
        util::print(&self.arena, self.root, "")
    }
}

impl<K, V, C> Debug for AvlTree<K, V, C>
where
    K: Debug,
    V: Debug,
    C: Fn(&K, &K) -> i32,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    tree: &'a AvlTree<K, V, C>,
    curr: Option<u32>,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = self.tree.successor(i);
        let node = self.tree.node(i);
        Some((node.key(), node.value()))
    }
}

impl<'a, K, V, C> IntoIterator for &'a AvlTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
