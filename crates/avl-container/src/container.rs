use avl_tree::{default_comparator, AvlTree, Insertion, Iter, Removal};
use tracing::debug;

use crate::error::{AvlError, Neighbor, Result};

/// A labelled ordered container owning one [`AvlTree`].
///
/// Each call maps onto the engine operation of the same meaning; structural
/// outcomes the engine merely signals (duplicate key, missing key, empty
/// tree, no neighbor) come back as [`AvlError`].
pub struct NamedTree<K, V, C = fn(&K, &K) -> i32>
where
    C: Fn(&K, &K) -> i32,
{
    label: String,
    tree: AvlTree<K, V, C>,
}

impl<K, V> NamedTree<K, V, fn(&K, &K) -> i32>
where
    K: Ord,
{
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_comparator(label, default_comparator::<K>)
    }
}

impl<K, V, C> NamedTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    pub fn with_comparator(label: impl Into<String>, comparator: C) -> Self {
        let label = label.into();
        debug!(label = %label, "created tree");
        Self {
            label,
            tree: AvlTree::with_comparator(comparator),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Read access to the underlying engine.
    pub fn tree(&self) -> &AvlTree<K, V, C> {
        &self.tree
    }

    pub fn add(&mut self, key: K, payload: V) -> Result<()> {
        match self.tree.insert(key, payload) {
            Insertion::Inserted(_) => Ok(()),
            Insertion::Duplicate { .. } => {
                debug!(label = %self.label, "add rejected: duplicate key");
                Err(AvlError::DuplicateKey)
            }
        }
    }

    /// Removes `key`, returning its payload.
    pub fn remove(&mut self, key: &K) -> Result<V> {
        match self.tree.delete(key) {
            Removal::Deleted(_, payload) => Ok(payload),
            Removal::NotFound => {
                debug!(label = %self.label, "remove rejected: key not found");
                Err(AvlError::KeyNotFound)
            }
        }
    }

    /// Replaces the payload stored under `key`, returning the old one. The
    /// tree's shape is not touched.
    pub fn update_payload(&mut self, key: &K, payload: V) -> Result<V> {
        let slot = self.tree.get_mut(key).ok_or(AvlError::KeyNotFound)?;
        Ok(std::mem::replace(slot, payload))
    }

    pub fn get_payload(&self, key: &K) -> Result<&V> {
        self.tree.get(key).ok_or(AvlError::KeyNotFound)
    }

    pub fn get_payload_mut(&mut self, key: &K) -> Result<&mut V> {
        self.tree.get_mut(key).ok_or(AvlError::KeyNotFound)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.tree.contains_key(key)
    }

    pub fn count(&self) -> usize {
        self.tree.count()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    pub fn max(&self) -> Result<&K> {
        let idx = self.tree.max().ok_or(AvlError::EmptyTree)?;
        Ok(self.tree.key(idx))
    }

    pub fn min(&self) -> Result<&K> {
        let idx = self.tree.min().ok_or(AvlError::EmptyTree)?;
        Ok(self.tree.key(idx))
    }

    /// Key immediately below `key`.
    pub fn previous(&self, key: &K) -> Result<&K> {
        let idx = self.tree.find(key).ok_or(AvlError::KeyNotFound)?;
        let prev = self
            .tree
            .predecessor(idx)
            .ok_or(AvlError::NoSuchNeighbor(Neighbor::Previous))?;
        Ok(self.tree.key(prev))
    }

    /// Key immediately above `key`.
    pub fn next(&self, key: &K) -> Result<&K> {
        let idx = self.tree.find(key).ok_or(AvlError::KeyNotFound)?;
        let next = self
            .tree
            .successor(idx)
            .ok_or(AvlError::NoSuchNeighbor(Neighbor::Next))?;
        Ok(self.tree.key(next))
    }

    pub fn iter(&self) -> Iter<'_, K, V, C> {
        self.tree.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a NamedTree<K, V, C>
where
    C: Fn(&K, &K) -> i32,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
