use crate::types::{KvNode, Node};

/// One stored key/value pair and its position in the tree.
#[derive(Clone, Debug)]
pub struct AvlNode<K, V> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub k: K,
    pub v: V,
    /// Height of the subtree rooted here; a leaf has height 1.
    pub h: u32,
}

impl<K, V> AvlNode<K, V> {
    pub fn new(k: K, v: V) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            k,
            v,
            h: 1,
        }
    }
}

impl<K, V> Node for AvlNode<K, V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<K, V> KvNode<K, V> for AvlNode<K, V> {
    fn key(&self) -> &K {
        &self.k
    }

    fn value(&self) -> &V {
        &self.v
    }

    fn value_mut(&mut self) -> &mut V {
        &mut self.v
    }

    fn set_value(&mut self, value: V) {
        self.v = value;
    }

    fn swap_entry(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.k, &mut other.k);
        std::mem::swap(&mut self.v, &mut other.v);
    }

    fn into_entry(self) -> (K, V) {
        (self.k, self.v)
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike<K, V>: KvNode<K, V> {
    fn height(&self) -> u32;
    fn set_height(&mut self, h: u32);
}

impl<K, V> AvlNodeLike<K, V> for AvlNode<K, V> {
    fn height(&self) -> u32 {
        self.h
    }

    fn set_height(&mut self, h: u32) {
        self.h = h;
    }
}
