//! AVL balancing on top of the structural helpers in [`crate::util`].

pub mod tree;
pub mod types;
pub mod util;

pub use tree::{AvlTree, Insertion, Iter, Removal};
pub use types::{AvlNode, AvlNodeLike};
pub use util::{
    assert_avl_tree, balance_factor, insert_left, insert_right, print, rebalance, remove,
    rotate_left, rotate_right,
};
