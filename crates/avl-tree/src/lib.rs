//! Arena-backed AVL tree.
//!
//! An ordered key/value map that keeps every node's subtree heights within
//! one of each other, giving O(log n) worst-case lookup, insertion and
//! deletion.
//!
//! Instead of pointers, nodes live in a tree-owned `Vec` arena and
//! link to each other through `Option<u32>` indices. Parent links are plain
//! indices as well, so upward walks (successor, predecessor, rebalancing)
//! never take part in ownership.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`KvNode`] traits, comparator type |
//! [`util`] | balance-agnostic helpers: `first`, `last`, `next`, `prev`, `find`, `size`, `relocate` |
//! [`avl`] | rotations, rebalance walk, insert/remove, invariant checker, [`AvlTree`] |
//! [`error`] | [`InvariantViolation`] |
//!
//! # Example
//!
//! ```
//! use avl_tree::{AvlTree, Insertion, Removal};
//!
//! let mut tree = AvlTree::<i32, &str>::new();
//! tree.insert(1, "one");
//! tree.insert(2, "two");
//! tree.insert(3, "three");
//!
//! let root = tree.root().unwrap();
//! assert_eq!(*tree.key(root), 2);
//! assert!(!tree.insert(2, "again").is_inserted());
//!
//! assert_eq!(tree.delete(&2), Removal::Deleted(2, "two"));
//! assert_eq!(tree.count(), 2);
//! assert!(matches!(tree.insert(4, "four"), Insertion::Inserted(_)));
//! ```

pub mod avl;
pub mod error;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlNodeLike, AvlTree, Insertion, Iter, Removal};
pub use error::InvariantViolation;
pub use types::{default_comparator, Comparator, KvNode, Node};
pub use util::{first, last, next, prev};
