//! Named ordered container backed by [`avl_tree`].
//!
//! [`NamedTree`] carries a label chosen at construction and turns the
//! engine's structural outcomes into [`AvlError`]s.
//!
//! # Example
//!
//! ```
//! use avl_container::{AvlError, Neighbor, NamedTree};
//!
//! let mut tree = NamedTree::<i32, &str>::new("numbers");
//! tree.add(1, "one").unwrap();
//! tree.add(2, "two").unwrap();
//! tree.add(3, "three").unwrap();
//!
//! assert_eq!(tree.label(), "numbers");
//! assert_eq!(tree.add(2, "again"), Err(AvlError::DuplicateKey));
//! assert_eq!(tree.next(&2), Ok(&3));
//! assert_eq!(tree.previous(&1), Err(AvlError::NoSuchNeighbor(Neighbor::Previous)));
//! assert_eq!(tree.get_payload(&3), Ok(&"three"));
//! ```

pub mod container;
pub mod error;

pub use container::NamedTree;
pub use error::{AvlError, Neighbor, Result};
