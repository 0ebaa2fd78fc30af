use std::fmt;

use thiserror::Error;

/// Which in-order neighbor was asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Previous,
    Next,
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Neighbor::Previous => f.write_str("minimum"),
            Neighbor::Next => f.write_str("maximum"),
        }
    }
}

/// Errors reported by [`crate::NamedTree`].
///
/// Every error leaves the tree exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AvlError {
    #[error("node already exists")]
    DuplicateKey,
    #[error("node not found")]
    KeyNotFound,
    #[error("tree is empty")]
    EmptyTree,
    /// The key is the minimum (for [`Neighbor::Previous`]) or maximum (for
    /// [`Neighbor::Next`]) of the tree.
    #[error("current node is the {0} node")]
    NoSuchNeighbor(Neighbor),
}

pub type Result<T> = std::result::Result<T, AvlError>;
