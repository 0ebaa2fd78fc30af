use thiserror::Error;

/// A structural invariant found broken by [`crate::AvlTree::assert_valid`].
///
/// Node fields are arena indices.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("root node {node} has a parent")]
    RootHasParent { node: u32 },
    #[error("node {node} does not point back to its parent {parent}")]
    BrokenParentLink { node: u32, parent: u32 },
    #[error("node {node} caches height {cached}, actual height is {expected}")]
    HeightMismatch { node: u32, expected: u32, cached: u32 },
    #[error("node {node} has balance factor {bf}")]
    Unbalanced { node: u32, bf: i32 },
    #[error("key at node {node} is not greater than its in-order predecessor")]
    OrderViolated { node: u32 },
    #[error("{reachable} nodes reachable from the root, {stored} stored")]
    Unreachable { reachable: usize, stored: usize },
}
