//! Structural invariant diagnostics.
//!
//! These errors are only produced by the `assert_valid` checkers, which
//! exist for tests and debugging. The public mutation API never surfaces
//! them: a mutating operation either completes with all invariants restored
//! or, for an absent key, changes nothing.

use thiserror::Error;

/// A violated structural invariant, reported with the offending arena index.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantError {
    #[error("root node {0} has a parent link")]
    RootHasParent(u32),

    #[error("parent link does not match the child edge at node {0}")]
    BrokenParentLink(u32),

    #[error("keys out of order at node {0}")]
    OrderViolation(u32),

    #[error("root node {0} is red")]
    RedRoot(u32),

    #[error("red node {0} has a red child")]
    RedRedViolation(u32),

    #[error("black-height mismatch under node {0}")]
    BlackHeightMismatch(u32),

    #[error("stored height {stored} != computed height {computed} at node {node}")]
    HeightMismatch { node: u32, stored: u32, computed: u32 },

    #[error("balance factor {bf} out of range at node {node}")]
    BalanceViolation { node: u32, bf: i32 },

    #[error("live length {len} does not match reachable entry count {count}")]
    LengthMismatch { len: usize, count: usize },

    #[error("childless non-terminal trie node {0}")]
    DanglingTrieNode(u32),
}
