//! Unbalanced binary search tree.
//!
//! Baseline ordered map: O(height) operations, no rebalancing. Height is
//! unbounded under adversarial (sorted) insertion order; that is intended
//! baseline behavior, not a defect. All internals are iterative, so a
//! degenerate chain costs time, never stack.

pub mod bst_map;
pub mod types;
pub mod util;

pub use bst_map::BstMap;
pub use types::BstNode;
