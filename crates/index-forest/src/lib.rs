//! Arena-based in-memory index structures.
//!
//! Four pluggable indices with the same ordered key-value contract (the
//! trie is string-key specific):
//!
//! - [`BstMap`] - unbalanced binary search tree; O(height) baseline.
//! - [`RbMap`] - red-black tree; height ≤ 2·log2(n+1).
//! - [`AvlMap`] - AVL tree; height ≤ 1.44·log2(n+2).
//! - [`Trie`] - prefix tree: exact lookup, prefix queries, enumeration.
//!
//! Nodes live in a `Vec`-backed arena owned by each container; all
//! "pointers" are `Option<u32>` indices, so parent back-references are
//! non-owning and cannot form ownership cycles. The ordered maps share the
//! [`map::ForestMap`] shell (descent, overwrite-on-equal, cached min/max)
//! and differ only in their [`map::TreeOps`] attach/detach logic.
//!
//! Ordering is driven by a user-suppliable comparator
//! (`Fn(&K, &K) -> i32`), defaulting to natural [`PartialOrd`] order.
//! Everything is single-threaded and synchronous; lookups and mutations
//! are iterative, so tree height never becomes recursion depth.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] / [`KvNode`] traits, comparator contract |
//! | [`map`] | shared arena map shell and [`map::TreeOps`] |
//! | [`util`] | iterative traversal helpers (`first`, `next`, …) |
//! | [`bst`] | unbalanced BST |
//! | [`avl`] | AVL tree |
//! | [`red_black`] | red-black tree |
//! | [`trie`] | prefix tree |
//! | [`error`] | invariant diagnostics for `assert_valid` |

pub mod avl;
pub mod bst;
pub mod error;
pub mod map;
pub mod red_black;
pub mod trie;
pub mod types;
pub mod util;

pub use avl::AvlMap;
pub use bst::BstMap;
pub use error::InvariantError;
pub use red_black::{Color, RbMap};
pub use trie::Trie;
pub use types::{natural_order, KvNode, Node};
