//! Prefix tree over string keys.
//!
//! One arena node per character edge; a node's `is_end` flag marks a
//! stored word. Enumeration and deletion are iterative (explicit stack /
//! recorded path), so word length never translates into recursion depth.

pub mod set;
pub mod types;

pub use set::Trie;
pub use types::TrieNode;
