//! Red-black tree: color-balanced BST.
//!
//! Invariants: the root is black, a red node has only black children, and
//! every path from a node down to an absent-child position crosses the
//! same number of black nodes. "No child" is `None`; there is no sentinel
//! node, so no placeholder state can be shared (or corrupted) across tree
//! instances. Height stays within 2·log2(n+1).

pub mod rb_map;
pub mod types;
pub mod util;

pub use rb_map::RbMap;
pub use types::{Color, RbNode, RbNodeLike};
