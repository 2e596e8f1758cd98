//! AVL tree: height-balanced BST.
//!
//! Every node stores the height of its subtree (leaf = 1). After any
//! structural change the ancestors are retraced bottom-up: heights are
//! recomputed and a single (LL/RR) or double (LR/RL) rotation is applied
//! wherever the balance factor leaves {-1, 0, 1}. Height stays within
//! 1.44·log2(n+2).

pub mod avl_map;
pub mod types;
pub mod util;

pub use avl_map::AvlMap;
pub use types::{AvlNode, AvlNodeLike};
