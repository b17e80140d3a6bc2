//! This crate exposes a family of Binary Search Trees (BSTs) that share one
//! arena-backed node store and differ only in how they keep themselves shallow.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. The most important invariants of a BST are:
//!
//! 1. For every node in a BST, all the nodes in its left subtree have a
//!    value less than its own value.
//! 2. For every node in a BST, all the nodes in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some nodes have no children. These nodes are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root to a leaf). With clever construction the height of a BST can be limited
//! to `O(lg N)` where `N` is the number of nodes in the tree. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then the right subtree.
//!
//! ## Balancing
//!
//! Every [`Tree`] carries a [`Balance`] chosen when it is built:
//!
//! - [`Balance::Unbalanced`] does nothing beyond the ordering invariants above;
//! - [`Balance::Avl`] keeps sibling subtree heights within one of each other;
//! - [`Balance::RedBlack`] colors nodes so every path from the root down carries the same
//!   number of black nodes;
//! - [`Balance::Splay`] moves every node it touches to the root.
//!
//! All of them restructure with the same two tools: single rotations, and a "3+4"
//! reconstruction that rebuilds any three-node zig-zag or zig-zig shape into a balanced one.
//!
//! ```
//! use searchtree::{Balance, Tree};
//!
//! for balance in [Balance::Unbalanced, Balance::Avl, Balance::RedBlack, Balance::Splay] {
//!     let mut tree = Tree::new(balance);
//!     for value in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
//!         tree.insert(value);
//!     }
//!     assert_eq!(tree.erase(&5), Some(5));
//!     assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4, 6, 7, 8, 9]);
//!     assert_eq!(tree.check(), Ok(()));
//! }
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod check;
pub mod node;
pub mod traverse;
pub mod tree;

mod avl;
mod bst;
mod red_black;
mod splay;


pub use bst::{InsertResult, Search};
pub use check::InvariantError;
pub use node::{Color, Node, NodeId};
pub use tree::{Balance, Tree};
