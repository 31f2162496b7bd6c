//! A Binary Search Tree that stays put until it's told to rebalance.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`, where `height` is the longest path from the
//! root `Node` to a leaf `Node`. Building from a sorted run of keys by always
//! picking the middle key as the root gives a height of `O(lg N)`. Plain
//! inserts and deletes don't keep that shape, so this crate leaves it to the
//! caller to check [`Tree::is_balanced`] and call [`Tree::rebalance`], which
//! flattens the keys in order and builds the short tree again.
//!
//! # Examples
//!
//! ```
//! use median_bst::Tree;
//!
//! let mut tree = Tree::from_keys([5, 3, 8, 3, 1]);
//! assert!(tree.iter().copied().eq([1, 3, 5, 8]));
//!
//! tree.insert(13);
//! tree.insert(21);
//! tree.delete(&3);
//! assert!(tree.contains(&21));
//! assert!(!tree.contains(&3));
//!
//! if !tree.is_balanced() {
//!     tree.rebalance();
//! }
//! assert!(tree.is_balanced());
//! ```

#![deny(missing_docs)]

pub mod error;
mod node;
mod pretty;
pub mod traversal;
mod tree;


pub use error::{Error, Result};
pub use node::{build_tree, depth, find, height, is_balanced, Link, Node};
pub use pretty::Pretty;
pub use tree::{Iter, Tree};
