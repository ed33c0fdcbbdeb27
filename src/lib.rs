//! This crate exposes an unbalanced Binary Search Tree (BST) and a few tools
//! for measuring the shape of randomly built ones, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert and find stored items. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the item that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the number of
//! edges on the longest path from the root `Node` to a leaf `Node`). Nothing in
//! [`tree::Tree`] limits that height: inserting sorted items builds a single chain
//! of height `N - 1`. Inserting items in random order does much better, and the
//! [`stats`] module measures by how much. BSTs also naturally support sorted
//! rendering by visiting the left subtree, then the subtree root, then the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod selftest;
pub mod stats;
pub mod tree;

pub use tree::{Node, Tree};
