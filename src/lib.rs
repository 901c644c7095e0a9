//! This crate exposes an owned, unbalanced Binary Search Tree (BST) and the
//! small menu-driven command layer used to drive it interactively.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! will sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! These invariants mean searching for a key takes `O(height)` (where `height`
//! is defined as the longest path from the root `Node` to a leaf `Node`). The
//! tree in [`owned`] makes no attempt to limit its height, so inserting keys in
//! ascending order yields a tree of height `N`. BSTs also naturally support
//! sorted iteration by visiting the left subtree, then the subtree root, then
//! the right subtree.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod command;
pub mod error;
pub mod owned;
