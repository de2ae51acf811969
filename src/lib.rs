//! An unbalanced Binary Search Tree (BST) with parent links, meant as a building block for
//! higher-level ordered collections such as sets, maps, and multi-value indices.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). This tree never rebalances, so the height depends
//! entirely on insertion order: random order gives `O(lg N)` on average, sorted order gives a
//! height of `N`.
//!
//! ## Parent links and the sentinel
//!
//! Every `Node` also knows its parent. That is enough to step to the in-order successor or
//! predecessor of any `Node` without keeping a stack, which is what [`Cursor`] and [`Iter`] do.
//! The tree keeps a small header, the sentinel, holding the root and the `Node`s with the
//! smallest and largest values. The sentinel is also the "end" position a [`Cursor`] reaches
//! after the largest element, and stepping backwards from it lands on the largest element.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod arena;
mod cursor;
mod error;
mod iter;
pub mod tree;
mod util;


pub use cursor::{Cursor, Position};
pub use error::Error;
pub use iter::{IntoIter, Iter};
pub use tree::Tree;
