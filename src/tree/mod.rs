// =====================================================================
// File: tree/mod.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
//! The `tree` module contains the red-black tree used for in-memory
//! ordered key indexing.
//!
//! Structure:
//! - `node.rs`   : Defines the [`Node`] structure, [`Color`] and [`NodeId`].
//! - `rbtree.rs` : Defines the [`RBTree`] and its algorithms
//!                 (insert, rebalance, rotations, search, render).
//! - `tests.rs`  : Unit tests for the tree (compiled only in test mode).
// =====================================================================

pub mod node;
pub mod rbtree;

pub use self::node::{Color, Node, NodeId};
pub use self::rbtree::{InvariantViolation, RBTree};

#[cfg(test)]
pub mod tests;
