// =====================================================================
// File: tree/node.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
// Description:
//   Defines the red-black tree node (`Node`) used by the in-memory
//   ordered key index. Each node maintains:
//
//   - `key`   : The signed integer the tree is ordered on.
//   - `color` : Red or Black, used by the rebalancing pass.
//   - `left` / `right` : Handles to the child nodes (if any).
//   - `parent`: Back-reference used only for upward traversal.
//
// Notes:
//   * Links are arena handles (`NodeId`), not owning pointers. The tree
//     owns every node through its arena, so the parent back-reference
//     never needs to own anything.
//   * This file contains only the node representation and accessors.
//     Insertion, rotation and search live in `rbtree.rs`.
// =====================================================================
use std::fmt;


/// Node color for the red-black invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}


impl Color {
    /// Single character marker used by the tree renderer.
    pub fn marker(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}


impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}


/// Handle to a node stored in the tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);


impl NodeId {
    /// Position of the node inside the arena.
    pub fn index(self) -> usize {
        self.0
    }
}


/// Basic red-black tree node. Pure data holder - no validation is done here.
#[derive(Debug, Clone)]
pub struct Node {
    key: i64,
    color: Color,
    left: Option<NodeId>,
    right: Option<NodeId>,
    parent: Option<NodeId>,
}


impl Node {
    /// Creates a detached node with no children and no parent.
    ///
    /// # Example
    /// ```
    /// use rbstore::tree::{Color, Node};
    /// let node = Node::new(42, Color::Red);
    /// assert_eq!(node.key(), 42);
    /// assert!(node.is_red());
    /// assert!(node.left().is_none() && node.right().is_none());
    /// ```
    pub fn new(key: i64, color: Color) -> Self {
        Self {
            key,
            color,
            left: None,
            right: None,
            parent: None,
        }
    }

    pub fn key(&self) -> i64 {
        self.key
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn is_red(&self) -> bool {
        self.color == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color == Color::Black
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn set_left(&mut self, left: Option<NodeId>) {
        self.left = left;
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn set_right(&mut self, right: Option<NodeId>) {
        self.right = right;
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn set_parent(&mut self, parent: Option<NodeId>) {
        self.parent = parent;
    }

    /// True when neither child slot is occupied.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
