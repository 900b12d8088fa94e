// =====================================================================
// File: tree/rbtree.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
// Description:
//   Implements the red-black tree index (`RBTree`) that manages insertion,
//   search and rendering over `Node` structures. The index backs the
//   interactive key store and keeps the tree height at O(log n) through
//   recoloring and rotations after every insert.
//
// Features:
//   - `insert`: Adds a key (duplicates allowed, equal keys descend right).
//   - `search`: Standard binary search descent; returns the matching node.
//   - `rotate_left` / `rotate_right`: Promote a node over its parent.
//   - `render`: Indented text view, right subtree on top.
//   - `validate`: Checks every red-black invariant (used by tests).
//
// Notes:
//   * Nodes live in an arena (`Vec<Node>`) and link to each other through
//     `NodeId` handles, so parent back-references are plain indices.
//   * Nodes are never removed individually; `clear` tears the whole
//     tree down at once.
//   * Deletion is intentionally not offered by this index.
// =====================================================================
use super::{Color, Node, NodeId};
use log::{debug, trace};
use std::error::Error;
use std::fmt;


/// A broken red-black (or structural) invariant found by [`RBTree::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// The root node is red.
    RedRoot { key: i64 },
    /// A key sits outside the range allowed by its ancestors.
    OutOfOrder { key: i64, lower: Option<i64>, upper: Option<i64> },
    /// A red node has a red child.
    RedRed { parent: i64, child: i64 },
    /// Two subtrees of the same node have different black heights.
    BlackHeight { key: i64, left: usize, right: usize },
    /// A node's parent handle does not point back at the node holding it.
    BrokenParentLink { key: i64 },
    /// The same node is claimed as a child more than once.
    SharedChild { key: i64 },
    /// Arena holds nodes that cannot be reached from the root.
    Unreachable { reachable: usize, stored: usize },
}


impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RedRoot { key } => write!(f, "root {} is red", key),
            Self::OutOfOrder { key, lower, upper } => {
                write!(f, "key {} outside bounds {:?}..={:?}", key, lower, upper)
            }
            Self::RedRed { parent, child } => {
                write!(f, "red node {} has red child {}", parent, child)
            }
            Self::BlackHeight { key, left, right } => write!(
                f,
                "node {} has black height {} on the left but {} on the right",
                key, left, right
            ),
            Self::BrokenParentLink { key } => write!(f, "parent link of node {} is stale", key),
            Self::SharedChild { key } => write!(f, "node {} is linked from two places", key),
            Self::Unreachable { reachable, stored } => write!(
                f,
                "{} of {} stored nodes are reachable from the root",
                reachable, stored
            ),
        }
    }
}


impl Error for InvariantViolation {}


/// Red-black tree index over signed integer keys.
/// Contains the node arena and the handle of the current root.
#[derive(Debug, Clone, Default)]
pub struct RBTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}


impl RBTree {
    /// Create a new empty tree.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// Number of keys stored, duplicates included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Handle of the current root, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Borrow the node behind a handle.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this tree.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }

    fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent()
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Insert a key into the tree.
    ///
    /// - An empty tree gets a single black root, no rebalancing needed.
    /// - Otherwise the key descends from the root (`key < node` goes left,
    ///   anything else goes right) until it reaches an empty slot, where a
    ///   red node is attached and the fix-up pass runs on it.
    /// - Equal keys are never rejected; each insert adds a node.
    ///
    /// # Returns
    /// The handle of the freshly created node.
    ///
    /// # Example
    /// ```
    /// use rbstore::RBTree;
    /// let mut tree = RBTree::new();
    /// for key in [10, 20, 30] {
    ///     tree.insert(key);
    /// }
    /// let root = tree.root().unwrap();
    /// assert_eq!(tree.node(root).key(), 20);
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn insert(&mut self, key: i64) -> NodeId {
        let Some(mut current) = self.root else {
            let id = self.alloc(Node::new(key, Color::Black));
            self.root = Some(id);
            debug!("insert {}: tree was empty, new black root", key);
            return id;
        };

        // Descend to the first empty slot
        let id = loop {
            let node = self.node(current);
            let goes_left = key < node.key();
            let next = if goes_left { node.left() } else { node.right() };

            match next {
                Some(child) => current = child,
                None => {
                    let mut fresh = Node::new(key, Color::Red);
                    fresh.set_parent(Some(current));
                    let id = self.alloc(fresh);
                    if goes_left {
                        self.node_mut(current).set_left(Some(id));
                    } else {
                        self.node_mut(current).set_right(Some(id));
                    }
                    break id;
                }
            }
        };

        debug!(
            "insert {}: attached under {} as red leaf",
            key,
            self.node(current).key()
        );
        self.rebalance_after_insert(id);
        id
    }

    /// Restores the red-black invariants after `node` was attached as a red leaf.
    ///
    /// Climbs from the new node toward the root:
    /// - **Red uncle**: recolor parent and uncle black, grandparent red, then
    ///   continue from the grandparent.
    /// - **Black or missing uncle**: straighten a zig-zag with one rotation at
    ///   the parent, then recolor and rotate the parent over the grandparent.
    ///
    /// The root is forced black before returning.
    fn rebalance_after_insert(&mut self, mut node: NodeId) {
        loop {
            let Some(mut parent) = self.parent_of(node) else {
                // Climbed to the root
                self.node_mut(node).set_color(Color::Black);
                break;
            };

            if self.node(parent).is_black() {
                break;
            }

            // Red parent with no grandparent means a red root; handled below
            let Some(grandparent) = self.parent_of(parent) else {
                break;
            };

            let parent_is_left = self.node(grandparent).left() == Some(parent);
            let uncle = if parent_is_left {
                self.node(grandparent).right()
            } else {
                self.node(grandparent).left()
            };

            // Red uncle - recolor and move the violation two levels up
            if let Some(uncle) = uncle.filter(|&u| self.node(u).is_red()) {
                trace!(
                    "fix-up at {}: red uncle {}, recoloring",
                    self.node(node).key(),
                    self.node(uncle).key()
                );
                self.node_mut(parent).set_color(Color::Black);
                self.node_mut(uncle).set_color(Color::Black);
                self.node_mut(grandparent).set_color(Color::Red);
                node = grandparent;
                continue;
            }

            // Black or missing uncle - rotations finish the pass
            if parent_is_left {
                if self.node(parent).right() == Some(node) {
                    // Triangle: promote node so the three sit in a line
                    self.rotate_left(node);
                    std::mem::swap(&mut node, &mut parent);
                }
                self.node_mut(parent).set_color(Color::Black);
                self.node_mut(grandparent).set_color(Color::Red);
                self.rotate_right(parent);
            } else {
                if self.node(parent).left() == Some(node) {
                    self.rotate_right(node);
                    std::mem::swap(&mut node, &mut parent);
                }
                self.node_mut(parent).set_color(Color::Black);
                self.node_mut(grandparent).set_color(Color::Red);
                self.rotate_left(parent);
            }
            break;
        }

        // Rotations may have replaced the root
        if let Some(root) = self.root {
            self.node_mut(root).set_color(Color::Black);
        }
    }

    /// Promote `n` over its parent, where `n` is the parent's right child.
    ///
    /// Given `p = n.parent`:
    /// - `n`'s left subtree becomes `p`'s right subtree.
    /// - `n` takes `p`'s slot under the grandparent (or becomes the root).
    /// - `p` becomes `n`'s left child.
    ///
    /// In-order key sequence and parent links are preserved; colors are not
    /// touched.
    ///
    /// # Call outs
    /// Asking to rotate a node that has no parent (or that is not a right
    /// child) is a programming error: debug builds panic, release builds
    /// leave the tree unchanged.
    pub fn rotate_left(&mut self, n: NodeId) {
        let Some(p) = self
            .parent_of(n)
            .filter(|&p| self.node(p).right() == Some(n))
        else {
            debug_assert!(false, "rotate_left: node {:?} is not a right child", n);
            return;
        };
        trace!("rotate_left: {} over {}", self.node(n).key(), self.node(p).key());

        let inner = self.node(n).left();
        self.node_mut(p).set_right(inner);
        if let Some(inner) = inner {
            self.node_mut(inner).set_parent(Some(p));
        }

        let grandparent = self.parent_of(p);
        self.node_mut(n).set_parent(grandparent);
        self.replace_child(grandparent, p, n);

        self.node_mut(n).set_left(Some(p));
        self.node_mut(p).set_parent(Some(n));
    }

    /// Promote `n` over its parent, where `n` is the parent's left child.
    /// Mirror image of [`RBTree::rotate_left`].
    pub fn rotate_right(&mut self, n: NodeId) {
        let Some(p) = self
            .parent_of(n)
            .filter(|&p| self.node(p).left() == Some(n))
        else {
            debug_assert!(false, "rotate_right: node {:?} is not a left child", n);
            return;
        };
        trace!("rotate_right: {} over {}", self.node(n).key(), self.node(p).key());

        let inner = self.node(n).right();
        self.node_mut(p).set_left(inner);
        if let Some(inner) = inner {
            self.node_mut(inner).set_parent(Some(p));
        }

        let grandparent = self.parent_of(p);
        self.node_mut(n).set_parent(grandparent);
        self.replace_child(grandparent, p, n);

        self.node_mut(n).set_right(Some(p));
        self.node_mut(p).set_parent(Some(n));
    }

    /// Point whichever slot held `old` (a child slot of `parent`, or the
    /// root handle) at `new` instead.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: NodeId) {
        match parent {
            None => self.root = Some(new),
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left() == Some(old) {
                    parent.set_left(Some(new));
                } else {
                    parent.set_right(Some(new));
                }
            }
        }
    }

    /// Search for a key.
    ///
    /// Descends from the root: equal stops, smaller goes left, anything else
    /// goes right. A missing key is a normal `None`, not an error.
    ///
    /// # Example
    /// ```
    /// use rbstore::RBTree;
    /// let tree: RBTree = [10, 5, 15].into_iter().collect();
    /// assert!(tree.search(5).is_some());
    /// assert!(tree.search(99).is_none());
    /// ```
    pub fn search(&self, key: i64) -> Option<NodeId> {
        let mut current = self.root;

        while let Some(id) = current {
            let node = self.node(id);
            if key == node.key() {
                return Some(id);
            }
            current = if key < node.key() { node.left() } else { node.right() };
        }
        None
    }

    /// Convenience wrapper over [`RBTree::search`].
    pub fn contains(&self, key: i64) -> bool {
        self.search(key).is_some()
    }

    /// Number of nodes on the longest root-to-leaf path (0 when empty).
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.into_iter().map(|r| (r, 1)).collect();

        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.node(id);
            stack.extend(node.left().map(|l| (l, depth + 1)));
            stack.extend(node.right().map(|r| (r, depth + 1)));
        }
        deepest
    }

    /// Black nodes on the leftmost root-to-null path. Every path has the
    /// same count while the invariants hold.
    pub fn black_height(&self) -> usize {
        let mut count = 0;
        let mut current = self.root;
        while let Some(id) = current {
            let node = self.node(id);
            if node.is_black() {
                count += 1;
            }
            current = node.left();
        }
        count
    }

    /// All keys in sorted (in-order) order, duplicates included.
    pub fn keys(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut current = self.root;

        loop {
            while let Some(id) = current {
                stack.push(id);
                current = self.node(id).left();
            }
            let Some(id) = stack.pop() else {
                break;
            };
            out.push(self.node(id).key());
            current = self.node(id).right();
        }
        out
    }

    /// Text layout of the whole tree for debugging.
    ///
    /// Right subtree first, then the node, then the left subtree; one tab of
    /// indentation per level and each key prefixed with its color marker
    /// (`R` or `B`). An empty tree renders as `The tree is empty.`.
    ///
    /// # Example
    /// ```
    /// use rbstore::RBTree;
    /// let tree: RBTree = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.render(), "\tR:3\nB:2\n\tR:1\n");
    /// ```
    pub fn render(&self) -> String {
        let Some(root) = self.root else {
            return String::from("The tree is empty.\n");
        };
        let mut out = String::new();
        self.render_node(root, 0, &mut out);
        out
    }

    fn render_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = self.node(id);

        if let Some(right) = node.right() {
            self.render_node(right, depth + 1, out);
        }

        out.push_str(&"\t".repeat(depth));
        out.push_str(&format!("{}:{}\n", node.color().marker(), node.key()));

        if let Some(left) = node.left() {
            self.render_node(left, depth + 1, out);
        }
    }

    /// Tear the whole tree down, releasing every node.
    ///
    /// # Returns
    /// How many nodes were released.
    pub fn clear(&mut self) -> usize {
        let released = self.nodes.len();
        self.nodes.clear();
        self.root = None;
        debug!("tree cleared, {} nodes released", released);
        released
    }

    /// Check every structural and red-black invariant.
    ///
    /// - Keys respect their ancestors' bounds (left side `<=`, right side `>=`).
    /// - The root is black and no red node has a red child.
    /// - Both subtrees of every node have the same black height.
    /// - Every parent handle mirrors the child link that holds the node, and
    ///   every stored node is reachable exactly once.
    ///
    /// The left bound is inclusive because rotations can lift an equal key
    /// above an earlier duplicate.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let Some(root) = self.root else {
            return match self.nodes.len() {
                0 => Ok(()),
                stored => Err(InvariantViolation::Unreachable { reachable: 0, stored }),
            };
        };

        let root_node = self.node(root);
        if root_node.parent().is_some() {
            return Err(InvariantViolation::BrokenParentLink { key: root_node.key() });
        }
        if root_node.is_red() {
            return Err(InvariantViolation::RedRoot { key: root_node.key() });
        }

        let mut seen = vec![false; self.nodes.len()];
        self.check_subtree(root, None, None, &mut seen)?;

        let reachable = seen.iter().filter(|&&s| s).count();
        if reachable != self.nodes.len() {
            return Err(InvariantViolation::Unreachable {
                reachable,
                stored: self.nodes.len(),
            });
        }
        Ok(())
    }

    /// Validates the subtree at `id` and returns its black height.
    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<i64>,
        upper: Option<i64>,
        seen: &mut [bool],
    ) -> Result<usize, InvariantViolation> {
        let node = self.node(id);
        let key = node.key();

        if std::mem::replace(&mut seen[id.index()], true) {
            return Err(InvariantViolation::SharedChild { key });
        }
        if lower.is_some_and(|lo| key < lo) || upper.is_some_and(|hi| key > hi) {
            return Err(InvariantViolation::OutOfOrder { key, lower, upper });
        }

        let mut heights = [0usize; 2];
        for (slot, child) in [node.left(), node.right()].into_iter().enumerate() {
            let Some(child) = child else {
                continue;
            };
            let child_node = self.node(child);

            if child_node.parent() != Some(id) {
                return Err(InvariantViolation::BrokenParentLink { key: child_node.key() });
            }
            if node.is_red() && child_node.is_red() {
                return Err(InvariantViolation::RedRed {
                    parent: key,
                    child: child_node.key(),
                });
            }

            let (lo, hi) = if slot == 0 { (lower, Some(key)) } else { (Some(key), upper) };
            heights[slot] = self.check_subtree(child, lo, hi, seen)?;
        }

        if heights[0] != heights[1] {
            return Err(InvariantViolation::BlackHeight {
                key,
                left: heights[0],
                right: heights[1],
            });
        }
        Ok(heights[0] + usize::from(node.is_black()))
    }
}


impl Extend<i64> for RBTree {
    /// Inserts keys in the order the iterator yields them.
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}


impl FromIterator<i64> for RBTree {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}
