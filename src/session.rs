// =====================================================================
// File: session.rs
// Author: Bob Jack
// Course: CSCE 5350: Fundamentals of Database Systems
// Final Project - Index Rework
// Date: Oct 19, 2026
//
// Description:
// Defines the `Session` struct, which represents a running store
// context containing the red-black tree and any two-step command that
// is waiting for its follow-up line.
//
// Responsibilities:
// - Own the tree for the lifetime of one REPL run.
// - Remember when `SEARCH` or `FILE` was entered without an argument,
//   so the next input line is read as that argument.
// - Tear the tree down explicitly when the run ends.
// =====================================================================

use crate::RBTree;
use log::debug;


/// Follow-up input a two-step command is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// `SEARCH` was entered alone; next line is the key.
    SearchKey,
    /// `FILE` was entered alone; next line is the path.
    FileName,
}


impl Prompt {
    /// Text shown to the user while waiting.
    pub fn message(self) -> &'static str {
        match self {
            Prompt::SearchKey => "Enter a number to search for: ",
            Prompt::FileName => "Enter the file name: ",
        }
    }
}


/// Represents a single in-memory store session.
#[derive(Debug, Default)]
pub struct Session {
    /// The ordered key index.
    pub tree: RBTree,

    /// Pending two-step command (`None` when a fresh command is expected).
    pub pending: Option<Prompt>,
}


impl Session {
    /// Creates a new, empty session.
    ///
    /// # Example
    /// ```
    /// use rbstore::Session;
    /// let session = Session::new();
    /// assert!(session.tree.is_empty());
    /// assert!(session.pending.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            tree: RBTree::new(),
            pending: None,
        }
    }

    /// Wraps an already populated tree (e.g. preloaded from files).
    pub fn with_tree(tree: RBTree) -> Self {
        Self { tree, pending: None }
    }

    /// Returns `true` if the next line answers a prompt.
    pub fn is_waiting(&self) -> bool {
        self.pending.is_some()
    }

    /// Clears any pending prompt and releases the whole tree.
    pub fn teardown(&mut self) -> usize {
        self.pending = None;
        let released = self.tree.clear();
        debug!("session teardown released {} nodes", released);
        released
    }
}


// =====================================================================
// Unit Tests for Session
// =====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_initial_state() {
        let session = Session::new();
        assert!(session.tree.is_empty());
        assert!(!session.is_waiting());
    }

    #[test]
    fn test_with_tree_keeps_keys() {
        let session = Session::with_tree([3, 1, 2].into_iter().collect());
        assert_eq!(session.tree.keys(), vec![1, 2, 3]);
    }

    #[test]
    fn test_teardown_releases_tree_and_prompt() {
        let mut session = Session::new();
        session.tree.extend([5, 6, 7]);
        session.pending = Some(Prompt::FileName);

        assert_eq!(session.teardown(), 3);
        assert!(session.tree.is_empty());
        assert!(!session.is_waiting());
    }

    #[test]
    fn test_prompt_messages() {
        assert!(Prompt::SearchKey.message().contains("search"));
        assert!(Prompt::FileName.message().contains("file name"));
    }
}
