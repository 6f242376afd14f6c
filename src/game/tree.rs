//! Prefix tree of played guess sequences
//!
//! Each level maps a guessed word to the tree of guesses that followed it.
//! Persisted as nested JSON objects with `{}` at the leaves.

use super::persist::{StoreError, read_json, write_json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Merged guess sequences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameTree {
    children: BTreeMap<String, GameTree>,
}

impl GameTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-path tree for one game's guesses
    ///
    /// # Examples
    /// ```
    /// use wordle_sim::game::GameTree;
    ///
    /// let tree = GameTree::chain(["crane", "slate"]);
    /// assert_eq!(tree.paths(), vec![vec!["crane", "slate"]]);
    /// ```
    #[must_use]
    pub fn chain<I, S>(guesses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::new();
        tree.insert_path(guesses);
        tree
    }

    /// Add one guess sequence, sharing any existing prefix
    pub fn insert_path<I, S>(&mut self, guesses: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut node = self;
        for guess in guesses {
            node = node.children.entry(guess.into()).or_default();
        }
    }

    /// Merge `other` into this tree
    ///
    /// Keys present at the same depth in both trees merge their sub-trees;
    /// keys only in `other` are added. Walks `other` with an explicit stack.
    pub fn absorb(&mut self, other: Self) {
        let mut stack: Vec<(Vec<String>, Self)> = vec![(Vec::new(), other)];

        while let Some((prefix, node)) = stack.pop() {
            if node.children.is_empty() {
                self.insert_path(prefix);
                continue;
            }
            for (guess, child) in node.children {
                let mut path = prefix.clone();
                path.push(guess);
                stack.push((path, child));
            }
        }
    }

    /// Pure merge: a new tree holding both inputs
    #[must_use]
    pub fn merged(&self, other: &Self) -> Self {
        let mut tree = self.clone();
        tree.absorb(other.clone());
        tree
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Sub-tree following `guess` at this level
    #[must_use]
    pub fn get(&self, guess: &str) -> Option<&Self> {
        self.children.get(guess)
    }

    /// Guesses at this level with their sub-trees, alphabetically
    pub fn children(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.children
            .iter()
            .map(|(guess, child)| (guess.as_str(), child))
    }

    /// Every root-to-leaf guess sequence, in alphabetical order
    #[must_use]
    pub fn paths(&self) -> Vec<Vec<&str>> {
        let mut paths = Vec::new();
        let mut stack: Vec<(Vec<&str>, &Self)> = vec![(Vec::new(), self)];

        while let Some((prefix, node)) = stack.pop() {
            if node.children.is_empty() {
                if !prefix.is_empty() {
                    paths.push(prefix);
                }
                continue;
            }
            for (guess, child) in node.children.iter().rev() {
                let mut path = prefix.clone();
                path.push(guess.as_str());
                stack.push((path, child));
            }
        }

        paths
    }

    /// Number of guess nodes below the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.values());
        }
        count
    }

    /// Length of the longest guess sequence
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(0, self)];
        while let Some((depth, node)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.children.values().map(|child| (depth + 1, child)));
        }
        deepest
    }

    /// Load from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        read_json(path.as_ref())
    }

    /// Save to a JSON file, replacing it
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        write_json(path.as_ref(), self)
    }
}
