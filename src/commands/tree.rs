//! Game tree summary command
//!
//! Reports the shape of a merged guess tree and the most common openings.

use crate::game::GameTree;

/// Summary of a game tree
pub struct TreeSummary {
    pub node_count: usize,
    pub depth: usize,
    pub path_count: usize,
    /// First guesses with the number of distinct sequences starting there
    pub openings: Vec<(String, usize)>,
    /// Up to `limit` guess sequences in alphabetical order
    pub sample_paths: Vec<Vec<String>>,
}

/// Summarize `tree`, keeping at most `limit` openings and sample paths
#[must_use]
pub fn summarize_tree(tree: &GameTree, limit: usize) -> TreeSummary {
    let paths = tree.paths();

    let mut openings: Vec<(String, usize)> = tree
        .children()
        .map(|(guess, child)| (guess.to_string(), child.paths().len().max(1)))
        .collect();
    openings.sort_by(|(a_word, a_count), (b_word, b_count)| {
        b_count.cmp(a_count).then_with(|| a_word.cmp(b_word))
    });
    openings.truncate(limit);

    let sample_paths = paths
        .iter()
        .take(limit)
        .map(|path| path.iter().map(|guess| (*guess).to_string()).collect())
        .collect();

    TreeSummary {
        node_count: tree.node_count(),
        depth: tree.depth(),
        path_count: paths.len(),
        openings,
        sample_paths,
    }
}
