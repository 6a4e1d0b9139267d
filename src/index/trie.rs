//! Uncompressed character trie.
//!
//! Nodes live in an arena indexed by position; children are small tables
//! sorted by edge character, so a walk is binary searches over contiguous
//! memory instead of pointer chasing.

use crate::error::Result;
use crate::grid::Grid;
use crate::index::{IndexKind, Match, PrefixIndex, TraversalCounters};
use crate::scan::direction::Direction;

const ROOT: usize = 0;

#[derive(Debug, Default)]
struct TrieNode {
    /// Child table sorted by edge character.
    children: Vec<(char, usize)>,
    /// Set when a vocabulary word ends at this node.
    word: Option<String>,
}

impl TrieNode {
    fn child(&self, ch: char) -> Option<usize> {
        self.children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// One-edge-per-character prefix tree over the vocabulary.
#[derive(Debug)]
pub struct TrieIndex {
    nodes: Vec<TrieNode>,
    words: usize,
}

impl TrieIndex {
    /// Create an empty trie.
    pub fn new() -> Self {
        TrieIndex {
            nodes: vec![TrieNode::default()],
            words: 0,
        }
    }

    /// Number of nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    fn child_or_insert(&mut self, node: usize, ch: char) -> usize {
        match self.nodes[node]
            .children
            .binary_search_by_key(&ch, |&(c, _)| c)
        {
            Ok(i) => self.nodes[node].children[i].1,
            Err(i) => {
                let id = self.nodes.len();
                self.nodes.push(TrieNode::default());
                self.nodes[node].children.insert(i, (ch, id));
                id
            }
        }
    }

    #[cfg(test)]
    fn collect_words(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .nodes
            .iter()
            .filter_map(|node| node.word.clone())
            .collect();
        words.sort();
        words
    }
}

impl Default for TrieIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixIndex for TrieIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Trie
    }

    fn insert(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Ok(());
        }
        let mut node = ROOT;
        for ch in word.chars() {
            node = self.child_or_insert(node, ch);
        }
        if self.nodes[node].word.is_none() {
            self.nodes[node].word = Some(word.to_string());
            self.words += 1;
        }
        Ok(())
    }

    fn word_count(&self) -> usize {
        self.words
    }

    fn search_from(
        &self,
        grid: &Grid,
        row: usize,
        col: usize,
        direction: Direction,
        matches: &mut Vec<Match>,
        counters: &mut TraversalCounters,
    ) {
        let (dr, dc) = direction.delta();
        let (mut r, mut c) = (row, col);
        let mut node = ROOT;
        while let Some(ch) = grid.cell(r, c) {
            // Missing child: no word below this prefix can match.
            let Some(next) = self.nodes[node].child(ch) else {
                return;
            };
            node = next;
            counters.nodes_traversed += 1;
            counters.characters_matched += 1;
            if let Some(word) = &self.nodes[node].word {
                matches.push(Match {
                    word: word.clone(),
                    row,
                    col,
                    direction,
                });
            }
            r += dr;
            c += dc;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(words: &[&str]) -> TrieIndex {
        let mut trie = TrieIndex::new();
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    #[test]
    fn test_insert_and_count() {
        let trie = build(&["cat", "car", "dog"]);
        assert_eq!(trie.word_count(), 3);
        // c-a-{t,r} shares the "ca" path: c, a, t, r, d, o, g
        assert_eq!(trie.node_count(), 7);
        assert_eq!(trie.collect_words(), vec!["car", "cat", "dog"]);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut trie = build(&["cat"]);
        trie.insert("cat").unwrap();
        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.node_count(), 3);
    }

    #[test]
    fn test_search_emits_nested_prefix_words() {
        let trie = build(&["car", "cart"]);
        let grid = Grid::new(&["carts"]).unwrap();

        let mut matches = Vec::new();
        let mut counters = TraversalCounters::default();
        trie.search_from(
            &grid,
            0,
            0,
            Direction::Horizontal,
            &mut matches,
            &mut counters,
        );

        let words: Vec<&str> = matches.iter().map(|m| m.word.as_str()).collect();
        assert_eq!(words, vec!["car", "cart"]);
        assert!(matches.iter().all(|m| m.row == 0 && m.col == 0));
    }

    #[test]
    fn test_search_prunes_on_missing_child() {
        let trie = build(&["dog"]);
        let grid = Grid::new(&["dig"]).unwrap();

        let mut matches = Vec::new();
        let mut counters = TraversalCounters::default();
        trie.search_from(
            &grid,
            0,
            0,
            Direction::Horizontal,
            &mut matches,
            &mut counters,
        );

        assert!(matches.is_empty());
        // Only the "d" edge was walked before the walk pruned.
        assert_eq!(counters.nodes_traversed, 1);
    }

    #[test]
    fn test_search_vertical() {
        let trie = build(&["cdo"]);
        let grid = Grid::new(&["cat", "dog", "owl"]).unwrap();

        let mut matches = Vec::new();
        let mut counters = TraversalCounters::default();
        trie.search_from(
            &grid,
            0,
            0,
            Direction::Vertical,
            &mut matches,
            &mut counters,
        );

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "cdo");
        assert_eq!(matches[0].direction, Direction::Vertical);
    }

    #[test]
    fn test_search_stops_at_boundary() {
        let trie = build(&["cata"]);
        let grid = Grid::new(&["cat"]).unwrap();

        let mut matches = Vec::new();
        let mut counters = TraversalCounters::default();
        trie.search_from(
            &grid,
            0,
            0,
            Direction::Horizontal,
            &mut matches,
            &mut counters,
        );

        assert!(matches.is_empty());
        assert_eq!(counters.nodes_traversed, 3);
    }
}
