//! Path-compressed radix tree built by incremental edge splitting.
//!
//! Edges carry multi-character labels; inserting a word either attaches a new
//! leaf, consumes a whole edge, or splits an edge at the shared prefix. Nodes
//! live in an arena indexed by position, with child tables sorted by the
//! first character of each child's label. No two children of a node ever
//! share a first character.

use crate::error::{GridScanError, Result};
use crate::grid::Grid;
use crate::index::{IndexKind, Match, PrefixIndex, TraversalCounters};
use crate::scan::direction::Direction;
use crate::scan::stats::RadixTreeStats;

const ROOT: usize = 0;

#[derive(Debug)]
struct RadixNode {
    /// Compressed path segment from the parent; empty only at the root.
    label: Vec<char>,
    /// Child table sorted by the first character of each child's label.
    children: Vec<(char, usize)>,
    /// Set when a vocabulary word ends at this node.
    word: Option<String>,
    /// Times the word was inserted.
    occurrences: u64,
    /// Edges traversed from the root.
    depth: usize,
}

/// Path-compressed prefix tree over the vocabulary.
#[derive(Debug)]
pub struct RadixIndex {
    nodes: Vec<RadixNode>,
    words: usize,
    total_compressed_chars: usize,
    max_depth: usize,
}

impl RadixIndex {
    /// Create an empty radix tree.
    pub fn new() -> Self {
        RadixIndex {
            nodes: vec![RadixNode {
                label: Vec::new(),
                children: Vec::new(),
                word: None,
                occurrences: 0,
                depth: 0,
            }],
            words: 0,
            total_compressed_chars: 0,
            max_depth: 0,
        }
    }

    /// Number of nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Tree-structure statistics accumulated during insertion.
    pub fn stats(&self) -> RadixTreeStats {
        RadixTreeStats {
            total_nodes: self.node_count(),
            total_compressed_chars: self.total_compressed_chars,
            max_depth: self.max_depth,
        }
    }

    /// Times a word was inserted; 0 when absent.
    pub fn occurrences(&self, word: &str) -> u64 {
        let chars: Vec<char> = word.chars().collect();
        let mut node = ROOT;
        let mut pos = 0;
        while pos < chars.len() {
            let Some(child) = self.child(node, chars[pos]) else {
                return 0;
            };
            let label = &self.nodes[child].label;
            let end = pos + label.len();
            if end > chars.len() || chars[pos..end] != label[..] {
                return 0;
            }
            pos = end;
            node = child;
        }
        if node != ROOT && self.nodes[node].word.is_some() {
            self.nodes[node].occurrences
        } else {
            0
        }
    }

    fn child(&self, node: usize, ch: char) -> Option<usize> {
        self.nodes[node]
            .children
            .binary_search_by_key(&ch, |&(c, _)| c)
            .ok()
            .map(|i| self.nodes[node].children[i].1)
    }

    fn push_node(&mut self, label: Vec<char>, depth: usize) -> usize {
        self.total_compressed_chars += label.len();
        self.max_depth = self.max_depth.max(depth);
        let id = self.nodes.len();
        self.nodes.push(RadixNode {
            label,
            children: Vec::new(),
            word: None,
            occurrences: 0,
            depth,
        });
        id
    }

    fn attach(&mut self, parent: usize, lead: char, id: usize) -> Result<()> {
        match self.nodes[parent]
            .children
            .binary_search_by_key(&lead, |&(c, _)| c)
        {
            Ok(_) => Err(GridScanError::internal(format!(
                "two children of radix node {parent} share the first character {lead:?}"
            ))),
            Err(i) => {
                self.nodes[parent].children.insert(i, (lead, id));
                Ok(())
            }
        }
    }

    fn new_leaf(&mut self, parent: usize, suffix: &[char], word: &str) -> Result<usize> {
        let depth = self.nodes[parent].depth + 1;
        let id = self.push_node(suffix.to_vec(), depth);
        self.attach(parent, suffix[0], id)?;
        self.nodes[id].word = Some(word.to_string());
        self.nodes[id].occurrences = 1;
        self.words += 1;
        Ok(id)
    }

    fn mark_terminal(&mut self, node: usize, word: &str) {
        if self.nodes[node].word.is_some() {
            self.nodes[node].occurrences += 1;
        } else {
            self.nodes[node].word = Some(word.to_string());
            self.nodes[node].occurrences = 1;
            self.words += 1;
        }
    }

    /// Split the edge into `child` at `shared` characters: an intermediate
    /// node takes the shared prefix, the old child keeps the unmatched suffix
    /// and moves one edge deeper together with its whole subtree.
    fn split_edge(&mut self, parent: usize, child: usize, shared: usize) -> Result<usize> {
        let prefix: Vec<char> = self.nodes[child].label[..shared].to_vec();
        let suffix: Vec<char> = self.nodes[child].label[shared..].to_vec();
        let lead = prefix[0];
        let suffix_lead = suffix[0];

        let depth = self.nodes[child].depth;
        let mid = self.push_node(prefix, depth);

        let slot = self.nodes[parent]
            .children
            .binary_search_by_key(&lead, |&(c, _)| c)
            .map_err(|_| {
                GridScanError::internal(format!(
                    "radix node {parent} lost its edge for {lead:?} during a split"
                ))
            })?;
        self.nodes[parent].children[slot].1 = mid;

        self.nodes[child].label = suffix;
        self.total_compressed_chars -= shared;
        self.attach(mid, suffix_lead, child)?;
        self.bump_depths(child);
        Ok(mid)
    }

    fn bump_depths(&mut self, node: usize) {
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            self.nodes[id].depth += 1;
            self.max_depth = self.max_depth.max(self.nodes[id].depth);
            let kids: Vec<usize> = self.nodes[id].children.iter().map(|&(_, c)| c).collect();
            stack.extend(kids);
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

impl Default for RadixIndex {
    fn default() -> Self {
        Self::new()
    }
}

fn shared_prefix_len(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

impl PrefixIndex for RadixIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::Radix
    }

    fn insert(&mut self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Ok(());
        }
        let chars: Vec<char> = word.chars().collect();
        let mut node = ROOT;
        let mut pos = 0;
        while pos < chars.len() {
            let lead = chars[pos];
            let Some(child) = self.child(node, lead) else {
                // No edge starts with this character: attach the remainder as
                // a new leaf.
                self.new_leaf(node, &chars[pos..], word)?;
                return Ok(());
            };

            let shared = shared_prefix_len(&self.nodes[child].label, &chars[pos..]);
            if shared == 0 {
                // The child was selected by its first character, so a zero
                // shared prefix means the tree is corrupt.
                return Err(GridScanError::internal(format!(
                    "radix insert of {word:?} matched an edge with an empty shared prefix"
                )));
            }

            if shared == self.nodes[child].label.len() {
                // Full edge match: consume it and descend.
                pos += shared;
                node = child;
                continue;
            }

            // Partial match: split the edge at the shared prefix.
            let mid = self.split_edge(node, child, shared)?;
            pos += shared;
            if pos == chars.len() {
                self.mark_terminal(mid, word);
            } else {
                self.new_leaf(mid, &chars[pos..], word)?;
            }
            return Ok(());
        }
        // The word landed exactly on an existing node.
        self.mark_terminal(node, word);
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
        // Materialize the run once, then match whole edge labels against it.
        let run = grid.run_from(row, col, direction);
        let mut node = ROOT;
        let mut pos = 0;
        while let Some(&lead) = run.get(pos) {
            let Some(child) = self.child(node, lead) else {
                return;
            };
            counters.nodes_traversed += 1;
            let label = &self.nodes[child].label;
            let end = pos + label.len();
            if end > run.len() || run[pos..end] != label[..] {
                return;
            }
            counters.characters_matched += label.len() as u64;
            pos = end;
            node = child;
            if let Some(word) = &self.nodes[child].word {
                matches.push(Match {
                    word: word.clone(),
                    row,
                    col,
                    direction,
                });
            }
        }
    }

    fn tree_stats(&self) -> Option<RadixTreeStats> {
        Some(self.stats())
    }
}
