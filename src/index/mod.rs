//! Prefix indexes over the vocabulary.
//!
//! Two interchangeable implementations drive the scan: an uncompressed
//! character trie and a path-compressed radix tree. Both are built once per
//! search, never mutated afterwards, and shared read-only across the
//! concurrent direction tasks.

pub mod radix;
pub mod trie;

pub use radix::RadixIndex;
pub use trie::TrieIndex;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::Grid;
use crate::scan::direction::Direction;
use crate::scan::stats::RadixTreeStats;
use crate::vocabulary::Vocabulary;

/// Which prefix index drives a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    /// Uncompressed character trie, one edge per character.
    Trie,
    /// Path-compressed radix tree, edges labeled with strings.
    Radix,
}

/// One occurrence of a vocabulary word in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// The matched (case-folded) word.
    pub word: String,
    /// Start row of the match.
    pub row: usize,
    /// Start column of the match.
    pub col: usize,
    /// Direction the word was read in.
    pub direction: Direction,
}

/// Structural counters accumulated while walking an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalCounters {
    /// Nodes entered during traversal.
    pub nodes_traversed: u64,
    /// Characters consumed by fully matched edges.
    pub characters_matched: u64,
}

/// Common contract for the two prefix-index implementations.
pub trait PrefixIndex: Send + Sync {
    /// Which implementation this is.
    fn kind(&self) -> IndexKind;

    /// Insert one already-folded word. Idempotent per distinct word.
    fn insert(&mut self, word: &str) -> Result<()>;

    /// Number of distinct terminal words stored.
    fn word_count(&self) -> usize;

    /// Emit every vocabulary word that starts at `(row, col)` and reads in
    /// `direction`, appending to `matches` and updating `counters`.
    ///
    /// Has no failure mode; an exhausted walk simply emits nothing.
    fn search_from(
        &self,
        grid: &Grid,
        row: usize,
        col: usize,
        direction: Direction,
        matches: &mut Vec<Match>,
        counters: &mut TraversalCounters,
    );

    /// Tree-structure statistics; reported by the radix index only.
    fn tree_stats(&self) -> Option<RadixTreeStats> {
        None
    }
}

/// Build the chosen index over a deduplicated vocabulary.
pub fn build_index(kind: IndexKind, vocabulary: &Vocabulary) -> Result<Box<dyn PrefixIndex>> {
    let mut index: Box<dyn PrefixIndex> = match kind {
        IndexKind::Trie => Box::new(TrieIndex::new()),
        IndexKind::Radix => Box::new(RadixIndex::new()),
    };
    for word in vocabulary.iter() {
        index.insert(word)?;
    }
    Ok(index)
}
