//! Word-grid search engine.
//!
//! The crate's entry point: a grid validated at construction, a `find` call
//! that builds the chosen index over a word stream and runs both direction
//! scans, and read-only stats accessors reflecting the most recent call.

use crate::error::Result;
use crate::grid::Grid;
use crate::index::{self, IndexKind, Match};
use crate::scan::config::ScannerConfig;
use crate::scan::scanner::DirectionScanner;
use crate::scan::stats::{DirectionStats, RadixTreeStats};
use crate::search::aggregate::{self, WordCount};
use crate::search::summary::SearchSummary;
use crate::vocabulary::Vocabulary;

/// Searches a fixed grid for vocabulary words with the chosen prefix index.
///
/// The grid and index are immutable during scanning; each `find` builds a
/// fresh index, so nothing persists across calls except the stats snapshots.
pub struct WordSearchEngine {
    grid: Grid,
    kind: IndexKind,
    config: ScannerConfig,
    direction_stats: Vec<DirectionStats>,
    tree_stats: Option<RadixTreeStats>,
}

impl WordSearchEngine {
    /// Create an engine over the given grid rows.
    ///
    /// Fails with `InvalidInput` on an empty, ragged, or oversized grid.
    pub fn new<S: AsRef<str>>(kind: IndexKind, rows: &[S]) -> Result<Self> {
        Ok(WordSearchEngine {
            grid: Grid::new(rows)?,
            kind,
            config: ScannerConfig::default(),
            direction_stats: Vec::new(),
            tree_stats: None,
        })
    }

    /// Override the scanner configuration.
    pub fn with_config(mut self, config: ScannerConfig) -> Self {
        self.config = config;
        self
    }

    /// The grid being searched.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Which index kind drives this engine.
    pub fn kind(&self) -> IndexKind {
        self.kind
    }

    /// Search the grid for the given word stream.
    ///
    /// The stream is case-folded, blank entries are discarded, and duplicates
    /// collapse into their first occurrence before the index is built. An
    /// empty stream yields an empty result, not an error. Returns at most
    /// [`aggregate::TOP_WORDS`] distinct words ordered by descending
    /// occurrence count, ties by first-seen order.
    pub fn find<I, S>(&mut self, words: I) -> Result<Vec<WordCount>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vocabulary = Vocabulary::from_words(words);
        let index = index::build_index(self.kind, &vocabulary)?;
        let scanner = DirectionScanner::new(&self.config)?;
        let scans = scanner.scan(&self.grid, index.as_ref())?;

        let mut matches: Vec<Match> = Vec::new();
        let mut direction_stats = Vec::with_capacity(scans.len());
        for scan in scans {
            matches.extend(scan.matches);
            direction_stats.push(scan.stats);
        }

        self.direction_stats = direction_stats;
        self.tree_stats = index.tree_stats();
        Ok(aggregate::rank_matches(&matches, &vocabulary))
    }

    /// Per-direction stats from the most recent `find`; empty before any
    /// call.
    pub fn direction_stats(&self) -> &[DirectionStats] {
        &self.direction_stats
    }

    /// Radix tree-structure stats from the most recent `find`; `None` for
    /// trie engines and before any call.
    pub fn tree_stats(&self) -> Option<&RadixTreeStats> {
        self.tree_stats.as_ref()
    }

    /// Aggregate summary over the most recent `find`.
    pub fn summary(&self) -> SearchSummary {
        SearchSummary::from_direction_stats(&self.direction_stats)
    }
}
