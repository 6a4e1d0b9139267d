//! Per-direction scan statistics and timing helpers.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::index::TraversalCounters;
use crate::scan::direction::Direction;

/// Statistics emitted by one direction scan task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectionStats {
    /// Direction this task scanned.
    pub direction: Direction,

    /// Matches emitted by this task (occurrences, not distinct words).
    pub words_found: u64,

    /// Grid positions probed (every cell exactly once).
    pub positions_searched: u64,

    /// Wall-clock time for the full scan.
    pub elapsed: Duration,

    /// Pool worker the task ran on.
    pub worker_id: usize,

    /// Index traversal counters; reported by the radix index only.
    pub traversal: Option<TraversalCounters>,
}

impl DirectionStats {
    /// Matches emitted per second; 0 when the scan took no measurable time.
    pub fn words_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.words_found as f64 / secs
        } else {
            0.0
        }
    }

    /// Positions probed per second; 0 when the scan took no measurable time.
    pub fn positions_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.positions_searched as f64 / secs
        } else {
            0.0
        }
    }

    /// Mean radix nodes visited per position; 0 without traversal counters.
    pub fn avg_nodes_per_position(&self) -> f64 {
        match self.traversal {
            Some(t) if self.positions_searched > 0 => {
                t.nodes_traversed as f64 / self.positions_searched as f64
            }
            _ => 0.0,
        }
    }

    /// Characters matched per node traversed; the mean matched edge-label
    /// length. 0 without traversal counters.
    pub fn compression_efficiency(&self) -> f64 {
        match self.traversal {
            Some(t) if t.nodes_traversed > 0 => {
                t.characters_matched as f64 / t.nodes_traversed as f64
            }
            _ => 0.0,
        }
    }
}

/// Tree-structure statistics for the radix index.
///
/// `total_nodes` excludes the root, so every counted node carries a
/// non-empty edge label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RadixTreeStats {
    /// Nodes in the tree, root excluded.
    pub total_nodes: usize,

    /// Sum of all edge-label lengths.
    pub total_compressed_chars: usize,

    /// Deepest node, in edges from the root.
    pub max_depth: usize,
}

impl RadixTreeStats {
    /// Average edge-label length per node; ≥ 1.0 whenever the tree is
    /// non-empty.
    pub fn compression_ratio(&self) -> f64 {
        if self.total_nodes > 0 {
            self.total_compressed_chars as f64 / self.total_nodes as f64
        } else {
            0.0
        }
    }
}

/// Helper for timing operations.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Get elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and return elapsed time.
    pub fn stop(self) -> Duration {
        self.start.elapsed()
    }
}
