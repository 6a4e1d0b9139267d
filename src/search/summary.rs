//! Aggregate statistics derived from per-direction scan records.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::scan::stats::DirectionStats;

/// Whole-search statistics derived from the per-direction records.
///
/// A pure projection: deriving a summary never mutates or re-times anything,
/// and every division is guarded against a zero denominator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchSummary {
    /// Matches across all directions (occurrences, not distinct words).
    pub total_words: u64,

    /// Positions probed across all directions.
    pub total_positions: u64,

    /// Slowest direction; the wall-clock bound for the parallel phase.
    pub bottleneck_time: Duration,

    /// Mean scan time across directions.
    pub mean_time: Duration,

    /// `mean × directions / bottleneck`; 1.0 means perfectly balanced work.
    pub parallel_efficiency: f64,

    /// Positions probed per second over the bottleneck window.
    pub aggregate_throughput: f64,

    /// Radix nodes entered across all directions; 0 for trie runs.
    pub total_nodes_traversed: u64,

    /// Characters consumed by matched radix edges; 0 for trie runs.
    pub total_characters_matched: u64,

    /// Radix nodes entered per second over the bottleneck window.
    pub node_traversal_rate: f64,
}

impl SearchSummary {
    /// Derive a summary from the per-direction records.
    pub fn from_direction_stats(stats: &[DirectionStats]) -> Self {
        if stats.is_empty() {
            return Self::default();
        }

        let total_words = stats.iter().map(|s| s.words_found).sum();
        let total_positions = stats.iter().map(|s| s.positions_searched).sum();
        let total_time: Duration = stats.iter().map(|s| s.elapsed).sum();
        let bottleneck_time = stats
            .iter()
            .map(|s| s.elapsed)
            .max()
            .unwrap_or(Duration::ZERO);
        let mean_time = total_time / stats.len() as u32;

        let bottleneck_secs = bottleneck_time.as_secs_f64();
        let parallel_efficiency = if bottleneck_secs > 0.0 {
            mean_time.as_secs_f64() * stats.len() as f64 / bottleneck_secs
        } else {
            0.0
        };
        let aggregate_throughput = if bottleneck_secs > 0.0 {
            total_positions as f64 / bottleneck_secs
        } else {
            0.0
        };

        let (total_nodes_traversed, total_characters_matched) = stats
            .iter()
            .filter_map(|s| s.traversal)
            .fold((0u64, 0u64), |(nodes, chars), t| {
                (nodes + t.nodes_traversed, chars + t.characters_matched)
            });
        let node_traversal_rate = if bottleneck_secs > 0.0 {
            total_nodes_traversed as f64 / bottleneck_secs
        } else {
            0.0
        };

        SearchSummary {
            total_words,
            total_positions,
            bottleneck_time,
            mean_time,
            parallel_efficiency,
            aggregate_throughput,
            total_nodes_traversed,
            total_characters_matched,
            node_traversal_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::TraversalCounters;
    use crate::scan::direction::Direction;

    fn stats(direction: Direction, words: u64, positions: u64, millis: u64) -> DirectionStats {
        DirectionStats {
            direction,
            words_found: words,
            positions_searched: positions,
            elapsed: Duration::from_millis(millis),
            worker_id: 0,
            traversal: None,
        }
    }

    #[test]
    fn test_summary_totals_and_times() {
        let records = vec![
            stats(Direction::Horizontal, 3, 9, 100),
            stats(Direction::Vertical, 1, 9, 300),
        ];

        let summary = SearchSummary::from_direction_stats(&records);
        assert_eq!(summary.total_words, 4);
        assert_eq!(summary.total_positions, 18);
        assert_eq!(summary.bottleneck_time, Duration::from_millis(300));
        assert_eq!(summary.mean_time, Duration::from_millis(200));
        // mean 200ms * 2 directions / bottleneck 300ms
        assert!((summary.parallel_efficiency - 4.0 / 3.0).abs() < 1e-9);
        assert!((summary.aggregate_throughput - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_aggregates_traversal() {
        let mut horizontal = stats(Direction::Horizontal, 0, 9, 100);
        horizontal.traversal = Some(TraversalCounters {
            nodes_traversed: 10,
            characters_matched: 25,
        });
        let mut vertical = stats(Direction::Vertical, 0, 9, 100);
        vertical.traversal = Some(TraversalCounters {
            nodes_traversed: 6,
            characters_matched: 15,
        });

        let summary = SearchSummary::from_direction_stats(&[horizontal, vertical]);
        assert_eq!(summary.total_nodes_traversed, 16);
        assert_eq!(summary.total_characters_matched, 40);
        assert!((summary.node_traversal_rate - 160.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_guards_zero_elapsed() {
        let records = vec![
            stats(Direction::Horizontal, 1, 9, 0),
            stats(Direction::Vertical, 1, 9, 0),
        ];

        let summary = SearchSummary::from_direction_stats(&records);
        assert_eq!(summary.parallel_efficiency, 0.0);
        assert_eq!(summary.aggregate_throughput, 0.0);
        assert_eq!(summary.node_traversal_rate, 0.0);
    }

    #[test]
    fn test_summary_of_nothing() {
        let summary = SearchSummary::from_direction_stats(&[]);
        assert_eq!(summary, SearchSummary::default());
    }
}
