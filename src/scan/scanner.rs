//! Direction-parallel scanning over the grid.
//!
//! One task per direction runs on a rayon pool against the shared read-only
//! grid and index. Each task owns its accumulator and reports once over a
//! channel when its full scan is done; the channel join is the only
//! synchronization point.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{GridScanError, Result};
use crate::grid::Grid;
use crate::index::{IndexKind, Match, PrefixIndex, TraversalCounters};
use crate::scan::config::ScannerConfig;
use crate::scan::direction::Direction;
use crate::scan::stats::{DirectionStats, Timer};

/// Output of one direction task: its matches plus its stats record.
#[derive(Debug, Clone)]
pub struct DirectionScan {
    /// Matches accumulated by the task, in row-major probe order.
    pub matches: Vec<Match>,
    /// The task's stats record.
    pub stats: DirectionStats,
}

/// Drives an index across every grid cell, one parallel task per direction.
pub struct DirectionScanner {
    thread_pool: ThreadPool,
}

impl DirectionScanner {
    /// Create a scanner with its worker pool.
    pub fn new(config: &ScannerConfig) -> Result<Self> {
        let pool_size = config
            .thread_pool_size
            .unwrap_or_else(|| Direction::ALL.len().min(num_cpus::get()))
            .max(1);

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(pool_size)
            .thread_name(|i| format!("grid-scan-{i}"))
            .build()
            .map_err(|e| GridScanError::internal(format!("Failed to create thread pool: {e}")))?;

        Ok(Self { thread_pool })
    }

    /// Run one scan task per direction and collect their records.
    ///
    /// Both tasks complete or the call fails; there is no partial-result
    /// path.
    pub fn scan(&self, grid: &Grid, index: &dyn PrefixIndex) -> Result<Vec<DirectionScan>> {
        let (tx, rx) = crossbeam_channel::unbounded();

        self.thread_pool.scope(|scope| {
            for direction in Direction::ALL {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let scan = scan_direction(grid, index, direction);
                    let _ = tx.send(scan);
                });
            }
        });
        drop(tx);

        let mut scans = Vec::with_capacity(Direction::ALL.len());
        for _ in Direction::ALL {
            let scan = rx.recv().map_err(|_| {
                GridScanError::internal("A direction scan task finished without reporting")
            })?;
            scans.push(scan);
        }
        Ok(scans)
    }
}

/// Scan every grid cell in row-major order for one direction.
fn scan_direction(grid: &Grid, index: &dyn PrefixIndex, direction: Direction) -> DirectionScan {
    let timer = Timer::start();
    let mut matches = Vec::new();
    let mut counters = TraversalCounters::default();
    let mut positions = 0u64;

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            index.search_from(grid, row, col, direction, &mut matches, &mut counters);
            positions += 1;
        }
    }

    let traversal = (index.kind() == IndexKind::Radix).then_some(counters);
    DirectionScan {
        stats: DirectionStats {
            direction,
            words_found: matches.len() as u64,
            positions_searched: positions,
            elapsed: timer.stop(),
            worker_id: rayon::current_thread_index().unwrap_or(0),
            traversal,
        },
        matches,
    }
}
