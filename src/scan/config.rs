//! Configuration for the direction scanner.

use serde::{Deserialize, Serialize};

/// Scanner configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Worker threads for the scan pool. `None` sizes the pool to one thread
    /// per direction, capped by the number of CPUs.
    pub thread_pool_size: Option<usize>,
}

impl ScannerConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the thread-pool size.
    pub fn with_thread_pool_size(mut self, size: usize) -> Self {
        self.thread_pool_size = Some(size);
        self
    }
}
