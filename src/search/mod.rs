//! Search entry point, result aggregation, and summary statistics.

pub mod aggregate;
pub mod engine;
pub mod summary;

pub use aggregate::{TOP_WORDS, WordCount, rank_matches};
pub use engine::WordSearchEngine;
pub use summary::SearchSummary;
