//! Frequency ranking of scan matches.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::index::Match;
use crate::vocabulary::Vocabulary;

/// Maximum number of ranked words a search returns.
pub const TOP_WORDS: usize = 10;

/// A ranked word with its occurrence count across both directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    /// The (case-folded) word.
    pub word: String,
    /// Occurrences across all positions and directions.
    pub count: u64,
}

/// Group matches by word, rank by descending count, and keep the top
/// [`TOP_WORDS`] entries.
///
/// Equal counts order by the word's first-seen rank in the vocabulary, so the
/// ranking never depends on the order concurrent tasks delivered their
/// matches.
pub fn rank_matches(matches: &[Match], vocabulary: &Vocabulary) -> Vec<WordCount> {
    let mut counts: AHashMap<&str, u64> = AHashMap::new();
    for m in matches {
        *counts.entry(m.word.as_str()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(usize, WordCount)> = counts
        .into_iter()
        .map(|(word, count)| {
            let rank = vocabulary.rank(word).unwrap_or(usize::MAX);
            (
                rank,
                WordCount {
                    word: word.to_string(),
                    count,
                },
            )
        })
        .collect();

    ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.0.cmp(&b.0)));
    ranked
        .into_iter()
        .take(TOP_WORDS)
        .map(|(_, word_count)| word_count)
        .collect()
}
