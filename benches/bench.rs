//! Criterion benchmarks for the gridscan search core.
//!
//! Covers the major components:
//! - Trie and radix index construction
//! - Per-position index walks
//! - Full direction-parallel searches

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use gridscan::grid::Grid;
use gridscan::index::{IndexKind, PrefixIndex, RadixIndex, TraversalCounters, TrieIndex, build_index};
use gridscan::scan::direction::Direction;
use gridscan::search::WordSearchEngine;
use gridscan::vocabulary::Vocabulary;

/// Generate a vocabulary with heavy prefix sharing.
fn generate_vocabulary(count: usize) -> Vec<String> {
    let stems = [
        "comp", "compute", "computer", "computing", "search", "sear", "grid", "grind", "word",
        "wor", "work", "index", "indexed", "radix", "trie", "tree", "scan", "scanner",
    ];
    let suffixes = ["", "s", "er", "ing", "ed", "ern", "ion"];

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let stem = stems[i % stems.len()];
        let suffix = suffixes[(i / stems.len()) % suffixes.len()];
        words.push(format!("{stem}{suffix}"));
    }
    words
}

/// Deterministic 64×64 letter soup.
fn generate_rows() -> Vec<String> {
    let alphabet: Vec<char> = "compsearchgridwon".chars().collect();
    (0..64)
        .map(|r| {
            (0..64)
                .map(|c| alphabet[(r * 11 + c * 5 + (r * c) % 7) % alphabet.len()])
                .collect()
        })
        .collect()
}

fn bench_index_build(c: &mut Criterion) {
    let words = generate_vocabulary(500);
    let vocabulary = Vocabulary::from_words(&words);

    let mut group = c.benchmark_group("index_build");
    group.throughput(Throughput::Elements(vocabulary.len() as u64));

    group.bench_function("trie", |b| {
        b.iter(|| {
            let mut trie = TrieIndex::new();
            for word in vocabulary.iter() {
                trie.insert(black_box(word)).unwrap();
            }
            black_box(trie.node_count())
        })
    });

    group.bench_function("radix", |b| {
        b.iter(|| {
            let mut radix = RadixIndex::new();
            for word in vocabulary.iter() {
                radix.insert(black_box(word)).unwrap();
            }
            black_box(radix.node_count())
        })
    });

    group.finish();
}

fn bench_position_walk(c: &mut Criterion) {
    let rows = generate_rows();
    let grid = Grid::new(&rows).unwrap();
    let vocabulary = Vocabulary::from_words(generate_vocabulary(500));

    let trie = build_index(IndexKind::Trie, &vocabulary).unwrap();
    let radix = build_index(IndexKind::Radix, &vocabulary).unwrap();

    let mut group = c.benchmark_group("position_walk");
    group.throughput(Throughput::Elements((grid.rows() * grid.cols()) as u64));

    for (name, index) in [("trie", &trie), ("radix", &radix)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut matches = Vec::new();
                let mut counters = TraversalCounters::default();
                for row in 0..grid.rows() {
                    for col in 0..grid.cols() {
                        index.search_from(
                            &grid,
                            row,
                            col,
                            Direction::Horizontal,
                            &mut matches,
                            &mut counters,
                        );
                    }
                }
                black_box(matches.len())
            })
        });
    }

    group.finish();
}

fn bench_full_search(c: &mut Criterion) {
    let rows = generate_rows();
    let words = generate_vocabulary(500);

    let mut group = c.benchmark_group("full_search");
    group.throughput(Throughput::Elements((64 * 64 * 2) as u64));

    for kind in [IndexKind::Trie, IndexKind::Radix] {
        let name = match kind {
            IndexKind::Trie => "trie",
            IndexKind::Radix => "radix",
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut engine = WordSearchEngine::new(kind, &rows).unwrap();
                let results = engine.find(&words).unwrap();
                black_box(results.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_index_build, bench_position_walk, bench_full_search);
criterion_main!(benches);
