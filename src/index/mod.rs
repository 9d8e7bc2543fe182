//! Corpus index
//!
//! Owns the immutable corpus text and a suffix array over its case-folded
//! view. Built once, then shared read-only between any number of queries.

pub mod build;
pub mod stats;
pub mod suffix_array;

use std::time::{Duration, Instant};

use suffix_array::{SuffixArray, SuffixArrayBuilder, TextPosition};

pub use build::build_index;
pub use stats::IndexStats;

/// Case-insensitive substring index over a single corpus
pub struct CorpusIndex {
    /// Original corpus, returned to callers through excerpts
    text: String,
    /// Suffix array over the case-folded text (same byte length as `text`)
    suffix_array: SuffixArray,
    build_time: Duration,
}

impl CorpusIndex {
    /// Build the index over `text`
    ///
    /// An empty corpus is valid; every lookup against it is empty.
    pub fn build(text: impl Into<String>) -> Self {
        let text = text.into();
        let start = Instant::now();
        let suffix_array = SuffixArrayBuilder::with_defaults().build(&text);

        Self {
            text,
            suffix_array,
            build_time: start.elapsed(),
        }
    }

    /// Every offset where `query` occurs case-insensitively, ascending
    ///
    /// Overlapping occurrences are all reported. An empty query matches
    /// nothing.
    pub fn lookup(&self, query: &str) -> Vec<TextPosition> {
        self.suffix_array.positions(query)
    }

    /// Number of occurrences of `query`
    pub fn count(&self, query: &str) -> usize {
        self.suffix_array.count_matches(query)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.suffix_array.contains(query)
    }

    /// The original (not case-folded) corpus
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get statistics about this index
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            corpus_bytes: self.text.len(),
            suffix_count: self.suffix_array.suffix_array.len(),
            line_count: self.text.lines().count(),
            build_time: self.build_time,
        }
    }
}
