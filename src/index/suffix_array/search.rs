//! Suffix array lookup
//!
//! Binary searches the sorted suffixes for the contiguous range that starts
//! with a pattern. All suffixes sharing a prefix sit next to each other, so
//! enumerating k matches costs O(m log n + k).

use super::builder::SuffixArray;
use super::types::*;
use crate::utils::fold_case;
use std::ops::Range;

impl SuffixArray {
    /// Fold a pattern the same way the indexed text was folded
    pub fn normalize(&self, pattern: &str) -> Vec<u8> {
        fold_case(pattern)
    }

    /// Get text starting at a position
    #[inline]
    fn text_at(&self, pos: SuffixEntry) -> &[u8] {
        &self.text[pos as usize..]
    }

    /// Search for an already-normalized pattern
    ///
    /// Returns the range [lo, hi) of indices in the suffix array whose
    /// suffixes start with the first [`MAX_COMPARE`] bytes of the pattern.
    pub fn range(&self, pattern: &[u8]) -> Range<usize> {
        if pattern.is_empty() || self.suffix_array.is_empty() {
            return 0..0;
        }

        let key = &pattern[..pattern.len().min(MAX_COMPARE)];
        let lo = self.lower_bound(key);
        let hi = self.upper_bound(key, lo);
        lo..hi
    }

    /// Find first index where suffix starts with key (or would if inserted)
    fn lower_bound(&self, key: &[u8]) -> usize {
        self.suffix_array.partition_point(|&pos| {
            let suffix = self.text_at(pos);
            let cmp_len = key.len().min(suffix.len());
            &suffix[..cmp_len] < key
        })
    }

    /// Find first index at or after `start` whose suffix does NOT start with key
    fn upper_bound(&self, key: &[u8], start: usize) -> usize {
        start
            + self.suffix_array[start..]
                .partition_point(|&pos| self.text_at(pos).starts_with(key))
    }

    /// Search for a pattern and return every match in suffix order
    pub fn matches(&self, pattern: &str) -> Vec<SuffixMatch> {
        let pattern = self.normalize(pattern);
        let range = self.range(&pattern);
        let long_pattern = pattern.len() > MAX_COMPARE;

        range
            .filter_map(|rank| {
                let pos = self.suffix_array[rank];
                // Sorting only looked at MAX_COMPARE bytes; verify the tail.
                if long_pattern && !self.text_at(pos).starts_with(&pattern) {
                    return None;
                }
                Some(SuffixMatch {
                    rank,
                    position: pos as TextPosition,
                })
            })
            .collect()
    }

    /// Search for a pattern and return match positions in ascending order
    pub fn positions(&self, pattern: &str) -> Vec<TextPosition> {
        let mut positions: Vec<TextPosition> =
            self.matches(pattern).into_iter().map(|m| m.position).collect();
        positions.sort_unstable();
        positions
    }

    /// Get the number of matches for a pattern
    pub fn count_matches(&self, pattern: &str) -> usize {
        let normalized = self.normalize(pattern);
        if normalized.len() > MAX_COMPARE {
            self.matches(pattern).len()
        } else {
            self.range(&normalized).len()
        }
    }

    /// Check if pattern exists in the suffix array
    pub fn contains(&self, pattern: &str) -> bool {
        self.count_matches(pattern) > 0
    }
}
