//! Types for suffix array indexing
//!
//! This module defines the core types used for suffix array-based search,
//! which provides O(m log n) exact substring matching.

/// Byte position in the corpus text
pub type TextPosition = usize;

/// Suffix array entry - position in the (case-folded) text
pub type SuffixEntry = u32;

/// Largest text the suffix array can address with 32-bit entries
pub const MAX_TEXT_SIZE: usize = u32::MAX as usize;

/// Maximum number of bytes compared when sorting suffixes
///
/// Suffixes sharing a longer prefix keep an arbitrary relative order, so
/// lookups for longer patterns re-check candidates against the full text.
pub const MAX_COMPARE: usize = 256;

/// Configuration for suffix array building
#[derive(Debug, Clone)]
pub struct SuffixArrayConfig {
    /// Texts larger than this are sorted with rayon (bytes, default: 100KB)
    pub parallel_threshold: usize,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 100_000,
        }
    }
}

/// Suffix array search result with position information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixMatch {
    /// Index of the suffix within the suffix array
    pub rank: usize,
    /// Byte position of the match in the text
    pub position: TextPosition,
}
