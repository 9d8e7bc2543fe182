//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays
//! built over the case-folded corpus.
//!
//! ## Architecture
//!
//! - `builder`: Folds the corpus and sorts its suffixes
//! - `search`: Binary search for the suffix range matching a pattern
//! - `types`: Core type definitions

pub mod builder;
pub mod search;
pub mod types;

// Re-exports for convenience
pub use builder::{SuffixArray, SuffixArrayBuilder};
pub use types::{SuffixArrayConfig, SuffixMatch, TextPosition};
