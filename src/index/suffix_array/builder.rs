//! Suffix array builder
//!
//! Builds a suffix array over a single corpus by:
//! 1. Case-folding the text without changing its byte length
//! 2. Building a sorted suffix array using parallel sort
//!
//! The resulting suffix array enables O(m log n) substring search.

use super::types::*;
use crate::utils::fold_case;
use rayon::prelude::*;

/// Builder for constructing a suffix array from corpus text
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self { config }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Build the suffix array for `text`
    ///
    /// This is the main computation - sorts all suffixes, in parallel for
    /// large inputs. Texts beyond [`MAX_TEXT_SIZE`] are truncated to the
    /// addressable range.
    pub fn build(&self, text: &str) -> SuffixArray {
        let mut folded = fold_case(text);
        folded.truncate(MAX_TEXT_SIZE);

        let suffix_array = if folded.is_empty() {
            Vec::new()
        } else {
            build_suffix_array(&folded, self.config.parallel_threshold)
        };

        SuffixArray {
            text: folded,
            suffix_array,
            config: self.config.clone(),
        }
    }
}

/// A built suffix array together with the text it indexes
pub struct SuffixArray {
    /// Indexed text, case-folded
    pub text: Vec<u8>,
    /// Sorted suffix array (positions into text)
    pub suffix_array: Vec<SuffixEntry>,
    /// Configuration used for building
    pub config: SuffixArrayConfig,
}

/// Build suffix array by sorting positions
///
/// This approach:
/// 1. Creates array of all suffix positions [0, 1, 2, ..., n-1]
/// 2. Sorts positions by comparing the suffixes they point to
/// 3. Uses rayon for parallel sorting above `parallel_threshold`
///
/// Time: O(n log n) comparisons of at most [`MAX_COMPARE`] bytes each
/// Space: O(n) for the suffix array
pub(crate) fn build_suffix_array(text: &[u8], parallel_threshold: usize) -> Vec<SuffixEntry> {
    let n = text.len();

    let mut sa: Vec<SuffixEntry> = (0..n as SuffixEntry).collect();

    if n > parallel_threshold {
        sa.par_sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    } else {
        sa.sort_unstable_by(|&a, &b| compare_suffixes(text, a as usize, b as usize));
    }

    sa
}

/// Compare two suffixes lexicographically
///
/// Uses a bounded comparison to avoid worst-case O(n) comparisons on
/// long repeated runs.
#[inline]
fn compare_suffixes(text: &[u8], a: usize, b: usize) -> std::cmp::Ordering {
    let len_a = (text.len() - a).min(MAX_COMPARE);
    let len_b = (text.len() - b).min(MAX_COMPARE);

    text[a..a + len_a].cmp(&text[b..b + len_b])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_simple() {
        let built = SuffixArrayBuilder::with_defaults().build("banana");

        assert_eq!(built.text, b"banana");
        assert_eq!(built.suffix_array.len(), 6);
    }

    #[test]
    fn test_suffix_array_correctness() {
        let sa = build_suffix_array(b"banana", usize::MAX);

        // 5: a
        // 3: ana
        // 1: anana
        // 0: banana
        // 4: na
        // 2: nana
        assert_eq!(sa, vec![5, 3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let text = b"it was the best of times, it was the worst of times";
        assert_eq!(build_suffix_array(text, 0), build_suffix_array(text, usize::MAX));
    }

    #[test]
    fn test_case_insensitive() {
        let built = SuffixArrayBuilder::with_defaults().build("HELLO World");
        assert_eq!(built.text, b"hello world");
    }

    #[test]
    fn test_parallel_threshold_from_config() {
        let text = "Tomorrow, and tomorrow, and tomorrow";
        let parallel = SuffixArrayBuilder::new(SuffixArrayConfig {
            parallel_threshold: 0,
        })
        .build(text);
        let sequential = SuffixArrayBuilder::with_defaults().build(text);
        assert_eq!(parallel.suffix_array, sequential.suffix_array);
    }

    #[test]
    fn test_empty_text() {
        let built = SuffixArrayBuilder::with_defaults().build("");
        assert!(built.text.is_empty());
        assert!(built.suffix_array.is_empty());
    }
}
