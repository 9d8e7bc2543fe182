//! End-to-end search: lookup followed by excerpt extraction
//!
//! ```
//! use shakesearch::Searcher;
//!
//! let searcher = Searcher::build("The cat sat. The dog ran; the bird flew.").with_radius(0);
//! assert_eq!(
//!     searcher.search("THE"),
//!     vec!["The cat sat.", " The dog ran;", " the bird flew."]
//! );
//! ```

use crate::excerpt::{self, RADIUS};
use crate::index::build::build_index_from_file;
use crate::index::CorpusIndex;
use anyhow::Result;
use std::path::Path;
use tracing::debug;

/// A single match and the excerpt around it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit<'a> {
    /// Byte offset of the match in the corpus
    pub offset: usize,
    /// Byte offset where the excerpt starts
    pub start: usize,
    pub excerpt: &'a str,
}

/// Immutable search handle over one corpus
///
/// Holds no interior mutability; share it between threads with `Arc`.
pub struct Searcher {
    index: CorpusIndex,
    radius: usize,
}

impl Searcher {
    /// Index `text` in memory
    pub fn build(text: impl Into<String>) -> Self {
        Self::from_index(CorpusIndex::build(text))
    }

    /// Read and index the corpus file at `path`
    pub fn load(path: &Path) -> Result<Self> {
        Ok(Self::from_index(build_index_from_file(path, true)?))
    }

    pub fn from_index(index: CorpusIndex) -> Self {
        Self {
            index,
            radius: RADIUS,
        }
    }

    /// Override the excerpt look-around radius
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.radius = radius;
        self
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Excerpts for every occurrence of `query`, in ascending offset order
    pub fn search(&self, query: &str) -> Vec<&str> {
        self.hits(query).into_iter().map(|hit| hit.excerpt).collect()
    }

    /// Matches of `query` with their offsets, in ascending offset order
    pub fn hits(&self, query: &str) -> Vec<Hit<'_>> {
        let offsets = self.index.lookup(query);
        debug!(query, matches = offsets.len(), "search");

        let text = self.index.text();
        offsets
            .into_iter()
            .map(|offset| {
                let range = excerpt::bounds(text.as_bytes(), offset, self.radius);
                Hit {
                    offset,
                    start: range.start,
                    excerpt: text.get(range).unwrap_or_default(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_matches() {
        let searcher = Searcher::build("Friends, Romans, countrymen");
        assert!(searcher.search("caesar").is_empty());
    }

    #[test]
    fn test_hits_carry_offsets() {
        let searcher = Searcher::build("aaa").with_radius(0);
        let hits = searcher.hits("AA");
        assert_eq!(hits.iter().map(|h| h.offset).collect::<Vec<_>>(), vec![0, 1]);
        assert!(hits.iter().all(|h| h.excerpt == "aaa" && h.start == 0));
    }

    #[test]
    fn test_load_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "Exit, pursued by a bear.").unwrap();

        let searcher = Searcher::load(file.path()).unwrap().with_radius(0);
        assert_eq!(searcher.search("BEAR"), vec!["Exit, pursued by a bear."]);
        assert!(Searcher::load(Path::new("/nonexistent/corpus.txt")).is_err());
    }

    #[test]
    fn test_default_radius() {
        let searcher = Searcher::build("text");
        assert_eq!(searcher.radius(), RADIUS);
    }

    #[test]
    fn test_excerpts_use_original_case() {
        let searcher = Searcher::build("O ROMEO. Wherefore.").with_radius(0);
        assert_eq!(searcher.search("romeo"), vec!["O ROMEO."]);
    }
}
