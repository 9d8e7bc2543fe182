//! # shakesearch - excerpt search over a fixed corpus
//!
//! Answers case-insensitive substring queries against one immutable text
//! and returns, for every occurrence, a readable excerpt bounded by the
//! surrounding sentence or clause.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Case-folded suffix array over the corpus
//! - [`excerpt`] - Delimiter-bounded windows around match offsets
//! - [`search`] - End-to-end lookup plus excerpt extraction
//! - [`server`] - HTTP API (`/search`, `/health`, static assets)
//! - [`output`] - Terminal rendering of hits
//! - [`config`] - Server configuration
//! - [`utils`] - Case folding and progress spinners
//!
//! ## Quick Start
//!
//! ```
//! use shakesearch::Searcher;
//!
//! // Build the index once, then share it read-only
//! let searcher = Searcher::build("Exeunt. Enter HAMLET; he reads.");
//!
//! for excerpt in searcher.search("hamlet") {
//!     println!("{}", excerpt);
//! }
//! ```
//!
//! ## Performance
//!
//! Lookups binary-search a suffix array built with a parallel sort, so a
//! query of length m with k matches costs O(m log n + k). Results come back
//! in corpus order; there is no relevance ranking.

pub mod config;
pub mod excerpt;
pub mod index;
pub mod output;
pub mod search;
pub mod server;
pub mod utils;

pub use index::CorpusIndex;
pub use search::{Hit, Searcher};
