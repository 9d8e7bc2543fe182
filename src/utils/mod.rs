//! Utility functions shared across the crate.
//!
//! ## Modules
//!
//! - [`case`] - Byte-length-preserving case folding
//! - [`progress`] - Spinner shown while the index is built
//!
//! ```
//! use shakesearch::utils::fold_case;
//!
//! // Folding never changes the byte length
//! assert_eq!(fold_case("Hamlet"), b"hamlet");
//! ```

pub mod case;
pub mod progress;

pub use case::*;
