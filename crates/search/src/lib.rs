//! Keyword index and two-keyword OR search
//!
//! This crate provides:
//! - KeywordIndex: keyword -> frequency-ordered occurrence list
//! - builder: per-document keyword extraction and ordered merge
//! - query: top-5 two-keyword OR search
//! - corpus: loading documents and noise words from files
//!
//! # Usage
//!
//! ```
//! use lse_core::DocId;
//! use lse_search::{build_index, top_matches};
//!
//! let index = build_index(
//!     vec![
//!         (DocId::new("a.txt"), "the quick fox".split_whitespace()),
//!         (DocId::new("b.txt"), "fox, fox!".split_whitespace()),
//!     ],
//!     ["the"],
//! );
//! let docs = top_matches(&index, "fox", "quick");
//! assert_eq!(docs, vec![DocId::new("b.txt"), DocId::new("a.txt")]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod corpus;
pub mod index;
pub mod query;

// Re-export commonly used types
pub use builder::{build_index, extract_keywords, merge, IndexBuilder, KeywordCounts};
pub use corpus::{load_noise_words, make_index, make_index_with, read_document};
pub use index::KeywordIndex;
pub use query::{top_matches, top_matches_limited, MAX_RESULTS};
