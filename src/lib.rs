//! lse - in-memory keyword index with ranked two-keyword OR search
//!
//! Documents are reduced to keywords (lower-cased, trailing punctuation
//! stripped, noise words dropped), merged into a frequency-ordered keyword
//! index, and queried for the top 5 documents containing either of two
//! keywords.
//!
//! # Quick Start
//!
//! ```
//! use lse::{build_index, top_matches, DocId};
//!
//! let index = build_index(
//!     vec![
//!         (DocId::new("poem.txt"), "Rain, rain, go away.".split_whitespace()),
//!         (DocId::new("song.txt"), "Singing in the rain!".split_whitespace()),
//!     ],
//!     ["in", "the"],
//! );
//!
//! let docs = top_matches(&index, "rain", "away");
//! assert_eq!(docs, vec![DocId::new("poem.txt"), DocId::new("song.txt")]);
//! ```
//!
//! # Architecture
//!
//! - [`lse_core`]: keyword normalization, occurrence lists, errors, config
//! - [`lse_search`]: index building, queries, file corpus loading

pub use lse_core::*;
pub use lse_search::*;
