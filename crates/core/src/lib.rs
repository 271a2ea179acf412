//! Core types for the keyword index
//!
//! This crate defines the foundational types used throughout the system:
//! - Keyword / Normalizer: raw token to keyword normalization
//! - NoiseWords: words excluded from indexing
//! - DocId / Occurrence / OccurrenceList: frequency-ordered postings
//! - Error: error type for the I/O layers
//! - LseConfig: `lse.toml` configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod keyword;
pub mod occurrence;

pub use config::{LseConfig, CONFIG_FILE_NAME, DEFAULT_RESULT_LIMIT};
pub use error::{Error, Result};
pub use keyword::{Keyword, NoiseWords, Normalizer, NormalizerConfig, PunctuationPolicy};
pub use occurrence::{DocId, Occurrence, OccurrenceList};
