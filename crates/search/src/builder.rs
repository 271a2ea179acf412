//! Index construction
//!
//! Building is a one-shot batch pass:
//! 1. [`extract_keywords`] normalizes one document's tokens into local counts
//! 2. [`merge`] folds those counts into the shared [`KeywordIndex`]
//!
//! [`IndexBuilder`] drives both steps and can fan extraction out over rayon.
//! Merging always runs serially in input order, so a parallel build yields
//! the same index as a serial one.

use crate::index::KeywordIndex;
use lse_core::{DocId, Keyword, NoiseWords, Normalizer};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Keyword frequencies within a single document
pub type KeywordCounts = FxHashMap<Keyword, u32>;

/// Count the keywords in one document's raw tokens.
///
/// Tokens the normalizer rejects are skipped.
pub fn extract_keywords<I>(tokens: I, normalizer: &Normalizer) -> KeywordCounts
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts = KeywordCounts::default();
    for token in tokens {
        if let Some(keyword) = normalizer.normalize(token.as_ref()) {
            *counts.entry(keyword).or_insert(0) += 1;
        }
    }
    counts
}

/// Merge one document's keyword counts into the index.
///
/// Each occurrence is placed by ordered last-element insertion, so every
/// list stays non-increasing by frequency.
pub fn merge(doc: &DocId, counts: KeywordCounts, index: &mut KeywordIndex) {
    let keywords = counts.len();
    for (keyword, frequency) in counts {
        index.add_occurrence(keyword, doc.clone(), frequency);
    }
    tracing::debug!(
        target: "lse::index",
        doc = %doc,
        keywords,
        "Merged document"
    );
}

/// Build an index from (document, tokens) pairs and a noise-word list.
///
/// # Example
///
/// ```
/// use lse_core::DocId;
/// use lse_search::builder::build_index;
///
/// let index = build_index(
///     vec![(DocId::new("a.txt"), vec!["The", "cat", "sat."])],
///     ["the"],
/// );
/// assert!(index.contains("cat"));
/// assert!(!index.contains("the"));
/// ```
pub fn build_index<D, T, N>(documents: D, noise_words: N) -> KeywordIndex
where
    D: IntoIterator<Item = (DocId, T)>,
    T: IntoIterator,
    T::Item: AsRef<str>,
    N: IntoIterator,
    N::Item: AsRef<str>,
{
    let mut builder = IndexBuilder::new(noise_words.into_iter().collect());
    for (doc, tokens) in documents {
        builder.add_document(doc, tokens);
    }
    builder.finish()
}

// ============================================================================
// IndexBuilder
// ============================================================================

/// Accumulates documents into a [`KeywordIndex`]
#[derive(Debug, Default)]
pub struct IndexBuilder {
    normalizer: Normalizer,
    index: KeywordIndex,
    documents: usize,
}

impl IndexBuilder {
    /// Create a builder that rejects the given noise words
    pub fn new(noise_words: NoiseWords) -> Self {
        Self::with_normalizer(Normalizer::new(noise_words))
    }

    /// Create a builder with an explicitly configured normalizer
    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        IndexBuilder {
            normalizer,
            index: KeywordIndex::new(),
            documents: 0,
        }
    }

    /// Number of documents added so far
    pub fn document_count(&self) -> usize {
        self.documents
    }

    /// Extract and merge one document
    pub fn add_document<T>(&mut self, doc: DocId, tokens: T)
    where
        T: IntoIterator,
        T::Item: AsRef<str>,
    {
        let counts = extract_keywords(tokens, &self.normalizer);
        merge(&doc, counts, &mut self.index);
        self.documents += 1;
    }

    /// Extract documents in parallel, then merge them in input order
    pub fn add_documents_parallel<T>(&mut self, documents: Vec<(DocId, T)>)
    where
        T: IntoIterator + Send,
        T::Item: AsRef<str>,
    {
        let normalizer = &self.normalizer;
        let extracted: Vec<(DocId, KeywordCounts)> = documents
            .into_par_iter()
            .map(|(doc, tokens)| {
                let counts = extract_keywords(tokens, normalizer);
                (doc, counts)
            })
            .collect();

        for (doc, counts) in extracted {
            merge(&doc, counts, &mut self.index);
            self.documents += 1;
        }
    }

    /// Finish the build and hand over the index
    pub fn finish(self) -> KeywordIndex {
        tracing::info!(
            target: "lse::index",
            documents = self.documents,
            keywords = self.index.len(),
            "Keyword index built"
        );
        self.index
    }
}
