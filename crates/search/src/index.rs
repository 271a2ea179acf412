//! Keyword index: keyword -> frequency-ordered occurrence list
//!
//! Built once by [`crate::builder`], then read by [`crate::query`].
//!
//! # Thread Safety
//!
//! Mutation needs `&mut KeywordIndex`, so no reader can observe a list while
//! it is being merged into. A finished index is `Sync` and can be shared
//! across query threads by reference or `Arc`.

use lse_core::{DocId, Keyword, Occurrence, OccurrenceList};
use rustc_hash::FxHashMap;

/// Mapping from keyword to its occurrence list
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    postings: FxHashMap<Keyword, OccurrenceList>,
}

impl KeywordIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's frequency for a keyword.
    ///
    /// A new keyword gets a one-element list; otherwise the occurrence is
    /// appended and moved into frequency order. Returns the midpoints probed
    /// by the ordered insertion (empty for a new keyword).
    pub fn add_occurrence(&mut self, keyword: Keyword, doc: DocId, frequency: u32) -> Vec<usize> {
        let occurrence = Occurrence::new(doc, frequency);
        match self.postings.get_mut(&keyword) {
            Some(list) => list.insert(occurrence),
            None => {
                self.postings
                    .insert(keyword, OccurrenceList::single(occurrence));
                Vec::new()
            }
        }
    }

    /// Lookup the occurrence list of a keyword
    ///
    /// Returns None if the keyword was never indexed.
    pub fn occurrences(&self, keyword: &str) -> Option<&OccurrenceList> {
        self.postings.get(keyword)
    }

    /// Check if a keyword is indexed
    pub fn contains(&self, keyword: &str) -> bool {
        self.postings.contains_key(keyword)
    }

    /// All indexed keywords, sorted
    pub fn keywords(&self) -> Vec<&Keyword> {
        let mut keys: Vec<&Keyword> = self.postings.keys().collect();
        keys.sort();
        keys
    }

    /// Iterate (keyword, occurrence list) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&Keyword, &OccurrenceList)> {
        self.postings.iter()
    }

    /// Number of distinct keywords
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Check that every occurrence list is non-increasing by frequency
    pub fn is_sorted(&self) -> bool {
        self.postings.values().all(OccurrenceList::is_sorted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lse_core::{NoiseWords, Normalizer};

    fn kw(word: &str) -> Keyword {
        Normalizer::new(NoiseWords::new()).normalize(word).unwrap()
    }

    #[test]
    fn test_new_index_empty() {
        let index = KeywordIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.occurrences("anything").is_none());
    }

    #[test]
    fn test_add_new_keyword() {
        let mut index = KeywordIndex::new();
        let probes = index.add_occurrence(kw("rust"), DocId::new("a.txt"), 3);
        assert!(probes.is_empty());
        assert!(index.contains("rust"));

        let list = index.occurrences("rust").unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0], Occurrence::new(DocId::new("a.txt"), 3));
    }

    #[test]
    fn test_add_existing_keyword_keeps_order() {
        let mut index = KeywordIndex::new();
        index.add_occurrence(kw("rust"), DocId::new("a"), 2);
        index.add_occurrence(kw("rust"), DocId::new("b"), 5);
        index.add_occurrence(kw("rust"), DocId::new("c"), 3);

        let list = index.occurrences("rust").unwrap();
        assert_eq!(list.frequencies(), vec![5, 3, 2]);
        assert!(index.is_sorted());
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_keywords_sorted() {
        let mut index = KeywordIndex::new();
        index.add_occurrence(kw("pear"), DocId::new("a"), 1);
        index.add_occurrence(kw("apple"), DocId::new("a"), 1);
        let keys: Vec<&str> = index.keywords().into_iter().map(Keyword::as_str).collect();
        assert_eq!(keys, vec!["apple", "pear"]);
    }
}
