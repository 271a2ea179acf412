//! Occurrences and frequency-ordered occurrence lists
//!
//! An [`OccurrenceList`] holds every (document, frequency) pair for one
//! keyword, kept in non-increasing frequency order. New entries are placed by
//! binary search over the already-sorted prefix; among equal frequencies the
//! newest entry goes first.

use serde::Serialize;
use std::fmt;

// ============================================================================
// DocId
// ============================================================================

/// Opaque document identifier (a file name or path).
///
/// Stored and returned as given, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Create a document identifier
    pub fn new(id: impl Into<String>) -> Self {
        DocId(id.into())
    }

    /// The identifier text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(s: &str) -> Self {
        DocId(s.to_string())
    }
}

impl From<String> for DocId {
    fn from(s: String) -> Self {
        DocId(s)
    }
}

impl PartialEq<&str> for DocId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// Occurrence
// ============================================================================

/// One keyword's frequency in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    /// Document the keyword occurs in
    pub doc: DocId,
    /// Number of times it occurs, at least 1
    pub frequency: u32,
}

impl Occurrence {
    /// Create a new occurrence
    pub fn new(doc: DocId, frequency: u32) -> Self {
        Occurrence { doc, frequency }
    }
}

// ============================================================================
// OccurrenceList
// ============================================================================

/// Occurrences of one keyword, non-increasing by frequency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct OccurrenceList {
    entries: Vec<Occurrence>,
}

impl OccurrenceList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list holding a single occurrence
    pub fn single(occurrence: Occurrence) -> Self {
        OccurrenceList {
            entries: vec![occurrence],
        }
    }

    /// Append an occurrence and move it into frequency order.
    ///
    /// Returns the midpoints probed by the binary search.
    pub fn insert(&mut self, occurrence: Occurrence) -> Vec<usize> {
        self.entries.push(occurrence);
        self.insert_last()
    }

    /// Move the last entry into place, assuming `entries[..len - 1]` is
    /// sorted by descending frequency.
    ///
    /// Bounds start at `first = 0`, `last = len - 2`. While `first < last` a
    /// candidate at least as frequent as the midpoint narrows to the left half
    /// (midpoint included), otherwise to the right of the midpoint. Once the
    /// bounds meet the candidate goes at the midpoint if it is at least as
    /// frequent, else right after it. Ties therefore land before existing
    /// equal entries.
    ///
    /// Returns the sequence of midpoints probed, empty when the list has
    /// fewer than two entries.
    pub fn insert_last(&mut self) -> Vec<usize> {
        let mut probes = Vec::new();
        let candidate = match self.entries.pop() {
            Some(c) => c,
            None => return probes,
        };
        if self.entries.is_empty() {
            self.entries.push(candidate);
            return probes;
        }

        let freq = candidate.frequency;
        let mut first = 0;
        let mut last = self.entries.len() - 1;
        let at = loop {
            let mid = (first + last) / 2;
            probes.push(mid);
            let mid_freq = self.entries[mid].frequency;
            if first == last {
                break if freq >= mid_freq { mid } else { mid + 1 };
            }
            if freq >= mid_freq {
                last = mid;
            } else {
                first = mid + 1;
            }
        };

        self.entries.insert(at, candidate);
        probes
    }

    /// Occurrences in rank order
    pub fn entries(&self) -> &[Occurrence] {
        &self.entries
    }

    /// Iterate occurrences in rank order
    pub fn iter(&self) -> std::slice::Iter<'_, Occurrence> {
        self.entries.iter()
    }

    /// Occurrence at a rank
    pub fn get(&self, rank: usize) -> Option<&Occurrence> {
        self.entries.get(rank)
    }

    /// Frequencies in rank order
    pub fn frequencies(&self) -> Vec<u32> {
        self.entries.iter().map(|o| o.frequency).collect()
    }

    /// Number of documents containing the keyword
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the non-increasing frequency invariant
    pub fn is_sorted(&self) -> bool {
        self.entries
            .windows(2)
            .all(|w| w[0].frequency >= w[1].frequency)
    }
}

impl<'a> IntoIterator for &'a OccurrenceList {
    type Item = &'a Occurrence;
    type IntoIter = std::slice::Iter<'a, Occurrence>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(freqs: &[u32]) -> OccurrenceList {
        let mut list = OccurrenceList::new();
        for (i, &f) in freqs.iter().enumerate() {
            list.entries.push(Occurrence::new(DocId::new(format!("d{}", i)), f));
        }
        list
    }

    fn docs(list: &OccurrenceList) -> Vec<&str> {
        list.iter().map(|o| o.doc.as_str()).collect()
    }

    #[test]
    fn test_insert_between() {
        let mut l = list(&[9, 7, 7, 3]);
        let probes = l.insert(Occurrence::new(DocId::new("new"), 5));
        assert_eq!(l.frequencies(), vec![9, 7, 7, 5, 3]);
        assert_eq!(probes, vec![1, 2, 3]);
    }

    #[test]
    fn test_insert_tie_goes_before_equals() {
        let mut l = list(&[9, 7, 7, 3]);
        l.insert(Occurrence::new(DocId::new("new"), 7));
        assert_eq!(l.frequencies(), vec![9, 7, 7, 7, 3]);
        assert_eq!(docs(&l), vec!["d0", "new", "d1", "d2", "d3"]);
    }

    #[test]
    fn test_insert_tie_all_equal_goes_first() {
        let mut l = list(&[7, 7, 7]);
        let probes = l.insert(Occurrence::new(DocId::new("new"), 7));
        assert_eq!(docs(&l), vec!["new", "d0", "d1", "d2"]);
        assert_eq!(probes, vec![1, 0, 0]);
    }

    #[test]
    fn test_insert_at_front() {
        let mut l = list(&[9, 7, 3]);
        l.insert(Occurrence::new(DocId::new("new"), 12));
        assert_eq!(l.frequencies(), vec![12, 9, 7, 3]);
        assert_eq!(l.get(0).unwrap().doc, "new");
    }

    #[test]
    fn test_insert_at_back() {
        let mut l = list(&[9, 7]);
        let probes = l.insert(Occurrence::new(DocId::new("new"), 3));
        assert_eq!(l.frequencies(), vec![9, 7, 3]);
        assert_eq!(l.get(2).unwrap().doc, "new");
        assert_eq!(probes, vec![0, 1]);
    }

    #[test]
    fn test_insert_last_single_entry_no_probes() {
        let mut l = list(&[4]);
        assert!(l.insert_last().is_empty());
        assert_eq!(l.frequencies(), vec![4]);
    }

    #[test]
    fn test_insert_last_empty_noop() {
        let mut l = OccurrenceList::new();
        assert!(l.insert_last().is_empty());
        assert!(l.is_empty());
    }

    #[test]
    fn test_insert_into_single() {
        let mut l = OccurrenceList::single(Occurrence::new(DocId::new("a"), 2));
        l.insert(Occurrence::new(DocId::new("b"), 2));
        assert_eq!(docs(&l), vec!["b", "a"]);
        l.insert(Occurrence::new(DocId::new("c"), 1));
        assert_eq!(docs(&l), vec!["b", "a", "c"]);
        assert!(l.is_sorted());
    }

    #[test]
    fn test_is_sorted() {
        assert!(list(&[5, 5, 2, 1]).is_sorted());
        assert!(!list(&[1, 2]).is_sorted());
        assert!(OccurrenceList::new().is_sorted());
    }

    #[test]
    fn test_doc_id_display() {
        let id = DocId::from("pohlx.txt");
        assert_eq!(id.to_string(), "pohlx.txt");
        assert_eq!(id, "pohlx.txt");
    }
}
