//! Two-keyword OR queries
//!
//! Both keywords' occurrence lists are already sorted by descending
//! frequency, so the top documents fall out of a two-pointer merge:
//! - the more frequent head wins, ties go to the first keyword
//! - a document already in the result is skipped without counting
//! - the merge stops at the result limit or when both lists run out
//!
//! Unknown keywords behave like empty lists.

use crate::index::KeywordIndex;
use lse_core::{DocId, Occurrence, DEFAULT_RESULT_LIMIT};

/// Number of documents [`top_matches`] returns at most.
pub const MAX_RESULTS: usize = DEFAULT_RESULT_LIMIT;

/// Top documents containing `kw1` or `kw2`, most frequent first.
///
/// # Example
///
/// ```
/// use lse_core::DocId;
/// use lse_search::builder::build_index;
/// use lse_search::query::top_matches;
///
/// let index = build_index(
///     vec![
///         (DocId::new("a"), vec!["red", "red", "blue"]),
///         (DocId::new("b"), vec!["blue", "blue", "blue"]),
///     ],
///     Vec::<&str>::new(),
/// );
/// assert_eq!(top_matches(&index, "red", "blue"), vec![DocId::new("b"), DocId::new("a")]);
/// assert!(top_matches(&index, "zzz", "yyy").is_empty());
/// ```
pub fn top_matches(index: &KeywordIndex, kw1: &str, kw2: &str) -> Vec<DocId> {
    top_matches_limited(index, kw1, kw2, MAX_RESULTS)
}

/// [`top_matches`] with an explicit result limit
pub fn top_matches_limited(
    index: &KeywordIndex,
    kw1: &str,
    kw2: &str,
    limit: usize,
) -> Vec<DocId> {
    let first = index.occurrences(kw1).map(|l| l.entries()).unwrap_or(&[]);
    let second = index.occurrences(kw2).map(|l| l.entries()).unwrap_or(&[]);

    let docs = merge_ranked(first, second, limit);
    tracing::debug!(
        target: "lse::query",
        kw1,
        kw2,
        hits = docs.len(),
        "Top matches"
    );
    docs
}

fn merge_ranked(first: &[Occurrence], second: &[Occurrence], limit: usize) -> Vec<DocId> {
    let mut result: Vec<DocId> = Vec::with_capacity(limit.min(first.len() + second.len()));
    let (mut i, mut j) = (0, 0);

    while result.len() < limit {
        let next = match (first.get(i), second.get(j)) {
            (Some(a), Some(b)) if a.frequency >= b.frequency => {
                i += 1;
                a
            }
            (Some(_), Some(b)) => {
                j += 1;
                b
            }
            (Some(a), None) => {
                i += 1;
                a
            }
            (None, Some(b)) => {
                j += 1;
                b
            }
            (None, None) => break,
        };

        // At most `limit` entries to scan
        if !result.contains(&next.doc) {
            result.push(next.doc.clone());
        }
    }
    result
}
