//! Keyword normalization
//!
//! A raw whitespace-delimited token becomes a [`Keyword`] when, after its
//! trailing punctuation run is stripped, it consists only of alphabetic
//! characters and is not a noise word. Everything is lower-cased.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

/// Characters accepted in a trailing run under [`PunctuationPolicy::Strict`].
pub const PUNCTUATION: &[char] = &['.', ',', '?', ':', ';', '!'];

// ============================================================================
// Keyword
// ============================================================================

/// A normalized keyword: lowercase, alphabetic, non-empty, not a noise word.
///
/// Only a [`Normalizer`] produces keywords, so every value in an index has
/// passed the keyword test. The alphabetic check runs on the raw token and
/// lower-casing follows Unicode's full mapping, which may expand a letter
/// into a letter plus a combining mark: `"İstanbul"` becomes
/// `"i\u{307}stanbul"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Keyword(String);

impl Keyword {
    /// The keyword text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for Keyword {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Keyword {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Keyword {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// ============================================================================
// NoiseWords
// ============================================================================

/// Set of noise words excluded from indexing.
///
/// Entries are trimmed and lower-cased on insertion, so membership is
/// case-insensitive. Immutable once handed to a [`Normalizer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoiseWords {
    words: HashSet<String>,
}

impl NoiseWords {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership of an already lower-cased word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of noise words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for NoiseWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let words = iter
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        NoiseWords { words }
    }
}

// ============================================================================
// Normalizer
// ============================================================================

/// Which characters may appear in the stripped trailing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PunctuationPolicy {
    /// Any non-alphabetic character counts as trailing punctuation
    #[default]
    Any,
    /// Only the characters in [`PUNCTUATION`] may be stripped
    Strict,
}

impl PunctuationPolicy {
    #[inline]
    fn allows_trailing(self, c: char) -> bool {
        match self {
            PunctuationPolicy::Any => true,
            PunctuationPolicy::Strict => PUNCTUATION.contains(&c),
        }
    }
}

/// Normalizer tuning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Trailing punctuation policy
    pub punctuation: PunctuationPolicy,
}

/// Turns raw tokens into keywords.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    noise_words: NoiseWords,
    config: NormalizerConfig,
}

impl Normalizer {
    /// Create a normalizer with the default punctuation policy
    pub fn new(noise_words: NoiseWords) -> Self {
        Self::with_config(noise_words, NormalizerConfig::default())
    }

    /// Create a normalizer with explicit tuning
    pub fn with_config(noise_words: NoiseWords, config: NormalizerConfig) -> Self {
        Normalizer {
            noise_words,
            config,
        }
    }

    /// Normalize a raw token into a keyword.
    ///
    /// Returns `None` when the token has an alphabetic character after its
    /// first non-alphabetic one, when nothing alphabetic remains, or when the
    /// result is a noise word.
    ///
    /// # Example
    ///
    /// ```
    /// use lse_core::keyword::{NoiseWords, Normalizer};
    ///
    /// let normalizer = Normalizer::new(["the"].into_iter().collect::<NoiseWords>());
    /// assert_eq!(normalizer.normalize("Hello,").unwrap().as_str(), "hello");
    /// assert!(normalizer.normalize("The!").is_none());
    /// assert!(normalizer.normalize("wo!rd").is_none());
    /// ```
    pub fn normalize(&self, word: &str) -> Option<Keyword> {
        let mut cut = None;
        for (i, c) in word.char_indices() {
            if c.is_alphabetic() {
                if cut.is_some() {
                    return None;
                }
            } else {
                if !self.config.punctuation.allows_trailing(c) {
                    return None;
                }
                cut.get_or_insert(i);
            }
        }

        let stem = &word[..cut.unwrap_or(word.len())];
        if stem.is_empty() {
            return None;
        }

        let keyword = stem.to_lowercase();
        if self.noise_words.contains(&keyword) {
            return None;
        }
        Some(Keyword(keyword))
    }
}
