//! Corpus loading from files
//!
//! Thin file layer over [`crate::builder`]: documents and noise-word lists
//! are plain text, split on whitespace.
//! - a documents file lists one document file name per entry
//! - a noise-words file lists one noise word per entry
//!
//! Document names are used verbatim as [`DocId`]s and resolved against the
//! documents file's directory when they are relative.

use crate::builder::IndexBuilder;
use crate::index::KeywordIndex;
use lse_core::{DocId, Error, NoiseWords, Normalizer, NormalizerConfig, Result};
use std::path::{Path, PathBuf};

fn read_words(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(content.split_whitespace().map(String::from).collect())
}

/// Load a noise-word file
pub fn load_noise_words(path: &Path) -> Result<NoiseWords> {
    let words: NoiseWords = read_words(path)?.into_iter().collect();
    tracing::debug!(
        target: "lse::corpus",
        path = %path.display(),
        noise_words = words.len(),
        "Loaded noise words"
    );
    Ok(words)
}

/// Read one document as whitespace-delimited raw tokens
pub fn read_document(path: &Path) -> Result<Vec<String>> {
    read_words(path)
}

/// Read the list of document names from a documents file
pub fn read_document_list(path: &Path) -> Result<Vec<DocId>> {
    let names = read_words(path)?;
    if names.is_empty() {
        tracing::warn!(
            target: "lse::corpus",
            path = %path.display(),
            "Documents file lists no documents"
        );
    }
    Ok(names.into_iter().map(DocId::from).collect())
}

fn resolve(base: Option<&Path>, doc: &DocId) -> PathBuf {
    let path = Path::new(doc.as_str());
    match base {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Build an index from a documents file and a noise-words file
///
/// # Errors
///
/// Returns [`Error::Io`] naming the first file that cannot be read.
pub fn make_index(docs_file: &Path, noise_words_file: &Path) -> Result<KeywordIndex> {
    make_index_with(docs_file, noise_words_file, NormalizerConfig::default())
}

/// [`make_index`] with explicit normalizer tuning
pub fn make_index_with(
    docs_file: &Path,
    noise_words_file: &Path,
    config: NormalizerConfig,
) -> Result<KeywordIndex> {
    let noise_words = load_noise_words(noise_words_file)?;
    let mut builder = IndexBuilder::with_normalizer(Normalizer::with_config(noise_words, config));

    let base = docs_file.parent().filter(|p| !p.as_os_str().is_empty());
    for doc in read_document_list(docs_file)? {
        let tokens = read_document(&resolve(base, &doc))?;
        builder.add_document(doc, tokens);
    }
    Ok(builder.finish())
}
