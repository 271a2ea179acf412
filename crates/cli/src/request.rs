//! Turning parsed arguments and config into a query, and running it.
//!
//! Flags override `lse.toml`. Query words go through the same normalization
//! as indexed text, minus the noise-word check: a noise word simply matches
//! nothing.

use std::path::PathBuf;

use clap::ArgMatches;
use lse_core::{Error, LseConfig, NoiseWords, Normalizer, NormalizerConfig, Result};
use lse_search::{corpus, top_matches_limited};

use crate::format::{format_matches, OutputMode};

/// A fully resolved query invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub docs_file: PathBuf,
    pub noise_file: PathBuf,
    pub limit: usize,
    pub kw1: String,
    pub kw2: String,
    pub normalizer: NormalizerConfig,
    pub mode: OutputMode,
}

/// Output mode selected by `--json`.
pub fn output_mode(matches: &ArgMatches) -> OutputMode {
    if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    }
}

/// Normalize a query word, falling back to plain lower-casing when the
/// normalizer rejects it.
pub fn query_keyword(normalizer: &Normalizer, raw: &str) -> String {
    normalizer
        .normalize(raw)
        .map(|k| k.into_string())
        .unwrap_or_else(|| raw.to_lowercase())
}

fn input_path(
    matches: &ArgMatches,
    arg: &str,
    configured: Option<PathBuf>,
    what: &str,
) -> Result<PathBuf> {
    matches
        .get_one::<String>(arg)
        .map(PathBuf::from)
        .or(configured)
        .ok_or_else(|| Error::invalid_input(format!("no {} file given (--{})", what, arg)))
}

/// Resolve arguments against the loaded config.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] when no documents or noise-words file is
/// given, and [`Error::Config`] when `--limit` is zero.
pub fn resolve_request(matches: &ArgMatches, mut config: LseConfig) -> Result<QueryRequest> {
    if let Some(limit) = matches.get_one::<usize>("limit") {
        config.result_limit = *limit;
    }
    config.validate()?;

    let docs_file = input_path(matches, "docs", config.documents.clone(), "documents")?;
    let noise_file = input_path(matches, "noise", config.noise_words.clone(), "noise-words")?;

    let normalizer = Normalizer::with_config(NoiseWords::new(), config.normalizer_config());
    let raw = |arg: &str| {
        matches
            .get_one::<String>(arg)
            .map(String::as_str)
            .unwrap_or("")
            .to_string()
    };

    Ok(QueryRequest {
        docs_file,
        noise_file,
        limit: config.result_limit,
        kw1: query_keyword(&normalizer, &raw("kw1")),
        kw2: query_keyword(&normalizer, &raw("kw2")),
        normalizer: config.normalizer_config(),
        mode: output_mode(matches),
    })
}

/// Build the index from the request's files and answer the query.
pub fn execute(request: &QueryRequest) -> Result<String> {
    let index =
        corpus::make_index_with(&request.docs_file, &request.noise_file, request.normalizer)?;
    let docs = top_matches_limited(&index, &request.kw1, &request.kw2, request.limit);
    Ok(format_matches(&request.kw1, &request.kw2, &docs, request.mode))
}
