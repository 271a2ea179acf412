//! Index configuration via `lse.toml`
//!
//! Every field is optional; a missing file means defaults. Command-line flags
//! override whatever the file says.

use crate::error::{Error, Result};
use crate::keyword::{NormalizerConfig, PunctuationPolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "lse.toml";

/// Number of documents a query returns unless configured otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 5;

fn default_result_limit() -> usize {
    DEFAULT_RESULT_LIMIT
}

/// Configuration loaded from `lse.toml`.
///
/// # Example
///
/// ```toml
/// result_limit = 5
/// punctuation = "any"
/// documents = "docs.txt"
/// noise_words = "noisewords.txt"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LseConfig {
    /// Maximum number of documents returned per query.
    #[serde(default = "default_result_limit")]
    pub result_limit: usize,
    /// Trailing punctuation policy: `"any"` or `"strict"`.
    #[serde(default)]
    pub punctuation: PunctuationPolicy,
    /// File listing the document files to index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents: Option<PathBuf>,
    /// File listing the noise words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise_words: Option<PathBuf>,
}

impl Default for LseConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            punctuation: PunctuationPolicy::default(),
            documents: None,
            noise_words: None,
        }
    }
}

impl LseConfig {
    /// Normalizer tuning derived from this config
    pub fn normalizer_config(&self) -> NormalizerConfig {
        NormalizerConfig {
            punctuation: self.punctuation,
        }
    }

    /// Check values serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error if `result_limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.result_limit == 0 {
            return Err(Error::Config(
                "result_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Keyword index configuration
#
# Maximum number of documents returned per query (default: 5)
result_limit = 5

# Trailing punctuation policy: "any" (default) or "strict"
#   "any"    = any run of non-letters at the end of a word is stripped
#   "strict" = only . , ? : ; ! may be stripped
punctuation = "any"

# Corpus inputs, overridable with --docs / --noise
# documents = "docs.txt"
# noise_words = "noisewords.txt"
"#
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid config.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LseConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => {
                Error::Config(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }

    /// Read config from `path` if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::io(path, e))?;
        }
        Ok(())
    }
}
