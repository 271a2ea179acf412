//! Error types for the keyword index
//!
//! The indexing and query core is total: rejected tokens and unknown keywords
//! are ordinary outcomes. Errors only come from the layers that read corpus
//! files and configuration. We use `thiserror` for `Display` and `Error`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for lse operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the keyword index
#[derive(Debug, Error)]
pub enum Error {
    /// A corpus, noise-word or config file could not be read
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// Configuration could not be parsed or holds an invalid value
    #[error("Config error: {0}")]
    Config(String),

    /// Input that cannot be indexed or queried
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Build an invalid-input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}
