//! Error types for the Janus scanner

use thiserror::Error;

/// Main error type for Janus operations
#[derive(Debug, Error)]
pub enum JanusError {
    #[error("Wordlist not found: {0}")]
    WordlistNotFound(String),

    #[error("Failed to write results to {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for Janus operations
pub type Result<T> = std::result::Result<T, JanusError>;
