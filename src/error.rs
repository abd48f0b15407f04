use std::path::PathBuf;
use thiserror::Error;

/// Failure while analyzing a single record. The batch runner logs and skips these.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("record is not a valid article: {0}")]
    InvalidRecord(#[from] serde_json::Error),

    #[error("sentiment score is not finite: {0}")]
    NonFiniteScore(f64),
}

/// Failure while loading classifier configuration from an explicit path.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("JSON config {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} points to a non-existent path")]
    MissingPath(String),

    #[error("invalid weights: {0}")]
    InvalidWeights(String),
}
