use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SitemapError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed index {path}: {source}")]
    MalformedIndex {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Index {path} is not an array of entries with string `id` and `title`: {source}")]
    MissingField {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to write sitemap to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

impl SitemapError {
    /// Sorts a JSON decoding failure into a shape error (not an array, or an
    /// entry lacking a string `id`/`title`) or a syntax error.
    pub fn from_json(path: PathBuf, source: serde_json::Error) -> Self {
        match source.classify() {
            serde_json::error::Category::Data => SitemapError::MissingField { path, source },
            _ => SitemapError::MalformedIndex { path, source },
        }
    }
}

pub type Result<T> = std::result::Result<T, SitemapError>;
