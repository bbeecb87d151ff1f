use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid command-line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Manifest file {path} not found")]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to load manifest from {path}: {reason}")]
    ManifestLoad { path: PathBuf, reason: String },

    #[error("Failed to parse manifest {path}: {reason}")]
    ManifestParse { path: PathBuf, reason: String },

    #[error("Manifest validation failed: {details}")]
    ManifestValidation { details: String },

    #[error("Output directory creation failed at {path}: {reason}")]
    OutputDirectoryCreation { path: PathBuf, reason: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Failure of a single manifest entry. These are counted, never propagated.
///
/// Messages do not repeat their source; render with `{:#}` through
/// [`eyre::Report`] to get the whole chain.
#[derive(Error, Debug)]
pub enum ImageFetchError {
    #[error("refusing to write to unsafe file name {name:?}")]
    UnsafeName { name: String },

    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ImageFetchError {
    /// Whether the failure happened while talking to the remote host, as
    /// opposed to locally.
    pub fn is_request_failure(&self) -> bool {
        matches!(
            self,
            ImageFetchError::Request { .. }
                | ImageFetchError::Status { .. }
                | ImageFetchError::Body { .. }
        )
    }

    /// Human-readable cause including every source in the chain.
    pub fn cause_chain(self) -> String {
        format!("{:#}", eyre::Report::new(self))
    }
}
