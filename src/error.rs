//! Error types for the headline fetcher and the command-line front end.
//!
//! Only two things in this crate can fail: talking to the upstream headline
//! API ([`FetchError`]) and the binary's own file and configuration handling
//! ([`AppError`]). Enrichment and queries are total functions.

use thiserror::Error;

/// Why a live headline fetch produced no articles.
///
/// The agent never surfaces this to its callers. It is logged and the
/// sample generator is used instead.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("upstream reported an error ({code}): {message}")]
    Api { code: String, message: String },

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Failures in the binary's own setup and output steps.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid preferences file {path}: {source}")]
    Preferences {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("headline client setup failed: {0}")]
    Client(#[from] FetchError),
}

pub type Result<T> = std::result::Result<T, AppError>;
