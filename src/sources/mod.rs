//! Article sources: the live headline API and the built-in sample catalog.
//!
//! # Sources
//!
//! | Source | Module | Notes |
//! |--------|--------|-------|
//! | NewsAPI.org top headlines | [`newsapi`] | Requires an API key; one request per fetch |
//! | Sample catalog | [`sample`] | Deterministic, never fails |
//!
//! Live sources implement [`HeadlineSource`] and report failure as a typed
//! [`FetchError`]. The agent decides what to do with that failure; sources
//! never fall back on their own.

use crate::error::FetchError;
use crate::models::RawArticle;

pub mod newsapi;
pub mod sample;

/// Parameters for a single headline fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlineRequest {
    /// Free-text query; empty means no query.
    pub query: String,
    /// Category name; empty means any category.
    pub category: String,
    pub max_results: usize,
}

impl Default for HeadlineRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            max_results: 20,
        }
    }
}

/// A remote collaborator that can return raw headlines.
///
/// A call either yields every record it accepted or fails as a whole.
pub trait HeadlineSource {
    async fn fetch_headlines(
        &self,
        request: &HeadlineRequest,
    ) -> Result<Vec<RawArticle>, FetchError>;
}
