//! NewsAPI.org top-headlines client.
//!
//! Issues a single `GET` against the top-headlines endpoint per fetch. The
//! API key travels in the `X-Api-Key` header so it never shows up in logged
//! URLs.
//!
//! # Request Parameters
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | `language` | always `en` |
//! | `pageSize` | `max_results` |
//! | `q` | the query, only when non-empty |
//! | `category` | lowercased category, omitted when empty or `General` |
//!
//! Records without a title, or whose title is the `[Removed]` placeholder,
//! are dropped.

use super::{HeadlineRequest, HeadlineSource};
use crate::error::FetchError;
use crate::models::{Category, RawArticle};
use crate::utils::{parse_published_at, truncate_for_log};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/top-headlines";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const REMOVED_TITLE: &str = "[Removed]";
const UNKNOWN_SOURCE: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct TopHeadlinesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<ApiArticle>,
    code: Option<String>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    source: Option<ApiSource>,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSource {
    name: Option<String>,
}

/// Client for the NewsAPI.org top-headlines endpoint.
pub struct NewsApiClient {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl fmt::Debug for NewsApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl NewsApiClient {
    /// Create a client for `endpoint` with a bounded request timeout.
    ///
    /// # Errors
    ///
    /// Fails if the endpoint is not a valid URL or the HTTP client cannot be built.
    pub fn new(
        api_key: impl Into<String>,
        endpoint: &str,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("news_genie/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
        })
    }

    /// Full request URL for `request`, without the credential.
    pub fn request_url(&self, request: &HeadlineRequest) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .extend_pairs(request_params(request));
        url
    }
}

/// Query parameters for a top-headlines request.
pub fn request_params(request: &HeadlineRequest) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("pageSize", request.max_results.to_string()),
        ("language", "en".to_string()),
    ];
    if !request.query.is_empty() {
        params.push(("q", request.query.clone()));
    }
    if !request.category.is_empty() && request.category != Category::General.as_str() {
        params.push(("category", request.category.to_lowercase()));
    }
    params
}

/// Decode a top-headlines response body into raw articles.
///
/// `category` labels every returned article; an empty category becomes
/// `General`. Timestamps that fail to parse become `now`.
pub fn parse_headlines(
    body: &str,
    category: &str,
    now: DateTime<Utc>,
) -> Result<Vec<RawArticle>, FetchError> {
    let response: TopHeadlinesResponse = serde_json::from_str(body)?;
    if response.status != "ok" {
        return Err(FetchError::Api {
            code: response.code.unwrap_or_else(|| "unknown".to_string()),
            message: response
                .message
                .unwrap_or_else(|| "Unknown error".to_string()),
        });
    }

    let category = if category.is_empty() {
        Category::General.as_str().to_string()
    } else {
        category.to_string()
    };

    let total = response.articles.len();
    let articles: Vec<RawArticle> = response
        .articles
        .into_iter()
        .filter_map(|item| {
            let title = item.title.filter(|t| !t.is_empty() && t != REMOVED_TITLE)?;
            Some(RawArticle {
                title,
                description: item.description.unwrap_or_default(),
                url: item.url.unwrap_or_default(),
                source: item
                    .source
                    .and_then(|s| s.name)
                    .unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
                published_at: parse_published_at(item.published_at.as_deref(), now),
                category: category.clone(),
            })
        })
        .collect();

    debug!(
        received = total,
        kept = articles.len(),
        "Decoded top-headlines payload"
    );
    Ok(articles)
}

impl HeadlineSource for NewsApiClient {
    #[instrument(level = "info", skip_all, fields(query = %request.query, category = %request.category, max = request.max_results))]
    async fn fetch_headlines(
        &self,
        request: &HeadlineRequest,
    ) -> Result<Vec<RawArticle>, FetchError> {
        let t0 = Instant::now();
        let url = self.request_url(request);
        debug!(%url, "Requesting top headlines");

        let response = self
            .client
            .get(url)
            .header("X-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "Top-headlines request rejected"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: truncate_for_log(&body, 300),
            });
        }

        let articles = parse_headlines(&body, &request.category, Utc::now())?;
        info!(
            count = articles.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched top headlines"
        );
        Ok(articles)
    }
}
