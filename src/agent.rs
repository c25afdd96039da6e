//! The news session: fetch, enrich, store and query.
//!
//! A [`NewsAgent`] owns its store and preferences. Mutating operations take
//! `&mut self`, so appends and clears can never interleave with reads.
//!
//! # Fetch Flow
//!
//! 1. If a live source is configured, ask it for headlines once.
//! 2. If that fails or returns nothing, generate sample articles instead.
//!    Live and sample results are never mixed.
//! 3. Enrich every article, then append the batch to the store.

use crate::enrichment::enrich;
use crate::error::FetchError;
use crate::models::{Article, Preferences, RawArticle, Sentiment, StatisticsSnapshot};
use crate::query;
use crate::sources::newsapi::{self, NewsApiClient};
use crate::sources::{HeadlineRequest, HeadlineSource, sample};
use crate::store::ArticleStore;
use chrono::Utc;
use std::time::Duration;
use tracing::{info, instrument, warn};

pub const DEFAULT_PERSONALIZED_LIMIT: usize = 10;

/// Settings resolved once when the agent is built.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    /// Query the live headline API. Without an API key this is ignored.
    pub use_live_source: bool,
    pub api_key: Option<String>,
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            use_live_source: false,
            api_key: None,
            endpoint: newsapi::DEFAULT_ENDPOINT.to_string(),
            timeout: newsapi::DEFAULT_TIMEOUT,
        }
    }
}

/// Where a fetched batch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchOrigin {
    Live,
    Sample,
}

#[derive(Debug)]
pub struct NewsAgent<S = NewsApiClient> {
    live_source: Option<S>,
    store: ArticleStore,
    preferences: Preferences,
    last_origin: Option<BatchOrigin>,
}

impl NewsAgent<NewsApiClient> {
    /// Build an agent backed by NewsAPI.org when the config enables it.
    ///
    /// # Errors
    ///
    /// Fails only if the live client cannot be constructed (bad endpoint URL,
    /// TLS backend setup).
    pub fn from_config(config: &AgentConfig) -> Result<Self, FetchError> {
        let live_source = match (config.use_live_source, config.api_key.as_deref()) {
            (true, Some(key)) if !key.is_empty() => Some(NewsApiClient::new(
                key,
                &config.endpoint,
                config.timeout,
            )?),
            (true, _) => {
                warn!("Live source requested without an API key; using sample data only");
                None
            }
            (false, _) => None,
        };
        info!(live = live_source.is_some(), "News agent configured");
        Ok(Self::new(live_source))
    }
}

impl<S: HeadlineSource> NewsAgent<S> {
    /// Create an agent. `None` means every fetch uses sample data.
    pub fn new(live_source: Option<S>) -> Self {
        Self {
            live_source,
            store: ArticleStore::new(),
            preferences: Preferences::default(),
            last_origin: None,
        }
    }

    pub fn uses_live_source(&self) -> bool {
        self.live_source.is_some()
    }

    /// Origin of the most recent fetch, if any.
    pub fn last_origin(&self) -> Option<BatchOrigin> {
        self.last_origin
    }

    /// Fetch, enrich and store a batch, returning the articles just added.
    ///
    /// Never fails: upstream problems are logged and replaced by sample data.
    #[instrument(level = "info", skip_all, fields(query = %request.query, category = %request.category, max = request.max_results))]
    pub async fn fetch_news(&mut self, request: &HeadlineRequest) -> &[Article] {
        let (origin, raw) = self.collect_raw(request).await;
        let enriched: Vec<Article> = raw.into_iter().map(enrich).collect();

        self.last_origin = Some(origin);
        let added = self.store.append(enriched);
        info!(count = added.len(), ?origin, "Fetched articles");
        added
    }

    async fn collect_raw(&self, request: &HeadlineRequest) -> (BatchOrigin, Vec<RawArticle>) {
        let Some(source) = &self.live_source else {
            return (BatchOrigin::Sample, sample_batch(request));
        };

        match source.fetch_headlines(request).await {
            Ok(articles) if !articles.is_empty() => (BatchOrigin::Live, articles),
            Ok(_) => {
                warn!("Upstream returned no usable articles; using sample data");
                (BatchOrigin::Sample, sample_batch(request))
            }
            Err(e) => {
                warn!(error = %e, "API fetch failed; using sample data");
                (BatchOrigin::Sample, sample_batch(request))
            }
        }
    }

    /// Replace the given preference lists; `None` leaves a list unchanged.
    pub fn set_preferences(
        &mut self,
        categories: Option<Vec<String>>,
        keywords: Option<Vec<String>>,
        sources: Option<Vec<String>>,
    ) {
        if let Some(categories) = categories {
            self.preferences.categories = categories;
        }
        if let Some(keywords) = keywords {
            self.preferences.keywords = keywords;
        }
        if let Some(sources) = sources {
            self.preferences.sources = sources;
        }
        info!(preferences = ?self.preferences, "User preferences updated");
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn articles(&self) -> &[Article] {
        self.store.articles()
    }

    pub fn personalized_news(&self, limit: usize) -> Vec<&Article> {
        query::personalized(self.store.articles(), &self.preferences, limit)
    }

    pub fn articles_by_category(&self, category: &str) -> Vec<&Article> {
        query::by_category(self.store.articles(), category)
    }

    pub fn articles_by_sentiment(&self, sentiment: Sentiment) -> Vec<&Article> {
        query::by_sentiment(self.store.articles(), sentiment)
    }

    pub fn search(&self, query: &str) -> Vec<&Article> {
        query::search(self.store.articles(), query)
    }

    pub fn statistics(&self) -> StatisticsSnapshot {
        StatisticsSnapshot {
            statistics: self.store.statistics().clone(),
            user_preferences: self.preferences.clone(),
        }
    }

    /// Empty the store and its counters. Preferences are kept.
    pub fn clear(&mut self) {
        self.store.clear();
        self.last_origin = None;
    }
}

fn sample_batch(request: &HeadlineRequest) -> Vec<RawArticle> {
    sample::generate(&request.category, request.max_results, Utc::now())
}
