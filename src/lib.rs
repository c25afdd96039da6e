//! # News Genie
//!
//! Fetches news headlines from NewsAPI.org (or a built-in sample catalog),
//! tags each article with a naive sentiment label, a short summary and a
//! handful of keywords, and answers filtering, search and personalization
//! queries over the articles collected in one session.
//!
//! ## Architecture
//!
//! 1. **Sources** ([`sources`]): the live headline API behind the
//!    [`sources::HeadlineSource`] trait, plus deterministic sample data
//! 2. **Enrichment** ([`enrichment`]): sentiment, summary and keywords
//! 3. **Store** ([`store`]): ordered articles with running counters
//! 4. **Queries** ([`query`]): category, sentiment, search, personalized
//! 5. **Session** ([`agent`]): ties the above together
//! 6. **Output** ([`outputs`]): JSON and Markdown rendering
//!
//! ## Example
//!
//! ```no_run
//! use news_genie::agent::{AgentConfig, NewsAgent};
//! use news_genie::sources::HeadlineRequest;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut agent = NewsAgent::from_config(&AgentConfig::default())?;
//! let request = HeadlineRequest {
//!     category: "Technology".to_string(),
//!     max_results: 10,
//!     ..HeadlineRequest::default()
//! };
//! let fetched = agent.fetch_news(&request).await.len();
//! println!("fetched {fetched} articles");
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod enrichment;
pub mod error;
pub mod models;
pub mod outputs;
pub mod query;
pub mod sources;
pub mod store;
pub mod utils;

pub use agent::{AgentConfig, BatchOrigin, NewsAgent};
pub use error::{AppError, FetchError};
pub use models::{Article, Category, Preferences, RawArticle, Sentiment, Statistics, StatisticsSnapshot};
