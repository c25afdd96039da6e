//! Command-line interface definitions for News Genie.
//!
//! All options can be given as flags; credentials and endpoint settings can
//! also come from environment variables.

use clap::{Parser, ValueEnum};
use news_genie::Sentiment;
use news_genie::agent::AgentConfig;
use news_genie::sources::newsapi;
use std::time::Duration;

/// How results are printed to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}

/// Command-line arguments for one News Genie session.
///
/// # Examples
///
/// ```sh
/// # Sample data, technology headlines
/// news_genie --category Technology --max-results 10
///
/// # Live headlines, personalized by keyword
/// NEWSAPI_KEY=... news_genie --live --prefer-keyword climate --format markdown
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// NewsAPI.org API key
    #[arg(long, env = "NEWSAPI_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Query the live headline API (requires an API key); otherwise sample data is used
    #[arg(long, env = "NEWS_GENIE_LIVE")]
    pub live: bool,

    /// Top-headlines endpoint
    #[arg(long, env = "NEWSAPI_ENDPOINT", default_value = newsapi::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Request timeout for the live API, in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Free-text headline query
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category to fetch (Business, Technology, Sports, Entertainment, Health, Science, Politics, General)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Number of articles to fetch
    #[arg(short = 'n', long, default_value_t = 20)]
    pub max_results: usize,

    /// Maximum number of personalized results
    #[arg(short, long, default_value_t = 10)]
    pub limit: usize,

    /// YAML file with `categories`, `keywords` and `sources` lists
    #[arg(short, long)]
    pub preferences: Option<String>,

    /// Preferred category (repeatable)
    #[arg(long = "prefer-category")]
    pub prefer_categories: Vec<String>,

    /// Preferred keyword (repeatable)
    #[arg(long = "prefer-keyword")]
    pub prefer_keywords: Vec<String>,

    /// Preferred source (repeatable)
    #[arg(long = "prefer-source")]
    pub prefer_sources: Vec<String>,

    /// Print articles matching this search instead of personalized results
    #[arg(short, long, conflicts_with = "sentiment")]
    pub search: Option<String>,

    /// Print articles with this sentiment instead of personalized results
    #[arg(long)]
    pub sentiment: Option<Sentiment>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Directory for a JSON export of the results and statistics
    #[arg(short, long)]
    pub json_output_dir: Option<String>,
}

impl Cli {
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            use_live_source: self.live,
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Preference lists given on the command line; empty flags yield `None`.
    pub fn preference_overrides(
        &self,
    ) -> (Option<Vec<String>>, Option<Vec<String>>, Option<Vec<String>>) {
        fn non_empty(v: &[String]) -> Option<Vec<String>> {
            (!v.is_empty()).then(|| v.to_vec())
        }
        (
            non_empty(&self.prefer_categories),
            non_empty(&self.prefer_keywords),
            non_empty(&self.prefer_sources),
        )
    }
}
