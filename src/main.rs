//! # News Genie
//!
//! Runs one news session from the command line: fetch a batch of headlines
//! (live or sample), apply preferences, print the selected articles and the
//! session statistics, and optionally write a JSON export.
//!
//! ## Usage
//!
//! ```sh
//! news_genie --category Technology --max-results 10 --format json
//! ```

use clap::Parser;
use news_genie::agent::NewsAgent;
use news_genie::error::AppError;
use news_genie::models::{Article, Preferences};
use news_genie::outputs::{json, markdown};
use news_genie::sources::HeadlineRequest;
use news_genie::utils::ensure_writable_dir;
use std::error::Error;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;

use cli::{Cli, OutputFormat};

#[instrument(level = "info")]
async fn load_preferences(path: &str) -> Result<Preferences, AppError> {
    let raw = tokio::fs::read_to_string(path).await?;
    serde_yaml::from_str(&raw).map_err(|source| AppError::Preferences {
        path: path.to_string(),
        source,
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    // Logs go to stderr so stdout stays clean for JSON/Markdown output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args.category, ?args.query, max_results = args.max_results, "Parsed CLI arguments");

    if let Some(dir) = &args.json_output_dir {
        if let Err(e) = ensure_writable_dir(dir).await {
            error!(path = %dir, error = %e, "JSON output directory is not writable");
            return Err(e.into());
        }
    }

    let mut agent = NewsAgent::from_config(&args.agent_config()).map_err(AppError::from)?;

    // File preferences first, then command-line lists override per dimension
    if let Some(path) = &args.preferences {
        let prefs = load_preferences(path).await?;
        info!(path = %path, "Loaded preferences file");
        agent.set_preferences(Some(prefs.categories), Some(prefs.keywords), Some(prefs.sources));
    }
    let (categories, keywords, sources) = args.preference_overrides();
    if categories.is_some() || keywords.is_some() || sources.is_some() {
        agent.set_preferences(categories, keywords, sources);
    }

    let request = HeadlineRequest {
        query: args.query.clone(),
        category: args.category.clone(),
        max_results: args.max_results,
    };
    let fetched = agent.fetch_news(&request).await.len();
    info!(fetched, origin = ?agent.last_origin(), "Fetch complete");

    let (heading, selected): (String, Vec<&Article>) = if let Some(q) = &args.search {
        (format!("Search: {q}"), agent.search(q))
    } else if let Some(sentiment) = args.sentiment {
        (
            format!("Sentiment: {sentiment}"),
            agent.articles_by_sentiment(sentiment),
        )
    } else {
        (
            "Personalized news".to_string(),
            agent.personalized_news(args.limit),
        )
    };
    let snapshot = agent.statistics();

    match args.format {
        OutputFormat::Json => {
            println!("{}", json::articles_to_json(&selected)?);
            println!("{}", json::statistics_to_json(&snapshot)?);
        }
        OutputFormat::Markdown => {
            println!("{}", markdown::articles_to_markdown(&heading, &selected));
            println!("{}", markdown::statistics_to_markdown(&snapshot));
        }
    }

    if let Some(dir) = &args.json_output_dir {
        let export = json::Export {
            generated_at: chrono::Utc::now(),
            statistics: &snapshot,
            articles: &selected,
        };
        if let Err(e) = json::write_export(dir, &export).await {
            error!(error = %e, "Failed to write JSON export");
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        selected = selected.len(),
        "Execution complete"
    );
    Ok(())
}
