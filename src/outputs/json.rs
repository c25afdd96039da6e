//! JSON output for query results and statistics snapshots.
//!
//! Exports are written to `{json_output_dir}/{date}/news_{HHMMSS}.json`,
//! one file per run, using the UTC time the export was generated.

use crate::error::Result;
use crate::models::{Article, StatisticsSnapshot};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs;
use tracing::{error, info, instrument};

/// One run's worth of output: the selected articles and the counters.
#[derive(Debug, Serialize)]
pub struct Export<'a> {
    pub generated_at: DateTime<Utc>,
    pub statistics: &'a StatisticsSnapshot,
    pub articles: &'a [&'a Article],
}

pub fn articles_to_json(articles: &[&Article]) -> Result<String> {
    Ok(serde_json::to_string_pretty(articles)?)
}

pub fn statistics_to_json(snapshot: &StatisticsSnapshot) -> Result<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Path of the export file for `generated_at` under `json_output_dir`.
pub fn export_path(json_output_dir: &str, generated_at: DateTime<Utc>) -> PathBuf {
    PathBuf::from(json_output_dir)
        .join(generated_at.format("%Y-%m-%d").to_string())
        .join(format!("news_{}.json", generated_at.format("%H%M%S")))
}

/// Write an [`Export`] under `json_output_dir`, creating the date directory.
///
/// Returns the path of the written file.
#[instrument(level = "info", skip_all, fields(json_output_dir = %json_output_dir))]
pub async fn write_export(json_output_dir: &str, export: &Export<'_>) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(export)?;
    let path = export_path(json_output_dir, export.generated_at);

    if let Some(dir) = path.parent() {
        if let Err(e) = fs::create_dir_all(dir).await {
            error!(dir = %dir.display(), error = %e, "Failed to create JSON dir");
            return Err(e.into());
        }
    }

    fs::write(&path, json).await?;
    info!(path = %path.display(), articles = export.articles.len(), "Wrote JSON export");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Preferences, Sentiment, Statistics};
    use chrono::TimeZone;

    fn article() -> Article {
        Article {
            title: "Cup final".to_string(),
            description: "Late goal decides match".to_string(),
            url: "https://example.com/article/2".to_string(),
            source: "Sports Daily".to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 5, 6, 10, 0, 0).unwrap(),
            category: "Sports".to_string(),
            sentiment: Sentiment::Neutral,
            summary: "Late goal decides match...".to_string(),
            keywords: vec!["final".to_string(), "decides".to_string()],
        }
    }

    fn snapshot() -> StatisticsSnapshot {
        let mut statistics = Statistics::default();
        statistics.record(&article());
        StatisticsSnapshot {
            statistics,
            user_preferences: Preferences::default(),
        }
    }

    #[test]
    fn test_articles_to_json() {
        let a = article();
        let json = articles_to_json(&[&a]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["title"], "Cup final");
        assert_eq!(value[0]["sentiment"], "neutral");
        assert_eq!(value[0]["published_at"], "2025-05-06T10:00:00Z");
    }

    #[test]
    fn test_statistics_to_json() {
        let json = statistics_to_json(&snapshot()).unwrap();
        assert!(json.contains("\"total_articles\": 1"));
        assert!(json.contains("\"Sports Daily\": 1"));
    }

    #[test]
    fn test_export_path() {
        let at = Utc.with_ymd_and_hms(2025, 5, 6, 14, 30, 5).unwrap();
        let path = export_path("/tmp/out", at);
        assert_eq!(path, PathBuf::from("/tmp/out/2025-05-06/news_143005.json"));
    }

    #[tokio::test]
    async fn test_write_export() {
        let dir = std::env::temp_dir().join(format!("news_genie_export_{}", std::process::id()));
        let dir_str = dir.to_string_lossy().to_string();
        let a = article();
        let articles = [&a];
        let stats = snapshot();
        let export = Export {
            generated_at: Utc.with_ymd_and_hms(2025, 5, 6, 14, 30, 5).unwrap(),
            statistics: &stats,
            articles: &articles,
        };

        let path = write_export(&dir_str, &export).await.unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["statistics"]["total_articles"], 1);
        assert_eq!(value["articles"][0]["source"], "Sports Daily");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
