//! Data models for raw and enriched news articles.
//!
//! This module defines the core data structures used throughout the crate:
//! - [`RawArticle`]: an article as delivered by a headline source, before enrichment
//! - [`Article`]: an enriched article with sentiment, summary and keywords
//! - [`Category`] and [`Sentiment`]: the fixed label sets
//! - [`Preferences`]: filters for personalized results
//! - [`Statistics`] and [`StatisticsSnapshot`]: running counters over stored articles
//!
//! Only [`crate::enrichment::enrich`] turns a [`RawArticle`] into an
//! [`Article`], so everything that reaches the store is fully enriched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The known news categories.
///
/// Articles carry their category as text, so values outside this set are
/// stored unchanged. This enum names the values the sample catalog and the
/// upstream API understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Business,
    Technology,
    Sports,
    Entertainment,
    Health,
    Science,
    Politics,
    General,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Business,
        Category::Technology,
        Category::Sports,
        Category::Entertainment,
        Category::Health,
        Category::Science,
        Category::Politics,
        Category::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Technology => "Technology",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Science => "Science",
            Category::Politics => "Politics",
            Category::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Naive sentiment label assigned during enrichment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(format!(
                "unknown sentiment '{other}' (expected positive, negative or neutral)"
            )),
        }
    }
}

/// An article as produced by a headline source or the sample generator.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArticle {
    pub title: String,
    /// Empty when the source did not provide one.
    pub description: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub category: String,
}

/// A fully enriched news article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
    pub category: String,
    pub sentiment: Sentiment,
    pub summary: String,
    /// At most five lowercase tokens, in first-seen order.
    pub keywords: Vec<String>,
}

/// User filters applied by personalized queries.
///
/// An empty list means "no restriction" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub categories: Vec<String>,
    pub keywords: Vec<String>,
    pub sources: Vec<String>,
}

impl Preferences {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.keywords.is_empty() && self.sources.is_empty()
    }
}

/// Running counters over every article appended to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub total_articles: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_sentiment: BTreeMap<Sentiment, usize>,
    pub by_source: BTreeMap<String, usize>,
}

impl Statistics {
    /// Count one more article.
    pub fn record(&mut self, article: &Article) {
        self.total_articles += 1;
        *self.by_category.entry(article.category.clone()).or_default() += 1;
        *self.by_sentiment.entry(article.sentiment).or_default() += 1;
        *self.by_source.entry(article.source.clone()).or_default() += 1;
    }
}

/// Read-only view returned by [`crate::agent::NewsAgent::statistics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    #[serde(flatten)]
    pub statistics: Statistics,
    pub user_preferences: Preferences,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn article(category: &str, sentiment: Sentiment, source: &str) -> Article {
        Article {
            title: "Title".to_string(),
            description: "Description".to_string(),
            url: String::new(),
            source: source.to_string(),
            published_at: Utc.with_ymd_and_hms(2025, 5, 6, 14, 30, 0).unwrap(),
            category: category.to_string(),
            sentiment,
            summary: "Title".to_string(),
            keywords: vec![],
        }
    }

    #[test]
    fn test_sentiment_defaults_to_neutral() {
        assert_eq!(Sentiment::default(), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_from_str() {
        assert_eq!("Positive".parse::<Sentiment>(), Ok(Sentiment::Positive));
        assert_eq!(" negative ".parse::<Sentiment>(), Ok(Sentiment::Negative));
        assert!("angry".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Technology.to_string(), "Technology");
        assert_eq!(Category::ALL.len(), 8);
    }

    #[test]
    fn test_statistics_record() {
        let mut stats = Statistics::default();
        stats.record(&article("Technology", Sentiment::Positive, "Tech News"));
        stats.record(&article("Technology", Sentiment::Neutral, "Tech Insider"));
        stats.record(&article("Sports", Sentiment::Positive, "Tech News"));

        assert_eq!(stats.total_articles, 3);
        assert_eq!(stats.by_category["Technology"], 2);
        assert_eq!(stats.by_category["Sports"], 1);
        assert_eq!(stats.by_sentiment[&Sentiment::Positive], 2);
        assert_eq!(stats.by_source["Tech News"], 2);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut stats = Statistics::default();
        stats.record(&article("Health", Sentiment::Negative, "Health Journal"));
        let snapshot = StatisticsSnapshot {
            statistics: stats,
            user_preferences: Preferences::default(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["total_articles"], 1);
        assert_eq!(json["by_sentiment"]["negative"], 1);
        assert_eq!(json["by_category"]["Health"], 1);
        assert_eq!(json["user_preferences"]["categories"], serde_json::json!([]));
    }

    #[test]
    fn test_preferences_partial_yaml() {
        let prefs: Preferences = serde_yaml::from_str("keywords:\n  - climate\n").unwrap();
        assert_eq!(prefs.keywords, vec!["climate".to_string()]);
        assert!(prefs.categories.is_empty());
        assert!(!prefs.is_empty());
    }
}
