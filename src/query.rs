//! Read-only queries over a slice of stored articles.
//!
//! All functions are linear scans that return borrowed articles in store
//! order, except [`personalized`], which sorts by recency.

use crate::models::{Article, Preferences, Sentiment};

pub fn by_category<'a>(articles: &'a [Article], category: &str) -> Vec<&'a Article> {
    articles.iter().filter(|a| a.category == category).collect()
}

pub fn by_sentiment(articles: &[Article], sentiment: Sentiment) -> Vec<&Article> {
    articles.iter().filter(|a| a.sentiment == sentiment).collect()
}

fn mentions(article: &Article, needle_lower: &str) -> bool {
    article.title.to_lowercase().contains(needle_lower)
        || article.description.to_lowercase().contains(needle_lower)
}

/// Case-insensitive substring search over title and description.
pub fn search<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.to_lowercase();
    articles.iter().filter(|a| mentions(a, &needle)).collect()
}

/// Apply preference filters, newest first, capped at `limit`.
///
/// Filters run in order: category membership, keyword mention (any keyword,
/// case-insensitive), source membership. An empty preference list passes
/// everything through. Articles with equal timestamps keep store order.
pub fn personalized<'a>(
    articles: &'a [Article],
    preferences: &Preferences,
    limit: usize,
) -> Vec<&'a Article> {
    let keywords: Vec<String> = preferences
        .keywords
        .iter()
        .map(|k| k.to_lowercase())
        .collect();

    let mut selected: Vec<&Article> = articles
        .iter()
        .filter(|a| preferences.categories.is_empty() || preferences.categories.contains(&a.category))
        .filter(|a| keywords.is_empty() || keywords.iter().any(|k| mentions(a, k)))
        .filter(|a| preferences.sources.is_empty() || preferences.sources.contains(&a.source))
        .collect();

    selected.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    selected.truncate(limit);
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 6, 12, 0, 0).unwrap()
    }

    fn article(
        title: &str,
        description: &str,
        category: &str,
        source: &str,
        sentiment: Sentiment,
        hours_ago: i64,
    ) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            url: String::new(),
            source: source.to_string(),
            published_at: base() - Duration::hours(hours_ago),
            category: category.to_string(),
            sentiment,
            summary: String::new(),
            keywords: vec![],
        }
    }

    fn fixture() -> Vec<Article> {
        vec![
            article("Rocket launch", "Orbit reached", "Science", "Space Wire", Sentiment::Positive, 5),
            article("Budget talks", "Parliament debates tax", "Politics", "Daily Ledger", Sentiment::Neutral, 1),
            article("Cup final", "Late goal decides ROCKET match", "Sports", "Sports Daily", Sentiment::Positive, 3),
            article("Market slump", "Shares drop on fears", "Business", "Daily Ledger", Sentiment::Negative, 2),
        ]
    }

    fn titles(articles: &[&Article]) -> Vec<String> {
        articles.iter().map(|a| a.title.clone()).collect()
    }

    #[test]
    fn test_by_category_exact() {
        let articles = fixture();
        assert_eq!(titles(&by_category(&articles, "Science")), vec!["Rocket launch"]);
        assert!(by_category(&articles, "science").is_empty());
    }

    #[test]
    fn test_by_sentiment() {
        let articles = fixture();
        assert_eq!(
            titles(&by_sentiment(&articles, Sentiment::Positive)),
            vec!["Rocket launch", "Cup final"]
        );
    }

    #[test]
    fn test_search_title_or_description() {
        let articles = fixture();
        assert_eq!(
            titles(&search(&articles, "rocket")),
            vec!["Rocket launch", "Cup final"]
        );
        assert_eq!(titles(&search(&articles, "PARLIAMENT")), vec!["Budget talks"]);
        assert!(search(&articles, "volcano").is_empty());
    }

    #[test]
    fn test_personalized_without_preferences_sorts_by_recency() {
        let articles = fixture();
        let result = personalized(&articles, &Preferences::default(), 10);
        assert_eq!(
            titles(&result),
            vec!["Budget talks", "Market slump", "Cup final", "Rocket launch"]
        );
        assert_eq!(personalized(&articles, &Preferences::default(), 2).len(), 2);
    }

    #[test]
    fn test_personalized_filters_compose() {
        let articles = fixture();
        let prefs = Preferences {
            categories: vec!["Politics".to_string(), "Business".to_string()],
            keywords: vec![],
            sources: vec!["Daily Ledger".to_string()],
        };
        assert_eq!(
            titles(&personalized(&articles, &prefs, 10)),
            vec!["Budget talks", "Market slump"]
        );
    }

    #[test]
    fn test_personalized_keywords_are_or() {
        let articles = fixture();
        let prefs = Preferences {
            keywords: vec!["Orbit".to_string(), "goal".to_string()],
            ..Preferences::default()
        };
        assert_eq!(
            titles(&personalized(&articles, &prefs, 10)),
            vec!["Cup final", "Rocket launch"]
        );
    }

    #[test]
    fn test_personalized_no_match() {
        let articles = fixture();
        let prefs = Preferences {
            sources: vec!["Nobody".to_string()],
            ..Preferences::default()
        };
        assert!(personalized(&articles, &prefs, 10).is_empty());
    }
}
