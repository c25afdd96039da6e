//! In-memory article store with running statistics.
//!
//! Articles are kept in insertion order. Counters are updated in the same
//! call that appends, and [`ArticleStore::clear`] resets both together.

use crate::models::{Article, Statistics};
use tracing::info;

#[derive(Debug, Default)]
pub struct ArticleStore {
    articles: Vec<Article>,
    statistics: Statistics,
}

impl ArticleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a batch and return the slice that was just added.
    pub fn append(&mut self, batch: Vec<Article>) -> &[Article] {
        let start = self.articles.len();
        for article in &batch {
            self.statistics.record(article);
        }
        self.articles.extend(batch);
        &self.articles[start..]
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Drop every article and zero all counters.
    pub fn clear(&mut self) {
        let dropped = self.articles.len();
        self.articles.clear();
        self.statistics = Statistics::default();
        info!(dropped, "Articles cleared");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use chrono::Utc;

    fn article(title: &str, category: &str, source: &str) -> Article {
        Article {
            title: title.to_string(),
            description: String::new(),
            url: String::new(),
            source: source.to_string(),
            published_at: Utc::now(),
            category: category.to_string(),
            sentiment: Sentiment::Neutral,
            summary: title.to_string(),
            keywords: vec![],
        }
    }

    #[test]
    fn test_append_returns_new_tail() {
        let mut store = ArticleStore::new();
        store.append(vec![article("one", "Sports", "A")]);
        let added = store.append(vec![article("two", "Sports", "B"), article("three", "Health", "A")]);

        assert_eq!(added.len(), 2);
        assert_eq!(added[0].title, "two");
        assert_eq!(store.len(), 3);
        assert_eq!(store.articles()[0].title, "one");
    }

    #[test]
    fn test_counters_follow_appends() {
        let mut store = ArticleStore::new();
        store.append(vec![article("one", "Sports", "A"), article("two", "Sports", "B")]);

        let stats = store.statistics();
        assert_eq!(stats.total_articles, 2);
        assert_eq!(stats.by_category["Sports"], 2);
        assert_eq!(stats.by_sentiment[&Sentiment::Neutral], 2);
        assert_eq!(stats.by_source.len(), 2);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = ArticleStore::new();
        store.append(vec![article("one", "Sports", "A")]);
        store.clear();

        assert!(store.is_empty());
        assert_eq!(store.statistics(), &Statistics::default());
    }

    #[test]
    fn test_empty_batch() {
        let mut store = ArticleStore::new();
        assert!(store.append(Vec::new()).is_empty());
        assert_eq!(store.statistics().total_articles, 0);
    }
}
