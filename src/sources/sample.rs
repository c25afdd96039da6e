//! Built-in sample catalog used when no live source is available.
//!
//! The catalog is cycled [`CATALOG_CYCLES`] times. Position `i` in the
//! cycled catalog gets the title suffix ` - Update #{i / len + 1}`, the URL
//! `https://example.com/article/{i}` and a timestamp `i` hours before `now`,
//! so earlier positions are more recent.

use crate::models::{Category, RawArticle};
use chrono::{DateTime, Duration, Utc};
use tracing::{debug, instrument};

pub const CATALOG_CYCLES: usize = 3;
pub const SAMPLE_URL_PREFIX: &str = "https://example.com/article/";

struct SampleEntry {
    title: &'static str,
    description: &'static str,
    category: Category,
    source: &'static str,
}

const CATALOG: &[SampleEntry] = &[
    SampleEntry {
        title: "AI Revolution: New Breakthrough in Machine Learning",
        description: "Researchers announce major advancement in neural networks that could transform the industry.",
        category: Category::Technology,
        source: "Tech News",
    },
    SampleEntry {
        title: "Stock Market Reaches New Heights Amid Economic Recovery",
        description: "Major indices show significant gains as investors show confidence in economic outlook.",
        category: Category::Business,
        source: "Financial Times",
    },
    SampleEntry {
        title: "Championship Game Ends in Dramatic Fashion",
        description: "Thrilling finale sees underdog team clinch victory in final seconds of play.",
        category: Category::Sports,
        source: "Sports Daily",
    },
    SampleEntry {
        title: "New Health Study Reveals Benefits of Mediterranean Diet",
        description: "Long-term research confirms positive effects on heart health and longevity.",
        category: Category::Health,
        source: "Health Journal",
    },
    SampleEntry {
        title: "Climate Scientists Report Concerning Trends in Global Temperatures",
        description: "Latest data shows acceleration in warming patterns across multiple regions.",
        category: Category::Science,
        source: "Science Today",
    },
    SampleEntry {
        title: "Major Policy Changes Announced by Government Officials",
        description: "New legislation aims to address key concerns raised by citizens nationwide.",
        category: Category::Politics,
        source: "Political Review",
    },
    SampleEntry {
        title: "Blockbuster Film Breaks Box Office Records",
        description: "Latest release exceeds expectations with record-breaking opening weekend.",
        category: Category::Entertainment,
        source: "Entertainment Weekly",
    },
    SampleEntry {
        title: "Tech Giant Unveils Revolutionary New Product",
        description: "Company announces innovative device that promises to change how we interact with technology.",
        category: Category::Technology,
        source: "Tech Insider",
    },
    SampleEntry {
        title: "Small Business Growth Surges in Rural Areas",
        description: "Entrepreneurial activity shows significant increase outside major metropolitan regions.",
        category: Category::Business,
        source: "Business Week",
    },
    SampleEntry {
        title: "Olympic Athletes Prepare for Upcoming Games",
        description: "Training intensifies as competitors gear up for international competition.",
        category: Category::Sports,
        source: "Olympic News",
    },
];

/// Number of sample articles available for `category` (empty means any).
pub fn available(category: &str) -> usize {
    let per_cycle = CATALOG
        .iter()
        .filter(|entry| matches_category(entry, category))
        .count();
    per_cycle * CATALOG_CYCLES
}

fn matches_category(entry: &SampleEntry, category: &str) -> bool {
    category.is_empty() || entry.category.as_str() == category
}

/// Produce `min(count, available(category))` sample articles.
#[instrument(level = "debug", skip(now))]
pub fn generate(category: &str, count: usize, now: DateTime<Utc>) -> Vec<RawArticle> {
    let articles: Vec<RawArticle> = CATALOG
        .iter()
        .cycle()
        .take(CATALOG.len() * CATALOG_CYCLES)
        .enumerate()
        .filter(|(_, entry)| matches_category(entry, category))
        .take(count)
        .map(|(i, entry)| RawArticle {
            title: format!("{} - Update #{}", entry.title, i / CATALOG.len() + 1),
            description: entry.description.to_string(),
            url: format!("{SAMPLE_URL_PREFIX}{i}"),
            source: entry.source.to_string(),
            published_at: now - Duration::hours(i as i64),
            category: entry.category.as_str().to_string(),
        })
        .collect();

    debug!(count = articles.len(), "Generated sample articles");
    articles
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 5, 6, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_count_is_min_of_requested_and_available() {
        for category in ["", "Technology", "Health", "General", "Nonsense"] {
            for requested in [0, 1, 2, 5, 10, 20, 40] {
                let articles = generate(category, requested, now());
                assert_eq!(
                    articles.len(),
                    requested.min(available(category)),
                    "category={category:?} requested={requested}"
                );
                if !category.is_empty() {
                    assert!(articles.iter().all(|a| a.category == category));
                }
            }
        }
    }

    #[test]
    fn test_available_counts() {
        assert_eq!(available(""), 30);
        assert_eq!(available("Technology"), 6);
        assert_eq!(available("Science"), 3);
        assert_eq!(available("General"), 0);
    }

    #[test]
    fn test_update_numbers_and_urls() {
        let articles = generate("", 12, now());
        assert!(articles[0].title.ends_with(" - Update #1"));
        assert_eq!(articles[0].url, "https://example.com/article/0");
        assert!(articles[9].title.ends_with(" - Update #1"));
        assert!(articles[10].title.ends_with(" - Update #2"));
        assert_eq!(articles[11].url, "https://example.com/article/11");
    }

    #[test]
    fn test_timestamps_step_back_by_position() {
        let articles = generate("Science", 3, now());
        // Science sits at catalog position 4
        assert_eq!(articles[0].published_at, now() - Duration::hours(4));
        assert_eq!(articles[1].published_at, now() - Duration::hours(14));
        assert_eq!(articles[2].published_at, now() - Duration::hours(24));
        assert!(articles[2].title.ends_with(" - Update #3"));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate("Business", 5, now()), generate("Business", 5, now()));
    }
}
