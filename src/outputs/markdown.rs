//! Markdown rendering of articles grouped by category.
//!
//! Categories are listed alphabetically with a linked table of contents.
//! Inside a category, articles keep the order they were passed in.

use crate::models::{Article, StatisticsSnapshot};
use crate::utils::slugify_title;
use std::collections::BTreeMap;
use std::fmt::Write;

pub fn articles_to_markdown(heading: &str, articles: &[&Article]) -> String {
    let mut md = String::new();
    let _ = writeln!(md, "# {heading}\n");

    if articles.is_empty() {
        md.push_str("_No articles._\n");
        return md;
    }

    let mut by_category: BTreeMap<&str, Vec<&Article>> = BTreeMap::new();
    for &article in articles {
        by_category
            .entry(article.category.as_str())
            .or_default()
            .push(article);
    }

    for (category, items) in &by_category {
        let _ = writeln!(
            md,
            "- [**{}**](#{}) ({})",
            category,
            slugify_title(category),
            items.len()
        );
    }
    md.push('\n');

    for (category, items) in &by_category {
        let _ = writeln!(md, "## {category}\n");
        for article in items {
            let _ = writeln!(md, "### {}\n", article.title);
            let _ = writeln!(
                md,
                "<small>`{}` · {} · {}</small>\n",
                article.source,
                article.published_at.format("%Y-%m-%d %H:%M UTC"),
                article.sentiment
            );
            let _ = writeln!(md, "{}\n", article.summary);
            if !article.keywords.is_empty() {
                let _ = writeln!(md, "**Keywords:** {}\n", article.keywords.join(", "));
            }
            if !article.url.is_empty() {
                let _ = writeln!(md, "[Read more]({})\n", article.url);
            }
        }
    }
    md
}

pub fn statistics_to_markdown(snapshot: &StatisticsSnapshot) -> String {
    let stats = &snapshot.statistics;
    let mut md = String::new();
    let _ = writeln!(md, "# Statistics\n");
    let _ = writeln!(md, "Total articles: {}\n", stats.total_articles);

    let _ = writeln!(md, "## By category\n");
    for (category, n) in &stats.by_category {
        let _ = writeln!(md, "- {category}: {n}");
    }
    let _ = writeln!(md, "\n## By sentiment\n");
    for (sentiment, n) in &stats.by_sentiment {
        let _ = writeln!(md, "- {sentiment}: {n}");
    }
    let _ = writeln!(md, "\n## By source\n");
    for (source, n) in &stats.by_source {
        let _ = writeln!(md, "- {source}: {n}");
    }

    let prefs = &snapshot.user_preferences;
    if !prefs.is_empty() {
        let _ = writeln!(md, "\n## Preferences\n");
        let _ = writeln!(md, "- Categories: {}", prefs.categories.join(", "));
        let _ = writeln!(md, "- Keywords: {}", prefs.keywords.join(", "));
        let _ = writeln!(md, "- Sources: {}", prefs.sources.join(", "));
    }
    md
}
