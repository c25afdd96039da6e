//! Article enrichment: sentiment, summary and keyword extraction.
//!
//! Every function here is a pure, total function of the article text.
//! [`enrich`] is the single place a [`RawArticle`] becomes an [`Article`].
//!
//! # Sentiment
//!
//! The title and description are lowercased and scanned for fixed keyword
//! stems. Matching is substring based, so `"rise"` also hits `"surprise"`.
//! Each stem that occurs counts once. Positive wins only when its count is
//! strictly greater than the negative count, and the other way round; a tie
//! (including zero against zero) is neutral.
//!
//! # Summary
//!
//! The first sentence of the description if it is longer than 20 characters,
//! otherwise the first 100 characters of the description followed by `...`.
//! Articles without a description are summarized by their title.
//!
//! # Keywords
//!
//! Word runs longer than four characters that are not stop words, in the
//! order they first appear, capped at [`MAX_KEYWORDS`].

use crate::models::{Article, RawArticle, Sentiment};
use itertools::Itertools;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, instrument};

pub const POSITIVE_KEYWORDS: &[&str] = &[
    "success",
    "growth",
    "win",
    "breakthrough",
    "achievement",
    "innovation",
    "improve",
    "gain",
    "rise",
    "profit",
];

pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "fail",
    "crisis",
    "decline",
    "loss",
    "problem",
    "concern",
    "risk",
    "threat",
    "drop",
    "controversy",
];

pub const NEUTRAL_KEYWORDS: &[&str] = &["report", "announce", "state", "update", "change", "develop"];

pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "as", "is", "was",
];

pub const MAX_KEYWORDS: usize = 5;

/// Tokens of this many characters or fewer are never keywords.
pub const MIN_KEYWORD_EXCLUSIVE_LEN: usize = 4;

const SUMMARY_MIN_SENTENCE_LEN: usize = 20;
const SUMMARY_FALLBACK_CHARS: usize = 100;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("static regex"));

/// Per-list keyword hit counts for one article.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentScores {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentScores {
    pub fn label(&self) -> Sentiment {
        if self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

fn searchable_text(title: &str, description: &str) -> String {
    format!("{title} {description}").to_lowercase()
}

fn count_hits(text: &str, stems: &[&str]) -> usize {
    stems.iter().filter(|stem| text.contains(*stem)).count()
}

/// Score title and description against the fixed sentiment lists.
pub fn sentiment_scores(title: &str, description: &str) -> SentimentScores {
    let text = searchable_text(title, description);
    SentimentScores {
        positive: count_hits(&text, POSITIVE_KEYWORDS),
        negative: count_hits(&text, NEGATIVE_KEYWORDS),
        neutral: count_hits(&text, NEUTRAL_KEYWORDS),
    }
}

pub fn analyze_sentiment(title: &str, description: &str) -> Sentiment {
    sentiment_scores(title, description).label()
}

/// Build a short summary from the description, falling back to the title.
pub fn summarize(title: &str, description: &str) -> String {
    if description.is_empty() {
        return title.to_string();
    }

    let first_sentence = description.split('.').next().unwrap_or_default().trim();
    let candidate = format!("{first_sentence}.");
    if candidate.chars().count() > SUMMARY_MIN_SENTENCE_LEN {
        candidate
    } else {
        let head: String = description.chars().take(SUMMARY_FALLBACK_CHARS).collect();
        format!("{head}...")
    }
}

/// Extract up to [`MAX_KEYWORDS`] keywords in first-seen order.
pub fn extract_keywords(title: &str, description: &str) -> Vec<String> {
    let text = searchable_text(title, description);
    WORD_RE
        .find_iter(&text)
        .map(|m| m.as_str())
        .filter(|word| word.chars().count() > MIN_KEYWORD_EXCLUSIVE_LEN)
        .filter(|word| !STOP_WORDS.contains(word))
        .unique()
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Derive all enrichment fields for one raw article.
#[instrument(level = "debug", skip_all, fields(title = %raw.title))]
pub fn enrich(raw: RawArticle) -> Article {
    let scores = sentiment_scores(&raw.title, &raw.description);
    let sentiment = scores.label();
    let summary = summarize(&raw.title, &raw.description);
    let keywords = extract_keywords(&raw.title, &raw.description);
    debug!(?scores, %sentiment, keywords = ?keywords, "Enriched article");

    Article {
        title: raw.title,
        description: raw.description,
        url: raw.url,
        source: raw.source,
        published_at: raw.published_at,
        category: raw.category,
        sentiment,
        summary,
        keywords,
    }
}
