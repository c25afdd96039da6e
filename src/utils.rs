//! Utility functions for timestamps, string manipulation and file system checks.
//!
//! - Timestamp parsing with a "now" fallback for upstream records
//! - String truncation and slugification for logging and Markdown anchors
//! - File system validation for output directories

use crate::error::Result;
use chrono::{DateTime, Utc};
use std::fs as stdfs;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Parse an upstream RFC 3339 timestamp, falling back to `now`.
///
/// Missing or unparseable values never fail; they are logged at debug level
/// and replaced by `now`.
pub fn parse_published_at(value: Option<&str>, now: DateTime<Utc>) -> DateTime<Utc> {
    match value.map(DateTime::parse_from_rfc3339) {
        Some(Ok(ts)) => ts.with_timezone(&Utc),
        Some(Err(e)) => {
            debug!(value = ?value, error = %e, "Unparseable publish timestamp; using now");
            now
        }
        None => now,
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to at most `max` bytes (on a character boundary)
/// with an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```
/// use news_genie::utils::truncate_for_log;
/// assert_eq!(truncate_for_log("short", 100), "short");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

/// Convert a title to a URL-friendly slug for Markdown anchors.
///
/// # Examples
///
/// ```
/// use news_genie::utils::slugify_title;
/// assert_eq!(slugify_title("Hello World"), "hello-world");
/// ```
pub fn slugify_title(title: &str) -> String {
    title
        .to_lowercase()
        .replace(|c: char| !c.is_alphanumeric() && c != ' ' && c != '-', "")
        .replace(' ', "-")
}

/// Ensure a directory exists and is writable.
///
/// Creates the directory if needed, then creates and removes a probe file.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<()> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    stdfs::File::create(&probe_path)?;
    let _ = stdfs::remove_file(&probe_path);
    info!("Output directory is writable");
    Ok(())
}
