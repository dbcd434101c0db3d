//! Suggested page titles and meta descriptions from a crawl export.
//!
//! Titles are built from the page's H1 (or current title, or URL) plus a
//! brand suffix; descriptions reuse the current description. Both are hard
//! cut to a character limit with no ellipsis.

use serde::Serialize;

use crate::input::{get_field, Row};
use crate::output::CsvRecord;

/// Limits and suffix applied to every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestOptions {
    pub brand_suffix: String,
    pub title_limit: usize,
    pub description_limit: usize,
}

/// One row of the suggestion spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuggestionRecord {
    pub url: String,
    pub current_title: String,
    pub suggested_title: String,
    pub current_description: String,
    pub suggested_description: String,
}

impl CsvRecord for SuggestionRecord {
    const HEADERS: &'static [&'static str] = &[
        "URL",
        "Current Title",
        "Suggested Title",
        "Current Description",
        "Suggested Description",
    ];
}

/// Trims `text` and cuts it to at most `limit` characters.
pub fn clamp(text: &str, limit: usize) -> String {
    text.trim().chars().take(limit).collect()
}

/// Builds a title from `H1` (or `Page Title` when `H1` is empty), trimmed,
/// plus `brand_suffix`. A blank result falls back to the trimmed `Page URL`;
/// with no usable base the suggestion is the trimmed suffix alone.
///
/// A whitespace-only `H1` is not empty, so it hides `Page Title`.
pub fn suggest_title(row: &Row, brand_suffix: &str, limit: usize) -> String {
    let heading = match get_field(row, "H1") {
        "" => get_field(row, "Page Title"),
        h1 => h1,
    }
    .trim();
    let base = if heading.is_empty() {
        get_field(row, "Page URL").trim()
    } else {
        heading
    };
    let suggestion = if base.is_empty() {
        brand_suffix.trim().to_string()
    } else {
        format!("{base}{brand_suffix}")
    };
    clamp(&suggestion, limit)
}

pub fn suggest_description(row: &Row, limit: usize) -> String {
    clamp(get_field(row, "Description"), limit)
}

/// Builds the suggestion record for one crawl-export row.
pub fn build_suggestion(row: &Row, opts: &SuggestOptions) -> SuggestionRecord {
    SuggestionRecord {
        url: get_field(row, "Page URL").to_string(),
        current_title: get_field(row, "Page Title").to_string(),
        suggested_title: suggest_title(row, &opts.brand_suffix, opts.title_limit),
        current_description: get_field(row, "Description").to_string(),
        suggested_description: suggest_description(row, opts.description_limit),
    }
}

pub fn build_suggestions(rows: &[Row], opts: &SuggestOptions) -> Vec<SuggestionRecord> {
    rows.iter().map(|row| build_suggestion(row, opts)).collect()
}
