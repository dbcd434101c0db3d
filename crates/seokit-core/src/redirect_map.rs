//! Redirect worksheet: broken (4xx) crawl-export URLs awaiting a target.

use serde::Serialize;
use std::collections::HashSet;

use crate::input::{get_field, Row};
use crate::output::CsvRecord;

/// Columns that, when numeric and positive, mark a row as 4xx.
pub const FOUR_XX_COLUMNS: [&str; 3] = ["4xx errors", "4xx", "Status Code"];

/// Literal status codes accepted in `Status Code`.
const MISSING_PAGE_STATUSES: [&str; 2] = ["404", "410"];

/// One worksheet row. `redirect_target` is filled in by hand later.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectRow {
    pub url: String,
    pub redirect_target: String,
}

impl CsvRecord for RedirectRow {
    const HEADERS: &'static [&'static str] = &["URL", "Redirect target"];
}

/// True when the row looks like a broken page.
///
/// Any present column from [`FOUR_XX_COLUMNS`] that parses as a number above
/// zero qualifies; unparseable values are ignored. A `Status Code` of exactly
/// `404` or `410` also qualifies.
pub fn has_four_xx(row: &Row) -> bool {
    let numeric = FOUR_XX_COLUMNS.iter().any(|column| {
        row.get(*column)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .is_some_and(|n| n > 0.0)
    });
    numeric || MISSING_PAGE_STATUSES.contains(&get_field(row, "Status Code"))
}

/// `Page URL`, else `URL`, trimmed.
fn row_url(row: &Row) -> &str {
    let page_url = get_field(row, "Page URL");
    let url = if page_url.is_empty() {
        get_field(row, "URL")
    } else {
        page_url
    };
    url.trim()
}

/// Selects 4xx rows, keeping the first occurrence of each URL in input order.
pub fn build_redirect_rows(rows: &[Row]) -> Vec<RedirectRow> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    for row in rows {
        let url = row_url(row);
        if url.is_empty() || seen.contains(url) {
            continue;
        }
        if !has_four_xx(row) {
            continue;
        }
        seen.insert(url);
        out.push(RedirectRow {
            url: url.to_string(),
            redirect_target: String::new(),
        });
    }
    tracing::debug!("{} of {} rows selected for redirects", out.len(), rows.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn status_code_404_without_numeric_columns() {
        assert!(has_four_xx(&row(&[("Status Code", "404")])));
        assert!(has_four_xx(&row(&[("Status Code", "410")])));
    }

    #[test]
    fn zero_4xx_errors_is_not_selected() {
        assert!(!has_four_xx(&row(&[("4xx errors", "0")])));
    }

    #[test]
    fn positive_numeric_alias_is_selected() {
        assert!(has_four_xx(&row(&[("4xx", "2")])));
        assert!(has_four_xx(&row(&[("4xx errors", " 1.0 ")])));
    }

    #[test]
    fn unparseable_values_are_not_4xx() {
        assert!(!has_four_xx(&row(&[("4xx errors", "n/a"), ("4xx", "")])));
        assert!(!has_four_xx(&row(&[("4xx", "NaN")])));
        assert!(!has_four_xx(&Row::new()));
    }

    #[test]
    fn later_alias_can_qualify() {
        assert!(has_four_xx(&row(&[("4xx errors", "0"), ("4xx", "3")])));
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let rows = vec![
            row(&[("Page URL", "https://x/old"), ("4xx errors", "1")]),
            row(&[("Page URL", "https://x/ok"), ("4xx errors", "0")]),
            row(&[("Page URL", " https://x/old "), ("Status Code", "404")]),
        ];
        let out = build_redirect_rows(&rows);
        assert_eq!(
            out,
            vec![RedirectRow {
                url: "https://x/old".to_string(),
                redirect_target: String::new(),
            }]
        );
    }

    #[test]
    fn non_qualifying_row_does_not_claim_url() {
        let rows = vec![
            row(&[("Page URL", "https://x/page"), ("4xx errors", "0")]),
            row(&[("Page URL", "https://x/page"), ("4xx errors", "1")]),
        ];
        let out = build_redirect_rows(&rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].url, "https://x/page");
    }

    #[test]
    fn url_alias_and_blank_urls() {
        let rows = vec![
            row(&[("URL", "https://x/b"), ("4xx", "1")]),
            row(&[("Page URL", "   "), ("4xx", "1")]),
            row(&[("4xx", "1")]),
            row(&[("Page URL", "https://x/a"), ("Status Code", "410")]),
        ];
        let urls: Vec<_> = build_redirect_rows(&rows)
            .into_iter()
            .map(|r| r.url)
            .collect();
        assert_eq!(urls, vec!["https://x/b", "https://x/a"]);
    }
}
