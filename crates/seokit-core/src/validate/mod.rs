//! Post-deployment validation: status code and canonical signal per URL.
//!
//! Each URL gets one GET without following redirects. A canonical signal is
//! either a `Link` header entry with a canonical `rel`, or (for 200
//! responses) a canonical `<link>` element in the body. Transport failures
//! become a record with no status; they never stop the batch.

mod canonical;
mod fetch;
mod link_header;

use serde::Serialize;

use crate::output::CsvRecord;

pub use canonical::html_has_canonical;
pub use fetch::{CurlFetcher, FetchError, FetchedPage, PageFetcher};
pub use link_header::{has_canonical_link, parse_link_header, HeaderLink};

/// Outcome for one URL. `status` is `None` when the request failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRecord {
    pub url: String,
    pub status: Option<u16>,
    pub has_canonical: bool,
}

impl CsvRecord for ValidationRecord {
    const HEADERS: &'static [&'static str] = &["URL", "Status", "Has canonical link/header?"];
}

/// Canonical signal in a fetched response.
pub fn page_has_canonical(page: &FetchedPage) -> bool {
    let link_header = page.header_values("link").collect::<Vec<_>>().join(", ");
    if has_canonical_link(&link_header) {
        return true;
    }
    page.status == 200 && html_has_canonical(&String::from_utf8_lossy(&page.body))
}

/// Fetches `url` once and builds its record.
pub fn check_url(fetcher: &dyn PageFetcher, url: &str) -> ValidationRecord {
    match fetcher.fetch(url) {
        Ok(page) => {
            let has_canonical = page_has_canonical(&page);
            tracing::debug!(url, status = page.status, has_canonical, "checked");
            ValidationRecord {
                url: url.to_string(),
                status: Some(page.status),
                has_canonical,
            }
        }
        Err(err) => {
            tracing::warn!(url, "request failed: {}", err);
            ValidationRecord {
                url: url.to_string(),
                status: None,
                has_canonical: false,
            }
        }
    }
}

/// Checks every URL in order, one request at a time.
pub fn validate_urls(fetcher: &dyn PageFetcher, urls: &[String]) -> Vec<ValidationRecord> {
    urls.iter().map(|url| check_url(fetcher, url)).collect()
}
