//! Single HTTP GET per URL via libcurl, redirects not followed.

use std::str;
use std::time::Duration;
use thiserror::Error;

/// Transport-level failure for one URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (bad URL, DNS, connect, timeout, ...).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Transfer finished without a usable HTTP status.
    #[error("no usable HTTP status (got {0})")]
    NoStatus(u32),
}

/// Status, headers and body of a completed response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    /// Header (name, value) pairs of the final response, in arrival order.
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Values of every header named `name` (case-insensitive).
    pub fn header_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.headers
            .iter()
            .filter(move |(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Fetches a page for inspection.
pub trait PageFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError>;
}

/// Blocking libcurl fetcher. One easy handle per request; no retries.
#[derive(Debug, Clone, Copy)]
pub struct CurlFetcher {
    timeout: Duration,
}

impl CurlFetcher {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl PageFetcher for CurlFetcher {
    fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let mut header_lines: Vec<String> = Vec::new();
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(false)?;
        easy.connect_timeout(self.timeout)?;
        easy.timeout(self.timeout)?;
        easy.accept_encoding("")?;

        {
            let mut transfer = easy.transfer();
            transfer.header_function(|data| {
                if let Ok(s) = str::from_utf8(data) {
                    header_lines.push(s.trim_end().to_string());
                }
                true
            })?;
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        let status = u16::try_from(code)
            .ok()
            .filter(|s| *s > 0)
            .ok_or(FetchError::NoStatus(code))?;

        Ok(FetchedPage {
            status,
            headers: parse_header_lines(&header_lines),
            body,
        })
    }
}

/// Parse collected header lines into (name, value) pairs.
///
/// A status line (`HTTP/...`) starts a new response, dropping headers of any
/// interim response such as `100 Continue`.
pub(crate) fn parse_header_lines(lines: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            headers.clear();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            headers.push((name.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}
