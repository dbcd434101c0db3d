//! `seokit validate [urls]` – status code and canonical report.

use anyhow::Result;
use seokit_core::input::read_urls;
use seokit_core::output::write_csv;
use seokit_core::validate::{validate_urls, CurlFetcher};
use std::path::Path;
use std::time::Duration;

pub fn run_validate(input: &Path, output: &Path, timeout: Duration) -> Result<()> {
    let urls = read_urls(input)?;
    if urls.is_empty() {
        anyhow::bail!("no URLs provided for validation in {}", input.display());
    }
    tracing::info!("validating {} URLs (timeout {:?})", urls.len(), timeout);

    let fetcher = CurlFetcher::new(timeout);
    let records = validate_urls(&fetcher, &urls);
    write_csv(&records, output)?;
    println!("Wrote {}", output.display());
    Ok(())
}
