//! `seokit redirect-map <export>` – 4xx redirect worksheet.

use anyhow::Result;
use seokit_core::input;
use seokit_core::output::write_csv;
use seokit_core::redirect_map::build_redirect_rows;
use std::path::Path;

pub fn run_redirect_map(input_path: &Path, output: &Path) -> Result<()> {
    let rows = input::load_rows(input_path)?;
    let redirects = build_redirect_rows(&rows);
    write_csv(&redirects, output)?;
    println!("Wrote {} with {} rows", output.display(), redirects.len());
    Ok(())
}
