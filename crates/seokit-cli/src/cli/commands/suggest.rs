//! `seokit suggest <export>` – title/description suggestion spreadsheet.

use anyhow::Result;
use seokit_core::input;
use seokit_core::output::write_csv;
use seokit_core::suggest::{build_suggestions, SuggestOptions};
use std::path::Path;

pub fn run_suggest(input_path: &Path, output: &Path, opts: &SuggestOptions) -> Result<()> {
    let rows = input::load_rows(input_path)?;
    let suggestions = build_suggestions(&rows, opts);
    write_csv(&suggestions, output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn run_suggest_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pages.csv");
        fs::write(&input, "Page URL,Page Title\nhttps://x/,Home\n").unwrap();
        let output = dir.path().join("reports/suggestions.csv");
        let opts = SuggestOptions {
            brand_suffix: " | Brand".to_string(),
            title_limit: 60,
            description_limit: 155,
        };
        run_suggest(&input, &output, &opts).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.contains("https://x/,Home,Home | Brand,,"));
    }

    #[test]
    fn run_suggest_empty_export_fails() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("pages.csv");
        fs::write(&input, "Page URL,Page Title\n").unwrap();
        let output = dir.path().join("suggestions.csv");
        let opts = SuggestOptions {
            brand_suffix: String::new(),
            title_limit: 60,
            description_limit: 155,
        };
        let err = run_suggest(&input, &output, &opts).unwrap_err();
        assert!(format!("{err:#}").contains("no rows found"));
        assert!(!output.exists());
    }
}
