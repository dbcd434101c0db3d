//! Input readers: crawl-export CSV rows and newline-delimited URL lists.
//!
//! Crawl exports are read through a chain of [`RowReader`] strategies. The
//! delimiter-sniffing reader runs first; the plain comma reader is the
//! fallback when no delimiter can be established from the sample.

mod reader;
mod sniff;
mod url_list;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{InputError, Result};

pub use reader::{PlainCsvReader, RowReader, SniffingCsvReader};
pub use sniff::sniff_delimiter;
pub use url_list::read_urls;

/// One crawl-export row: column header to cell value.
pub type Row = BTreeMap<String, String>;

/// Get a field value from a row, returning empty string if not present.
pub fn get_field<'a>(row: &'a Row, key: &str) -> &'a str {
    row.get(key).map(String::as_str).unwrap_or("")
}

/// Reads a crawl export with the default reader chain.
///
/// Fails when the file is missing, unreadable, or yields no rows.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let readers: [&dyn RowReader; 2] = [&SniffingCsvReader, &PlainCsvReader];
    load_rows_with(path, &readers)
}

/// Reads a crawl export, using the first reader in `readers` that accepts the content.
pub fn load_rows_with(path: &Path, readers: &[&dyn RowReader]) -> Result<Vec<Row>> {
    let bytes = fs::read(path).map_err(|e| InputError::from_io(path, e))?;
    let text = String::from_utf8_lossy(&bytes);
    let content = text.trim_start_matches('\u{feff}');

    for reader in readers {
        let Some(parsed) = reader.read_rows(content) else {
            tracing::debug!("{} reader declined {}", reader.name(), path.display());
            continue;
        };
        let rows = parsed.map_err(|source| InputError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(
            "read {} rows from {} ({} reader)",
            rows.len(),
            path.display(),
            reader.name()
        );
        if rows.is_empty() {
            return Err(InputError::Empty {
                path: path.to_path_buf(),
            });
        }
        return Ok(rows);
    }

    Err(InputError::Empty {
        path: path.to_path_buf(),
    })
}
