//! Row reader strategies for crawl exports.

use csv::ReaderBuilder;

use super::sniff::sniff_delimiter;
use super::Row;

/// A strategy that turns CSV text into rows.
pub trait RowReader {
    /// Short name used in log lines.
    fn name(&self) -> &'static str;

    /// Parses `content`, or returns `None` when this reader cannot handle it
    /// and the next strategy should be tried.
    fn read_rows(&self, content: &str) -> Option<Result<Vec<Row>, csv::Error>>;
}

/// Detects the delimiter from a sample before parsing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SniffingCsvReader;

impl RowReader for SniffingCsvReader {
    fn name(&self) -> &'static str {
        "sniffing"
    }

    fn read_rows(&self, content: &str) -> Option<Result<Vec<Row>, csv::Error>> {
        let delimiter = sniff_delimiter(content)?;
        tracing::debug!("sniffed delimiter {:?}", delimiter as char);
        Some(read_delimited(content, delimiter))
    }
}

/// Plain comma-separated reader; accepts any content.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainCsvReader;

impl RowReader for PlainCsvReader {
    fn name(&self) -> &'static str {
        "plain"
    }

    fn read_rows(&self, content: &str) -> Option<Result<Vec<Row>, csv::Error>> {
        Some(read_delimited(content, b','))
    }
}

/// Reads `content` with `delimiter` into header-keyed rows.
///
/// Short records leave their missing columns absent; cells beyond the header
/// are dropped.
fn read_delimited(content: &str, delimiter: u8) -> Result<Vec<Row>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Row::new();
        for (key, value) in headers.iter().zip(record.iter()) {
            row.insert(key.to_string(), value.to_string());
        }
        rows.push(row);
    }
    Ok(rows)
}
