//! Fixed-header CSV reports.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A record type written as one CSV row under a fixed header.
pub trait CsvRecord: Serialize {
    /// Column names, in field order.
    const HEADERS: &'static [&'static str];
}

/// Writes `records` to `path` under `T::HEADERS`, creating parent directories.
///
/// The header row is written even when `records` is empty.
pub fn write_csv<T: CsvRecord>(records: &[T], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("create {}", path.display()))?;

    writer
        .write_record(T::HEADERS)
        .with_context(|| format!("write header to {}", path.display()))?;
    for record in records {
        writer
            .serialize(record)
            .with_context(|| format!("write row to {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;

    tracing::info!("wrote {} rows to {}", records.len(), path.display());
    Ok(())
}
