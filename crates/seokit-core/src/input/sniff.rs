//! Delimiter detection for crawl exports.

/// Delimiters considered, in order of preference on ties.
const CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Records inspected when sniffing.
const SAMPLE_RECORDS: usize = 20;

/// Guesses the field delimiter from the first records of `content`.
///
/// A candidate qualifies when it appears in the header record and no
/// sampled record contains it more often than the header does (quoted
/// sections are ignored). Short records are fine; crawl exports drop
/// trailing empty cells. Among qualifying candidates the one splitting the header into
/// the most fields wins. Returns `None` when no candidate qualifies.
pub fn sniff_delimiter(content: &str) -> Option<u8> {
    let records = sample_records(content, SAMPLE_RECORDS);
    let header = records.first()?;

    let mut best: Option<(u8, usize)> = None;
    for &candidate in &CANDIDATES {
        let expected = count_unquoted(header, candidate);
        if expected == 0 {
            continue;
        }
        let fits = records
            .iter()
            .skip(1)
            .all(|record| count_unquoted(record, candidate) <= expected);
        if !fits {
            continue;
        }
        if best.map_or(true, |(_, n)| expected > n) {
            best = Some((candidate, expected));
        }
    }
    best.map(|(d, _)| d)
}

/// Splits off up to `limit` non-blank records, keeping newlines inside quotes.
fn sample_records(content: &str, limit: usize) -> Vec<&str> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    for (i, b) in content.bytes().enumerate() {
        match b {
            b'"' => in_quotes = !in_quotes,
            b'\n' if !in_quotes => {
                let record = content[start..i].trim_end_matches('\r');
                if !record.trim().is_empty() {
                    records.push(record);
                    if records.len() == limit {
                        return records;
                    }
                }
                start = i + 1;
            }
            _ => {}
        }
    }
    let tail = content[start..].trim_end_matches('\r');
    if !tail.trim().is_empty() && records.len() < limit {
        records.push(tail);
    }
    records
}

fn count_unquoted(record: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for b in record.bytes() {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if b == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}
