use crate::core::Record;
use crate::domain::defaults;
use crate::utils::error::{EtlError, Result};
use std::collections::{HashMap, HashSet};

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Parses UTF-8 CSV with a header row into one [`Record`] per data row, in source order.
///
/// Short rows are accepted and simply lack their trailing columns. Rows with more
/// fields than the header are rejected, as is any invalid UTF-8. When a header name
/// repeats, the first column carrying it wins. Empty cells and null markers are not
/// stored.
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(EtlError::MalformedCsvError {
            line: 1,
            message: "missing header row".to_string(),
        });
    }

    let mut seen = HashSet::new();
    let first_occurrence: Vec<bool> = headers.iter().map(|h| seen.insert(h)).collect();
    tracing::debug!("CSV header has {} columns", headers.len());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;

        if row.len() > headers.len() {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            return Err(EtlError::MalformedCsvError {
                line,
                message: format!(
                    "expected at most {} fields, found {}",
                    headers.len(),
                    row.len()
                ),
            });
        }

        let mut data = HashMap::with_capacity(row.len());
        for ((column, value), first) in headers.iter().zip(row.iter()).zip(&first_occurrence) {
            if *first && !defaults::is_missing(value) {
                data.insert(column.to_string(), value.to_string());
            }
        }
        records.push(Record { data });
    }

    Ok(records)
}
