//! Selective CSV loading.
//!
//! The header is read first so that only the columns the caller asked for
//! are materialized; the full file is then read with those columns projected
//! into a [`RawTable`]. Cells are kept verbatim: perfmon's blank placeholder
//! (a single space) is significant and must survive until normalization.

use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

use perfmon_model::{PerfmonError, RawTable};

/// Read just the header row of a perfmon CSV.
pub fn read_csv_schema(path: &Path) -> Result<Vec<String>> {
    ensure_exists(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("read csv header: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read csv header: {}", path.display()))?;
    Ok(headers.iter().map(str::to_string).collect())
}

/// Load the requested columns of a perfmon CSV into a [`RawTable`].
///
/// `selected` must be a subset of the file's header; columns come back in
/// `selected` order, all rows, cells untouched.
pub fn read_selected_columns(path: &Path, selected: &[String]) -> Result<RawTable> {
    ensure_exists(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read csv: {}", path.display()))?
        .clone();

    let mut indices = Vec::with_capacity(selected.len());
    let mut missing = Vec::new();
    for name in selected {
        match headers.iter().position(|header| header == name) {
            Some(idx) => indices.push(idx),
            None => missing.push(name.clone()),
        }
    }
    if !missing.is_empty() {
        return Err(PerfmonError::MissingColumns { columns: missing }.into());
    }

    let mut table = RawTable::new(selected.to_vec());
    for record in reader.records() {
        let record = record.with_context(|| format!("read record: {}", path.display()))?;
        let row: Vec<String> = indices
            .iter()
            .map(|&idx| record.get(idx).unwrap_or("").to_string())
            .collect();
        table.push_row(row);
    }
    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.height(),
        "csv loaded"
    );
    Ok(table)
}

fn ensure_exists(path: &Path) -> Result<(), PerfmonError> {
    if path.exists() {
        Ok(())
    } else {
        Err(PerfmonError::InputNotFound(path.to_path_buf()))
    }
}
