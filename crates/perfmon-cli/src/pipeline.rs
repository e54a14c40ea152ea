//! Reshape pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Select**: read the input header, pick the counter columns to keep
//! 2. **Load**: read only the selected columns into memory
//! 3. **Filter**: drop rows outside the requested timestamp range
//! 4. **Reshape**: melt wide to long, derive fields, normalize values
//! 5. **Write**: serialize the long table as CSV
//!
//! Each stage takes the output of the previous stage; no partial output is
//! written on failure.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{debug, info, info_span};

use perfmon_ingest::{read_csv_schema, read_selected_columns, select_columns};
use perfmon_model::{CounterRecord, PerfmonError, SelectionCriteria};
use perfmon_report::write_long_csv;
use perfmon_transform::{RangeBounds, filter_range, melt, normalize_row};

/// Already-validated configuration record consumed by the pipeline.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_csv: PathBuf,
    pub output_csv: PathBuf,
    pub from: Option<String>,
    pub to: Option<String>,
    /// Format for `from`/`to` only; the data file's own timestamps always use
    /// the fixed perfmon format.
    pub dateformat: String,
    pub require_all: Vec<String>,
    pub require_any: Vec<String>,
}

/// Counts reported after a successful run.
#[derive(Debug)]
pub struct RunReport {
    pub input_csv: PathBuf,
    pub output_csv: PathBuf,
    pub header_columns: usize,
    pub selected_metrics: usize,
    pub rows_read: usize,
    pub rows_kept: usize,
    pub records_written: usize,
}

pub fn run(config: &RunConfig) -> Result<RunReport> {
    let run_start = Instant::now();
    let bounds = parse_bounds(config)?;
    let criteria = SelectionCriteria::new(&config.require_all, &config.require_any)?;

    // Stage 1: Select
    let select_span = info_span!("select", input = %config.input_csv.display());
    let (headers, selected) = select_span.in_scope(|| -> Result<_> {
        let headers = read_csv_schema(&config.input_csv)?;
        debug!(columns = headers.len(), "input header read");
        for header in &headers {
            debug!(column = %header, "input column");
        }
        let selected = select_columns(&headers, &criteria);
        for name in &selected {
            debug!(column = %name, "column kept");
        }
        // The timestamp axis alone is not a usable selection.
        if selected.len() <= 1 {
            return Err(PerfmonError::EmptySelection.into());
        }
        info!(
            header_columns = headers.len(),
            selected = selected.len(),
            "columns selected"
        );
        Ok((headers, selected))
    })?;

    // Stage 2: Load
    let load_span = info_span!("load", input = %config.input_csv.display());
    let table = load_span.in_scope(|| -> Result<_> {
        let start = Instant::now();
        let table = read_selected_columns(&config.input_csv, &selected)
            .with_context(|| format!("load {}", config.input_csv.display()))?;
        info!(
            rows = table.height(),
            columns = table.headers.len(),
            duration_ms = start.elapsed().as_millis(),
            "input loaded"
        );
        Ok(table)
    })?;
    let rows_read = table.height();

    // Stage 3: Filter
    let filter_span = info_span!("filter");
    let table = filter_span.in_scope(|| -> Result<_> {
        let start = Instant::now();
        let active = bounds.is_active();
        let table = filter_range(table, &bounds).context("filter timestamp range")?;
        if active {
            info!(
                rows_kept = table.height(),
                duration_ms = start.elapsed().as_millis(),
                "range filter applied"
            );
        }
        Ok(table)
    })?;
    let rows_kept = table.height();

    // Stage 4: Reshape
    let reshape_span = info_span!("reshape");
    let records = reshape_span.in_scope(|| -> Result<Vec<CounterRecord>> {
        let start = Instant::now();
        let records = melt(&table)
            .map(normalize_row)
            .collect::<perfmon_model::Result<Vec<_>>>()
            .context("reshape and normalize")?;
        info!(
            records = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "dataset reshaped"
        );
        Ok(records)
    })?;

    // Stage 5: Write
    let write_span = info_span!("write", output = %config.output_csv.display());
    write_span.in_scope(|| -> Result<()> {
        let start = Instant::now();
        write_long_csv(&config.output_csv, &records)
            .with_context(|| format!("write {}", config.output_csv.display()))?;
        info!(
            records = records.len(),
            duration_ms = start.elapsed().as_millis(),
            "output written"
        );
        Ok(())
    })?;

    info!(
        records = records.len(),
        duration_ms = run_start.elapsed().as_millis(),
        "run complete"
    );

    Ok(RunReport {
        input_csv: config.input_csv.clone(),
        output_csv: config.output_csv.clone(),
        header_columns: headers.len(),
        selected_metrics: selected.len() - 1,
        rows_read,
        rows_kept,
        records_written: records.len(),
    })
}

/// Parse the CLI-supplied range bounds with the configurable `--dateformat`.
fn parse_bounds(config: &RunConfig) -> Result<RangeBounds> {
    Ok(RangeBounds {
        from: parse_bound(config.from.as_deref(), &config.dateformat, "--from")?,
        to: parse_bound(config.to.as_deref(), &config.dateformat, "--to")?,
    })
}

fn parse_bound(
    value: Option<&str>,
    dateformat: &str,
    flag: &str,
) -> Result<Option<NaiveDateTime>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let parsed = NaiveDateTime::parse_from_str(value, dateformat)
        .with_context(|| format!("parse {flag}={value:?} with --dateformat={dateformat:?}"))?;
    Ok(Some(parsed))
}
