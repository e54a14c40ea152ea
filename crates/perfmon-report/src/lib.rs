//! Long-table CSV output.
//!
//! Output layout: a header row `,timestamp,originalMetricName,value,volume,metric`
//! where the first, unnamed column is a zero-based row index. An existing
//! file at the destination is overwritten without warning.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use perfmon_model::CounterRecord;

/// Timestamps are serialized in ISO-like form; the fractional part is only
/// emitted when non-zero.
const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[derive(Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "")]
    index: u64,
    timestamp: String,
    #[serde(rename = "originalMetricName")]
    original_metric_name: &'a str,
    value: Option<f64>,
    volume: Option<&'a str>,
    metric: &'a str,
}

/// Serialize the final long table to `path` as comma-separated text with a
/// header row. Missing values and absent volumes become empty fields.
pub fn write_long_csv(path: &Path, records: &[CounterRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("create output: {}", path.display()))?;
    if records.is_empty() {
        // serialize() only emits the header alongside the first record.
        writer
            .write_record(["", "timestamp", "originalMetricName", "value", "volume", "metric"])
            .with_context(|| format!("write header: {}", path.display()))?;
    }
    for (index, record) in records.iter().enumerate() {
        writer
            .serialize(OutputRow {
                index: index as u64,
                timestamp: record.timestamp.format(OUTPUT_TIMESTAMP_FORMAT).to_string(),
                original_metric_name: &record.original_metric_name,
                value: record.value,
                volume: record.volume.as_deref(),
                metric: &record.metric,
            })
            .with_context(|| format!("write record {index}: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush output: {}", path.display()))?;
    debug!(path = %path.display(), records = records.len(), "output written");
    Ok(())
}
