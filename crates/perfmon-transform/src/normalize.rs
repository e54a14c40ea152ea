//! Value and timestamp normalization of melted rows.

use perfmon_model::{CounterRecord, LongRow, MISSING_VALUE_PLACEHOLDER, PerfmonError, Result};

use crate::derive::{derive_metric, derive_volume};
use crate::timestamp::parse_data_timestamp;

/// Parse a raw value cell. The single-space placeholder means the sample was
/// not collected and maps to `None`; anything else must parse as a float.
pub fn normalize_value(raw: &str) -> Result<Option<f64>> {
    if raw == MISSING_VALUE_PLACEHOLDER {
        return Ok(None);
    }
    raw.trim()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| PerfmonError::ValueParse {
            value: raw.to_string(),
        })
}

/// Turn one melted row into a fully normalized [`CounterRecord`]: parse the
/// timestamp under the fixed data format, parse the value, and derive the
/// `volume` and `metric` fields from the counter name.
pub fn normalize_row(row: LongRow) -> Result<CounterRecord> {
    let timestamp = parse_data_timestamp(&row.timestamp)?;
    let value = normalize_value(&row.value)?;
    let volume = derive_volume(&row.original_metric_name);
    let metric = derive_metric(&row.original_metric_name);
    Ok(CounterRecord {
        timestamp,
        original_metric_name: row.original_metric_name,
        value,
        volume,
        metric,
    })
}
