use chrono::NaiveDateTime;
use serde::Serialize;

/// Perfmon writes a lone blank for samples it could not collect. The
/// placeholder maps to a missing value, never to zero and never to an error.
pub const MISSING_VALUE_PLACEHOLDER: &str = " ";

/// One melted row before normalization: everything still raw text, one entry
/// per (source row, metric column) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongRow {
    pub timestamp: String,
    pub original_metric_name: String,
    pub value: String,
}

/// Final normalized long-table record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CounterRecord {
    pub timestamp: NaiveDateTime,
    /// Full composite counter path as found in the source header, e.g.
    /// `\\Server\PhysicalDisk(0 C:)\Disk Reads/sec`.
    pub original_metric_name: String,
    pub value: Option<f64>,
    /// Drive-letter token extracted from the counter path (`C:`), when any.
    pub volume: Option<String>,
    /// Leaf counter name, stripped of its namespace path. Never absent.
    pub metric: String,
}
