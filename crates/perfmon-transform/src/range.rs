//! Timestamp range filtering.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use perfmon_model::{RawTable, Result};

use crate::timestamp::parse_data_timestamp;

/// Optional inclusive `[from, to]` bounds supplied by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeBounds {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl RangeBounds {
    /// Filtering only happens when both bounds are present. A single bound
    /// is ignored entirely, never treated as a half-open range.
    pub fn is_active(&self) -> bool {
        self.from.is_some() && self.to.is_some()
    }
}

/// Retain the rows whose timestamp column falls within `bounds`, inclusive
/// on both ends. Column order and relative row order are preserved. Rows
/// whose timestamp fails to parse under the fixed data format abort the run.
pub fn filter_range(table: RawTable, bounds: &RangeBounds) -> Result<RawTable> {
    let (Some(from), Some(to)) = (bounds.from, bounds.to) else {
        if bounds.from.is_some() || bounds.to.is_some() {
            warn!("only one of --from/--to supplied; range filtering skipped");
        }
        return Ok(table);
    };

    let before = table.height();
    let mut filtered = RawTable::new(table.headers);
    for row in table.rows {
        let raw = row.first().map(String::as_str).unwrap_or("");
        let ts = parse_data_timestamp(raw)?;
        if from <= ts && ts <= to {
            filtered.push_row(row);
        }
    }
    debug!(
        rows_before = before,
        rows_after = filtered.height(),
        %from,
        %to,
        "range filter applied"
    );
    Ok(filtered)
}
