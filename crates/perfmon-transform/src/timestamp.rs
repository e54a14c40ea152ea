//! Fixed-format parsing of the data file's timestamp column.
//!
//! Perfmon writes sample timestamps as `month/day/year hour:minute:second.fraction`
//! regardless of locale settings for the rest of the export. This format is
//! intentionally independent of the format used for CLI-supplied range
//! bounds (`--dateformat`); the two must never be unified.

use chrono::NaiveDateTime;

use perfmon_model::{PerfmonError, Result};

/// The fixed format of the data file's timestamp column. `%.f` also accepts
/// timestamps without a fractional part.
pub const DATA_TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S%.f";

/// Parse a timestamp cell from the data file. Failure is fatal for the run:
/// rows with unparseable timestamps are never silently skipped.
pub fn parse_data_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, DATA_TIMESTAMP_FORMAT).map_err(|_| {
        PerfmonError::TimestampParse {
            value: value.to_string(),
            format: DATA_TIMESTAMP_FORMAT.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn parses_with_fractional_seconds() {
        let ts = parse_data_timestamp("01/14/2019 13:20:05.123").expect("parse");
        assert_eq!(
            ts.date(),
            NaiveDate::from_ymd_opt(2019, 1, 14).expect("date")
        );
        assert_eq!(ts.time().hour(), 13);
        assert_eq!(ts.time().nanosecond(), 123_000_000);
    }

    #[test]
    fn parses_without_fractional_seconds() {
        assert!(parse_data_timestamp("01/14/2019 13:20:05").is_ok());
    }

    #[test]
    fn rejects_iso_formatted_input() {
        let error = parse_data_timestamp("2019-01-14 13:20:05").unwrap_err();
        assert!(matches!(error, PerfmonError::TimestampParse { .. }));
    }
}
