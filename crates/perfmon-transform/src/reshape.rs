//! Wide-to-long melt.
//!
//! The reshape is a pure structural transform, exposed as a lazy iterator so
//! a streaming loader could be slotted in later without changing the public
//! contract. Emission order is committed: source-row-major, then
//! metric-column-major within each row.

use perfmon_model::{LongRow, RawTable};

/// Lazy iterator over the melted form of a [`RawTable`].
///
/// For each source row and each metric column (every column but the first,
/// which is the timestamp axis) one [`LongRow`] is produced. The total
/// number of items equals `table.height() * table.metric_column_count()`.
pub struct Melt<'a> {
    table: &'a RawTable,
    row: usize,
    col: usize,
}

pub fn melt(table: &RawTable) -> Melt<'_> {
    Melt {
        table,
        row: 0,
        // Column 0 is the timestamp axis.
        col: 1,
    }
}

impl Iterator for Melt<'_> {
    type Item = LongRow;

    fn next(&mut self) -> Option<LongRow> {
        loop {
            let row = self.table.rows.get(self.row)?;
            if self.col >= self.table.headers.len() {
                self.row += 1;
                self.col = 1;
                continue;
            }
            let col = self.col;
            self.col += 1;
            return Some(LongRow {
                timestamp: row.first().cloned().unwrap_or_default(),
                original_metric_name: self.table.headers[col].clone(),
                value: row.get(col).cloned().unwrap_or_default(),
            });
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let per_row = self.table.metric_column_count();
        let remaining_rows = self.table.height().saturating_sub(self.row);
        let total = remaining_rows
            .saturating_mul(per_row)
            .saturating_sub(self.col.saturating_sub(1).min(per_row));
        (total, Some(total))
    }
}
