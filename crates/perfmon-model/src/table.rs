/// In-memory wide table: one row per sample timestamp, one column per
/// counter. Cells are kept as raw text; type coercion happens downstream in
/// the normalizer. The first column is always the timestamp dimension
/// (determined positionally, its name is not known in advance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of metric columns, i.e. everything except the timestamp axis.
    pub fn metric_column_count(&self) -> usize {
        self.headers.len().saturating_sub(1)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }
}
