use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PerfmonError {
    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("requested column(s) not present in input header: {columns:?}")]
    MissingColumns { columns: Vec<String> },
    #[error("no metric columns matched the selection criteria")]
    EmptySelection,
    #[error("invalid selection pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("timestamp `{value}` does not match format `{format}`")]
    TimestampParse { value: String, format: String },
    #[error("value `{value}` is not numeric")]
    ValueParse { value: String },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PerfmonError>;
