pub mod criteria;
pub mod error;
pub mod record;
pub mod table;

pub use criteria::{ColumnPredicate, SelectionCriteria};
pub use error::{PerfmonError, Result};
pub use record::{CounterRecord, LongRow, MISSING_VALUE_PLACEHOLDER};
pub use table::RawTable;
