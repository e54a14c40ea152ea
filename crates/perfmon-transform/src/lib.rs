pub mod derive;
pub mod normalize;
pub mod range;
pub mod reshape;
pub mod timestamp;

pub use derive::{derive_metric, derive_volume};
pub use normalize::{normalize_row, normalize_value};
pub use range::{RangeBounds, filter_range};
pub use reshape::{Melt, melt};
pub use timestamp::{DATA_TIMESTAMP_FORMAT, parse_data_timestamp};
