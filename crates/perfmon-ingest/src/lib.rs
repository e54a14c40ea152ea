pub mod csv_table;
pub mod select;

pub use csv_table::{read_csv_schema, read_selected_columns};
pub use select::select_columns;
