//! CSV reading utilities.

mod reader;

pub use reader::{NULL_TOKEN, read_csv_frame, require_columns, string_column};
