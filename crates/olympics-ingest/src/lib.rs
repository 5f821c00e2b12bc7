//! Olympic Games data ingestion.
//!
//! Loads the two input datasets into typed records:
//!
//! - **Events** (`athlete_events.csv`): one row per athlete-event entry
//! - **Regions** (`noc_regions.csv`): NOC code to modern region mapping
//!
//! Files are read with Polars (every column as a string, `NA` as null) and
//! each cell is parsed into the record type. Missing required columns are
//! reported as [`IngestError::MissingColumn`] before any row is parsed.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use olympics_ingest::load_dataset;
//!
//! let dataset = load_dataset(
//!     Path::new("athlete_events.csv"),
//!     Path::new("noc_regions.csv"),
//! )?;
//! ```

mod csv;
mod dataset;
mod error;
pub mod events;
pub mod regions;
mod values;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use csv::{NULL_TOKEN, read_csv_frame, require_columns, string_column};

// === Records ===
pub use dataset::{Dataset, load_dataset};
pub use events::{REQUIRED_EVENT_COLUMNS, events_from_frame, read_events};
pub use regions::{REQUIRED_REGION_COLUMNS, read_regions, regions_from_frame};
pub use values::{parse_f64, parse_i64, parse_year};
