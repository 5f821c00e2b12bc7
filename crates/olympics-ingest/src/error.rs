//! Ingest errors.
//!
//! All of these are fatal at startup: the views need both datasets in the
//! expected shape.

use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("dataset file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Polars could not open or tokenize the file.
    #[error("could not read {path} as CSV")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    /// Header present, no data rows.
    #[error("{path} has no data rows")]
    EmptyCsv { path: PathBuf },

    #[error("{path} is missing required column '{column}'")]
    MissingColumn { column: String, path: PathBuf },

    /// A categorical cell the record type cannot represent. `row` is 1-based,
    /// not counting the header.
    #[error("row {row} of {path}: unrecognised {column} '{value}'")]
    InvalidValue {
        column: String,
        value: String,
        row: usize,
        path: PathBuf,
    },

    #[error("column extraction failed")]
    DataFrame(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, IngestError>;
