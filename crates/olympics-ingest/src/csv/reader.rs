use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, DataType, NullValues, SerReader};

use crate::error::{IngestError, Result};

/// Literal used by the source files for missing cells.
pub const NULL_TOKEN: &str = "NA";

/// Reads a CSV file into a Polars DataFrame with every column as a string.
///
/// Numeric columns mix integers, decimals and `NA`; the record readers parse
/// each cell themselves.
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let parse_error = |source| IngestError::CsvParse {
        path: path.to_path_buf(),
        source,
    };
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|options| {
            options.with_null_values(Some(NullValues::AllColumnsSingle(NULL_TOKEN.into())))
        })
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;

    Ok(df)
}

/// Fails with [`IngestError::MissingColumn`] on the first absent column.
pub fn require_columns(df: &DataFrame, columns: &[&str], path: &Path) -> Result<()> {
    for column in columns {
        if df.column(column).is_err() {
            return Err(IngestError::MissingColumn {
                column: (*column).to_string(),
                path: path.to_path_buf(),
            });
        }
    }
    Ok(())
}

/// Extracts a column as trimmed strings; nulls, blanks and `NA` become `None`.
pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let column = df.column(name)?;
    let str_col = column.cast(&DataType::String)?;
    let str_chunked = str_col.str()?;

    Ok(str_chunked
        .iter()
        .map(|opt_val| {
            opt_val.and_then(|val| {
                let trimmed = val.trim().trim_matches('\u{feff}');
                if trimmed.is_empty() || trimmed == NULL_TOKEN {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
        })
        .collect())
}
