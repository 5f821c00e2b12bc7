//! Region mapping dataset (`noc_regions.csv`).

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::debug;

use olympics_model::RegionMapping;

use crate::csv::{read_csv_frame, require_columns, string_column};
use crate::error::Result;

pub const COL_NOC: &str = "NOC";
pub const COL_REGION: &str = "region";
pub const COL_NOTES: &str = "notes";

pub const REQUIRED_REGION_COLUMNS: [&str; 2] = [COL_NOC, COL_REGION];

pub fn read_regions(path: &Path) -> Result<Vec<RegionMapping>> {
    let df = read_csv_frame(path)?;
    regions_from_frame(&df, path)
}

/// Rows without an NOC code cannot be joined and are skipped.
pub fn regions_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<RegionMapping>> {
    require_columns(df, &REQUIRED_REGION_COLUMNS, path)?;

    let nocs = string_column(df, COL_NOC)?;
    let regions = string_column(df, COL_REGION)?;
    let notes = if df.column(COL_NOTES).is_ok() {
        string_column(df, COL_NOTES)?
    } else {
        vec![None; df.height()]
    };

    let mappings: Vec<RegionMapping> = nocs
        .into_iter()
        .zip(regions)
        .zip(notes)
        .filter_map(|((noc, region), notes)| {
            Some(RegionMapping {
                noc: noc?,
                region,
                notes,
            })
        })
        .collect();

    let unmapped = mappings.iter().filter(|m| m.region.is_none()).count();
    debug!(
        path = %path.display(),
        mappings = mappings.len(),
        unmapped,
        "parsed region mappings"
    );
    Ok(mappings)
}
