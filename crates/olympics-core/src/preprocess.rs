//! Builds the analysis table from the raw datasets.
//!
//! Steps, in order: season filter, left join on NOC code, medal one-hot
//! expansion (inside [`AnalysisRow::from_record`]), exact-duplicate removal.

use std::collections::BTreeMap;

use tracing::{debug, info, info_span};

use olympics_model::{AnalysisRow, AnalysisTable, EventRecord, PreprocessOptions, RegionMapping};

use crate::dedupe::dedupe_exact_rows;

/// NOC code to region lookup; the first mapping of a repeated code wins.
fn region_lookup(regions: &[RegionMapping]) -> BTreeMap<&str, Option<&str>> {
    let mut lookup = BTreeMap::new();
    for mapping in regions {
        lookup
            .entry(mapping.noc.as_str())
            .or_insert(mapping.region.as_deref());
    }
    lookup
}

/// Produces the analysis table. Rows keep their input order.
pub fn preprocess(
    events: Vec<EventRecord>,
    regions: &[RegionMapping],
    options: &PreprocessOptions,
) -> AnalysisTable {
    let span = info_span!("preprocess", season = ?options.season);
    let _guard = span.enter();

    let input_rows = events.len();
    let lookup = region_lookup(regions);

    let mut unmatched = 0usize;
    let rows: Vec<AnalysisRow> = events
        .into_iter()
        .filter(|record| options.season.accepts(record.season))
        .map(|record| {
            let region = match lookup.get(record.noc.as_str()) {
                Some(&region) => region.map(str::to_string),
                None => {
                    unmatched += 1;
                    None
                }
            };
            AnalysisRow::from_record(record, region)
        })
        .collect();
    let filtered_rows = rows.len();

    let rows = dedupe_exact_rows(rows);
    if unmatched > 0 {
        debug!(unmatched, "rows with an NOC code missing from the region mapping");
    }
    info!(
        input_rows,
        season_dropped = input_rows - filtered_rows,
        duplicates_dropped = filtered_rows - rows.len(),
        rows = rows.len(),
        "analysis table built"
    );
    AnalysisTable::new(rows)
}
