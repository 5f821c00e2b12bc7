//! Distinct values per year.

use std::collections::{BTreeMap, BTreeSet};

use olympics_model::{AnalysisRow, AnalysisTable, TimelineColumn, YearCount};

fn column_value(row: &AnalysisRow, column: TimelineColumn) -> Option<&str> {
    let value = match column {
        TimelineColumn::Region => row.region()?,
        TimelineColumn::Event => row.event.as_str(),
        TimelineColumn::Athlete => row.name.as_str(),
        TimelineColumn::Sport => row.sport.as_str(),
    };
    (!value.is_empty()).then_some(value)
}

/// Number of distinct `column` values per year, ascending by year.
///
/// The series is sparse: a year only appears when it has at least one
/// present value. Rows without a year are skipped.
pub fn data_over_time(table: &AnalysisTable, column: TimelineColumn) -> Vec<YearCount> {
    let mut seen: BTreeSet<(i32, &str)> = BTreeSet::new();
    for row in table {
        let (Some(year), Some(value)) = (row.year, column_value(row, column)) else {
            continue;
        };
        seen.insert((year, value));
    }

    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for (year, _) in seen {
        *counts.entry(year).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}
