//! Views for a single country.

use std::collections::{BTreeMap, BTreeSet};

use olympics_model::{AnalysisRow, AnalysisTable, SportYearHeatmap, YearCount};

use crate::dedupe::dedupe_team_medals;

/// The country's medal rows with team medals collapsed.
fn country_medals<'a>(table: &'a AnalysisTable, country: &str) -> Vec<&'a AnalysisRow> {
    dedupe_team_medals(
        table
            .iter()
            .filter(|row| row.has_medal() && row.region() == Some(country)),
    )
}

/// Medals won per year, ascending; years without medals are omitted.
pub fn yearwise_medal_tally(table: &AnalysisTable, country: &str) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for row in country_medals(table, country) {
        if let Some(year) = row.year {
            *counts.entry(year).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// Sport × year medal matrix for one country, zero-filled.
pub fn country_event_heatmap(table: &AnalysisTable, country: &str) -> SportYearHeatmap {
    let mut cells: BTreeMap<(&str, i32), usize> = BTreeMap::new();
    let mut years: BTreeSet<i32> = BTreeSet::new();
    for row in country_medals(table, country) {
        let Some(year) = row.year else {
            continue;
        };
        years.insert(year);
        *cells.entry((row.sport.as_str(), year)).or_default() += 1;
    }

    let sports: BTreeSet<&str> = cells.keys().map(|(sport, _)| *sport).collect();
    let years: Vec<i32> = years.into_iter().collect();
    let counts: Vec<Vec<usize>> = sports
        .iter()
        .map(|sport| {
            years
                .iter()
                .map(|year| cells.get(&(*sport, *year)).copied().unwrap_or(0))
                .collect::<Vec<usize>>()
        })
        .collect();

    SportYearHeatmap {
        sports: sports.into_iter().map(str::to_string).collect(),
        years,
        counts,
    }
}
