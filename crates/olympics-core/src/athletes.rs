//! Most successful athletes by raw medal count.
//!
//! Unlike the country tally, every medal row counts: an athlete on a
//! winning team is credited with the medal.

use std::collections::BTreeMap;

use olympics_model::{AnalysisRow, AnalysisTable, AthleteMedals, CountryAthleteMedals, SportFilter};

/// Cut-off for the overall ranking.
pub const TOP_ATHLETES: usize = 15;
/// Cut-off for the per-country ranking.
pub const TOP_COUNTRY_ATHLETES: usize = 10;

struct AthleteCount<'a> {
    first: &'a AnalysisRow,
    medals: usize,
}

/// Counts medal rows per name and keeps the `limit` highest counts.
///
/// Equal counts keep first-appearance order, and the cut is exact: ties
/// across the cut-off are dropped.
fn rank_athletes<'a>(
    rows: impl IntoIterator<Item = &'a AnalysisRow>,
    limit: usize,
) -> Vec<AthleteCount<'a>> {
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    let mut counts: Vec<AthleteCount<'a>> = Vec::new();
    for row in rows {
        match index.get(row.name.as_str()) {
            Some(&pos) => counts[pos].medals += 1,
            None => {
                index.insert(row.name.as_str(), counts.len());
                counts.push(AthleteCount {
                    first: row,
                    medals: 1,
                });
            }
        }
    }
    counts.sort_by(|a, b| b.medals.cmp(&a.medals));
    counts.truncate(limit);
    counts
}

/// Top athletes by medal count, optionally within one sport.
///
/// Sport and region are taken from the athlete's first medal row in the
/// selection.
pub fn most_successful(table: &AnalysisTable, sport: &SportFilter) -> Vec<AthleteMedals> {
    let medal_rows = table
        .iter()
        .filter(|row| row.has_medal() && sport.accepts(&row.sport));
    rank_athletes(medal_rows, TOP_ATHLETES)
        .into_iter()
        .map(|athlete| AthleteMedals {
            name: athlete.first.name.clone(),
            medals: athlete.medals,
            sport: athlete.first.sport.clone(),
            region: athlete.first.region.clone(),
        })
        .collect()
}

/// Top athletes of one country by medal count.
pub fn most_successful_countrywise(
    table: &AnalysisTable,
    country: &str,
) -> Vec<CountryAthleteMedals> {
    let medal_rows = table
        .iter()
        .filter(|row| row.has_medal() && row.region() == Some(country));
    rank_athletes(medal_rows, TOP_COUNTRY_ATHLETES)
        .into_iter()
        .map(|athlete| CountryAthleteMedals {
            name: athlete.first.name.clone(),
            medals: athlete.medals,
            sport: athlete.first.sport.clone(),
        })
        .collect()
}
