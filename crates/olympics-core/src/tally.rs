//! Ranked medal tally.

use std::collections::BTreeMap;

use tracing::debug;

use olympics_model::{
    AnalysisRow, AnalysisTable, CountryFilter, MedalCounts, MedalTally, MedalTallyRow,
    TallyGrouping, TallyKey, YearFilter,
};

use crate::dedupe::dedupe_team_medals;

fn matches_year(row: &AnalysisRow, year: YearFilter) -> bool {
    match year {
        YearFilter::Overall => true,
        YearFilter::Year(selected) => row.year == Some(selected),
    }
}

fn matches_country(row: &AnalysisRow, country: &CountryFilter) -> bool {
    match country {
        CountryFilter::Overall => true,
        CountryFilter::Country(selected) => row.region() == Some(selected.as_str()),
    }
}

/// Medal tally for a year/country selection.
///
/// Team medals are counted once per country and event. Rows are grouped by
/// region, except for a single country across all years, which is grouped by
/// year. Groups are ranked gold first, then silver, then bronze; equal triples
/// keep ascending key order. Regionless rows never form a group.
pub fn fetch_medal_tally(
    table: &AnalysisTable,
    year: YearFilter,
    country: &CountryFilter,
) -> MedalTally {
    let grouping = match (year, country) {
        (YearFilter::Overall, CountryFilter::Country(_)) => TallyGrouping::Year,
        _ => TallyGrouping::Region,
    };

    let selected = table
        .iter()
        .filter(|row| matches_year(row, year) && matches_country(row, country));
    let deduped = dedupe_team_medals(selected);

    let mut groups: BTreeMap<TallyKey, MedalCounts> = BTreeMap::new();
    for row in deduped {
        let key = match grouping {
            TallyGrouping::Region => match row.region() {
                Some(region) => TallyKey::Region(region.to_string()),
                None => continue,
            },
            TallyGrouping::Year => match row.year {
                Some(year) => TallyKey::Year(year),
                None => continue,
            },
        };
        *groups.entry(key).or_default() += row.medals;
    }

    let mut ranked: Vec<(TallyKey, MedalCounts)> = groups.into_iter().collect();
    // Stable sort: ties keep the ascending key order of the map.
    ranked.sort_by(|a, b| b.1.rank_key().cmp(&a.1.rank_key()));

    let rows: Vec<MedalTallyRow> = ranked
        .into_iter()
        .enumerate()
        .map(|(idx, (key, counts))| MedalTallyRow::new(idx + 1, key, counts))
        .collect();
    debug!(%year, %country, groups = rows.len(), "medal tally computed");

    MedalTally {
        year,
        country: country.clone(),
        grouping,
        rows,
    }
}
