//! Selector lists and headline counts.

use std::collections::BTreeSet;

use olympics_model::{
    AnalysisTable, CountryFilter, OverviewStats, Selectors, SportFilter, YearFilter,
};

/// Years and countries for the medal tally selectors, each led by `Overall`.
pub fn country_year_list(table: &AnalysisTable) -> Selectors {
    let years: BTreeSet<i32> = table.iter().filter_map(|row| row.year).collect();
    let countries = country_list(table);

    Selectors {
        years: std::iter::once(YearFilter::Overall)
            .chain(years.into_iter().map(YearFilter::Year))
            .collect(),
        countries: std::iter::once(CountryFilter::Overall)
            .chain(countries.into_iter().map(CountryFilter::Country))
            .collect(),
    }
}

/// Distinct regions, ascending, without the `Overall` sentinel.
pub fn country_list(table: &AnalysisTable) -> Vec<String> {
    let regions: BTreeSet<&str> = table.iter().filter_map(|row| row.region()).collect();
    regions.into_iter().map(str::to_string).collect()
}

/// Distinct sports, ascending, led by `Overall`.
pub fn sport_list(table: &AnalysisTable) -> Vec<SportFilter> {
    let sports: BTreeSet<&str> = table.iter().map(|row| row.sport.as_str()).collect();
    std::iter::once(SportFilter::Overall)
        .chain(sports.into_iter().map(SportFilter::sport))
        .collect()
}

pub fn overview_stats(table: &AnalysisTable) -> OverviewStats {
    let editions: BTreeSet<_> = table
        .iter()
        .filter_map(|row| row.year.map(|year| (year, row.season)))
        .collect();
    let hosts: BTreeSet<&str> = table.iter().map(|row| row.city.as_str()).collect();
    let sports: BTreeSet<&str> = table.iter().map(|row| row.sport.as_str()).collect();
    let events: BTreeSet<&str> = table.iter().map(|row| row.event.as_str()).collect();
    let nations: BTreeSet<&str> = table.iter().filter_map(|row| row.region()).collect();
    let athletes: BTreeSet<&str> = table.iter().map(|row| row.name.as_str()).collect();

    OverviewStats {
        editions: editions.len(),
        hosts: hosts.len(),
        sports: sports.len(),
        events: events.len(),
        nations: nations.len(),
        athletes: athletes.len(),
    }
}
