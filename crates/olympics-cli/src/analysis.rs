//! Loaded analysis table plus the report for each command.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use olympics_core::{
    FAMOUS_SPORTS, age_by_sport, age_distribution, country_event_heatmap, country_list,
    country_year_list, data_over_time, fetch_medal_tally, men_vs_women, most_successful,
    most_successful_countrywise, overview_stats, preprocess, sport_list, weight_v_height,
    yearwise_medal_tally,
};
use olympics_ingest::load_dataset;
use olympics_model::{
    AnalysisTable, CountryFilter, PreprocessOptions, SportFilter, TimelineColumn, YearFilter,
};

use crate::report::{
    Report, age_by_sport_section, age_section, athletes_section, country_athletes_section,
    gender_section, heatmap_section, overview_section, physique_section, selectors_section,
    tally_section, timeline_section, yearwise_section,
};

/// The preprocessed table every report is computed from.
pub struct Analysis {
    table: AnalysisTable,
}

impl Analysis {
    /// Reads both datasets and builds the analysis table.
    pub fn load(events: &Path, regions: &Path, options: &PreprocessOptions) -> Result<Self> {
        let span = info_span!("load");
        let _guard = span.enter();
        let start = Instant::now();

        let dataset = load_dataset(events, regions).with_context(|| {
            format!(
                "load dataset from {} and {}",
                events.display(),
                regions.display()
            )
        })?;
        let table = preprocess(dataset.events, &dataset.regions, options);
        info!(
            rows = table.len(),
            duration_ms = start.elapsed().as_millis(),
            "analysis table ready"
        );
        Ok(Self { table })
    }

    pub fn from_table(table: AnalysisTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &AnalysisTable {
        &self.table
    }

    pub fn tally(&self, year: YearFilter, country: &CountryFilter) -> Result<Report> {
        if let CountryFilter::Country(name) = country {
            self.warn_unknown_country(name);
        }
        let tally = fetch_medal_tally(&self.table, year, country);
        let mut report = Report::new();
        report.push(tally_section(&tally)?);
        Ok(report)
    }

    pub fn overview(&self, sport: &SportFilter) -> Result<Report> {
        let mut report = Report::new();
        report.push(overview_section(&overview_stats(&self.table))?);
        for column in [
            TimelineColumn::Region,
            TimelineColumn::Event,
            TimelineColumn::Athlete,
        ] {
            report.push(timeline_section(
                column,
                &data_over_time(&self.table, column),
            )?);
        }
        report.push(athletes_section(
            sport,
            &most_successful(&self.table, sport),
        )?);
        Ok(report)
    }

    pub fn country(&self, country: &str) -> Result<Report> {
        self.warn_unknown_country(country);
        let mut report = Report::new();
        report.push(yearwise_section(
            country,
            &yearwise_medal_tally(&self.table, country),
        )?);
        report.push(heatmap_section(
            country,
            &country_event_heatmap(&self.table, country),
        )?);
        report.push(country_athletes_section(
            country,
            &most_successful_countrywise(&self.table, country),
        )?);
        Ok(report)
    }

    pub fn athletes(&self, sport: &SportFilter) -> Result<Report> {
        let mut report = Report::new();
        report.push(age_section(&age_distribution(&self.table))?);
        report.push(age_by_sport_section(&age_by_sport(
            &self.table,
            &FAMOUS_SPORTS,
        ))?);
        report.push(physique_section(
            sport,
            &weight_v_height(&self.table, sport),
        )?);
        report.push(gender_section(&men_vs_women(&self.table))?);
        Ok(report)
    }

    pub fn selectors(&self) -> Result<Report> {
        let mut report = Report::new();
        report.push(selectors_section(
            &country_year_list(&self.table),
            &sport_list(&self.table),
        )?);
        Ok(report)
    }

    fn warn_unknown_country(&self, country: &str) {
        if !country_list(&self.table).iter().any(|known| known == country) {
            warn!(country, "country not present in the dataset");
        }
    }
}
