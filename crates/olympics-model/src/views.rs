//! Derived tables returned by the aggregation views.
//!
//! Every view returns a value from this module. Empty selections produce
//! well-formed empty values (no rows, empty axes) rather than errors.

use std::fmt;

use serde::Serialize;

use crate::{CountryFilter, MedalCounts, MedalOutcome, Sex, YearFilter};

/// What the rows of a [`MedalTally`] are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TallyGrouping {
    Region,
    Year,
}

impl TallyGrouping {
    pub fn label(&self) -> &'static str {
        match self {
            TallyGrouping::Region => "Region",
            TallyGrouping::Year => "Year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum TallyKey {
    Region(String),
    Year(i32),
}

impl fmt::Display for TallyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TallyKey::Region(name) => f.write_str(name),
            TallyKey::Year(year) => write!(f, "{year}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTallyRow {
    /// 1-based position in gold-first order.
    pub rank: usize,
    pub key: TallyKey,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub total: u32,
}

impl MedalTallyRow {
    pub fn new(rank: usize, key: TallyKey, counts: MedalCounts) -> Self {
        Self {
            rank,
            key,
            gold: counts.gold,
            silver: counts.silver,
            bronze: counts.bronze,
            total: counts.total(),
        }
    }

    pub fn counts(&self) -> MedalCounts {
        MedalCounts::new(self.gold, self.silver, self.bronze)
    }
}

/// Ranked medal table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub year: YearFilter,
    pub country: CountryFilter,
    pub grouping: TallyGrouping,
    pub rows: Vec<MedalTallyRow>,
}

impl MedalTally {
    /// Heading used by the dashboard for this filter combination.
    pub fn title(&self) -> String {
        match (&self.year, &self.country) {
            (YearFilter::Overall, CountryFilter::Overall) => "Overall Tally".to_string(),
            (YearFilter::Year(year), CountryFilter::Overall) => {
                format!("Medal Tally in {year} Olympics")
            }
            (YearFilter::Overall, CountryFilter::Country(name)) => {
                format!("{name} Overall Performance")
            }
            (YearFilter::Year(year), CountryFilter::Country(name)) => {
                format!("{name} Performance in {year} Olympics")
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One point of a per-year series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteMedals {
    pub name: String,
    pub medals: usize,
    pub sport: String,
    pub region: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryAthleteMedals {
    pub name: String,
    pub medals: usize,
    pub sport: String,
}

/// Sport × year matrix of medal counts, zero-filled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SportYearHeatmap {
    pub sports: Vec<String>,
    pub years: Vec<i32>,
    /// `counts[sport_index][year_index]`.
    pub counts: Vec<Vec<usize>>,
}

impl SportYearHeatmap {
    pub fn get(&self, sport: &str, year: i32) -> Option<usize> {
        let row = self.sports.iter().position(|s| s == sport)?;
        let col = self.years.iter().position(|y| *y == year)?;
        Some(self.counts[row][col])
    }

    pub fn is_empty(&self) -> bool {
        self.sports.is_empty()
    }
}

/// One athlete point for the height/weight scatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysiqueRow {
    pub name: String,
    pub region: Option<String>,
    pub sport: String,
    pub medal: MedalOutcome,
    pub sex: Sex,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenderParticipation {
    pub year: i32,
    pub male: usize,
    pub female: usize,
}

/// Selector contents for the medal tally view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selectors {
    pub years: Vec<YearFilter>,
    pub countries: Vec<CountryFilter>,
}

/// Headline counts for the overall analysis view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OverviewStats {
    /// Distinct (year, season) pairs.
    pub editions: usize,
    pub hosts: usize,
    pub sports: usize,
    pub events: usize,
    pub nations: usize,
    pub athletes: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
}

/// Ages of a group of athletes, nulls dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgeSeries {
    pub ages: Vec<f64>,
}

impl AgeSeries {
    pub fn new(ages: Vec<f64>) -> Self {
        Self { ages }
    }

    pub fn len(&self) -> usize {
        self.ages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ages.is_empty()
    }

    /// Number of distinct ages.
    pub fn distinct(&self) -> usize {
        let mut sorted = self.ages.clone();
        sorted.sort_by(f64::total_cmp);
        sorted.dedup();
        sorted.len()
    }

    /// `None` for an empty series.
    pub fn summary(&self) -> Option<AgeSummary> {
        if self.ages.is_empty() {
            return None;
        }
        let mut sorted = self.ages.clone();
        sorted.sort_by(f64::total_cmp);
        let count = sorted.len();
        let mean = sorted.iter().sum::<f64>() / count as f64;
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };
        Some(AgeSummary {
            count,
            min: sorted[0],
            max: sorted[count - 1],
            mean,
            median,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgeDistribution {
    pub overall: AgeSeries,
    pub gold: AgeSeries,
    pub silver: AgeSeries,
    pub bronze: AgeSeries,
}

/// Gold-medalist ages for one sport, or the reason the sport was skipped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SportAgeDistribution {
    Available {
        sport: String,
        ages: AgeSeries,
    },
    /// Fewer than two values, or fewer than two distinct values.
    InsufficientData {
        sport: String,
        values: usize,
        distinct: usize,
    },
}

impl SportAgeDistribution {
    pub fn sport(&self) -> &str {
        match self {
            SportAgeDistribution::Available { sport, .. }
            | SportAgeDistribution::InsufficientData { sport, .. } => sport,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, SportAgeDistribution::Available { .. })
    }
}
