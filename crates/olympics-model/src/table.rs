#![deny(unsafe_code)]

use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::{EventRecord, MedalOutcome, Season, Sex};

/// Gold/Silver/Bronze counters.
///
/// On an [`AnalysisRow`] these are one-hot indicators (at most one is 1), so
/// summing rows yields medal counts without any conditional logic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MedalCounts {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalCounts {
    pub fn new(gold: u32, silver: u32, bronze: u32) -> Self {
        Self {
            gold,
            silver,
            bronze,
        }
    }

    /// One-hot expansion of a medal outcome.
    pub fn indicator(outcome: MedalOutcome) -> Self {
        match outcome {
            MedalOutcome::Gold => Self::new(1, 0, 0),
            MedalOutcome::Silver => Self::new(0, 1, 0),
            MedalOutcome::Bronze => Self::new(0, 0, 1),
            MedalOutcome::NoMedal => Self::default(),
        }
    }

    pub fn total(&self) -> u32 {
        self.gold + self.silver + self.bronze
    }

    /// Gold-first ranking key; compare descending to rank.
    pub fn rank_key(&self) -> (u32, u32, u32) {
        (self.gold, self.silver, self.bronze)
    }
}

impl AddAssign for MedalCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.gold += rhs.gold;
        self.silver += rhs.silver;
        self.bronze += rhs.bronze;
    }
}

/// A row of the analysis table: an [`EventRecord`] joined with its region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRow {
    pub id: Option<u64>,
    pub name: String,
    pub sex: Sex,
    pub age: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub team: String,
    pub noc: String,
    pub games: String,
    pub year: Option<i32>,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: MedalOutcome,
    pub region: Option<String>,
    pub medals: MedalCounts,
}

impl AnalysisRow {
    pub fn from_record(record: EventRecord, region: Option<String>) -> Self {
        let medal = MedalOutcome::from(record.medal);
        Self {
            id: record.id,
            name: record.name,
            sex: record.sex,
            age: record.age,
            height: record.height,
            weight: record.weight,
            team: record.team,
            noc: record.noc,
            games: record.games,
            year: record.year,
            season: record.season,
            city: record.city,
            sport: record.sport,
            event: record.event,
            medal,
            region,
            medals: MedalCounts::indicator(medal),
        }
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn has_medal(&self) -> bool {
        self.medal.is_medal()
    }
}

/// The preprocessed, read-only table every view is computed from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisTable {
    rows: Vec<AnalysisRow>,
}

impl AnalysisTable {
    pub fn new(rows: Vec<AnalysisRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AnalysisRow] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AnalysisRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<'a> IntoIterator for &'a AnalysisTable {
    type Item = &'a AnalysisRow;
    type IntoIter = std::slice::Iter<'a, AnalysisRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}
