//! Raw input records, one per CSV row.

use serde::{Deserialize, Serialize};

use crate::{Medal, Season, Sex};

/// One athlete's entry in one event at one edition of the Games.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Athlete identifier from the source file, when present.
    pub id: Option<u64>,
    pub name: String,
    pub sex: Sex,
    pub age: Option<f64>,
    /// Height in centimetres.
    pub height: Option<f64>,
    /// Weight in kilograms.
    pub weight: Option<f64>,
    pub team: String,
    /// Three-letter National Olympic Committee code.
    pub noc: String,
    /// Edition label, e.g. `2000 Summer`.
    pub games: String,
    /// `None` when the source cell is missing or not an integer.
    pub year: Option<i32>,
    pub season: Season,
    pub city: String,
    pub sport: String,
    pub event: String,
    pub medal: Option<Medal>,
}

/// Mapping from an NOC code to its modern region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMapping {
    pub noc: String,
    /// `None` for historical or defunct codes without a modern country.
    pub region: Option<String>,
    pub notes: Option<String>,
}

impl RegionMapping {
    pub fn new(noc: impl Into<String>, region: Option<&str>) -> Self {
        Self {
            noc: noc.into(),
            region: region.map(str::to_string),
            notes: None,
        }
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
