//! Type-safe enumerations for the categorical columns of the events dataset.
//!
//! The source files spell these as short strings (`M`, `Summer`, `Gold`);
//! parsing is case-insensitive and trims surrounding whitespace.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// Athlete sex as recorded in the events dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// `M`
    Male,
    /// `F`
    Female,
}

impl Sex {
    /// Returns the single-letter code used in the dataset.
    pub fn as_code(&self) -> &'static str {
        match self {
            Sex::Male => "M",
            Sex::Female => "F",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

impl FromStr for Sex {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Sex::Male),
            "F" | "FEMALE" => Ok(Sex::Female),
            _ => Err(ModelError::InvalidSex(s.to_string())),
        }
    }
}

/// Games season. An edition is identified by year plus season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SUMMER" => Ok(Season::Summer),
            "WINTER" => Ok(Season::Winter),
            _ => Err(ModelError::InvalidSeason(s.to_string())),
        }
    }
}

/// A medal awarded for an event entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Medal::Gold => "Gold",
            Medal::Silver => "Silver",
            Medal::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for Medal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medal {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GOLD" => Ok(Medal::Gold),
            "SILVER" => Ok(Medal::Silver),
            "BRONZE" => Ok(Medal::Bronze),
            _ => Err(ModelError::InvalidMedal(s.to_string())),
        }
    }
}

/// Medal column of the analysis table.
///
/// Unlike the raw record, absence is an explicit `NoMedal` marker so that
/// presence checks never have to special-case nulls.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum MedalOutcome {
    Gold,
    Silver,
    Bronze,
    #[default]
    #[serde(rename = "No Medal")]
    NoMedal,
}

impl MedalOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MedalOutcome::Gold => "Gold",
            MedalOutcome::Silver => "Silver",
            MedalOutcome::Bronze => "Bronze",
            MedalOutcome::NoMedal => "No Medal",
        }
    }

    /// Returns the medal, or `None` for the no-medal marker.
    pub fn medal(&self) -> Option<Medal> {
        match self {
            MedalOutcome::Gold => Some(Medal::Gold),
            MedalOutcome::Silver => Some(Medal::Silver),
            MedalOutcome::Bronze => Some(Medal::Bronze),
            MedalOutcome::NoMedal => None,
        }
    }

    pub fn is_medal(&self) -> bool {
        !matches!(self, MedalOutcome::NoMedal)
    }
}

impl From<Option<Medal>> for MedalOutcome {
    fn from(value: Option<Medal>) -> Self {
        match value {
            Some(Medal::Gold) => MedalOutcome::Gold,
            Some(Medal::Silver) => MedalOutcome::Silver,
            Some(Medal::Bronze) => MedalOutcome::Bronze,
            None => MedalOutcome::NoMedal,
        }
    }
}

impl fmt::Display for MedalOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
