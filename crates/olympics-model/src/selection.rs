//! Selector values for the views.
//!
//! Each selector has an `Overall` sentinel meaning "no filter"; it displays
//! and parses as `Overall`, matching the labels offered in selector lists.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::ModelError;

pub const OVERALL: &str = "Overall";

fn is_overall(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case(OVERALL)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum YearFilter {
    #[default]
    Overall,
    Year(i32),
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::Overall => f.write_str(OVERALL),
            YearFilter::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for YearFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_overall(s) {
            return Ok(YearFilter::Overall);
        }
        s.trim()
            .parse::<i32>()
            .map(YearFilter::Year)
            .map_err(|_| ModelError::InvalidYear(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CountryFilter {
    #[default]
    Overall,
    Country(String),
}

impl CountryFilter {
    pub fn country(name: impl Into<String>) -> Self {
        CountryFilter::Country(name.into())
    }
}

impl fmt::Display for CountryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountryFilter::Overall => f.write_str(OVERALL),
            CountryFilter::Country(name) => f.write_str(name),
        }
    }
}

impl FromStr for CountryFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_overall(s) {
            Ok(CountryFilter::Overall)
        } else {
            Ok(CountryFilter::Country(s.trim().to_string()))
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SportFilter {
    #[default]
    Overall,
    Sport(String),
}

impl SportFilter {
    pub fn sport(name: impl Into<String>) -> Self {
        SportFilter::Sport(name.into())
    }

    pub fn accepts(&self, sport: &str) -> bool {
        match self {
            SportFilter::Overall => true,
            SportFilter::Sport(selected) => selected == sport,
        }
    }
}

impl fmt::Display for SportFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SportFilter::Overall => f.write_str(OVERALL),
            SportFilter::Sport(name) => f.write_str(name),
        }
    }
}

impl FromStr for SportFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_overall(s) {
            Ok(SportFilter::Overall)
        } else {
            Ok(SportFilter::Sport(s.trim().to_string()))
        }
    }
}

macro_rules! serialize_as_display {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

serialize_as_display!(YearFilter, CountryFilter, SportFilter);

/// Column whose distinct values are counted per year by the timeline view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimelineColumn {
    /// Participating nations (present regions only).
    Region,
    Event,
    /// Distinct athlete names.
    Athlete,
    Sport,
}

impl TimelineColumn {
    pub fn label(&self) -> &'static str {
        match self {
            TimelineColumn::Region => "Nations",
            TimelineColumn::Event => "Events",
            TimelineColumn::Athlete => "Athletes",
            TimelineColumn::Sport => "Sports",
        }
    }
}
