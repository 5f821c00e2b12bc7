//! Configuration options for preprocessing.

use serde::{Deserialize, Serialize};

use crate::Season;

/// Which seasons survive preprocessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SeasonFilter {
    /// Keep both Summer and Winter editions.
    #[default]
    All,
    /// Keep only Summer editions.
    Summer,
    /// Keep only Winter editions.
    Winter,
}

impl SeasonFilter {
    pub fn accepts(&self, season: Season) -> bool {
        match self {
            SeasonFilter::All => true,
            SeasonFilter::Summer => season == Season::Summer,
            SeasonFilter::Winter => season == Season::Winter,
        }
    }
}

/// Options controlling how the analysis table is built.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreprocessOptions {
    pub season: SeasonFilter,
}

impl PreprocessOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_season(mut self, season: SeasonFilter) -> Self {
        self.season = season;
        self
    }
}
