//! Data model for the Olympic Games analytics workspace.
//!
//! Raw records ([`EventRecord`], [`RegionMapping`]) come from ingest, the
//! [`AnalysisTable`] is the preprocessed read-only table, and [`views`] holds
//! the derived tables returned by each aggregation.

pub mod enums;
pub mod error;
pub mod options;
pub mod record;
pub mod selection;
pub mod table;
pub mod views;

pub use enums::{Medal, MedalOutcome, Season, Sex};
pub use error::{ModelError, Result};
pub use options::{PreprocessOptions, SeasonFilter};
pub use record::{EventRecord, RegionMapping};
pub use selection::{CountryFilter, OVERALL, SportFilter, TimelineColumn, YearFilter};
pub use table::{AnalysisRow, AnalysisTable, MedalCounts};
pub use views::{
    AgeDistribution, AgeSeries, AgeSummary, AthleteMedals, CountryAthleteMedals,
    GenderParticipation, MedalTally, MedalTallyRow, OverviewStats, PhysiqueRow, Selectors,
    SportAgeDistribution, SportYearHeatmap, TallyGrouping, TallyKey, YearCount,
};
