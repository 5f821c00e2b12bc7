//! Events dataset (`athlete_events.csv`): one row per athlete-event entry.

use std::path::Path;

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use olympics_model::{EventRecord, Medal, Season, Sex};

use crate::csv::{read_csv_frame, require_columns, string_column};
use crate::error::{IngestError, Result};
use crate::values::{parse_f64, parse_i64, parse_year};

pub const COL_ID: &str = "ID";
pub const COL_NAME: &str = "Name";
pub const COL_SEX: &str = "Sex";
pub const COL_AGE: &str = "Age";
pub const COL_HEIGHT: &str = "Height";
pub const COL_WEIGHT: &str = "Weight";
pub const COL_TEAM: &str = "Team";
pub const COL_NOC: &str = "NOC";
pub const COL_GAMES: &str = "Games";
pub const COL_YEAR: &str = "Year";
pub const COL_SEASON: &str = "Season";
pub const COL_CITY: &str = "City";
pub const COL_SPORT: &str = "Sport";
pub const COL_EVENT: &str = "Event";
pub const COL_MEDAL: &str = "Medal";

/// Columns that must be present in the header. `ID` is optional.
pub const REQUIRED_EVENT_COLUMNS: [&str; 14] = [
    COL_NAME, COL_SEX, COL_AGE, COL_HEIGHT, COL_WEIGHT, COL_TEAM, COL_NOC, COL_GAMES, COL_YEAR,
    COL_SEASON, COL_CITY, COL_SPORT, COL_EVENT, COL_MEDAL,
];

/// Reads and parses the events dataset.
pub fn read_events(path: &Path) -> Result<Vec<EventRecord>> {
    let df = read_csv_frame(path)?;
    events_from_frame(&df, path)
}

struct EventColumns {
    id: Option<Vec<Option<String>>>,
    name: Vec<Option<String>>,
    sex: Vec<Option<String>>,
    age: Vec<Option<String>>,
    height: Vec<Option<String>>,
    weight: Vec<Option<String>>,
    team: Vec<Option<String>>,
    noc: Vec<Option<String>>,
    games: Vec<Option<String>>,
    year: Vec<Option<String>>,
    season: Vec<Option<String>>,
    city: Vec<Option<String>>,
    sport: Vec<Option<String>>,
    event: Vec<Option<String>>,
    medal: Vec<Option<String>>,
}

impl EventColumns {
    fn extract(df: &DataFrame) -> Result<Self> {
        let id = if df.column(COL_ID).is_ok() {
            Some(string_column(df, COL_ID)?)
        } else {
            None
        };
        Ok(Self {
            id,
            name: string_column(df, COL_NAME)?,
            sex: string_column(df, COL_SEX)?,
            age: string_column(df, COL_AGE)?,
            height: string_column(df, COL_HEIGHT)?,
            weight: string_column(df, COL_WEIGHT)?,
            team: string_column(df, COL_TEAM)?,
            noc: string_column(df, COL_NOC)?,
            games: string_column(df, COL_GAMES)?,
            year: string_column(df, COL_YEAR)?,
            season: string_column(df, COL_SEASON)?,
            city: string_column(df, COL_CITY)?,
            sport: string_column(df, COL_SPORT)?,
            event: string_column(df, COL_EVENT)?,
            medal: string_column(df, COL_MEDAL)?,
        })
    }
}

fn take(values: &mut [Option<String>], idx: usize) -> Option<String> {
    values[idx].take()
}

/// Converts an all-string events frame into typed records.
///
/// Unparseable numeric cells become `None`; an unrecognised sex, season or
/// medal is a configuration error because the views cannot classify the row.
pub fn events_from_frame(df: &DataFrame, path: &Path) -> Result<Vec<EventRecord>> {
    require_columns(df, &REQUIRED_EVENT_COLUMNS, path)?;
    if df.height() == 0 {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut columns = EventColumns::extract(df)?;
    let invalid = |column: &str, value: String, idx: usize| IngestError::InvalidValue {
        column: column.to_string(),
        value,
        row: idx + 1,
        path: path.to_path_buf(),
    };

    let mut records = Vec::with_capacity(df.height());
    let mut missing_years = 0usize;
    for idx in 0..df.height() {
        let sex_raw = take(&mut columns.sex, idx).unwrap_or_default();
        let sex = sex_raw
            .parse::<Sex>()
            .map_err(|_| invalid(COL_SEX, sex_raw.clone(), idx))?;
        let season_raw = take(&mut columns.season, idx).unwrap_or_default();
        let season = season_raw
            .parse::<Season>()
            .map_err(|_| invalid(COL_SEASON, season_raw.clone(), idx))?;
        let medal = match take(&mut columns.medal, idx) {
            Some(raw) => Some(
                raw.parse::<Medal>()
                    .map_err(|_| invalid(COL_MEDAL, raw.clone(), idx))?,
            ),
            None => None,
        };
        let year = take(&mut columns.year, idx).and_then(|raw| parse_year(&raw));
        if year.is_none() {
            missing_years += 1;
        }
        let id = columns
            .id
            .as_mut()
            .and_then(|ids| take(ids, idx))
            .and_then(|raw| parse_i64(&raw))
            .and_then(|id| u64::try_from(id).ok());

        records.push(EventRecord {
            id,
            name: take(&mut columns.name, idx).unwrap_or_default(),
            sex,
            age: take(&mut columns.age, idx).and_then(|raw| parse_f64(&raw)),
            height: take(&mut columns.height, idx).and_then(|raw| parse_f64(&raw)),
            weight: take(&mut columns.weight, idx).and_then(|raw| parse_f64(&raw)),
            team: take(&mut columns.team, idx).unwrap_or_default(),
            noc: take(&mut columns.noc, idx).unwrap_or_default(),
            games: take(&mut columns.games, idx).unwrap_or_default(),
            year,
            season,
            city: take(&mut columns.city, idx).unwrap_or_default(),
            sport: take(&mut columns.sport, idx).unwrap_or_default(),
            event: take(&mut columns.event, idx).unwrap_or_default(),
            medal,
        });
    }

    if missing_years > 0 {
        warn!(
            path = %path.display(),
            missing_years,
            "rows without a valid year are excluded from time series"
        );
    }
    debug!(path = %path.display(), rows = records.len(), "parsed events");
    Ok(records)
}
