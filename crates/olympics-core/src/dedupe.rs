//! Keyed row deduplication.
//!
//! Every variant keeps the first occurrence of a key and preserves input
//! order, so deduplicating an already-deduplicated sequence is a no-op.

use std::collections::BTreeSet;

use olympics_model::{AnalysisRow, MedalOutcome, Season, Sex};

/// Identity of a team medal: every member of a winning team shares it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TeamMedalKey<'a> {
    pub region: Option<&'a str>,
    pub year: Option<i32>,
    pub sport: &'a str,
    pub event: &'a str,
    pub medal: MedalOutcome,
}

impl<'a> TeamMedalKey<'a> {
    pub fn of(row: &'a AnalysisRow) -> Self {
        Self {
            region: row.region(),
            year: row.year,
            sport: &row.sport,
            event: &row.event,
            medal: row.medal,
        }
    }
}

/// Full-row identity; floats compare by bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct RowKey<'a> {
    id: Option<u64>,
    name: &'a str,
    sex: Sex,
    age: Option<u64>,
    height: Option<u64>,
    weight: Option<u64>,
    team: &'a str,
    noc: &'a str,
    games: &'a str,
    year: Option<i32>,
    season: Season,
    city: &'a str,
    sport: &'a str,
    event: &'a str,
    medal: MedalOutcome,
    region: Option<&'a str>,
}

impl<'a> RowKey<'a> {
    fn of(row: &'a AnalysisRow) -> Self {
        Self {
            id: row.id,
            name: &row.name,
            sex: row.sex,
            age: row.age.map(f64::to_bits),
            height: row.height.map(f64::to_bits),
            weight: row.weight.map(f64::to_bits),
            team: &row.team,
            noc: &row.noc,
            games: &row.games,
            year: row.year,
            season: row.season,
            city: &row.city,
            sport: &row.sport,
            event: &row.event,
            medal: row.medal,
            region: row.region(),
        }
    }
}

/// Keeps the first row for each key produced by `key`.
pub fn dedupe_by_key<'a, K, F>(
    rows: impl IntoIterator<Item = &'a AnalysisRow>,
    key: F,
) -> Vec<&'a AnalysisRow>
where
    K: Ord,
    F: Fn(&'a AnalysisRow) -> K,
{
    let mut seen = BTreeSet::new();
    rows.into_iter()
        .filter(|&row| seen.insert(key(row)))
        .collect()
}

/// Collapses team members sharing a medal to one row per
/// (region, year, sport, event, medal).
pub fn dedupe_team_medals<'a>(
    rows: impl IntoIterator<Item = &'a AnalysisRow>,
) -> Vec<&'a AnalysisRow> {
    dedupe_by_key(rows, TeamMedalKey::of)
}

/// One row per athlete, keyed on (name, region).
pub fn dedupe_athletes<'a>(rows: impl IntoIterator<Item = &'a AnalysisRow>) -> Vec<&'a AnalysisRow> {
    dedupe_by_key(rows, |row| (row.name.as_str(), row.region()))
}

/// Drops exact duplicate rows, keeping the first occurrence.
pub fn dedupe_exact_rows(rows: Vec<AnalysisRow>) -> Vec<AnalysisRow> {
    let keep: Vec<bool> = {
        let mut seen = BTreeSet::new();
        rows.iter().map(|row| seen.insert(RowKey::of(row))).collect()
    };
    rows.into_iter()
        .zip(keep)
        .filter_map(|(row, keep)| keep.then_some(row))
        .collect()
}
