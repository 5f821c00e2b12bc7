//! Athlete-level views: physique, gender participation and age.
//!
//! All of these work on one row per athlete, keyed on (name, region), so an
//! athlete with many entries is counted once; the first entry wins.

use std::collections::BTreeMap;

use tracing::debug;

use olympics_model::{
    AgeDistribution, AgeSeries, AnalysisRow, AnalysisTable, GenderParticipation, MedalOutcome,
    PhysiqueRow, Sex, SportAgeDistribution, SportFilter,
};

use crate::dedupe::dedupe_athletes;

/// Sports shown in the per-sport age distribution by default.
pub const FAMOUS_SPORTS: [&str; 52] = [
    "Basketball",
    "Judo",
    "Football",
    "Tug-Of-War",
    "Athletics",
    "Swimming",
    "Badminton",
    "Sailing",
    "Gymnastics",
    "Art Competitions",
    "Handball",
    "Weightlifting",
    "Wrestling",
    "Water Polo",
    "Hockey",
    "Rowing",
    "Fencing",
    "Equestrianism",
    "Shooting",
    "Boxing",
    "Taekwondo",
    "Cycling",
    "Diving",
    "Canoeing",
    "Tennis",
    "Modern Pentathlon",
    "Golf",
    "Softball",
    "Archery",
    "Volleyball",
    "Synchronized Swimming",
    "Table Tennis",
    "Baseball",
    "Rhythmic Gymnastics",
    "Rugby Sevens",
    "Trampolining",
    "Beach Volleyball",
    "Triathlon",
    "Rugby",
    "Lacrosse",
    "Polo",
    "Cricket",
    "Ice Hockey",
    "Racquets",
    "Motorboating",
    "Croquet",
    "Figure Skating",
    "Jeu De Paume",
    "Roque",
    "Basque Pelota",
    "Alpinism",
    "Aeronautics",
];

/// Height/weight points, optionally limited to athletes whose first entry
/// is in `sport`.
pub fn weight_v_height(table: &AnalysisTable, sport: &SportFilter) -> Vec<PhysiqueRow> {
    dedupe_athletes(table)
        .into_iter()
        .filter(|row| sport.accepts(&row.sport))
        .map(|row| PhysiqueRow {
            name: row.name.clone(),
            region: row.region.clone(),
            sport: row.sport.clone(),
            medal: row.medal,
            sex: row.sex,
            height: row.height,
            weight: row.weight,
        })
        .collect()
}

/// Distinct male and female athletes per year, zero-filled.
pub fn men_vs_women(table: &AnalysisTable) -> Vec<GenderParticipation> {
    let mut years: BTreeMap<i32, GenderParticipation> = BTreeMap::new();
    for row in dedupe_athletes(table) {
        let Some(year) = row.year else {
            continue;
        };
        let entry = years.entry(year).or_insert(GenderParticipation {
            year,
            male: 0,
            female: 0,
        });
        match row.sex {
            Sex::Male => entry.male += 1,
            Sex::Female => entry.female += 1,
        }
    }
    years.into_values().collect()
}

fn ages<'a>(rows: impl IntoIterator<Item = &'a AnalysisRow>) -> AgeSeries {
    AgeSeries::new(rows.into_iter().filter_map(|row| row.age).collect())
}

/// Age of every athlete, and of gold, silver and bronze medalists.
pub fn age_distribution(table: &AnalysisTable) -> AgeDistribution {
    let athletes = dedupe_athletes(table);
    let with_medal = |medal: MedalOutcome| {
        ages(
            athletes
                .iter()
                .copied()
                .filter(move |row| row.medal == medal),
        )
    };
    AgeDistribution {
        overall: ages(athletes.iter().copied()),
        gold: with_medal(MedalOutcome::Gold),
        silver: with_medal(MedalOutcome::Silver),
        bronze: with_medal(MedalOutcome::Bronze),
    }
}

/// Gold-medalist ages per sport.
///
/// A density curve needs at least two values spread over at least two
/// distinct ages; sports short of that are returned as
/// [`SportAgeDistribution::InsufficientData`].
pub fn age_by_sport(table: &AnalysisTable, sports: &[&str]) -> Vec<SportAgeDistribution> {
    let athletes = dedupe_athletes(table);
    sports
        .iter()
        .map(|sport| {
            let series = ages(
                athletes
                    .iter()
                    .copied()
                    .filter(|row| row.sport == *sport && row.medal == MedalOutcome::Gold),
            );
            let distinct = series.distinct();
            if series.len() >= 2 && distinct > 1 {
                SportAgeDistribution::Available {
                    sport: (*sport).to_string(),
                    ages: series,
                }
            } else {
                debug!(sport, values = series.len(), distinct, "not enough data");
                SportAgeDistribution::InsufficientData {
                    sport: (*sport).to_string(),
                    values: series.len(),
                    distinct,
                }
            }
        })
        .collect()
}
