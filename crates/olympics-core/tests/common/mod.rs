//! Shared fixtures for olympics-core tests.
#![allow(dead_code)]

use olympics_model::{
    AnalysisTable, EventRecord, Medal, PreprocessOptions, RegionMapping, Season, Sex,
};

pub fn event(name: &str, noc: &str, year: i32, sport: &str, event: &str) -> EventRecord {
    EventRecord {
        id: None,
        name: name.to_string(),
        sex: Sex::Male,
        age: None,
        height: None,
        weight: None,
        team: noc.to_string(),
        noc: noc.to_string(),
        games: format!("{year} Summer"),
        year: Some(year),
        season: Season::Summer,
        city: "Host City".to_string(),
        sport: sport.to_string(),
        event: event.to_string(),
        medal: None,
    }
}

pub fn medal(mut record: EventRecord, medal: Medal) -> EventRecord {
    record.medal = Some(medal);
    record
}

pub fn female(mut record: EventRecord) -> EventRecord {
    record.sex = Sex::Female;
    record
}

pub fn aged(mut record: EventRecord, age: f64) -> EventRecord {
    record.age = Some(age);
    record
}

pub fn regions() -> Vec<RegionMapping> {
    vec![
        RegionMapping::new("ATL", Some("Atlantis")),
        RegionMapping::new("BOR", Some("Borduria")),
        RegionMapping::new("SYL", Some("Syldavia")),
        RegionMapping::new("ROT", None).with_notes("Refugee Olympic Team"),
    ]
}

pub fn table(events: Vec<EventRecord>) -> AnalysisTable {
    olympics_core::preprocess(events, &regions(), &PreprocessOptions::default())
}
