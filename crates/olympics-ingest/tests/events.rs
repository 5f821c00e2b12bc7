//! Tests for loading the events and region datasets.

use std::io::Write;

use olympics_ingest::{IngestError, load_dataset, read_events, read_regions};
use olympics_model::{Medal, Season, Sex};
use tempfile::NamedTempFile;

const EVENTS_HEADER: &str =
    "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal\n";

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn reads_typed_event_records() {
    let contents = format!(
        "{EVENTS_HEADER}\
         1,A Dijiang,M,24,180,80,China,CHN,1992 Summer,1992,Summer,Barcelona,Basketball,Basketball Men's Basketball,NA\n\
         5,Christine Jacoba Aaftink,F,21,185,82.5,Netherlands,NED,1988 Winter,1988,Winter,Calgary,Speed Skating,\"Speed Skating Women's 500 metres\",Gold\n"
    );
    let file = create_temp_csv(&contents);

    let records = read_events(file.path()).expect("read events");

    assert_eq!(records.len(), 2);
    let first = &records[0];
    assert_eq!(first.id, Some(1));
    assert_eq!(first.name, "A Dijiang");
    assert_eq!(first.sex, Sex::Male);
    assert_eq!(first.age, Some(24.0));
    assert_eq!(first.year, Some(1992));
    assert_eq!(first.season, Season::Summer);
    assert!(first.medal.is_none());

    let second = &records[1];
    assert_eq!(second.weight, Some(82.5));
    assert_eq!(second.season, Season::Winter);
    assert_eq!(second.event, "Speed Skating Women's 500 metres");
    assert_eq!(second.medal, Some(Medal::Gold));
}

#[test]
fn missing_numeric_cells_become_none() {
    let contents = format!(
        "{EVENTS_HEADER}\
         2,A Lamusi,M,NA,,NA,China,CHN,2012 Summer,NA,Summer,London,Judo,Judo Men's Extra-Lightweight,NA\n"
    );
    let file = create_temp_csv(&contents);

    let records = read_events(file.path()).expect("read events");

    assert_eq!(records[0].age, None);
    assert_eq!(records[0].height, None);
    assert_eq!(records[0].weight, None);
    assert_eq!(records[0].year, None);
}

#[test]
fn id_column_is_optional() {
    let contents = "Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal\n\
                    Jane Doe,F,30,170,60,Atlantis,ATL,2000 Summer,2000,Summer,Sydney,Hockey,Hockey Women's Hockey,Silver\n";
    let file = create_temp_csv(contents);

    let records = read_events(file.path()).expect("read events");

    assert_eq!(records[0].id, None);
    assert_eq!(records[0].medal, Some(Medal::Silver));
}

#[test]
fn missing_required_column_is_configuration_error() {
    let contents = "ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Medal\n\
                    1,A,M,20,170,60,X,XXX,2000 Summer,2000,Summer,Sydney,Judo,NA\n";
    let file = create_temp_csv(contents);

    let err = read_events(file.path()).unwrap_err();

    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "Event"));
}

#[test]
fn unknown_season_is_rejected() {
    let contents = format!(
        "{EVENTS_HEADER}\
         1,A,M,20,170,60,X,XXX,2000 Spring,2000,Spring,Sydney,Judo,Judo Men's Open,NA\n"
    );
    let file = create_temp_csv(&contents);

    let err = read_events(file.path()).unwrap_err();

    assert!(matches!(
        err,
        IngestError::InvalidValue { ref column, ref value, row: 1, .. }
            if column == "Season" && value == "Spring"
    ));
}

#[test]
fn header_only_events_file_is_empty_error() {
    let file = create_temp_csv(EVENTS_HEADER);
    let err = read_events(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn reads_region_mappings_with_null_regions() {
    let contents = "NOC,region,notes\nAFG,Afghanistan,\nROT,NA,Refugee Olympic Team\nSIN,Singapore,\n";
    let file = create_temp_csv(contents);

    let mappings = read_regions(file.path()).expect("read regions");

    assert_eq!(mappings.len(), 3);
    assert_eq!(mappings[0].region.as_deref(), Some("Afghanistan"));
    assert_eq!(mappings[0].notes, None);
    assert_eq!(mappings[1].region, None);
    assert_eq!(mappings[1].notes.as_deref(), Some("Refugee Olympic Team"));
}

#[test]
fn loads_both_datasets() {
    let events = create_temp_csv(&format!(
        "{EVENTS_HEADER}\
         1,A,M,20,170,60,Afghanistan,AFG,2000 Summer,2000,Summer,Sydney,Judo,Judo Men's Open,NA\n"
    ));
    let regions = create_temp_csv("NOC,region\nAFG,Afghanistan\n");

    let dataset = load_dataset(events.path(), regions.path()).expect("load dataset");

    assert_eq!(dataset.events.len(), 1);
    assert_eq!(dataset.regions.len(), 1);
}
