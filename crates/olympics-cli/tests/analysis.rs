//! End-to-end reports over small CSV fixtures.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use tempfile::TempDir;

use olympics_cli::analysis::Analysis;
use olympics_cli::report::{OutputFormat, Report};
use olympics_model::{CountryFilter, PreprocessOptions, SeasonFilter, SportFilter, YearFilter};

const EVENTS: &str = "\
ID,Name,Sex,Age,Height,Weight,Team,NOC,Games,Year,Season,City,Sport,Event,Medal
1,Ana Keeper,F,24,170,60,Atlantis,ATL,2000 Summer,2000,Summer,Sydney,Hockey,Hockey Women's Hockey,Gold
2,Bea Back,F,26,168,58,Atlantis,ATL,2000 Summer,2000,Summer,Sydney,Hockey,Hockey Women's Hockey,Gold
3,Cid Rower,M,30,190,90,Borduria,BOR,2000 Summer,2000,Summer,Sydney,Rowing,Rowing Men's Single Sculls,Silver
4,Dag Skier,M,22,NA,NA,Borduria,BOR,2002 Winter,2002,Winter,Salt Lake City,Alpine Skiing,Alpine Skiing Men's Downhill,Gold
5,Eli Judoka,M,NA,175,81,Syldavia,SYL,1996 Summer,1996,Summer,Atlanta,Judo,Judo Men's Half-Heavyweight,NA
5,Eli Judoka,M,NA,175,81,Syldavia,SYL,1996 Summer,1996,Summer,Atlanta,Judo,Judo Men's Half-Heavyweight,NA
6,Fay Refugee,F,19,160,50,Refugee Olympic Athletes,ROT,2016 Summer,2016,Summer,Rio de Janeiro,Judo,Judo Women's Lightweight,Bronze
";

const REGIONS: &str = "\
NOC,region,notes
ATL,Atlantis,
BOR,Borduria,
SYL,Syldavia,
ROT,NA,Refugee Olympic Team
";

struct Fixture {
    _dir: TempDir,
    events: PathBuf,
    regions: PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let events = dir.path().join("athlete_events.csv");
    let regions = dir.path().join("noc_regions.csv");
    fs::write(&events, EVENTS).unwrap();
    fs::write(&regions, REGIONS).unwrap();
    Fixture {
        _dir: dir,
        events,
        regions,
    }
}

fn load(season: SeasonFilter) -> Analysis {
    let fixture = fixture();
    let options = PreprocessOptions::new().with_season(season);
    Analysis::load(&fixture.events, &fixture.regions, &options).unwrap()
}

fn render(report: &Report, format: OutputFormat) -> String {
    let mut out = Vec::new();
    report.write(format, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn load_dedupes_and_joins() {
    let analysis = load(SeasonFilter::All);
    let table = analysis.table();

    assert_eq!(table.len(), 6);
    let refugee = table.iter().find(|row| row.noc == "ROT").unwrap();
    assert_eq!(refugee.region(), None);
}

#[test]
fn tally_as_csv() {
    let analysis = load(SeasonFilter::All);

    let report = analysis
        .tally(YearFilter::Overall, &CountryFilter::Overall)
        .unwrap();

    insta::assert_snapshot!(render(&report, OutputFormat::Csv).trim_end(), @r"
    Region,Rank,Gold,Silver,Bronze,Total
    Borduria,1,1,1,0,2
    Atlantis,2,1,0,0,1
    Syldavia,3,0,0,0,0
    ");
}

#[test]
fn summer_only_tally() {
    let analysis = load(SeasonFilter::Summer);

    let report = analysis
        .tally(YearFilter::Overall, &CountryFilter::Overall)
        .unwrap();
    let json: Value = serde_json::from_str(&render(&report, OutputFormat::Json)).unwrap();

    let rows = json["medal_tally"]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["key"], "Atlantis");
    assert_eq!(rows[0]["gold"], 1);
    assert_eq!(rows[1]["key"], "Borduria");
    assert_eq!(rows[1]["silver"], 1);
}

#[test]
fn country_report_for_unknown_country_is_empty() {
    let analysis = load(SeasonFilter::All);

    let report = analysis.country("Ruritania").unwrap();

    assert_eq!(report.sections.len(), 3);
    assert!(report.sections.iter().all(|section| section.is_empty()));
    let text = render(&report, OutputFormat::Table);
    assert_eq!(text.matches("no data").count(), 3);
}

#[test]
fn overview_and_athletes_reports() {
    let analysis = load(SeasonFilter::All);

    let overview = analysis.overview(&SportFilter::Overall).unwrap();
    let json: Value = serde_json::from_str(&render(&overview, OutputFormat::Json)).unwrap();
    assert_eq!(json["top_statistics"]["editions"], 4);
    assert_eq!(json["top_statistics"]["nations"], 3);
    assert_eq!(json["nations_over_time"][0]["year"], 1996);
    assert_eq!(json["most_successful"].as_array().unwrap().len(), 5);

    let athletes = analysis.athletes(&SportFilter::sport("Judo")).unwrap();
    let json: Value = serde_json::from_str(&render(&athletes, OutputFormat::Json)).unwrap();
    assert_eq!(json["height_vs_weight"].as_array().unwrap().len(), 2);
    assert_eq!(json["age_distribution"]["gold"]["ages"][0], 24.0);
    assert_eq!(json["age_by_sport"][0]["status"], "insufficient_data");
}

#[test]
fn selectors_list_years_countries_and_sports() {
    let analysis = load(SeasonFilter::All);

    let report = analysis.selectors().unwrap();
    let json: Value = serde_json::from_str(&render(&report, OutputFormat::Json)).unwrap();

    assert_eq!(
        json["selectors"]["years"],
        serde_json::json!(["Overall", "1996", "2000", "2002", "2016"])
    );
    assert_eq!(
        json["selectors"]["countries"],
        serde_json::json!(["Overall", "Atlantis", "Borduria", "Syldavia"])
    );
    assert_eq!(json["selectors"]["sports"][0], "Overall");
}

#[test]
fn missing_file_reports_the_path() {
    let fixture = fixture();
    let missing = fixture.events.with_file_name("missing.csv");

    let error = Analysis::load(&missing, &fixture.regions, &PreprocessOptions::default())
        .err()
        .unwrap();

    assert!(format!("{error:#}").contains("missing.csv"));
}
