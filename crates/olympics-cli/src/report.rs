//! Rendering of view results as terminal tables, JSON or CSV.
//!
//! Every command builds a [`Report`]: an ordered list of [`Section`]s, each
//! carrying display rows for table/CSV output and the serialized view for
//! JSON output.

use std::io::Write;

use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;
use serde_json::{Map, Value};

use olympics_model::{
    AgeDistribution, AgeSeries, AthleteMedals, CountryAthleteMedals, GenderParticipation,
    MedalTally, OverviewStats, PhysiqueRow, Selectors, SportAgeDistribution, SportFilter,
    SportYearHeatmap, TimelineColumn, YearCount,
};

/// Placeholder printed for an empty selection.
pub const NO_DATA: &str = "no data";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

/// One titled table of a report.
#[derive(Debug, Clone)]
pub struct Section {
    /// Key of this section in JSON output.
    pub key: String,
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Indexes of right-aligned (numeric) columns.
    pub numeric: Vec<usize>,
    pub data: Value,
}

impl Section {
    fn new<T: Serialize + ?Sized>(
        key: impl Into<String>,
        title: impl Into<String>,
        headers: Vec<String>,
        data: &T,
    ) -> Result<Self> {
        let key = key.into();
        let data = serde_json::to_value(data).with_context(|| format!("serialize {key}"))?;
        Ok(Self {
            key,
            title: title.into(),
            headers,
            rows: Vec::new(),
            numeric: Vec::new(),
            data,
        })
    }

    fn with_rows(mut self, rows: Vec<Vec<String>>) -> Self {
        self.rows = rows;
        self
    }

    fn with_numeric(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.numeric = columns.into_iter().collect();
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn write(&self, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
        match format {
            OutputFormat::Table => self.write_tables(out),
            OutputFormat::Json => self.write_json(out),
            OutputFormat::Csv => self.write_csv(out),
        }
    }

    fn write_tables(&self, out: &mut dyn Write) -> Result<()> {
        for (idx, section) in self.sections.iter().enumerate() {
            if idx > 0 {
                writeln!(out)?;
            }
            writeln!(out, "{}", section.title)?;
            if section.is_empty() {
                writeln!(out, "{NO_DATA}")?;
                continue;
            }
            writeln!(out, "{}", section_table(section))?;
        }
        Ok(())
    }

    fn write_json(&self, out: &mut dyn Write) -> Result<()> {
        let mut object = Map::new();
        for section in &self.sections {
            object.insert(section.key.clone(), section.data.clone());
        }
        serde_json::to_writer_pretty(&mut *out, &Value::Object(object)).context("write json")?;
        writeln!(out)?;
        Ok(())
    }

    /// Each section is preceded by a `# title` record when the report has
    /// more than one.
    fn write_csv(&self, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(&mut *out);
        let titled = self.sections.len() > 1;
        for section in &self.sections {
            if titled {
                writer.write_record([format!("# {}", section.title)])?;
            }
            writer.write_record(&section.headers)?;
            for row in &section.rows {
                writer.write_record(row)?;
            }
        }
        writer.flush().context("write csv")?;
        Ok(())
    }
}

fn section_table(section: &Section) -> Table {
    let mut table = Table::new();
    table.set_header(section.headers.iter().map(|h| header_cell(h)));
    apply_table_style(&mut table);
    for row in &section.rows {
        table.add_row(row.iter().enumerate().map(|(idx, value)| {
            if value.is_empty() {
                dim_cell("-")
            } else if idx == 0 {
                Cell::new(value).fg(Color::Blue).add_attribute(Attribute::Bold)
            } else {
                Cell::new(value)
            }
        }));
    }
    for &index in &section.numeric {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn headers(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

fn optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn decimal(value: f64) -> String {
    format!("{value:.1}")
}

pub fn tally_section(tally: &MedalTally) -> Result<Section> {
    let rows = tally
        .rows
        .iter()
        .map(|row| {
            vec![
                row.key.to_string(),
                row.rank.to_string(),
                row.gold.to_string(),
                row.silver.to_string(),
                row.bronze.to_string(),
                row.total.to_string(),
            ]
        })
        .collect();
    Ok(Section::new(
        "medal_tally",
        tally.title(),
        headers(&[tally.grouping.label(), "Rank", "Gold", "Silver", "Bronze", "Total"]),
        tally,
    )?
    .with_rows(rows)
    .with_numeric(1..6))
}

pub fn overview_section(stats: &OverviewStats) -> Result<Section> {
    let rows = [
        ("Editions", stats.editions),
        ("Hosts", stats.hosts),
        ("Sports", stats.sports),
        ("Events", stats.events),
        ("Nations", stats.nations),
        ("Athletes", stats.athletes),
    ]
    .into_iter()
    .map(|(label, value)| vec![label.to_string(), value.to_string()])
    .collect();
    Ok(Section::new("top_statistics", "Top Statistics", headers(&["Statistic", "Value"]), stats)?
        .with_rows(rows)
        .with_numeric([1]))
}

pub fn timeline_section(column: TimelineColumn, series: &[YearCount]) -> Result<Section> {
    let label = column.label();
    let rows = series
        .iter()
        .map(|point| vec![point.year.to_string(), point.count.to_string()])
        .collect();
    Ok(Section::new(
        format!("{}_over_time", label.to_lowercase()),
        format!("Participating {label} over the years"),
        headers(&["Year", label]),
        series,
    )?
    .with_rows(rows)
    .with_numeric([1]))
}

pub fn athletes_section(sport: &SportFilter, athletes: &[AthleteMedals]) -> Result<Section> {
    let rows = athletes
        .iter()
        .map(|athlete| {
            vec![
                athlete.name.clone(),
                athlete.medals.to_string(),
                athlete.sport.clone(),
                optional(athlete.region.as_deref()),
            ]
        })
        .collect();
    Ok(Section::new(
        "most_successful",
        format!("Most successful athletes ({sport})"),
        headers(&["Name", "Medals", "Sport", "Region"]),
        athletes,
    )?
    .with_rows(rows)
    .with_numeric([1]))
}

pub fn yearwise_section(country: &str, series: &[YearCount]) -> Result<Section> {
    let rows = series
        .iter()
        .map(|point| vec![point.year.to_string(), point.count.to_string()])
        .collect();
    Ok(Section::new(
        "yearwise_medal_tally",
        format!("{country} Medal Tally over the years"),
        headers(&["Year", "Medals"]),
        series,
    )?
    .with_rows(rows)
    .with_numeric([1]))
}

pub fn heatmap_section(country: &str, heatmap: &SportYearHeatmap) -> Result<Section> {
    let mut labels = vec!["Sport".to_string()];
    labels.extend(heatmap.years.iter().map(ToString::to_string));
    let rows = heatmap
        .sports
        .iter()
        .zip(&heatmap.counts)
        .map(|(sport, counts)| {
            std::iter::once(sport.clone())
                .chain(counts.iter().map(ToString::to_string))
                .collect()
        })
        .collect();
    Ok(Section::new(
        "event_heatmap",
        format!("{country} excels in the following sports"),
        labels,
        heatmap,
    )?
    .with_rows(rows)
    .with_numeric(1..=heatmap.years.len()))
}

pub fn country_athletes_section(
    country: &str,
    athletes: &[CountryAthleteMedals],
) -> Result<Section> {
    let rows = athletes
        .iter()
        .map(|athlete| {
            vec![
                athlete.name.clone(),
                athlete.medals.to_string(),
                athlete.sport.clone(),
            ]
        })
        .collect();
    Ok(Section::new(
        "top_athletes",
        format!("Top 10 athletes of {country}"),
        headers(&["Name", "Medals", "Sport"]),
        athletes,
    )?
    .with_rows(rows)
    .with_numeric([1]))
}

fn age_row(label: &str, series: &AgeSeries) -> Vec<String> {
    match series.summary() {
        Some(summary) => vec![
            label.to_string(),
            summary.count.to_string(),
            decimal(summary.min),
            decimal(summary.max),
            decimal(summary.mean),
            decimal(summary.median),
        ],
        None => vec![label.to_string(), "0".to_string()],
    }
}

pub fn age_section(distribution: &AgeDistribution) -> Result<Section> {
    let rows = vec![
        age_row("Overall Age", &distribution.overall),
        age_row("Gold Medalist", &distribution.gold),
        age_row("Silver Medalist", &distribution.silver),
        age_row("Bronze Medalist", &distribution.bronze),
    ];
    Ok(Section::new(
        "age_distribution",
        "Distribution of Age",
        headers(&["Group", "Count", "Min", "Max", "Mean", "Median"]),
        distribution,
    )?
    .with_rows(rows)
    .with_numeric(1..6))
}

pub fn age_by_sport_section(sports: &[SportAgeDistribution]) -> Result<Section> {
    let rows = sports
        .iter()
        .map(|entry| match entry {
            SportAgeDistribution::Available { sport, ages } => {
                let mut row = age_row(sport, ages);
                row.push("available".to_string());
                row
            }
            SportAgeDistribution::InsufficientData { sport, values, .. } => vec![
                sport.clone(),
                values.to_string(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                "not enough data".to_string(),
            ],
        })
        .collect();
    Ok(Section::new(
        "age_by_sport",
        "Distribution of Age wrt Sports (Gold Medalist)",
        headers(&["Sport", "Count", "Min", "Max", "Mean", "Median", "Status"]),
        sports,
    )?
    .with_rows(rows)
    .with_numeric(1..6))
}

pub fn physique_section(sport: &SportFilter, athletes: &[PhysiqueRow]) -> Result<Section> {
    let rows = athletes
        .iter()
        .map(|athlete| {
            vec![
                athlete.name.clone(),
                optional(athlete.region.as_deref()),
                athlete.sport.clone(),
                athlete.medal.to_string(),
                athlete.sex.to_string(),
                optional(athlete.height),
                optional(athlete.weight),
            ]
        })
        .collect();
    Ok(Section::new(
        "height_vs_weight",
        format!("Height Vs Weight ({sport})"),
        headers(&["Name", "Region", "Sport", "Medal", "Sex", "Height", "Weight"]),
        athletes,
    )?
    .with_rows(rows)
    .with_numeric([5, 6]))
}

pub fn gender_section(series: &[GenderParticipation]) -> Result<Section> {
    let rows = series
        .iter()
        .map(|point| {
            vec![
                point.year.to_string(),
                point.male.to_string(),
                point.female.to_string(),
            ]
        })
        .collect();
    Ok(Section::new(
        "men_vs_women",
        "Men Vs Women Participation Over the Years",
        headers(&["Year", "Male", "Female"]),
        series,
    )?
    .with_rows(rows)
    .with_numeric([1, 2]))
}

pub fn selectors_section(selectors: &Selectors, sports: &[SportFilter]) -> Result<Section> {
    let depth = selectors
        .years
        .len()
        .max(selectors.countries.len())
        .max(sports.len());
    let rows = (0..depth)
        .map(|idx| {
            vec![
                optional(selectors.years.get(idx)),
                optional(selectors.countries.get(idx)),
                optional(sports.get(idx)),
            ]
        })
        .collect();
    #[derive(Serialize)]
    struct Lists<'a> {
        years: &'a [olympics_model::YearFilter],
        countries: &'a [olympics_model::CountryFilter],
        sports: &'a [SportFilter],
    }
    let lists = Lists {
        years: &selectors.years,
        countries: &selectors.countries,
        sports,
    };
    Ok(Section::new(
        "selectors",
        "Selectors",
        headers(&["Year", "Country", "Sport"]),
        &lists,
    )?
    .with_rows(rows))
}
