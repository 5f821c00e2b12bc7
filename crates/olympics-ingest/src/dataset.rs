use std::path::Path;
use std::time::Instant;

use tracing::{info, info_span};

use olympics_model::{EventRecord, RegionMapping};

use crate::error::Result;
use crate::events::read_events;
use crate::regions::read_regions;

/// Both raw input datasets, as loaded from disk.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub events: Vec<EventRecord>,
    pub regions: Vec<RegionMapping>,
}

/// Loads the events and region mapping files.
pub fn load_dataset(events_path: &Path, regions_path: &Path) -> Result<Dataset> {
    let span = info_span!(
        "ingest",
        events = %events_path.display(),
        regions = %regions_path.display()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let events = read_events(events_path)?;
    let regions = read_regions(regions_path)?;

    info!(
        event_rows = events.len(),
        region_rows = regions.len(),
        duration_ms = start.elapsed().as_millis(),
        "ingest complete"
    );
    Ok(Dataset { events, regions })
}
