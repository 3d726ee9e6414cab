//! Zone table loader.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use super::{LoadError, open_table};
use crate::domain::{DomainError, StationId, Zone, ZoneMap};

/// One row of the zone table, before validation.
#[derive(Debug, Deserialize)]
struct ZoneRow {
    station: String,
    zone: String,
}

impl ZoneRow {
    fn parse(&self) -> Result<(StationId, Zone), DomainError> {
        Ok((StationId::new(&self.station), Zone::parse(&self.zone)?))
    }
}

/// Read a zone table with `station` and `zone` columns.
///
/// A station listed twice keeps its last zone.
pub fn read_zones<R: Read>(input: R) -> Result<ZoneMap, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();
    let mut zones = ZoneMap::new();
    let mut rows = 0usize;

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let row: ZoneRow = record.deserialize(Some(&headers))?;
        let (station, zone) = row.parse().map_err(|source| LoadError::Row { line, source })?;

        if let Some(previous) = zones.insert(station.clone(), zone) {
            warn!(%station, %previous, %zone, line, "station listed twice, keeping later zone");
        }
        rows += 1;
    }

    debug!(rows, stations = zones.len(), "zone table loaded");
    Ok(zones)
}

/// Load a zone table from a file.
pub fn load_zones(path: &Path) -> Result<ZoneMap, LoadError> {
    read_zones(open_table(path)?)
}
