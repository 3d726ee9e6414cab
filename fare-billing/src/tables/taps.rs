//! Journey log loader.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::{LoadError, open_table};
use crate::domain::{Direction, DomainError, StationId, TapEvent, TapTime, UserId};

/// One row of the journey log, before validation.
#[derive(Debug, Deserialize)]
struct TapRow {
    user_id: String,
    station: String,
    direction: String,
    time: String,
}

impl TapRow {
    fn parse(&self) -> Result<TapEvent, DomainError> {
        Ok(TapEvent::new(
            UserId::new(&self.user_id),
            StationId::new(&self.station),
            Direction::parse(&self.direction),
            TapTime::parse(&self.time)?,
        ))
    }
}

/// Read a journey log with `user_id`, `station`, `direction` and `time`
/// columns. Taps are returned in file order.
pub fn read_taps<R: Read>(input: R) -> Result<Vec<TapEvent>, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();
    let mut taps = Vec::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let row: TapRow = record.deserialize(Some(&headers))?;
        taps.push(row.parse().map_err(|source| LoadError::Row { line, source })?);
    }

    debug!(taps = taps.len(), "journey log loaded");
    Ok(taps)
}

/// Load a journey log from a file.
pub fn load_taps(path: &Path) -> Result<Vec<TapEvent>, LoadError> {
    read_taps(open_table(path)?)
}
