//! End-to-end billing run: load tables, pair taps, bill, write.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::billing::{BillingEngine, BillingError, BillingStats, FareConfig};
use crate::journeys::{ReconstructError, reconstruct_journeys};
use crate::tables::{LoadError, WriteError, load_taps, load_zones, save_billing};

/// Errors that abort a billing run. No output is written for any of them
/// except `Write`, which can leave a partial file behind.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("zone table: {0}")]
    Zones(#[source] LoadError),

    #[error("journey data: {0}")]
    Journeys(#[source] LoadError),

    #[error("journey data: {0}")]
    Reconstruct(#[from] ReconstructError),

    #[error("billing: {0}")]
    Billing(#[from] BillingError),

    #[error("billing output: {0}")]
    Write(#[from] WriteError),
}

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output: PathBuf,
    pub stations: usize,
    pub taps: usize,
    pub journeys: usize,
    pub users: usize,
    pub stats: BillingStats,
}

/// Bill a journey log against a zone table and write the totals.
///
/// The output file is only created once every journey has been billed.
pub fn process_files(
    zones_path: &Path,
    journeys_path: &Path,
    output_path: &Path,
    config: &FareConfig,
) -> Result<RunSummary, PipelineError> {
    let zones = load_zones(zones_path).map_err(PipelineError::Zones)?;
    let taps = load_taps(journeys_path).map_err(PipelineError::Journeys)?;
    let tap_count = taps.len();
    let journeys = reconstruct_journeys(taps)?;

    let mut engine = BillingEngine::new(&zones, config);
    engine.charge_all(&journeys)?;
    let stats = engine.stats();
    let totals = engine.finish();

    save_billing(output_path, &totals)?;

    let summary = RunSummary {
        output: output_path.to_path_buf(),
        stations: zones.len(),
        taps: tap_count,
        journeys: journeys.len(),
        users: totals.len(),
        stats,
    };
    info!(
        output = %summary.output.display(),
        stations = summary.stations,
        taps = summary.taps,
        journeys = summary.journeys,
        users = summary.users,
        penalties = stats.penalties,
        daily_caps = stats.daily_caps,
        monthly_caps = stats.monthly_caps,
        "billing run complete"
    );
    Ok(summary)
}
