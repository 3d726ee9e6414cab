//! Billing table writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::WriteError;
use crate::billing::BillingTotals;

/// Write billing totals as `user_id,billing_amount` rows, sorted by user
/// id, amounts with two decimal places.
///
/// Rows end in CRLF, matching the billing files already on record.
pub fn write_billing<W: Write>(output: W, totals: &BillingTotals) -> Result<(), WriteError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(output);

    writer.write_record(["user_id", "billing_amount"])?;
    for (user, amount) in totals.iter() {
        writer.write_record([user.as_str(), amount.to_string().as_str()])?;
    }
    writer.flush().map_err(csv::Error::from)?;

    debug!(rows = totals.len(), "billing table written");
    Ok(())
}

/// Write billing totals to a file, replacing it if it exists.
pub fn save_billing(path: &Path, totals: &BillingTotals) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_billing(file, totals)
}
