//! CSV tables: the zone table and journey log going in, billing totals
//! coming out.
//!
//! Every reader requires a header row and looks columns up by name, so
//! column order is free and extra columns are ignored.

mod error;
mod output;
mod taps;
mod zones;

pub use error::{LoadError, WriteError};
pub use output::{save_billing, write_billing};
pub use taps::{load_taps, read_taps};
pub use zones::{load_zones, read_zones};

use std::fs::File;
use std::path::Path;

/// Open an input table, keeping the path for error reporting.
fn open_table(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}
